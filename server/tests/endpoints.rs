//! In-process contract tests for every route.
//!
//! The router is exercised with `tower::ServiceExt::oneshot`, no socket
//! involved. Each test asserts the envelope shape first and the payload
//! second, since the envelope is the one invariant every handler shares.

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use dashboard_server::{router, state::AppState};

fn app() -> Router {
    router(AppState::new())
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap()
}

fn post_raw(uri: &str, body: &'static str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

const GET_ROUTES: [&str; 10] = [
    "/api/mongodb/summary",
    "/api/mongodb/sales-report",
    "/api/mongodb/top-products",
    "/api/mongodb/customer-summary",
    "/api/mongodb/low-stock",
    "/api/mysql/summary",
    "/api/mysql/joins",
    "/api/mysql/triggers",
    "/api/mysql/stored-procedures",
    "/api/mysql/user-management",
];

#[tokio::test]
async fn every_read_route_returns_a_success_envelope() {
    for uri in GET_ROUTES {
        let response = app().oneshot(get(uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK, "{uri}");
        let body = body_json(response).await;
        assert_eq!(body["success"], json!(true), "{uri}");
        assert!(!body["data"].is_null(), "{uri} carries data");
    }
}

#[tokio::test]
async fn mongodb_summary_has_the_fixed_counts() {
    let response = app().oneshot(get("/api/mongodb/summary")).await.unwrap();
    let body = body_json(response).await;
    assert_eq!(
        body,
        json!({
            "success": true,
            "data": {"users": 8, "products": 6, "orders": 4, "payments": 3}
        })
    );
}

#[tokio::test]
async fn mysql_summary_has_its_own_counts() {
    let response = app().oneshot(get("/api/mysql/summary")).await.unwrap();
    let body = body_json(response).await;
    assert_eq!(
        body["data"],
        json!({"users": 5, "products": 3, "orders": 2, "payments": 1})
    );
}

#[tokio::test]
async fn order_total_is_count_times_unit_price() {
    let request = post_json(
        "/api/mongodb/orders",
        json!({"customerEmail": "a@b.com", "productSkus": ["X", "Y"]}),
    );
    let response = app().oneshot(request).await.unwrap();
    let body = body_json(response).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["data"]["total"].as_f64(), Some(199.98));
    assert_eq!(body["data"]["customerEmail"], json!("a@b.com"));
    assert_eq!(body["data"]["products"], json!(["X", "Y"]));
}

#[tokio::test]
async fn write_handlers_issue_distinct_nonempty_ids() {
    let app = app();
    let mut ids = Vec::new();
    for _ in 0..2 {
        let request = post_json(
            "/api/mongodb/users",
            json!({"name": "Alice", "email": "alice@example.com", "role": "customer"}),
        );
        let response = app.clone().oneshot(request).await.unwrap();
        let body = body_json(response).await;
        assert_eq!(body["success"], json!(true));
        let id = body["data"]["userId"].as_str().unwrap().to_string();
        assert!(!id.is_empty());
        ids.push(id);
    }
    assert_ne!(ids[0], ids[1]);
}

#[tokio::test]
async fn user_echo_carries_the_submitted_fields() {
    let request = post_json(
        "/api/mongodb/users",
        json!({"name": "Alice", "email": "alice@example.com", "role": "admin"}),
    );
    let response = app().oneshot(request).await.unwrap();
    let body = body_json(response).await;
    assert_eq!(
        body["data"]["userDetails"],
        json!({"name": "Alice", "email": "alice@example.com", "role": "admin"})
    );
}

#[tokio::test]
async fn product_echo_drops_the_description() {
    let request = post_json(
        "/api/mongodb/products",
        json!({"name": "Widget", "description": "A widget", "price": 29.99, "sku": "W-1"}),
    );
    let response = app().oneshot(request).await.unwrap();
    let body = body_json(response).await;
    let details = body["data"]["productDetails"].as_object().unwrap();
    assert!(details.contains_key("name"));
    assert!(details.contains_key("price"));
    assert!(details.contains_key("sku"));
    assert!(!details.contains_key("description"));
}

#[tokio::test]
async fn missing_fields_are_not_rejected() {
    for uri in [
        "/api/mongodb/users",
        "/api/mongodb/products",
        "/api/mongodb/orders",
    ] {
        let response = app().oneshot(post_json(uri, json!({}))).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK, "{uri}");
        let body = body_json(response).await;
        assert_eq!(body["success"], json!(true), "{uri}");
    }
}

#[tokio::test]
async fn unparseable_body_still_gets_an_envelope() {
    let response = app()
        .oneshot(post_raw("/api/mongodb/users", "{not json"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], json!(true));
    assert!(body["success"].is_boolean());
}

#[tokio::test]
async fn mutations_never_move_the_summary() {
    let app = app();

    let before = body_json(app.clone().oneshot(get("/api/mongodb/summary")).await.unwrap()).await;

    let write = post_json(
        "/api/mongodb/users",
        json!({"name": "Eve", "email": "eve@example.com", "role": "customer"}),
    );
    let ack = body_json(app.clone().oneshot(write).await.unwrap()).await;
    assert_eq!(ack["success"], json!(true));

    let after = body_json(app.clone().oneshot(get("/api/mongodb/summary")).await.unwrap()).await;
    assert_eq!(before, after);
}

#[tokio::test]
async fn joins_payload_matches_the_typed_shape() {
    let response = app().oneshot(get("/api/mysql/joins")).await.unwrap();
    let body = body_json(response).await;
    let rows = body["data"]["results"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["customer_name"], json!("Bob Customer"));
    assert_eq!(rows[0]["order_id"], json!(1));
}

#[tokio::test]
async fn low_stock_statuses_use_uppercase_tags() {
    let response = app().oneshot(get("/api/mongodb/low-stock")).await.unwrap();
    let body = body_json(response).await;
    for alert in body["data"].as_array().unwrap() {
        assert_eq!(alert["status"], json!("LOW"));
    }
}

/// A store whose every call fails, standing in for an unexpected fault
/// inside a handler.
struct BrokenStore;

#[async_trait::async_trait]
impl dashboard_server::store::Store for BrokenStore {
    async fn read(
        &self,
        _resource: dashboard_server::store::ReadResource,
    ) -> Result<Value, dashboard_server::error::AppError> {
        Err(dashboard_server::error::AppError::Internal(
            "store unavailable".to_string().into(),
        ))
    }

    async fn write(
        &self,
        _resource: dashboard_server::store::WriteResource,
        _payload: Value,
    ) -> Result<Value, dashboard_server::error::AppError> {
        Err(dashboard_server::error::AppError::Internal(
            "store unavailable".to_string().into(),
        ))
    }
}

#[tokio::test]
async fn handler_faults_are_funneled_into_the_envelope() {
    let app = router(AppState::with_store(std::sync::Arc::new(BrokenStore)));

    let response = app
        .clone()
        .oneshot(get("/api/mongodb/summary"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["success"], json!(false));
    assert!(body["error"].as_str().unwrap().contains("store unavailable"));

    let response = app
        .oneshot(post_json("/api/mongodb/users", json!({"name": "X"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["success"], json!(false));
}

#[tokio::test]
async fn root_serves_the_entry_document() {
    let response = app().oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let page = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(page.contains("E-Commerce Dashboard"));
}
