use std::sync::Arc;

use axum::{body::Bytes, extract::State, response::Html, Json};
use dashboard_model::envelope::Envelope;
use serde_json::Value;

use crate::{
    error::AppError,
    state::AppState,
    store::{ReadResource, WriteResource},
};

async fn read(
    state: Arc<AppState>,
    resource: ReadResource,
) -> Result<Json<Envelope>, AppError> {
    Ok(Json(Envelope::ok(state.store.read(resource).await?)))
}

// Bodies are taken as raw bytes and parsed leniently so a malformed or
// absent body still gets an enveloped answer instead of an extractor
// rejection.
async fn write(
    state: Arc<AppState>,
    resource: WriteResource,
    body: Bytes,
) -> Result<Json<Envelope>, AppError> {
    let payload: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    Ok(Json(Envelope::ok(state.store.write(resource, payload).await?)))
}

// ---- family A: /api/mongodb ----

pub async fn mongo_summary(State(state): State<Arc<AppState>>) -> Result<Json<Envelope>, AppError> {
    read(state, ReadResource::MongoSummary).await
}

pub async fn sales_report(State(state): State<Arc<AppState>>) -> Result<Json<Envelope>, AppError> {
    read(state, ReadResource::SalesReport).await
}

pub async fn top_products(State(state): State<Arc<AppState>>) -> Result<Json<Envelope>, AppError> {
    read(state, ReadResource::TopProducts).await
}

pub async fn customer_summary(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Envelope>, AppError> {
    read(state, ReadResource::CustomerSummary).await
}

pub async fn low_stock(State(state): State<Arc<AppState>>) -> Result<Json<Envelope>, AppError> {
    read(state, ReadResource::LowStock).await
}

pub async fn add_user(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<Envelope>, AppError> {
    write(state, WriteResource::Users, body).await
}

pub async fn add_product(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<Envelope>, AppError> {
    write(state, WriteResource::Products, body).await
}

pub async fn create_order(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<Envelope>, AppError> {
    write(state, WriteResource::Orders, body).await
}

// ---- family B: /api/mysql ----

pub async fn mysql_summary(State(state): State<Arc<AppState>>) -> Result<Json<Envelope>, AppError> {
    read(state, ReadResource::MysqlSummary).await
}

pub async fn joins(State(state): State<Arc<AppState>>) -> Result<Json<Envelope>, AppError> {
    read(state, ReadResource::Joins).await
}

pub async fn triggers(State(state): State<Arc<AppState>>) -> Result<Json<Envelope>, AppError> {
    read(state, ReadResource::Triggers).await
}

pub async fn stored_procedures(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Envelope>, AppError> {
    read(state, ReadResource::StoredProcedures).await
}

pub async fn user_management(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Envelope>, AppError> {
    read(state, ReadResource::UserManagement).await
}

// ---- root ----

pub async fn index() -> Html<&'static str> {
    Html(include_str!("../static/index.html"))
}
