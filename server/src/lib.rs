//! # Dashboard server
//!
//! Stateless JSON handlers behind a demonstration e-commerce dashboard.
//! Two endpoint families (`/api/mongodb/*`, `/api/mysql/*`) answer from
//! an in-memory mock store; `/` serves the static entry document. Every
//! response shares the `{success, data?, error?}` envelope and every
//! failure is folded into it, so a broken request never crashes the
//! process or goes unanswered.

use std::{sync::Arc, time::Duration};

use axum::{
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post},
    Router,
};
use tokio::{
    net::TcpListener,
    signal::{
        ctrl_c,
        unix::{signal, SignalKind},
    },
};
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

pub mod config;
pub mod error;
pub mod ids;
pub mod routes;
pub mod state;
pub mod store;

use state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(routes::index))
        .route("/api/mongodb/summary", get(routes::mongo_summary))
        .route("/api/mongodb/sales-report", get(routes::sales_report))
        .route("/api/mongodb/top-products", get(routes::top_products))
        .route("/api/mongodb/customer-summary", get(routes::customer_summary))
        .route("/api/mongodb/low-stock", get(routes::low_stock))
        .route("/api/mongodb/users", post(routes::add_user))
        .route("/api/mongodb/products", post(routes::add_product))
        .route("/api/mongodb/orders", post(routes::create_order))
        .route("/api/mysql/summary", get(routes::mysql_summary))
        .route("/api/mysql/joins", get(routes::joins))
        .route("/api/mysql/triggers", get(routes::triggers))
        .route("/api/mysql/stored-procedures", get(routes::stored_procedures))
        .route("/api/mysql/user-management", get(routes::user_management))
        .with_state(state)
}

pub async fn start_server() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Initializing state...");
    let state = AppState::new();
    let port = state.config.port;

    info!("Starting server...");

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    let app = router(state).layer(cors);

    let address = format!("0.0.0.0:{port}");
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await.unwrap();
    info!("E-Commerce Dashboard running on {address}");
    info!("MongoDB API ready: http://localhost:{port}/api/mongodb/summary");
    info!("MySQL API ready: http://localhost:{port}/api/mysql/summary");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    println!("Server shutting down...");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal(SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
