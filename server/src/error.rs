use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dashboard_model::envelope::Envelope;
use thiserror::Error;

/// Handler-boundary error. Anything a handler fails with is converted to
/// the `{success:false, error}` envelope here; a request is always
/// answered and the process never dies for one.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Internal error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(Envelope::fail(self.to_string()))).into_response()
    }
}
