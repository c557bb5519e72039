use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::error;

/// Fixed-message failures for the entry routes. One variant per operation;
/// the caller always sees HTTP 500 with `{"msg": ...}` and never the
/// underlying store detail.
#[derive(Debug, Error)]
pub enum EntryApiError {
    #[error("Error creating entry")]
    Create,
    #[error("Error finding entry")]
    Find,
    #[error("Error updating")]
    Update,
    #[error("Error deleting entry")]
    Delete,
}

impl IntoResponse for EntryApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::INTERNAL_SERVER_ERROR;
        (status, Json(serde_json::json!({"msg": self.to_string()}))).into_response()
    }
}

/// Catch-all for paths without a fixed-message contract (the collection
/// fetch). Surfaces as the process-generic error shape.
#[derive(Debug)]
pub struct ApiError(pub String);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let msg = self.0;
        error!(error = %msg, "unhandled api error");
        (StatusCode::INTERNAL_SERVER_ERROR, Json(serde_json::json!({"error": msg}))).into_response()
    }
}
