//! API error types with IntoResponse
//!
//! Errors are converted to JSON responses with appropriate status
//! codes. Database failures are logged with their real cause and
//! surfaced to the caller as a fixed machine-readable token; SQL text
//! and driver detail stay on the server.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::repos::DbError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Snapshot query or connection failure (500, logged)
    Snapshot(DbError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::Snapshot(e) => {
                // Log the actual error, return the fixed token
                tracing::error!("Snapshot query failed: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "snapshot_failed" }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        Self::Snapshot(e)
    }
}
