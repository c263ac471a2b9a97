//! Snapshot endpoint

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::db::repos::SnapshotRepo;
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::CreatorSnapshot;

/// GET /fasttrack/snapshot - one row per creator for the deployment's
/// configured snapshot mode
async fn snapshot(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<CreatorSnapshot>>, ApiError> {
    let rows = SnapshotRepo::new(&state.pool).fetch(state.mode).await?;
    Ok(Json(rows))
}

/// Snapshot routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/fasttrack/snapshot", get(snapshot))
}
