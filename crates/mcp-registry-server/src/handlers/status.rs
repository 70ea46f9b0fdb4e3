//! Health handler.

use crate::server::AppState;
use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// Number of entries in the catalog.
    pub servers: usize,
}

/// Health check endpoint.
pub async fn handle_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        servers: state.engine.catalog().len(),
    })
}
