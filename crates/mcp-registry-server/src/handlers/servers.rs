//! Server list and lookup handlers.

use crate::error::ApiError;
use crate::server::AppState;
use axum::{
    extract::{Path, Query, State},
    Json,
};
use mcp_registry_core::{ServerEntry, ServerList, ServerListQuery};
use std::sync::Arc;
use tracing::debug;

/// `GET /v0.1/servers`
///
/// Query pairs are taken as plain strings so a malformed value never rejects
/// the request; [`ServerListQuery::into_params`] applies the fallbacks.
pub async fn list_servers(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Json<ServerList> {
    let params = pairs.into_iter().collect::<ServerListQuery>().into_params();
    Json(state.engine.list(&params))
}

/// `GET /v0.1/servers/*name`
pub async fn get_server(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<ServerEntry>, ApiError> {
    debug!("Looking up server {}", name);
    let entry = state.engine.get_by_name(&name)?;
    Ok(Json(entry.clone()))
}
