//! HTTP server implementation using Axum.

use crate::handlers::{get_server, handle_health, list_servers};
use axum::{routing::get, Router};
use mcp_registry_core::QueryEngine;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

/// Application state shared across handlers.
pub struct AppState {
    /// Query engine over the catalog loaded at startup
    pub engine: QueryEngine,
}

/// Build the registry router.
pub fn build_router(state: Arc<AppState>) -> Router {
    // Any origin may read the registry
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handle_health))
        .route("/v0.1/servers", get(list_servers))
        // Names are namespaced with slashes, so capture the whole remainder
        .route("/v0.1/servers/*name", get(get_server))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

/// Start the registry HTTP server.
///
/// Returns the actual address the server is bound to (useful when port=0).
pub async fn start_server(engine: QueryEngine, host: &str, port: u16) -> anyhow::Result<SocketAddr> {
    let state = Arc::new(AppState { engine });
    let app = build_router(state);

    // Parse the address
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    // Bind to the address
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let actual_addr = listener.local_addr()?;

    info!("Server listening on {}", actual_addr);

    // Spawn the server in the background
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            error!("Server error: {}", e);
        }
    });

    Ok(actual_addr)
}
