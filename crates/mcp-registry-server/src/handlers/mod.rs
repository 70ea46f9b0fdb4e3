//! Route handlers, split by domain.

mod servers;
mod status;

pub use servers::{get_server, list_servers};
pub use status::handle_health;

#[cfg(test)]
mod tests {
    use crate::server::{build_router, AppState};
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use axum::Router;
    use http_body_util::BodyExt;
    use mcp_registry_core::{Catalog, QueryEngine, ServerEntry};
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn entry(name: &str, version: &str) -> ServerEntry {
        serde_json::from_value(json!({
            "server": {
                "$schema": "https://static.modelcontextprotocol.io/schemas/2025-09-29/server.schema.json",
                "name": name,
                "description": format!("{} server", name),
                "repository": { "url": "https://github.com/example/repo", "source": "github" },
                "version": version,
                "packages": [{
                    "registryType": "npm",
                    "registryBaseUrl": "https://registry.npmjs.org",
                    "identifier": "@example/pkg",
                    "version": version,
                    "transport": { "type": "stdio" }
                }]
            },
            "_meta": {
                "io.modelcontextprotocol.registry/official": {
                    "status": "active",
                    "publishedAt": "2025-09-01T00:00:00Z",
                    "updatedAt": "2025-09-01T00:00:00Z",
                    "isLatest": true
                }
            }
        }))
        .unwrap()
    }

    fn app_with(entries: Vec<ServerEntry>) -> Router {
        let engine = QueryEngine::new(Catalog::from_entries(entries).unwrap());
        build_router(Arc::new(AppState { engine }))
    }

    fn example_app() -> Router {
        app_with(vec![
            entry("alpha-tool", "1.0"),
            entry("Beta/Connector", "2.0"),
        ])
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let resp = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        let json: Value = serde_json::from_slice(&bytes).expect("valid JSON response");
        (status, json)
    }

    fn names(body: &Value) -> Vec<&str> {
        body["servers"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["server"]["name"].as_str().unwrap())
            .collect()
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get_json(example_app(), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "ok", "servers": 2}));
    }

    #[tokio::test]
    async fn test_list_all() {
        let (status, body) = get_json(example_app(), "/v0.1/servers").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(names(&body), vec!["alpha-tool", "Beta/Connector"]);
        assert_eq!(body["metadata"]["count"], 2);
        assert!(body["metadata"]["nextCursor"].is_null());
        assert!(body["metadata"]
            .as_object()
            .unwrap()
            .contains_key("nextCursor"));
    }

    #[tokio::test]
    async fn test_list_search() {
        let (_, body) = get_json(example_app(), "/v0.1/servers?search=beta").await;
        assert_eq!(names(&body), vec!["Beta/Connector"]);
        assert_eq!(body["metadata"]["count"], 1);
    }

    #[tokio::test]
    async fn test_list_search_encoded_slash() {
        let (_, body) = get_json(example_app(), "/v0.1/servers?search=A%2FC").await;
        assert_eq!(names(&body), vec!["Beta/Connector"]);
    }

    #[tokio::test]
    async fn test_list_version_filters() {
        let (_, latest) = get_json(example_app(), "/v0.1/servers?version=latest").await;
        assert_eq!(latest["metadata"]["count"], 2);

        let (_, exact) = get_json(example_app(), "/v0.1/servers?version=1.0").await;
        assert_eq!(names(&exact), vec!["alpha-tool"]);

        let (status, none) = get_json(example_app(), "/v0.1/servers?version=9.9.9").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(none["servers"], json!([]));
        assert_eq!(none["metadata"]["count"], 0);
    }

    #[tokio::test]
    async fn test_list_limits() {
        let entries: Vec<ServerEntry> = (0..120)
            .map(|i| entry(&format!("server-{:03}", i), "1.0"))
            .collect();

        let (_, default) = get_json(app_with(entries.clone()), "/v0.1/servers").await;
        assert_eq!(default["metadata"]["count"], 100);

        let (_, clamped) = get_json(app_with(entries.clone()), "/v0.1/servers?limit=5000").await;
        assert_eq!(clamped["metadata"]["count"], 120);

        let (_, small) = get_json(app_with(entries.clone()), "/v0.1/servers?limit=2").await;
        assert_eq!(names(&small), vec!["server-000", "server-001"]);

        let (_, prefixed) = get_json(app_with(entries.clone()), "/v0.1/servers?limit=3abc").await;
        assert_eq!(prefixed["metadata"]["count"], 3);

        let (status, junk) = get_json(app_with(entries), "/v0.1/servers?limit=abc").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(junk["metadata"]["count"], 100);
    }

    #[tokio::test]
    async fn test_list_accepts_inert_params() {
        let (status, body) = get_json(
            example_app(),
            "/v0.1/servers?cursor=abc&updated_since=2025-01-01T00:00:00Z&search=&unknown=1",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["metadata"]["count"], 2);
        assert!(body["metadata"]["nextCursor"].is_null());
    }

    #[tokio::test]
    async fn test_get_server_with_slash() {
        let (status, body) = get_json(example_app(), "/v0.1/servers/Beta/Connector").await;
        assert_eq!(status, StatusCode::OK);
        // The entry itself is the body, not wrapped
        assert_eq!(body["server"]["name"], "Beta/Connector");
        assert_eq!(body["server"]["version"], "2.0");
        assert!(body.get("servers").is_none());
    }

    #[tokio::test]
    async fn test_get_server_percent_encoded() {
        let (status, body) = get_json(example_app(), "/v0.1/servers/Beta%2FConnector").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["server"]["name"], "Beta/Connector");
    }

    #[tokio::test]
    async fn test_get_server_not_found() {
        let (status, body) = get_json(example_app(), "/v0.1/servers/missing").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            body,
            json!({
                "error": "Server not found",
                "message": "Server with name 'missing' does not exist"
            })
        );
    }

    #[tokio::test]
    async fn test_get_server_is_case_sensitive() {
        let (status, _) = get_json(example_app(), "/v0.1/servers/beta/connector").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_cors_allows_any_origin() {
        let resp = example_app()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .header(header::ORIGIN, "https://example.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(
            resp.headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .unwrap(),
            "*"
        );
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let resp = example_app()
            .oneshot(
                Request::builder()
                    .uri("/v0.2/servers")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
