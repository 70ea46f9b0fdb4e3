//! Centralized configuration for the registry.
//!
//! Constants for the query contract and the process defaults.

/// Application-level configuration.
pub struct AppConfig;

impl AppConfig {
    pub const APP_NAME: &'static str = "MCP Registry Server";
    pub const API_VERSION_PREFIX: &'static str = "/v0.1";
}

/// Limits and tokens that shape list queries.
pub struct QueryConfig;

impl QueryConfig {
    /// Page size used when the caller gives no usable `limit`.
    pub const DEFAULT_LIMIT: usize = 100;
    /// Upper bound applied to any requested `limit`.
    pub const MAX_LIMIT: usize = 1000;
    /// Version token that disables version filtering.
    pub const LATEST_VERSION: &'static str = "latest";
}

/// Defaults for the HTTP process.
pub struct ServerConfig;

impl ServerConfig {
    pub const DEFAULT_HOST: &'static str = "0.0.0.0";
    pub const DEFAULT_PORT: u16 = 8080;
    pub const DEFAULT_CATALOG_FILE: &'static str = "servers.json";
}
