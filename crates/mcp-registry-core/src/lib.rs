//! MCP Registry Core - read-only catalog and query engine.
//!
//! This crate holds the registry's data model and query semantics. It can be
//! used without any HTTP layer: load a [`Catalog`], wrap it in a
//! [`QueryEngine`], and run list or name queries against it.
//!
//! # Example
//!
//! ```rust,ignore
//! use mcp_registry_core::{Catalog, QueryEngine, ServerListQuery};
//!
//! fn main() -> mcp_registry_core::Result<()> {
//!     let engine = QueryEngine::new(Catalog::load("servers.json")?);
//!
//!     let params = ServerListQuery {
//!         search: Some("github".into()),
//!         ..Default::default()
//!     }
//!     .into_params();
//!     let page = engine.list(&params);
//!     println!("Found {} servers", page.metadata.count);
//!
//!     let entry = engine.get_by_name("io.github.example/weather")?;
//!     println!("{} v{}", entry.name(), entry.version());
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod query;

// Re-export commonly used types
pub use catalog::{Catalog, ServerEntry};
pub use config::{AppConfig, QueryConfig, ServerConfig};
pub use error::{RegistryError, Result};
pub use query::{ListMetadata, ListParams, QueryEngine, ServerList, ServerListQuery, VersionFilter};
