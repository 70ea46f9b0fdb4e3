//! Registry catalog.
//!
//! The catalog is the full set of entries the registry serves. It is read
//! from a JSON array once at startup and never changes afterwards. Each entry
//! carries:
//! - a server descriptor (name, description, version, repository)
//! - the installable packages and their transports
//! - provenance metadata (status, publish/update timestamps)

mod schema;
mod store;

pub use schema::{
    EntryMeta, EnvironmentVariable, OfficialMeta, PackageSpec, Repository, ServerDescriptor,
    ServerEntry, Transport,
};
pub use store::Catalog;

/// Minimal entry for tests elsewhere in the crate.
#[cfg(test)]
pub(crate) fn sample_entry(name: &str, version: &str) -> ServerEntry {
    ServerEntry {
        server: ServerDescriptor {
            schema: "https://static.modelcontextprotocol.io/schemas/2025-09-29/server.schema.json"
                .to_string(),
            name: name.to_string(),
            description: format!("{} server", name),
            repository: Repository {
                url: format!("https://github.com/example/{}", name),
                source: "github".to_string(),
            },
            version: version.to_string(),
            packages: vec![PackageSpec {
                registry_type: "npm".to_string(),
                registry_base_url: "https://registry.npmjs.org".to_string(),
                identifier: format!("@example/{}", name.to_lowercase().replace('/', "-")),
                version: version.to_string(),
                transport: Transport {
                    transport_type: "stdio".to_string(),
                },
                environment_variables: None,
            }],
        },
        meta: EntryMeta {
            official: OfficialMeta {
                status: "active".to_string(),
                published_at: "2025-09-01T00:00:00Z".to_string(),
                updated_at: "2025-09-01T00:00:00Z".to_string(),
                is_latest: true,
            },
        },
    }
}
