//! Catalog entry schema.
//!
//! Mirrors the JSON shape of one registry record: the server descriptor
//! under `server` and provenance fields under `_meta`.

use serde::{Deserialize, Serialize};

/// One registered server package plus its provenance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerEntry {
    pub server: ServerDescriptor,
    #[serde(rename = "_meta")]
    pub meta: EntryMeta,
}

impl ServerEntry {
    /// Natural key of the entry.
    pub fn name(&self) -> &str {
        &self.server.name
    }

    pub fn version(&self) -> &str {
        &self.server.version
    }
}

/// Describes what the server is and how to install it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerDescriptor {
    #[serde(rename = "$schema")]
    pub schema: String,
    pub name: String,
    pub description: String,
    pub repository: Repository,
    pub version: String,
    #[serde(default)]
    pub packages: Vec<PackageSpec>,
}

/// Source repository of a server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    pub url: String,
    pub source: String,
}

/// An installable artifact published to some package registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageSpec {
    pub registry_type: String,
    pub registry_base_url: String,
    pub identifier: String,
    pub version: String,
    pub transport: Transport,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment_variables: Option<Vec<EnvironmentVariable>>,
}

/// How a client talks to the running server (stdio, http, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transport {
    #[serde(rename = "type")]
    pub transport_type: String,
}

/// Environment variable a package expects at launch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentVariable {
    pub name: String,
    pub description: String,
    pub is_required: bool,
    pub is_secret: bool,
}

/// The `_meta` block of an entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryMeta {
    #[serde(rename = "io.modelcontextprotocol.registry/official")]
    pub official: OfficialMeta,
}

/// Administrative fields maintained by the registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfficialMeta {
    pub status: String,
    pub published_at: String,
    pub updated_at: String,
    pub is_latest: bool,
}
