//! Query engine over the catalog.
//!
//! List queries apply, in order: name search, version filter, limit. The
//! catalog itself is never touched; every call works on a fresh copy of the
//! matching entries.

use crate::catalog::{Catalog, ServerEntry};
use crate::config::QueryConfig;
use crate::error::{RegistryError, Result};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Raw list parameters, exactly as they arrive in a query string.
///
/// Every field is an optional string so that no value can fail to parse;
/// interpretation happens in [`ServerListQuery::into_params`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerListQuery {
    pub search: Option<String>,
    pub limit: Option<String>,
    pub cursor: Option<String>,
    pub version: Option<String>,
    pub updated_since: Option<String>,
}

/// Collect from decoded query-string pairs. The first occurrence of a key
/// wins and unknown keys are ignored.
impl FromIterator<(String, String)> for ServerListQuery {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(pairs: I) -> Self {
        let mut query = ServerListQuery::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "search" => &mut query.search,
                "limit" => &mut query.limit,
                "cursor" => &mut query.cursor,
                "version" => &mut query.version,
                "updated_since" => &mut query.updated_since,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }
}

impl ServerListQuery {
    /// Validate the raw parameters into a [`ListParams`].
    ///
    /// - `search`: empty means no search.
    /// - `version`: empty or `"latest"` means no version filter.
    /// - `limit`: see [`parse_limit`].
    /// - `cursor` and `updated_since` are carried through untouched.
    pub fn into_params(self) -> ListParams {
        ListParams {
            search: self
                .search
                .filter(|s| !s.is_empty())
                .map(|s| s.to_lowercase()),
            version: VersionFilter::from_param(self.version.as_deref()),
            limit: parse_limit(self.limit.as_deref()),
            cursor: self.cursor,
            updated_since: self.updated_since,
        }
    }
}

/// Resolve the effective page size from a raw `limit` value.
///
/// Leading digits are read the way `parseInt` reads them, so `"12abc"` is 12
/// and `"1.5"` is 1; the result is clamped to [`QueryConfig::MAX_LIMIT`].
/// Absent or empty values, values without a leading digit, and negatives
/// fall back to [`QueryConfig::DEFAULT_LIMIT`].
pub fn parse_limit(raw: Option<&str>) -> usize {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return QueryConfig::DEFAULT_LIMIT;
    };

    let unsigned = raw.strip_prefix('+').unwrap_or(raw);
    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let digits = &unsigned[..digits_end];

    if digits.is_empty() {
        debug!("Ignoring unparseable limit {:?}", raw);
        return QueryConfig::DEFAULT_LIMIT;
    }

    // A digit run too long for u64 is still far above the cap
    digits
        .parse::<u64>()
        .ok()
        .and_then(|n| usize::try_from(n).ok())
        .map_or(QueryConfig::MAX_LIMIT, |n| n.min(QueryConfig::MAX_LIMIT))
}

/// Version constraint of a list query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum VersionFilter {
    /// No constraint. Also what `"latest"` maps to.
    #[default]
    Any,
    /// Keep only entries whose version equals this string exactly.
    Exact(String),
}

impl VersionFilter {
    pub fn from_param(raw: Option<&str>) -> Self {
        match raw {
            None | Some("") => VersionFilter::Any,
            Some(v) if v == QueryConfig::LATEST_VERSION => VersionFilter::Any,
            Some(v) => VersionFilter::Exact(v.to_string()),
        }
    }

    fn matches(&self, entry: &ServerEntry) -> bool {
        match self {
            VersionFilter::Any => true,
            VersionFilter::Exact(v) => entry.version() == v,
        }
    }
}

/// Validated list parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListParams {
    /// Lower-cased name substring.
    pub search: Option<String>,
    pub version: VersionFilter,
    /// Effective limit, already clamped.
    pub limit: usize,
    /// Accepted for API compatibility; no pagination is performed.
    pub cursor: Option<String>,
    /// Accepted for API compatibility; not used for filtering.
    pub updated_since: Option<String>,
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            search: None,
            version: VersionFilter::Any,
            limit: QueryConfig::DEFAULT_LIMIT,
            cursor: None,
            updated_since: None,
        }
    }
}

impl ListParams {
    fn matches(&self, entry: &ServerEntry) -> bool {
        let name_ok = match &self.search {
            Some(needle) => entry.name().to_lowercase().contains(needle.as_str()),
            None => true,
        };
        name_ok && self.version.matches(entry)
    }
}

/// Response metadata for a list query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListMetadata {
    pub count: usize,
    /// Always `None`: results past the limit are not reachable by cursor.
    #[serde(rename = "nextCursor")]
    pub next_cursor: Option<String>,
}

/// Result envelope of a list query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerList {
    pub servers: Vec<ServerEntry>,
    pub metadata: ListMetadata,
}

/// Read-only query service over a loaded catalog.
#[derive(Debug, Clone)]
pub struct QueryEngine {
    catalog: Arc<Catalog>,
}

impl QueryEngine {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Filter, then truncate, preserving catalog order.
    pub fn list(&self, params: &ListParams) -> ServerList {
        let servers: Vec<ServerEntry> = self
            .catalog
            .all()
            .iter()
            .filter(|entry| params.matches(entry))
            .take(params.limit)
            .cloned()
            .collect();

        debug!(
            "List query {:?} matched {} servers",
            params,
            servers.len()
        );

        ServerList {
            metadata: ListMetadata {
                count: servers.len(),
                next_cursor: None,
            },
            servers,
        }
    }

    /// Exact, case-sensitive lookup against the whole catalog.
    pub fn get_by_name(&self, name: &str) -> Result<&ServerEntry> {
        self.catalog
            .find_by_name(name)
            .ok_or_else(|| RegistryError::ServerNotFound {
                name: name.to_string(),
            })
    }
}
