mod import;
mod seed;

pub use import::{CatalogImportError, CatalogSnapshot};

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::domain::{Profile, Scheme, SchemeCategory, SchemeId};

/// Read-only access to the scheme catalog so the service can be exercised in isolation.
///
/// `list` returns schemes in the catalog's default order (alphabetical by name); that order is
/// what the ranker preserves between schemes of equal match level.
pub trait SchemeCatalog: Send + Sync {
    fn list(&self) -> Result<Vec<Scheme>, CatalogError>;
    fn fetch(&self, id: SchemeId) -> Result<Option<Scheme>, CatalogError>;
    fn categories(&self) -> Result<Vec<SchemeCategory>, CatalogError>;
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog unavailable: {0}")]
    Unavailable(String),
}

/// Sink for submitted profiles, kept for follow-up outreach.
pub trait ProfileArchive: Send + Sync {
    fn record(&self, entry: ArchivedProfile) -> Result<(), ArchiveError>;
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchivedProfile {
    pub profile: Profile,
    pub recorded_at: DateTime<Utc>,
}

#[derive(Debug, thiserror::Error)]
pub enum ArchiveError {
    #[error("profile archive unavailable: {0}")]
    Transport(String),
}
