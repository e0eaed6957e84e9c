use metrics_exporter_prometheus::PrometheusHandle;
use scheme_finder::config::{ArchiveConfig, CatalogConfig};
use scheme_finder::schemes::{
    ArchiveError, ArchivedProfile, CatalogError, CatalogImportError, CatalogSnapshot,
    ProfileArchive, Scheme, SchemeCatalog, SchemeCategory, SchemeId,
};
use std::collections::VecDeque;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use tracing::{debug, info};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Catalog held entirely in memory, loaded once at startup.
#[derive(Debug, Clone)]
pub(crate) struct InMemorySchemeCatalog {
    snapshot: CatalogSnapshot,
}

impl InMemorySchemeCatalog {
    pub(crate) fn new(snapshot: CatalogSnapshot) -> Self {
        Self { snapshot }
    }
}

impl SchemeCatalog for InMemorySchemeCatalog {
    fn list(&self) -> Result<Vec<Scheme>, CatalogError> {
        Ok(self.snapshot.schemes.clone())
    }

    fn fetch(&self, id: SchemeId) -> Result<Option<Scheme>, CatalogError> {
        Ok(self
            .snapshot
            .schemes
            .iter()
            .find(|scheme| scheme.id == id)
            .cloned())
    }

    fn categories(&self) -> Result<Vec<SchemeCategory>, CatalogError> {
        Ok(self.snapshot.categories.clone())
    }
}

/// Keeps the most recent submissions only; the oldest entry is evicted once `capacity` is reached.
#[derive(Clone)]
pub(crate) struct InMemoryProfileArchive {
    entries: Arc<Mutex<VecDeque<ArchivedProfile>>>,
    capacity: usize,
}

impl InMemoryProfileArchive {
    pub(crate) fn new(config: &ArchiveConfig) -> Self {
        Self {
            entries: Arc::new(Mutex::new(VecDeque::with_capacity(config.capacity))),
            capacity: config.capacity,
        }
    }
}

impl Default for InMemoryProfileArchive {
    fn default() -> Self {
        Self::new(&ArchiveConfig::default())
    }
}

impl ProfileArchive for InMemoryProfileArchive {
    fn record(&self, entry: ArchivedProfile) -> Result<(), ArchiveError> {
        debug!(
            state = %entry.profile.state,
            recorded_at = %entry.recorded_at,
            "profile archived"
        );
        if self.capacity == 0 {
            return Ok(());
        }

        let mut guard = self
            .entries
            .lock()
            .map_err(|_| ArchiveError::Transport("archive mutex poisoned".to_string()))?;
        while guard.len() >= self.capacity {
            guard.pop_front();
        }
        guard.push_back(entry);
        Ok(())
    }
}

#[cfg(test)]
impl InMemoryProfileArchive {
    pub(crate) fn entries(&self) -> Vec<ArchivedProfile> {
        self.entries
            .lock()
            .expect("archive mutex poisoned")
            .iter()
            .cloned()
            .collect()
    }
}

/// Load the configured catalog file, falling back to the built-in standard catalog.
pub(crate) fn load_catalog(source: Option<&Path>) -> Result<CatalogSnapshot, CatalogImportError> {
    match source {
        Some(path) => {
            let snapshot = CatalogSnapshot::from_path(path)?;
            info!(
                path = %path.display(),
                schemes = snapshot.schemes.len(),
                "loaded scheme catalog"
            );
            Ok(snapshot)
        }
        None => Ok(CatalogSnapshot::standard()),
    }
}

pub(crate) fn catalog_source<'a>(
    override_path: Option<&'a Path>,
    config: &'a CatalogConfig,
) -> Option<&'a Path> {
    override_path.or(config.source.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use scheme_finder::schemes::{Gender, Occupation, Profile, ResidenceType, SocialCategory};
    use std::path::PathBuf;

    #[test]
    fn standard_catalog_is_used_without_a_source() {
        let catalog = InMemorySchemeCatalog::new(load_catalog(None).expect("standard loads"));

        assert_eq!(catalog.list().expect("list").len(), 8);
        let scheme = catalog.fetch(SchemeId(6)).expect("fetch").expect("found");
        assert_eq!(
            scheme.name,
            "Saksham Scholarship for Differently Abled Students"
        );
        assert!(catalog.fetch(SchemeId(42)).expect("fetch").is_none());
    }

    #[test]
    fn command_line_catalog_overrides_configuration() {
        let config = CatalogConfig {
            source: Some(PathBuf::from("configured.json")),
            forms_dir: PathBuf::from("."),
        };

        assert_eq!(
            catalog_source(Some(Path::new("cli.csv")), &config),
            Some(Path::new("cli.csv"))
        );
        assert_eq!(
            catalog_source(None, &config),
            Some(Path::new("configured.json"))
        );
    }

    fn archived(name: &str) -> ArchivedProfile {
        ArchivedProfile {
            profile: Profile {
                full_name: name.to_string(),
                age: 52,
                gender: Gender::Female,
                social_category: SocialCategory::St,
                annual_income: 40_000,
                occupation: Occupation::Homemaker,
                state: "assam".to_string(),
                district: None,
                residence: ResidenceType::Tribal,
                bpl_card: true,
                mgnrega_card: false,
                kisan_credit_card: false,
                disability_certificate: false,
            },
            recorded_at: Utc::now(),
        }
    }

    #[test]
    fn archive_keeps_recorded_profiles() {
        let archive = InMemoryProfileArchive::default();
        let entry = archived("Meena Kumari");

        archive
            .record(entry.clone())
            .expect("archive accepts entry");

        let entries = archive.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].profile, entry.profile);
    }

    #[test]
    fn archive_evicts_the_oldest_entry_at_capacity() {
        let archive = InMemoryProfileArchive::new(&ArchiveConfig { capacity: 2 });

        for name in ["Meena Kumari", "Anita Oraon", "Sunita Munda"] {
            archive
                .record(archived(name))
                .expect("archive accepts entry");
        }

        let names: Vec<_> = archive
            .entries()
            .into_iter()
            .map(|entry| entry.profile.full_name)
            .collect();
        assert_eq!(names, vec!["Anita Oraon", "Sunita Munda"]);
    }

    #[test]
    fn zero_capacity_archive_retains_nothing() {
        let archive = InMemoryProfileArchive::new(&ArchiveConfig { capacity: 0 });

        archive
            .record(archived("Meena Kumari"))
            .expect("archive accepts entry");

        assert!(archive.entries().is_empty());
    }
}
