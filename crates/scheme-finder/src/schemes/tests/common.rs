use std::path::Path;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::schemes::catalog::{
    ArchiveError, ArchivedProfile, CatalogError, CatalogSnapshot, ProfileArchive, SchemeCatalog,
};
use crate::schemes::domain::{
    Gender, Occupation, Profile, ProfileSubmission, ResidenceType, Scheme, SchemeCategory,
    SchemeId, SocialCategory,
};
use crate::schemes::evaluation::MatchPolicy;
use crate::schemes::{scheme_router, SchemeFinderService};

pub(super) fn farmer_profile() -> Profile {
    Profile {
        full_name: "Ramesh Kumar".to_string(),
        age: 45,
        gender: Gender::Male,
        social_category: SocialCategory::General,
        annual_income: 50_000,
        occupation: Occupation::Farmer,
        state: "bihar".to_string(),
        district: None,
        residence: ResidenceType::Rural,
        bpl_card: false,
        mgnrega_card: false,
        kisan_credit_card: false,
        disability_certificate: false,
    }
}

pub(super) fn submission() -> ProfileSubmission {
    ProfileSubmission {
        full_name: "Lakshmi Devi".to_string(),
        age: 34,
        gender: Gender::Female,
        social_category: SocialCategory::Sc,
        annual_income: 90_000,
        occupation: Occupation::Homemaker,
        state: "Uttar Pradesh".to_string(),
        district: Some("Varanasi".to_string()),
        residence: ResidenceType::Rural,
        bpl_card: true,
        mgnrega_card: true,
        kisan_credit_card: false,
        disability_certificate: false,
    }
}

pub(super) fn scheme(id: i64, name: &str, category: &str, criteria: Value) -> Scheme {
    Scheme {
        id: SchemeId(id),
        name: name.to_string(),
        description: format!("{name} description"),
        category: category.to_string(),
        ministry: "Ministry of Rural Development".to_string(),
        eligibility_criteria: criteria,
        benefits: "Direct benefit transfer".to_string(),
        application_url: None,
        application_form_path: None,
    }
}

#[derive(Default)]
pub(super) struct MemoryCatalog {
    schemes: Vec<Scheme>,
    categories: Vec<SchemeCategory>,
}

impl MemoryCatalog {
    pub(super) fn standard() -> Self {
        let snapshot = CatalogSnapshot::standard();
        Self {
            schemes: snapshot.schemes,
            categories: snapshot.categories,
        }
    }

    pub(super) fn with_schemes(schemes: Vec<Scheme>) -> Self {
        Self {
            schemes,
            categories: Vec::new(),
        }
    }
}

impl SchemeCatalog for MemoryCatalog {
    fn list(&self) -> Result<Vec<Scheme>, CatalogError> {
        Ok(self.schemes.clone())
    }

    fn fetch(&self, id: SchemeId) -> Result<Option<Scheme>, CatalogError> {
        Ok(self.schemes.iter().find(|scheme| scheme.id == id).cloned())
    }

    fn categories(&self) -> Result<Vec<SchemeCategory>, CatalogError> {
        Ok(self.categories.clone())
    }
}

pub(super) struct UnavailableCatalog;

impl SchemeCatalog for UnavailableCatalog {
    fn list(&self) -> Result<Vec<Scheme>, CatalogError> {
        Err(CatalogError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: SchemeId) -> Result<Option<Scheme>, CatalogError> {
        Err(CatalogError::Unavailable("database offline".to_string()))
    }

    fn categories(&self) -> Result<Vec<SchemeCategory>, CatalogError> {
        Err(CatalogError::Unavailable("database offline".to_string()))
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryArchive {
    entries: Arc<Mutex<Vec<ArchivedProfile>>>,
}

impl MemoryArchive {
    pub(super) fn entries(&self) -> Vec<ArchivedProfile> {
        self.entries.lock().expect("archive mutex poisoned").clone()
    }
}

impl ProfileArchive for MemoryArchive {
    fn record(&self, entry: ArchivedProfile) -> Result<(), ArchiveError> {
        self.entries
            .lock()
            .expect("archive mutex poisoned")
            .push(entry);
        Ok(())
    }
}

pub(super) struct FailingArchive;

impl ProfileArchive for FailingArchive {
    fn record(&self, _entry: ArchivedProfile) -> Result<(), ArchiveError> {
        Err(ArchiveError::Transport("queue full".to_string()))
    }
}

pub(super) fn build_service(
    catalog: MemoryCatalog,
    forms_root: &Path,
) -> (
    SchemeFinderService<MemoryCatalog, MemoryArchive>,
    Arc<MemoryArchive>,
) {
    let archive = Arc::new(MemoryArchive::default());
    let service = SchemeFinderService::new(
        Arc::new(catalog),
        archive.clone(),
        MatchPolicy::default(),
        forms_root,
    );
    (service, archive)
}

pub(super) fn standard_router() -> axum::Router {
    let (service, _) = build_service(MemoryCatalog::standard(), Path::new("."));
    scheme_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
