use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use super::catalog::{ArchivedProfile, CatalogError, ProfileArchive, SchemeCatalog};
use super::domain::{ProfileSubmission, Scheme, SchemeCategory, SchemeId};
use super::evaluation::MatchPolicy;
use super::intake::{IntakeViolation, ProfileGuard};
use super::ranking::{RankedScheme, RecommendationRanker};

/// Service composing profile intake, the scheme catalog, and the recommendation ranker.
pub struct SchemeFinderService<C, A> {
    guard: ProfileGuard,
    catalog: Arc<C>,
    archive: Arc<A>,
    ranker: RecommendationRanker,
    forms_root: PathBuf,
}

impl<C, A> SchemeFinderService<C, A>
where
    C: SchemeCatalog + 'static,
    A: ProfileArchive + 'static,
{
    pub fn new(
        catalog: Arc<C>,
        archive: Arc<A>,
        policy: MatchPolicy,
        forms_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            guard: ProfileGuard,
            catalog,
            archive,
            ranker: RecommendationRanker::with_policy(policy),
            forms_root: forms_root.into(),
        }
    }

    pub fn schemes(&self) -> Result<Vec<Scheme>, SchemeServiceError> {
        Ok(self.catalog.list()?)
    }

    pub fn scheme(&self, id: SchemeId) -> Result<Scheme, SchemeServiceError> {
        self.catalog
            .fetch(id)?
            .ok_or(SchemeServiceError::SchemeNotFound(id))
    }

    pub fn categories(&self) -> Result<Vec<SchemeCategory>, SchemeServiceError> {
        Ok(self.catalog.categories()?)
    }

    /// Validate a submission and rank the whole catalog for it.
    ///
    /// The profile is archived after ranking; an archive failure is logged and does not affect
    /// the returned recommendations.
    pub fn recommend(
        &self,
        submission: ProfileSubmission,
    ) -> Result<Vec<RankedScheme>, SchemeServiceError> {
        let profile = self.guard.profile_from_submission(submission)?;
        let schemes = self.catalog.list()?;
        let ranked = self.ranker.rank(&profile, &schemes);

        info!(
            state = %profile.state,
            schemes = ranked.len(),
            "computed scheme recommendations"
        );

        if let Err(err) = self.archive.record(ArchivedProfile {
            profile,
            recorded_at: Utc::now(),
        }) {
            warn!(error = %err, "failed to archive submitted profile");
        }

        Ok(ranked)
    }

    /// Locate the downloadable application form for a scheme.
    pub fn application_form(&self, id: SchemeId) -> Result<ApplicationForm, SchemeServiceError> {
        let scheme = self.scheme(id)?;
        let relative = scheme
            .application_form_path
            .as_deref()
            .map(str::trim)
            .filter(|path| !path.is_empty())
            .ok_or(SchemeServiceError::FormUnavailable(id))?;

        let path = resolve_within(&self.forms_root, relative)
            .ok_or(SchemeServiceError::FormUnavailable(id))?;
        if !path.is_file() {
            return Err(SchemeServiceError::FormMissing(id));
        }

        Ok(ApplicationForm {
            file_name: form_file_name(&scheme.name),
            path,
        })
    }
}

/// Static application-form artifact ready to be served.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationForm {
    pub path: PathBuf,
    pub file_name: String,
}

/// Download name offered to clients, e.g. `PM-KISAN_Scheme_Application_Form.pdf`.
pub fn form_file_name(scheme_name: &str) -> String {
    let stem = scheme_name.split_whitespace().collect::<Vec<_>>().join("_");
    format!("{stem}_Application_Form.pdf")
}

// Catalog form paths are relative to the forms root and may not escape it.
fn resolve_within(root: &Path, relative: &str) -> Option<PathBuf> {
    let relative = Path::new(relative);
    let confined = relative
        .components()
        .all(|component| matches!(component, Component::Normal(_) | Component::CurDir));
    confined.then(|| root.join(relative))
}

/// Error raised by the scheme finder service.
#[derive(Debug, thiserror::Error)]
pub enum SchemeServiceError {
    #[error(transparent)]
    Intake(#[from] IntakeViolation),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error("Scheme not found")]
    SchemeNotFound(SchemeId),
    #[error("Application form not available for this scheme")]
    FormUnavailable(SchemeId),
    #[error("Application form file not found")]
    FormMissing(SchemeId),
}
