//! Welfare scheme discovery: profile intake, eligibility evaluation, ranking, and the HTTP
//! surface that exposes them.
//!
//! The evaluator and ranker are pure and synchronous. Everything that touches storage sits
//! behind the `SchemeCatalog` and `ProfileArchive` traits so the service can be driven from
//! tests with in-memory doubles.

pub mod catalog;
pub mod domain;
pub mod evaluation;
pub mod intake;
pub mod ranking;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use catalog::{
    ArchiveError, ArchivedProfile, CatalogError, CatalogImportError, CatalogSnapshot,
    ProfileArchive, SchemeCatalog,
};
pub use domain::{
    Gender, Occupation, Profile, ProfileSubmission, ResidenceType, Scheme, SchemeCategory,
    SchemeId, SocialCategory,
};
pub use evaluation::{evaluate, EligibilityEvaluator, MatchLevel, MatchPolicy, Verdict};
pub use intake::{IntakeViolation, ProfileGuard};
pub use ranking::{filter_by_category, rank, RankedScheme, RecommendationRanker};
pub use router::scheme_router;
pub use service::{ApplicationForm, SchemeFinderService, SchemeServiceError};
