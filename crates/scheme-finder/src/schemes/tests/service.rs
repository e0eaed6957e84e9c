use super::common::*;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde_json::json;

use crate::schemes::domain::SchemeId;
use crate::schemes::evaluation::{MatchLevel, MatchPolicy};
use crate::schemes::intake::IntakeViolation;
use crate::schemes::service::form_file_name;
use crate::schemes::{SchemeFinderService, SchemeServiceError};

#[test]
fn recommend_ranks_catalog_and_archives_profile() {
    let (service, archive) = build_service(MemoryCatalog::standard(), Path::new("."));

    let ranked = service.recommend(submission()).expect("recommendation succeeds");

    assert_eq!(ranked.len(), 8);
    let levels: Vec<_> = ranked
        .iter()
        .map(|entry| entry.eligibility.match_level)
        .collect();
    let mut sorted = levels.clone();
    sorted.sort();
    assert_eq!(levels, sorted);

    let entries = archive.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].profile.state, "uttar_pradesh");
}

#[test]
fn recommend_propagates_intake_violations() {
    let (service, archive) = build_service(MemoryCatalog::standard(), Path::new("."));
    let mut submission = submission();
    submission.age = 130;

    match service.recommend(submission) {
        Err(SchemeServiceError::Intake(IntakeViolation::AgeTooHigh)) => {}
        other => panic!("expected intake violation, got {other:?}"),
    }
    assert!(archive.entries().is_empty());
}

#[test]
fn recommend_survives_archive_failure() {
    let service = SchemeFinderService::new(
        Arc::new(MemoryCatalog::standard()),
        Arc::new(FailingArchive),
        MatchPolicy::default(),
        ".",
    );

    let ranked = service.recommend(submission()).expect("archive failure ignored");

    assert_eq!(ranked.len(), 8);
}

#[test]
fn recommend_surfaces_catalog_outage() {
    let service = SchemeFinderService::new(
        Arc::new(UnavailableCatalog),
        Arc::new(MemoryArchive::default()),
        MatchPolicy::default(),
        ".",
    );

    assert!(matches!(
        service.recommend(submission()),
        Err(SchemeServiceError::Catalog(_))
    ));
}

#[test]
fn ujjwala_is_a_strong_match_for_bpl_woman() {
    let catalog = MemoryCatalog::with_schemes(vec![scheme(
        5,
        "Pradhan Mantri Ujjwala Yojana",
        "women",
        json!({ "gender": "female", "requiresBPL": true, "residenceTypes": ["rural"] }),
    )]);
    let (service, _) = build_service(catalog, Path::new("."));

    let ranked = service.recommend(submission()).expect("recommendation succeeds");

    assert_eq!(ranked[0].eligibility.match_level, MatchLevel::High);
    assert_eq!(
        ranked[0].eligibility.reasons,
        vec!["Female applicant", "Rural resident", "BPL card holder"]
    );
}

#[test]
fn unknown_scheme_is_reported() {
    let (service, _) = build_service(MemoryCatalog::standard(), Path::new("."));

    assert!(matches!(
        service.scheme(SchemeId(99)),
        Err(SchemeServiceError::SchemeNotFound(SchemeId(99)))
    ));
}

#[test]
fn application_form_resolves_inside_forms_root() {
    let dir = tempfile::tempdir().expect("tempdir");
    let forms = dir.path().join("public/forms");
    fs::create_dir_all(&forms).expect("forms dir");
    fs::write(forms.join("pm_kisan_form.pdf"), b"%PDF-1.4").expect("form written");
    let (service, _) = build_service(MemoryCatalog::standard(), dir.path());

    let form = service
        .application_form(SchemeId(1))
        .expect("form available");

    assert_eq!(form.path, forms.join("pm_kisan_form.pdf"));
    assert_eq!(form.file_name, "PM-KISAN_Scheme_Application_Form.pdf");
}

#[test]
fn application_form_missing_on_disk() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (service, _) = build_service(MemoryCatalog::standard(), dir.path());

    assert!(matches!(
        service.application_form(SchemeId(2)),
        Err(SchemeServiceError::FormMissing(SchemeId(2)))
    ));
}

#[test]
fn application_form_paths_cannot_escape_root() {
    let mut escaping = scheme(1, "Escape", "housing", serde_json::Value::Null);
    escaping.application_form_path = Some("../secrets.pdf".to_string());
    let no_form = scheme(2, "Paperless", "housing", serde_json::Value::Null);
    let (service, _) = build_service(
        MemoryCatalog::with_schemes(vec![escaping, no_form]),
        Path::new("."),
    );

    assert!(matches!(
        service.application_form(SchemeId(1)),
        Err(SchemeServiceError::FormUnavailable(SchemeId(1)))
    ));
    assert!(matches!(
        service.application_form(SchemeId(2)),
        Err(SchemeServiceError::FormUnavailable(SchemeId(2)))
    ));
}

#[test]
fn form_file_name_replaces_whitespace() {
    assert_eq!(
        form_file_name("Pradhan Mantri  Awas Yojana - Gramin"),
        "Pradhan_Mantri_Awas_Yojana_-_Gramin_Application_Form.pdf"
    );
}
