use crate::infra::{catalog_source, load_catalog, InMemoryProfileArchive, InMemorySchemeCatalog};
use chrono::{Local, NaiveDate};
use clap::Args;
use scheme_finder::config::AppConfig;
use scheme_finder::error::AppError;
use scheme_finder::schemes::domain::{normalize_region, state_label};
use scheme_finder::schemes::evaluation::format_inr;
use scheme_finder::schemes::{
    filter_by_category, CatalogSnapshot, MatchLevel, MatchPolicy, ProfileSubmission, RankedScheme,
    SchemeFinderService,
};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct RecommendArgs {
    /// Profile JSON in the same shape the recommend endpoint accepts
    #[arg(long)]
    pub(crate) profile: PathBuf,
    /// JSON or CSV catalog to rank instead of the configured one
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Only show schemes from this category
    #[arg(long)]
    pub(crate) category: Option<String>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct CatalogArgs {
    /// JSON or CSV catalog to list instead of the configured one
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

pub(crate) fn run_recommendation(args: RecommendArgs) -> Result<(), AppError> {
    let RecommendArgs {
        profile,
        catalog,
        category,
    } = args;

    let config = AppConfig::load()?;
    let snapshot = load_catalog(catalog_source(catalog.as_deref(), &config.catalog))?;
    let submission = read_profile(&profile)?;
    let applicant = Applicant::from(&submission);

    let service = SchemeFinderService::new(
        Arc::new(InMemorySchemeCatalog::new(snapshot)),
        Arc::new(InMemoryProfileArchive::new(&config.archive)),
        MatchPolicy::from(&config.matching),
        config.catalog.forms_dir.clone(),
    );
    let ranked = filter_by_category(service.recommend(submission)?, category.as_deref());

    let today = Local::now().date_naive();
    for line in recommendation_lines(&applicant, &ranked, category.as_deref(), today) {
        println!("{line}");
    }
    Ok(())
}

pub(crate) fn run_catalog_listing(args: CatalogArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let snapshot = load_catalog(catalog_source(args.catalog.as_deref(), &config.catalog))?;

    for line in catalog_lines(&snapshot) {
        println!("{line}");
    }
    Ok(())
}

fn read_profile(path: &Path) -> Result<ProfileSubmission, AppError> {
    let reader = BufReader::new(File::open(path)?);
    let submission = serde_json::from_reader(reader).map_err(std::io::Error::from)?;
    Ok(submission)
}

/// Header details kept from the submission before it is consumed by intake.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Applicant {
    pub(crate) name: String,
    pub(crate) state: String,
    pub(crate) annual_income: i64,
}

impl From<&ProfileSubmission> for Applicant {
    fn from(submission: &ProfileSubmission) -> Self {
        let code = normalize_region(&submission.state);
        let state = state_label(&code)
            .map(str::to_string)
            .unwrap_or_else(|| submission.state.trim().to_string());

        Self {
            name: submission.full_name.trim().to_string(),
            state,
            annual_income: submission.annual_income,
        }
    }
}

pub(crate) fn recommendation_lines(
    applicant: &Applicant,
    ranked: &[RankedScheme],
    category: Option<&str>,
    today: NaiveDate,
) -> Vec<String> {
    let mut lines = vec![
        format!("Scheme recommendations for {}", applicant.name),
        format!(
            "State: {} | Annual income: {} | Generated {}",
            applicant.state,
            u64::try_from(applicant.annual_income)
                .map(format_inr)
                .unwrap_or_else(|_| applicant.annual_income.to_string()),
            today.format("%Y-%m-%d")
        ),
    ];

    if let Some(category) = category.map(str::trim).filter(|value| !value.is_empty()) {
        lines.push(format!("Category filter: {category}"));
    }

    if ranked.is_empty() {
        lines.push(String::new());
        lines.push("No schemes matched the requested filters".to_string());
        return lines;
    }

    let count = |level: MatchLevel| {
        ranked
            .iter()
            .filter(|entry| entry.eligibility.match_level == level)
            .count()
    };
    lines.push(format!(
        "{} high | {} medium | {} low",
        count(MatchLevel::High),
        count(MatchLevel::Medium),
        count(MatchLevel::Low)
    ));

    for entry in ranked {
        lines.push(String::new());
        lines.push(format!(
            "[{}] {} ({})",
            entry.eligibility.match_level.label().to_uppercase(),
            entry.scheme.name,
            entry.scheme.category
        ));
        lines.push(format!("  {}", entry.scheme.ministry));
        for reason in &entry.eligibility.reasons {
            lines.push(format!("  + {reason}"));
        }
        for warning in &entry.eligibility.warnings {
            lines.push(format!("  - {warning}"));
        }
        if let Some(url) = &entry.scheme.application_url {
            lines.push(format!("  Apply: {url}"));
        }
    }

    lines
}

pub(crate) fn catalog_lines(snapshot: &CatalogSnapshot) -> Vec<String> {
    let mut lines = vec![format!(
        "Scheme catalog: {} schemes across {} categories",
        snapshot.schemes.len(),
        snapshot.categories.len()
    )];

    for category in &snapshot.categories {
        let schemes: Vec<_> = snapshot
            .schemes
            .iter()
            .filter(|scheme| scheme.category == category.name)
            .collect();
        if schemes.is_empty() {
            continue;
        }

        lines.push(String::new());
        lines.push(format!("{} ({})", category.display_name, schemes.len()));
        for scheme in schemes {
            lines.push(format!("  #{} {} | {}", scheme.id.0, scheme.name, scheme.ministry));
        }
    }

    let uncategorized: Vec<_> = snapshot
        .schemes
        .iter()
        .filter(|scheme| {
            !snapshot
                .categories
                .iter()
                .any(|category| category.name == scheme.category)
        })
        .collect();
    if !uncategorized.is_empty() {
        lines.push(String::new());
        lines.push(format!("Uncategorized ({})", uncategorized.len()));
        for scheme in uncategorized {
            lines.push(format!("  #{} {} | {}", scheme.id.0, scheme.name, scheme.ministry));
        }
    }

    lines
}
