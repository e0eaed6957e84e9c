use serde::Serialize;
use tracing::{debug, warn};

use super::domain::{Profile, Scheme};
use super::evaluation::{EligibilityEvaluator, MatchPolicy, Verdict};

/// A catalog scheme paired with the verdict computed for the current profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedScheme {
    pub scheme: Scheme,
    pub eligibility: Verdict,
}

/// Applies the evaluator across a catalog and orders the results by match level.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecommendationRanker {
    evaluator: EligibilityEvaluator,
}

impl RecommendationRanker {
    pub fn new(evaluator: EligibilityEvaluator) -> Self {
        Self { evaluator }
    }

    pub fn with_policy(policy: MatchPolicy) -> Self {
        Self::new(EligibilityEvaluator::new(policy))
    }

    /// Evaluate every scheme once and stable-sort by level, so schemes with the same level keep
    /// their catalog order. Nothing is filtered out.
    pub fn rank(&self, profile: &Profile, schemes: &[Scheme]) -> Vec<RankedScheme> {
        let mut ranked: Vec<RankedScheme> = schemes
            .iter()
            .map(|scheme| {
                let assessment = self.evaluator.assess(profile, scheme);
                for issue in &assessment.issues {
                    warn!(
                        scheme_id = scheme.id.0,
                        scheme = %scheme.name,
                        %issue,
                        "ignoring malformed eligibility criteria"
                    );
                }

                RankedScheme {
                    scheme: scheme.clone(),
                    eligibility: assessment.verdict,
                }
            })
            .collect();

        ranked.sort_by_key(|entry| entry.eligibility.match_level);
        debug!(schemes = ranked.len(), "ranked scheme catalog");
        ranked
    }
}

/// Rank `schemes` for `profile` under the default match policy.
pub fn rank(profile: &Profile, schemes: &[Scheme]) -> Vec<RankedScheme> {
    RecommendationRanker::default().rank(profile, schemes)
}

/// Narrow a ranked list to one category, keeping rank order. `all` or a blank name keeps
/// everything; matching ignores ASCII case.
pub fn filter_by_category(ranked: Vec<RankedScheme>, category: Option<&str>) -> Vec<RankedScheme> {
    match category.map(str::trim) {
        None | Some("") => ranked,
        Some(category) if category.eq_ignore_ascii_case("all") => ranked,
        Some(category) => ranked
            .into_iter()
            .filter(|entry| entry.scheme.category.eq_ignore_ascii_case(category))
            .collect(),
    }
}
