mod criteria;
mod currency;
mod policy;
mod rules;

pub use criteria::{
    AgeBound, Constraint, CriteriaIssue, DocumentRequirement, EligibilityCriteria, MemberSet,
};
pub use currency::format_inr;
pub use policy::{MatchLevel, MatchPolicy};

use super::domain::{Profile, Scheme};
use rules::assess_criteria;
use serde::{Deserialize, Serialize};

/// Stateless evaluator that checks one scheme's criteria against one profile.
#[derive(Debug, Clone, Copy, Default)]
pub struct EligibilityEvaluator {
    policy: MatchPolicy,
}

impl EligibilityEvaluator {
    pub fn new(policy: MatchPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &MatchPolicy {
        &self.policy
    }

    pub fn evaluate(&self, profile: &Profile, scheme: &Scheme) -> Verdict {
        self.assess(profile, scheme).verdict
    }

    /// Evaluate and also return the payload problems that were skipped, for the caller to report.
    pub fn assess(&self, profile: &Profile, scheme: &Scheme) -> Assessment {
        let (criteria, issues) = EligibilityCriteria::from_payload(&scheme.eligibility_criteria);
        Assessment {
            verdict: self.evaluate_criteria(profile, &criteria),
            issues,
        }
    }

    pub fn evaluate_criteria(&self, profile: &Profile, criteria: &EligibilityCriteria) -> Verdict {
        let (reasons, warnings) = assess_criteria(profile, criteria);
        let match_level = self.policy.decide(reasons.len(), warnings.len());

        Verdict {
            match_level,
            reasons,
            warnings,
        }
    }
}

/// Evaluate `scheme` for `profile` under the default match policy.
pub fn evaluate(profile: &Profile, scheme: &Scheme) -> Verdict {
    EligibilityEvaluator::default().evaluate(profile, scheme)
}

/// Per-scheme eligibility outcome. Derived on every request and never stored on the scheme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verdict {
    pub match_level: MatchLevel,
    pub reasons: Vec<String>,
    pub warnings: Vec<String>,
}

/// Verdict plus the payload issues encountered while producing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assessment {
    pub verdict: Verdict,
    pub issues: Vec<CriteriaIssue>,
}
