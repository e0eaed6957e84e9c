use serde::{Deserialize, Serialize};

const DEFAULT_HIGH_MIN_REASONS: usize = 3;
const DEFAULT_MEDIUM_MAX_WARNINGS: usize = 1;

/// Discrete eligibility strength. Ordering follows presentation order: `High` sorts first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchLevel {
    High,
    Medium,
    Low,
}

impl MatchLevel {
    pub fn label(self) -> &'static str {
        match self {
            MatchLevel::High => "high",
            MatchLevel::Medium => "medium",
            MatchLevel::Low => "low",
        }
    }
}

/// Thresholds used to bucket reason and warning counts into a match level.
///
/// The defaults reproduce `reasons > 2 && warnings == 0` for `high` and
/// `reasons > 0 && warnings <= 1` for `medium`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchPolicy {
    high_min_reasons: usize,
    medium_max_warnings: usize,
}

impl MatchPolicy {
    /// `high_min_reasons` is raised to at least one so an unconstrained scheme stays `low`.
    pub fn new(high_min_reasons: usize, medium_max_warnings: usize) -> Self {
        Self {
            high_min_reasons: high_min_reasons.max(1),
            medium_max_warnings,
        }
    }

    pub fn high_min_reasons(&self) -> usize {
        self.high_min_reasons
    }

    pub fn medium_max_warnings(&self) -> usize {
        self.medium_max_warnings
    }

    pub fn decide(&self, reasons: usize, warnings: usize) -> MatchLevel {
        if reasons >= self.high_min_reasons && warnings == 0 {
            MatchLevel::High
        } else if reasons > 0 && warnings <= self.medium_max_warnings {
            MatchLevel::Medium
        } else {
            MatchLevel::Low
        }
    }
}

impl Default for MatchPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_HIGH_MIN_REASONS, DEFAULT_MEDIUM_MAX_WARNINGS)
    }
}
