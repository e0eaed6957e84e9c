use super::super::domain::{normalize_region, Profile};
use super::criteria::{AgeBound, Constraint, EligibilityCriteria, MemberSet};
use super::currency::format_inr;

/// Outcome of checking a single constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Finding {
    Reason(String),
    Warning(String),
}

pub(crate) fn assess_criteria(
    profile: &Profile,
    criteria: &EligibilityCriteria,
) -> (Vec<String>, Vec<String>) {
    let mut reasons = Vec::new();
    let mut warnings = Vec::new();

    for constraint in criteria.constraints() {
        match assess(profile, constraint) {
            Finding::Reason(text) => reasons.push(text),
            Finding::Warning(text) => warnings.push(text),
        }
    }

    (reasons, warnings)
}

fn assess(profile: &Profile, constraint: &Constraint) -> Finding {
    match constraint {
        Constraint::IncomeCeiling(ceiling) => {
            if profile.annual_income <= *ceiling {
                Finding::Reason(format!("Income below {}", format_inr(*ceiling)))
            } else {
                Finding::Warning(format!("Income exceeds {}", format_inr(*ceiling)))
            }
        }
        Constraint::Age(bound) => {
            let admitted = bound.admits(profile.age);
            match (*bound, admitted) {
                (AgeBound::Between { min, max }, true) => {
                    Finding::Reason(format!("Age between {min}-{max} years"))
                }
                (AgeBound::Between { min, max }, false) => {
                    Finding::Warning(format!("Age should be between {min}-{max} years"))
                }
                (AgeBound::AtLeast(min), true) => Finding::Reason(format!("Age above {min} years")),
                (AgeBound::AtLeast(min), false) => {
                    Finding::Warning(format!("Age should be above {min} years"))
                }
                (AgeBound::AtMost(max), true) => Finding::Reason(format!("Age below {max} years")),
                (AgeBound::AtMost(max), false) => {
                    Finding::Warning(format!("Age should be below {max} years"))
                }
            }
        }
        Constraint::Gender(required) => {
            if profile.gender == *required {
                Finding::Reason(required.applicant_label().to_string())
            } else {
                Finding::Warning(format!("Only for {}", required.audience()))
            }
        }
        Constraint::UnrecognizedGender(raw) => {
            Finding::Warning(format!("Only for {raw} applicants"))
        }
        Constraint::Occupations(set) => {
            if set.admits(&profile.occupation) {
                Finding::Reason(profile.occupation.label().to_string())
            } else {
                set_warning(set, "occupations", |occupation| occupation.label().to_string())
            }
        }
        Constraint::SocialCategories(set) => {
            if set.admits(&profile.social_category) {
                Finding::Reason(format!("{} category", profile.social_category.code()))
            } else {
                set_warning(set, "categories", |category| category.code().to_string())
            }
        }
        Constraint::States(set) => {
            if set.admits(&normalize_region(&profile.state)) {
                Finding::Reason(format!("Available in {}", profile.state))
            } else {
                match joined(set, String::clone) {
                    Some(states) => Finding::Warning(format!("Only available in {states}")),
                    None => Finding::Warning("No states are eligible".to_string()),
                }
            }
        }
        Constraint::ResidenceTypes(set) => {
            if set.admits(&profile.residence) {
                Finding::Reason(format!("{} resident", profile.residence.label()))
            } else {
                set_warning(set, "areas", |residence| residence.label().to_string())
            }
        }
        Constraint::Document(requirement) => {
            if requirement.held_by(profile) {
                Finding::Reason(format!("{} holder", requirement.label()))
            } else {
                Finding::Warning(format!("Requires {}", requirement.label()))
            }
        }
    }
}

fn set_warning<T>(set: &MemberSet<T>, noun: &str, render: impl Fn(&T) -> String) -> Finding {
    match joined(set, render) {
        Some(listed) => Finding::Warning(format!("Only for {listed} {noun}")),
        None => Finding::Warning(format!("No {noun} are eligible")),
    }
}

/// Recognized members first, then unrecognized entries verbatim. `None` for an empty set.
fn joined<T>(set: &MemberSet<T>, render: impl Fn(&T) -> String) -> Option<String> {
    let listed: Vec<String> = set
        .members
        .iter()
        .map(render)
        .chain(set.unrecognized.iter().cloned())
        .collect();
    (!listed.is_empty()).then(|| listed.join("/"))
}
