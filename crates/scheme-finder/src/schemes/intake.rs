use super::domain::{normalize_region, state_label, Profile, ProfileSubmission};

const MIN_NAME_CHARS: usize = 2;
const MAX_AGE_EXCLUSIVE: i64 = 120;

/// Validation errors raised while turning a submission into a profile.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntakeViolation {
    #[error("Full name must be at least 2 characters")]
    NameTooShort,
    #[error("Age must be non-negative")]
    NegativeAge,
    #[error("Age must be less than 120")]
    AgeTooHigh,
    #[error("Annual income must be non-negative")]
    NegativeIncome,
    #[error("Please select a state")]
    MissingState,
    #[error("State `{0}` is not supported")]
    UnknownState(String),
}

/// Guard responsible for producing `Profile` instances from raw form submissions.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfileGuard;

impl ProfileGuard {
    pub fn profile_from_submission(
        &self,
        submission: ProfileSubmission,
    ) -> Result<Profile, IntakeViolation> {
        let full_name = submission.full_name.trim().to_string();
        if full_name.chars().count() < MIN_NAME_CHARS {
            return Err(IntakeViolation::NameTooShort);
        }

        if submission.age < 0 {
            return Err(IntakeViolation::NegativeAge);
        }
        if submission.age >= MAX_AGE_EXCLUSIVE {
            return Err(IntakeViolation::AgeTooHigh);
        }
        let age = u32::try_from(submission.age).map_err(|_| IntakeViolation::AgeTooHigh)?;

        let annual_income =
            u64::try_from(submission.annual_income).map_err(|_| IntakeViolation::NegativeIncome)?;

        let state = normalize_region(&submission.state);
        if state.is_empty() {
            return Err(IntakeViolation::MissingState);
        }
        if state_label(&state).is_none() {
            return Err(IntakeViolation::UnknownState(submission.state));
        }

        let district = submission
            .district
            .map(|district| normalize_region(&district))
            .filter(|district| !district.is_empty());

        Ok(Profile {
            full_name,
            age,
            gender: submission.gender,
            social_category: submission.social_category,
            annual_income,
            occupation: submission.occupation,
            state,
            district,
            residence: submission.residence,
            bpl_card: submission.bpl_card,
            mgnrega_card: submission.mgnrega_card,
            kisan_credit_card: submission.kisan_credit_card,
            disability_certificate: submission.disability_certificate,
        })
    }
}
