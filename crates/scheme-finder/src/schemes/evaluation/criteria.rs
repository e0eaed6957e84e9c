use std::borrow::Cow;

use serde_json::{Map, Value};

use super::super::domain::{
    normalize_region, Gender, Occupation, Profile, ResidenceType, SocialCategory,
};

/// Problem found while decoding an eligibility payload. The affected portion is ignored.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CriteriaIssue {
    #[error("eligibility payload is not a JSON object")]
    NotAnObject,
    #[error("eligibility payload text is not valid JSON: {0}")]
    InvalidJson(String),
    #[error("`{key}` ignored: expected {expected}")]
    InvalidValue {
        key: &'static str,
        expected: &'static str,
    },
    #[error("`{key}` entry `{value}` is not recognized")]
    UnknownMember { key: &'static str, value: String },
    #[error("`{key}` has no recognized entries; nobody is admitted")]
    EmptySet { key: &'static str },
}

/// Card or certificate a scheme can demand from its applicants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentRequirement {
    BplCard,
    MgnregaCard,
    KisanCreditCard,
    DisabilityCertificate,
}

impl DocumentRequirement {
    pub const ALL: [DocumentRequirement; 4] = [
        DocumentRequirement::BplCard,
        DocumentRequirement::MgnregaCard,
        DocumentRequirement::KisanCreditCard,
        DocumentRequirement::DisabilityCertificate,
    ];

    pub fn key(self) -> &'static str {
        match self {
            DocumentRequirement::BplCard => "requiresBPL",
            DocumentRequirement::MgnregaCard => "requiresMGNREGA",
            DocumentRequirement::KisanCreditCard => "requiresKCC",
            DocumentRequirement::DisabilityCertificate => "requiresDisabilityCert",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DocumentRequirement::BplCard => "BPL card",
            DocumentRequirement::MgnregaCard => "MGNREGA card",
            DocumentRequirement::KisanCreditCard => "Kisan Credit Card",
            DocumentRequirement::DisabilityCertificate => "Disability Certificate",
        }
    }

    pub fn held_by(self, profile: &Profile) -> bool {
        match self {
            DocumentRequirement::BplCard => profile.bpl_card,
            DocumentRequirement::MgnregaCard => profile.mgnrega_card,
            DocumentRequirement::KisanCreditCard => profile.kisan_credit_card,
            DocumentRequirement::DisabilityCertificate => profile.disability_certificate,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeBound {
    Between { min: u32, max: u32 },
    AtLeast(u32),
    AtMost(u32),
}

impl AgeBound {
    pub fn admits(self, age: u32) -> bool {
        match self {
            AgeBound::Between { min, max } => min <= age && age <= max,
            AgeBound::AtLeast(min) => age >= min,
            AgeBound::AtMost(max) => age <= max,
        }
    }
}

/// Membership constraint. An `open` set carries the `all`/`any` wildcard and admits everyone.
/// Entries that could not be parsed are kept verbatim in `unrecognized` and never admit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberSet<T> {
    pub members: Vec<T>,
    pub unrecognized: Vec<String>,
    pub open: bool,
}

impl<T: PartialEq> MemberSet<T> {
    pub fn admits(&self, value: &T) -> bool {
        self.open || self.members.contains(value)
    }
}

/// One recognized predicate from a scheme's eligibility payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Constraint {
    IncomeCeiling(u64),
    Age(AgeBound),
    Gender(Gender),
    /// A gender value outside the known set; no profile satisfies it.
    UnrecognizedGender(String),
    Occupations(MemberSet<Occupation>),
    SocialCategories(MemberSet<SocialCategory>),
    States(MemberSet<String>),
    ResidenceTypes(MemberSet<ResidenceType>),
    Document(DocumentRequirement),
}

/// Decoded constraint set, in the fixed order reasons and warnings are reported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EligibilityCriteria {
    constraints: Vec<Constraint>,
}

impl EligibilityCriteria {
    pub fn new(constraints: Vec<Constraint>) -> Self {
        Self { constraints }
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    /// Decode a catalog payload. Unknown keys are ignored and any key whose value has the wrong
    /// shape is dropped and reported, so the result is always usable. Well-formed keys always
    /// produce a constraint, even when none of their entries is recognized.
    pub fn from_payload(payload: &Value) -> (Self, Vec<CriteriaIssue>) {
        let object = match payload_object(payload) {
            Ok(Some(object)) => object,
            Ok(None) => return (Self::default(), Vec::new()),
            Err(issue) => return (Self::default(), vec![issue]),
        };

        let mut reader = PayloadReader {
            object: &object,
            issues: Vec::new(),
        };
        let mut constraints = Vec::new();

        if let Some(ceiling) = reader.amount("maxIncome") {
            constraints.push(Constraint::IncomeCeiling(ceiling));
        }

        let min_age = reader.age("minAge");
        let max_age = reader.age("maxAge");
        let age = match (min_age, max_age) {
            (Some(min), Some(max)) => Some(AgeBound::Between { min, max }),
            (Some(min), None) => Some(AgeBound::AtLeast(min)),
            (None, Some(max)) => Some(AgeBound::AtMost(max)),
            (None, None) => None,
        };
        if let Some(bound) = age {
            constraints.push(Constraint::Age(bound));
        }

        if let Some(raw) = reader.text("gender") {
            if !is_wildcard(raw) {
                match Gender::parse(raw) {
                    Some(gender) => constraints.push(Constraint::Gender(gender)),
                    None => {
                        reader.issues.push(CriteriaIssue::UnknownMember {
                            key: "gender",
                            value: raw.to_string(),
                        });
                        constraints.push(Constraint::UnrecognizedGender(raw.trim().to_string()));
                    }
                }
            }
        }

        if let Some(set) = reader.member_set("occupations", Occupation::parse) {
            constraints.push(Constraint::Occupations(set));
        }
        if let Some(set) = reader.member_set("categories", SocialCategory::parse) {
            constraints.push(Constraint::SocialCategories(set));
        }
        if let Some(set) = reader.member_set("states", |raw| {
            let code = normalize_region(raw);
            (!code.is_empty()).then_some(code)
        }) {
            constraints.push(Constraint::States(set));
        }
        if let Some(set) = reader.member_set("residenceTypes", ResidenceType::parse) {
            constraints.push(Constraint::ResidenceTypes(set));
        }

        for requirement in DocumentRequirement::ALL {
            if reader.flag(requirement.key()) {
                constraints.push(Constraint::Document(requirement));
            }
        }

        (Self { constraints }, reader.issues)
    }
}

fn payload_object(payload: &Value) -> Result<Option<Cow<'_, Map<String, Value>>>, CriteriaIssue> {
    match payload {
        Value::Null => Ok(None),
        Value::Object(object) => Ok(Some(Cow::Borrowed(object))),
        // Some catalog exports store the payload as JSON-encoded text.
        Value::String(raw) if raw.trim().is_empty() => Ok(None),
        Value::String(raw) => match serde_json::from_str::<Value>(raw) {
            Ok(Value::Object(object)) => Ok(Some(Cow::Owned(object))),
            Ok(Value::Null) => Ok(None),
            Ok(_) => Err(CriteriaIssue::NotAnObject),
            Err(err) => Err(CriteriaIssue::InvalidJson(err.to_string())),
        },
        _ => Err(CriteriaIssue::NotAnObject),
    }
}

fn is_wildcard(raw: &str) -> bool {
    let trimmed = raw.trim();
    trimmed.eq_ignore_ascii_case("all") || trimmed.eq_ignore_ascii_case("any")
}

struct PayloadReader<'a> {
    object: &'a Map<String, Value>,
    issues: Vec<CriteriaIssue>,
}

impl<'a> PayloadReader<'a> {
    fn present(&self, key: &str) -> Option<&'a Value> {
        self.object.get(key).filter(|value| !value.is_null())
    }

    fn invalid(&mut self, key: &'static str, expected: &'static str) {
        self.issues.push(CriteriaIssue::InvalidValue { key, expected });
    }

    fn amount(&mut self, key: &'static str) -> Option<u64> {
        let value = self.present(key)?;
        let amount = value.as_u64().or_else(|| {
            value
                .as_f64()
                .filter(|raw| raw.is_finite() && *raw >= 0.0 && raw.fract() == 0.0)
                .filter(|raw| *raw <= u64::MAX as f64)
                .map(|raw| raw as u64)
        });
        if amount.is_none() {
            self.invalid(key, "a non-negative whole number");
        }
        amount
    }

    fn age(&mut self, key: &'static str) -> Option<u32> {
        let amount = self.amount(key)?;
        match u32::try_from(amount) {
            Ok(age) => Some(age),
            Err(_) => {
                self.invalid(key, "an age in years");
                None
            }
        }
    }

    fn flag(&mut self, key: &'static str) -> bool {
        match self.present(key) {
            None => false,
            Some(Value::Bool(flag)) => *flag,
            Some(_) => {
                self.invalid(key, "a boolean");
                false
            }
        }
    }

    fn text(&mut self, key: &'static str) -> Option<&'a str> {
        match self.present(key)? {
            Value::String(raw) => Some(raw.as_str()),
            _ => {
                self.invalid(key, "a string");
                None
            }
        }
    }

    fn list(&mut self, key: &'static str) -> Option<Vec<&'a str>> {
        match self.present(key)? {
            Value::String(raw) => Some(vec![raw.as_str()]),
            Value::Array(items) => {
                let mut entries = Vec::with_capacity(items.len());
                for item in items {
                    match item.as_str() {
                        Some(raw) => entries.push(raw),
                        None => self.issues.push(CriteriaIssue::UnknownMember {
                            key,
                            value: item.to_string(),
                        }),
                    }
                }
                Some(entries)
            }
            _ => {
                self.invalid(key, "a list of strings");
                None
            }
        }
    }

    fn member_set<T, F>(&mut self, key: &'static str, parse: F) -> Option<MemberSet<T>>
    where
        T: PartialEq,
        F: Fn(&str) -> Option<T>,
    {
        let entries = self.list(key)?;
        let mut set = MemberSet {
            members: Vec::new(),
            unrecognized: Vec::new(),
            open: false,
        };

        for raw in entries {
            if is_wildcard(raw) {
                set.open = true;
                continue;
            }
            match parse(raw) {
                Some(member) if !set.members.contains(&member) => set.members.push(member),
                Some(_) => {}
                None => {
                    self.issues.push(CriteriaIssue::UnknownMember {
                        key,
                        value: raw.to_string(),
                    });
                    let raw = raw.trim().to_string();
                    if !set.unrecognized.contains(&raw) {
                        set.unrecognized.push(raw);
                    }
                }
            }
        }

        if set.members.is_empty() && !set.open {
            self.issues.push(CriteriaIssue::EmptySet { key });
        }
        Some(set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn constraints_follow_reporting_order_regardless_of_key_order() {
        let payload = json!({
            "requiresBPL": true,
            "states": ["Tamil Nadu"],
            "occupations": ["farmer"],
            "maxIncome": 200000,
            "minAge": 18,
        });

        let (criteria, issues) = EligibilityCriteria::from_payload(&payload);

        assert!(issues.is_empty(), "unexpected issues: {issues:?}");
        assert_eq!(
            criteria.constraints(),
            &[
                Constraint::IncomeCeiling(200000),
                Constraint::Age(AgeBound::AtLeast(18)),
                Constraint::Occupations(MemberSet {
                    members: vec![Occupation::Farmer],
                    unrecognized: Vec::new(),
                    open: false,
                }),
                Constraint::States(MemberSet {
                    members: vec!["tamil_nadu".to_string()],
                    unrecognized: Vec::new(),
                    open: false,
                }),
                Constraint::Document(DocumentRequirement::BplCard),
            ]
        );
    }

    #[test]
    fn string_encoded_payloads_are_decoded() {
        let payload = Value::String(r#"{"minAge": 16, "maxAge": 35}"#.to_string());

        let (criteria, issues) = EligibilityCriteria::from_payload(&payload);

        assert!(issues.is_empty());
        assert_eq!(
            criteria.constraints(),
            &[Constraint::Age(AgeBound::Between { min: 16, max: 35 })]
        );
    }

    #[test]
    fn unparseable_text_yields_empty_criteria_and_an_issue() {
        let payload = Value::String("{maxIncome: oops".to_string());

        let (criteria, issues) = EligibilityCriteria::from_payload(&payload);

        assert!(criteria.is_empty());
        assert!(matches!(issues.as_slice(), [CriteriaIssue::InvalidJson(_)]));
    }

    #[test]
    fn non_object_payloads_are_ignored() {
        let (criteria, issues) = EligibilityCriteria::from_payload(&json!([1, 2, 3]));

        assert!(criteria.is_empty());
        assert_eq!(issues, vec![CriteriaIssue::NotAnObject]);
    }

    #[test]
    fn bad_keys_are_dropped_without_losing_the_rest() {
        let payload = json!({
            "maxIncome": "eight lakh",
            "minAge": -4,
            "gender": "female",
            "requiresKCC": "yes",
        });

        let (criteria, issues) = EligibilityCriteria::from_payload(&payload);

        assert_eq!(criteria.constraints(), &[Constraint::Gender(Gender::Female)]);
        assert_eq!(issues.len(), 3);
        assert!(issues.contains(&CriteriaIssue::InvalidValue {
            key: "maxIncome",
            expected: "a non-negative whole number",
        }));
    }

    #[test]
    fn descriptive_and_unknown_keys_do_not_constrain() {
        let payload = json!({
            "criteria": ["Must be a land-holding farmer"],
            "documents": ["Aadhaar Card"],
            "notes": ["Benefits transferred directly"],
            "warnings": ["Need to verify SECC database"],
            "minLandHolding": 2,
        });

        let (criteria, issues) = EligibilityCriteria::from_payload(&payload);

        assert!(criteria.is_empty());
        assert!(issues.is_empty());
    }

    #[test]
    fn wildcards_open_the_set_and_any_gender_is_unconstrained() {
        let payload = json!({ "gender": "any", "states": ["All"], "occupations": ["any"] });

        let (criteria, issues) = EligibilityCriteria::from_payload(&payload);

        assert!(issues.is_empty());
        assert_eq!(
            criteria.constraints(),
            &[
                Constraint::Occupations(MemberSet {
                    members: Vec::new(),
                    unrecognized: Vec::new(),
                    open: true,
                }),
                Constraint::States(MemberSet {
                    members: Vec::new(),
                    unrecognized: Vec::new(),
                    open: true,
                }),
            ]
        );
    }

    #[test]
    fn sets_without_recognized_members_still_constrain() {
        let payload = json!({ "occupations": ["fisherman", "farmer"], "categories": [] });

        let (criteria, issues) = EligibilityCriteria::from_payload(&payload);

        assert_eq!(
            criteria.constraints(),
            &[
                Constraint::Occupations(MemberSet {
                    members: vec![Occupation::Farmer],
                    unrecognized: vec!["fisherman".to_string()],
                    open: false,
                }),
                Constraint::SocialCategories(MemberSet {
                    members: Vec::new(),
                    unrecognized: Vec::new(),
                    open: false,
                }),
            ]
        );
        assert_eq!(
            issues,
            vec![
                CriteriaIssue::UnknownMember {
                    key: "occupations",
                    value: "fisherman".to_string(),
                },
                CriteriaIssue::EmptySet { key: "categories" },
            ]
        );
    }

    #[test]
    fn unknown_members_never_admit() {
        let payload = json!({ "occupations": ["fisherman"] });

        let (criteria, _) = EligibilityCriteria::from_payload(&payload);

        match criteria.constraints() {
            [Constraint::Occupations(set)] => {
                assert!(!set.admits(&Occupation::Farmer));
                assert_eq!(set.unrecognized, vec!["fisherman".to_string()]);
            }
            other => panic!("unexpected constraints: {other:?}"),
        }
    }

    #[test]
    fn unknown_gender_is_kept_as_a_constraint() {
        let payload = json!({ "gender": "transgender" });

        let (criteria, issues) = EligibilityCriteria::from_payload(&payload);

        assert_eq!(
            criteria.constraints(),
            &[Constraint::UnrecognizedGender("transgender".to_string())]
        );
        assert_eq!(
            issues,
            vec![CriteriaIssue::UnknownMember {
                key: "gender",
                value: "transgender".to_string(),
            }]
        );
    }

    #[test]
    fn false_flags_and_nulls_are_not_constraints() {
        let payload = json!({ "requiresBPL": false, "maxIncome": null });

        let (criteria, issues) = EligibilityCriteria::from_payload(&payload);

        assert!(criteria.is_empty());
        assert!(issues.is_empty());
    }
}
