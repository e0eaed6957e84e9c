use serde::{Deserialize, Serialize};

/// Identifier wrapper for catalog schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchemeId(pub i64);

/// Self-declared gender collected on the profile form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "male" => Some(Self::Male),
            "female" => Some(Self::Female),
            "other" => Some(Self::Other),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }

    /// Plural audience wording used when a scheme is restricted to one gender.
    pub fn audience(self) -> &'static str {
        match self {
            Gender::Male => "males",
            Gender::Female => "females",
            Gender::Other => "specific gender",
        }
    }

    pub fn applicant_label(self) -> &'static str {
        match self {
            Gender::Male => "Male applicant",
            Gender::Female => "Female applicant",
            Gender::Other => "Other gender applicant",
        }
    }
}

/// Reservation category used by central and state welfare programs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialCategory {
    General,
    Obc,
    Sc,
    St,
    Ews,
}

impl SocialCategory {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "general" => Some(Self::General),
            "obc" => Some(Self::Obc),
            "sc" => Some(Self::Sc),
            "st" => Some(Self::St),
            "ews" => Some(Self::Ews),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            SocialCategory::General => "GENERAL",
            SocialCategory::Obc => "OBC",
            SocialCategory::Sc => "SC",
            SocialCategory::St => "ST",
            SocialCategory::Ews => "EWS",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Occupation {
    Student,
    Farmer,
    Business,
    Salaried,
    Unemployed,
    Retired,
    Homemaker,
    Other,
}

impl Occupation {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "student" => Some(Self::Student),
            "farmer" => Some(Self::Farmer),
            "business" => Some(Self::Business),
            "salaried" => Some(Self::Salaried),
            "unemployed" => Some(Self::Unemployed),
            "retired" => Some(Self::Retired),
            "homemaker" => Some(Self::Homemaker),
            "other" => Some(Self::Other),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Occupation::Student => "Student",
            Occupation::Farmer => "Farmer",
            Occupation::Business => "Business owner",
            Occupation::Salaried => "Salaried employee",
            Occupation::Unemployed => "Unemployed",
            Occupation::Retired => "Retired",
            Occupation::Homemaker => "Homemaker",
            Occupation::Other => "Eligible occupation",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResidenceType {
    Rural,
    Urban,
    Tribal,
}

impl ResidenceType {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "rural" => Some(Self::Rural),
            "urban" => Some(Self::Urban),
            "tribal" => Some(Self::Tribal),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ResidenceType::Rural => "Rural",
            ResidenceType::Urban => "Urban",
            ResidenceType::Tribal => "Tribal",
        }
    }
}

/// Validated applicant profile handed to the evaluator. Never mutated after intake.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub full_name: String,
    pub age: u32,
    pub gender: Gender,
    pub social_category: SocialCategory,
    pub annual_income: u64,
    pub occupation: Occupation,
    pub state: String,
    pub district: Option<String>,
    pub residence: ResidenceType,
    pub bpl_card: bool,
    pub mgnrega_card: bool,
    pub kisan_credit_card: bool,
    pub disability_certificate: bool,
}

/// Raw form payload as submitted by the client, prior to intake validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSubmission {
    pub full_name: String,
    pub age: i64,
    pub gender: Gender,
    pub social_category: SocialCategory,
    pub annual_income: i64,
    pub occupation: Occupation,
    pub state: String,
    #[serde(default)]
    pub district: Option<String>,
    pub residence: ResidenceType,
    #[serde(default)]
    pub bpl_card: bool,
    #[serde(default)]
    pub mgnrega_card: bool,
    #[serde(default)]
    pub kisan_credit_card: bool,
    #[serde(default)]
    pub disability_certificate: bool,
}

/// Catalog entry for a welfare program.
///
/// `eligibility_criteria` is kept as the raw semi-structured payload from the catalog. It is
/// decoded at evaluation time so a malformed payload degrades a single verdict instead of the
/// whole catalog load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scheme {
    pub id: SchemeId,
    pub name: String,
    pub description: String,
    pub category: String,
    pub ministry: String,
    #[serde(default)]
    pub eligibility_criteria: serde_json::Value,
    pub benefits: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_form_path: Option<String>,
}

/// Grouping shown in the results filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemeCategory {
    pub name: String,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// States offered by the profile form, as `(code, label)` pairs.
pub const STATES: [(&str, &str); 14] = [
    ("andhra_pradesh", "Andhra Pradesh"),
    ("assam", "Assam"),
    ("bihar", "Bihar"),
    ("gujarat", "Gujarat"),
    ("karnataka", "Karnataka"),
    ("kerala", "Kerala"),
    ("madhya_pradesh", "Madhya Pradesh"),
    ("maharashtra", "Maharashtra"),
    ("punjab", "Punjab"),
    ("rajasthan", "Rajasthan"),
    ("tamil_nadu", "Tamil Nadu"),
    ("telangana", "Telangana"),
    ("uttar_pradesh", "Uttar Pradesh"),
    ("west_bengal", "West Bengal"),
];

/// Canonical code for a state name: lowercase with separators collapsed to `_`.
pub fn normalize_region(value: &str) -> String {
    value
        .split(|c: char| c.is_whitespace() || c == '-' || c == '_')
        .filter(|part| !part.is_empty())
        .map(|part| part.to_ascii_lowercase())
        .collect::<Vec<_>>()
        .join("_")
}

pub fn state_label(code: &str) -> Option<&'static str> {
    STATES
        .iter()
        .find(|(value, _)| *value == code)
        .map(|(_, label)| *label)
}
