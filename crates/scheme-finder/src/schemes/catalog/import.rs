use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::super::domain::{Scheme, SchemeCategory, SchemeId};
use super::seed::{standard_categories, standard_schemes};

#[derive(Debug)]
pub enum CatalogImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    Json(serde_json::Error),
    DuplicateScheme(SchemeId),
}

impl std::fmt::Display for CatalogImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogImportError::Io(err) => write!(f, "failed to read scheme catalog: {}", err),
            CatalogImportError::Csv(err) => write!(f, "invalid scheme catalog CSV: {}", err),
            CatalogImportError::Json(err) => write!(f, "invalid scheme catalog JSON: {}", err),
            CatalogImportError::DuplicateScheme(id) => {
                write!(f, "scheme id {} appears more than once in the catalog", id.0)
            }
        }
    }
}

impl std::error::Error for CatalogImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogImportError::Io(err) => Some(err),
            CatalogImportError::Csv(err) => Some(err),
            CatalogImportError::Json(err) => Some(err),
            CatalogImportError::DuplicateScheme(_) => None,
        }
    }
}

impl From<std::io::Error> for CatalogImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for CatalogImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

impl From<serde_json::Error> for CatalogImportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

/// Materialized catalog contents. Schemes and categories are held in name order.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogSnapshot {
    pub schemes: Vec<Scheme>,
    pub categories: Vec<SchemeCategory>,
}

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    schemes: Vec<Scheme>,
    #[serde(default)]
    categories: Vec<SchemeCategory>,
}

impl CatalogSnapshot {
    /// The built-in catalog of central government schemes.
    pub fn standard() -> Self {
        Self::build_unchecked(standard_schemes(), standard_categories())
    }

    /// Load a catalog file. `.csv` files are read as a flat export, anything else as JSON.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogImportError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("csv"))
            .unwrap_or(false);

        if is_csv {
            Self::from_csv_reader(file)
        } else {
            Self::from_json_reader(file)
        }
    }

    /// Read `{ "schemes": [...], "categories": [...] }`. Categories are derived from the schemes
    /// when omitted.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, CatalogImportError> {
        let document: CatalogDocument = serde_json::from_reader(reader)?;
        Self::build(document.schemes, document.categories)
    }

    /// Read a flat export with one scheme per row. The `eligibility_criteria` column holds the
    /// JSON payload as text; text that does not parse is kept verbatim and reported when the
    /// scheme is evaluated.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, CatalogImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut schemes = Vec::new();

        for record in csv_reader.deserialize::<CatalogRow>() {
            schemes.push(record?.into_scheme());
        }

        Self::build(schemes, Vec::new())
    }

    fn build(
        schemes: Vec<Scheme>,
        categories: Vec<SchemeCategory>,
    ) -> Result<Self, CatalogImportError> {
        let mut seen = HashSet::new();
        for scheme in &schemes {
            if !seen.insert(scheme.id) {
                return Err(CatalogImportError::DuplicateScheme(scheme.id));
            }
        }

        let categories = if categories.is_empty() {
            derive_categories(&schemes)
        } else {
            categories
        };

        Ok(Self::build_unchecked(schemes, categories))
    }

    fn build_unchecked(mut schemes: Vec<Scheme>, mut categories: Vec<SchemeCategory>) -> Self {
        schemes.sort_by(|a, b| a.name.cmp(&b.name));
        categories.sort_by(|a, b| a.name.cmp(&b.name));
        Self {
            schemes,
            categories,
        }
    }
}

fn derive_categories(schemes: &[Scheme]) -> Vec<SchemeCategory> {
    let mut seen = HashSet::new();
    schemes
        .iter()
        .filter(|scheme| seen.insert(scheme.category.as_str()))
        .map(|scheme| SchemeCategory {
            name: scheme.category.clone(),
            display_name: title_case(&scheme.category),
            description: None,
        })
        .collect()
}

fn title_case(value: &str) -> String {
    value
        .split(|c: char| c == '_' || c == '-' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Debug, Deserialize)]
struct CatalogRow {
    id: i64,
    name: String,
    description: String,
    category: String,
    ministry: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    eligibility_criteria: Option<String>,
    benefits: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    application_url: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    application_form_path: Option<String>,
}

impl CatalogRow {
    fn into_scheme(self) -> Scheme {
        let eligibility_criteria = match self.eligibility_criteria {
            Some(raw) => serde_json::from_str(&raw).unwrap_or(Value::String(raw)),
            None => Value::Null,
        };

        Scheme {
            id: SchemeId(self.id),
            name: self.name,
            description: self.description,
            category: self.category,
            ministry: self.ministry,
            eligibility_criteria,
            benefits: self.benefits,
            application_url: self.application_url,
            application_form_path: self.application_form_path,
        }
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
