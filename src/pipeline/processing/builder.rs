use crate::constants::{columns, ALL_STATES, COMMA_SEPARATOR, DEFAULT_CATEGORY, LIST_SEPARATOR, REQUIRED_FIELDS};
use crate::error::{ImportError, Result};
use crate::pipeline::processing::normalize::{slugify, split_commas, split_list};
use crate::types::{CellValue, Gender, RawRow, Rules, Scheme};

/// Fixed-schema view of a raw row, validated at construction.
///
/// Required columns are held as their raw text; optional columns keep the
/// cell so numeric fields can be converted without a text round trip.
/// Blank optional cells are `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemeRow {
    pub name: String,
    pub summary: String,
    pub category: String,
    pub states: String,
    pub apply_link: String,
    pub slug: Option<CellValue>,
    pub id: Option<CellValue>,
    pub tags: Option<CellValue>,
    pub benefits: Option<CellValue>,
    pub documents: Option<CellValue>,
    pub min_age: Option<CellValue>,
    pub income_max: Option<CellValue>,
    pub gender: Option<CellValue>,
}

impl SchemeRow {
    pub fn from_raw(row: &RawRow) -> Result<Self> {
        for field in REQUIRED_FIELDS {
            match row.get(field) {
                Some(value) if !value.is_blank() => {}
                _ => return Err(missing_field(field, row)),
            }
        }

        let text = |key: &str| row.get(key).map(|v| v.to_string()).unwrap_or_default();
        let optional = |key: &str| row.get(key).filter(|v| !v.is_blank()).cloned();

        Ok(Self {
            name: text(columns::NAME),
            summary: text(columns::SUMMARY),
            category: text(columns::CATEGORY),
            states: text(columns::STATES),
            apply_link: text(columns::APPLY_LINK),
            slug: optional(columns::SLUG),
            id: optional(columns::ID),
            tags: optional(columns::TAGS),
            benefits: optional(columns::BENEFITS),
            documents: optional(columns::DOCUMENTS),
            min_age: optional(columns::MIN_AGE),
            income_max: optional(columns::INCOME_MAX),
            gender: optional(columns::GENDER),
        })
    }
}

impl TryFrom<SchemeRow> for Scheme {
    type Error = ImportError;

    fn try_from(row: SchemeRow) -> Result<Self> {
        let name = row.name.trim().to_string();
        let summary = row.summary.trim().to_string();

        let category = match slugify(&row.category) {
            c if c.is_empty() => DEFAULT_CATEGORY.to_string(),
            c => c,
        };

        let states_raw = row.states.trim().to_lowercase();
        let states = if states_raw == ALL_STATES {
            vec![ALL_STATES.to_string()]
        } else {
            states_raw
                .split(COMMA_SEPARATOR)
                .map(slugify)
                .filter(|s| !s.is_empty())
                .collect()
        };

        let slug = match &row.slug {
            Some(explicit) => slugify(&explicit.to_string()),
            None => slugify(&name),
        };
        let id = match &row.id {
            Some(explicit) => slugify(&explicit.to_string()),
            None => slug.clone(),
        };

        let tags = row
            .tags
            .as_ref()
            .map(|v| split_commas(&v.to_string()))
            .unwrap_or_default();
        let benefits = split_list(row.benefits.as_ref().map(|v| v.to_string()).as_deref(), LIST_SEPARATOR);
        let documents = split_list(row.documents.as_ref().map(|v| v.to_string()).as_deref(), LIST_SEPARATOR);

        let rules = Rules {
            min_age: parse_min_age(row.min_age.as_ref())?,
            income_max: parse_income_max(row.income_max.as_ref())?,
            gender: row
                .gender
                .as_ref()
                .map(|v| Gender::from_raw(&v.to_string()))
                .unwrap_or_default(),
        };

        Ok(Scheme {
            id,
            slug,
            name,
            summary,
            category,
            states,
            tags,
            benefits,
            documents,
            apply_link: row.apply_link.trim().to_string(),
            rules,
        })
    }
}

/// Validate one raw row and derive its catalog entry
pub fn build_scheme(row: &RawRow) -> Result<Scheme> {
    SchemeRow::from_raw(row)?.try_into()
}

/// Absent means 0; text must be an integer literal, float cells truncate
fn parse_min_age(value: Option<&CellValue>) -> Result<i64> {
    match value {
        None => Ok(0),
        Some(CellValue::Int(n)) => Ok(*n),
        Some(CellValue::Float(x)) => truncate(columns::MIN_AGE, *x),
        Some(CellValue::Text(s)) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| malformed(columns::MIN_AGE, s)),
        Some(other) => Err(malformed(columns::MIN_AGE, &other.to_string())),
    }
}

/// Absent means no ceiling; otherwise any float, truncated (`50000.0` -> 50000)
fn parse_income_max(value: Option<&CellValue>) -> Result<Option<i64>> {
    match value {
        None => Ok(None),
        Some(CellValue::Int(n)) => Ok(Some(*n)),
        Some(CellValue::Float(x)) => truncate(columns::INCOME_MAX, *x).map(Some),
        Some(CellValue::Text(s)) => {
            let x: f64 = s
                .trim()
                .parse()
                .map_err(|_| malformed(columns::INCOME_MAX, s))?;
            truncate(columns::INCOME_MAX, x).map(Some)
        }
        Some(other) => Err(malformed(columns::INCOME_MAX, &other.to_string())),
    }
}

fn truncate(field: &str, x: f64) -> Result<i64> {
    if x.is_finite() && x >= i64::MIN as f64 && x < i64::MAX as f64 {
        Ok(x.trunc() as i64)
    } else {
        Err(malformed(field, &x.to_string()))
    }
}

fn malformed(field: &str, value: &str) -> ImportError {
    ImportError::MalformedNumber {
        field: field.to_string(),
        value: value.to_string(),
    }
}

fn missing_field(field: &str, row: &RawRow) -> ImportError {
    let row = serde_json::to_string(row).unwrap_or_else(|_| format!("{row:?}"));
    ImportError::MissingField {
        field: field.to_string(),
        row,
    }
}
