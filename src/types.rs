use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single spreadsheet cell as read from the workbook
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Empty,
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl CellValue {
    /// True for empty cells and text that is only whitespace
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Text(s) => f.write_str(s),
            CellValue::Int(n) => write!(f, "{n}"),
            // Workbooks store every number as a float; whole values read back as integers
            CellValue::Float(x) if x.fract() == 0.0 && x.abs() < 1e15 => write!(f, "{}", *x as i64),
            CellValue::Float(x) => write!(f, "{x}"),
            CellValue::Bool(true) => f.write_str("True"),
            CellValue::Bool(false) => f.write_str("False"),
        }
    }
}

/// Header label -> cell value for one data row, in sheet column order
pub type RawRow = IndexMap<String, CellValue>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Any,
    Male,
    Female,
    Other,
}

impl Gender {
    /// Lenient parse: anything outside the known set is `Any`
    pub fn from_raw(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "male" => Gender::Male,
            "female" => Gender::Female,
            "other" => Gender::Other,
            _ => Gender::Any,
        }
    }
}

/// Eligibility rules attached to a scheme
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rules {
    pub min_age: i64,
    pub income_max: Option<i64>,
    pub gender: Gender,
}

/// One catalog entry in the generated document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scheme {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub summary: String,
    pub category: String,
    pub states: Vec<String>,
    pub tags: Vec<String>,
    pub benefits: Vec<String>,
    pub documents: Vec<String>,
    pub apply_link: String,
    pub rules: Rules,
}
