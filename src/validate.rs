//! Checks on a generated schemes document.

use jsonschema::JSONSchema;
use serde_json::Value;
use std::collections::BTreeMap;

use crate::error::{ImportError, Result};
use crate::types::Scheme;

/// JSON Schema (draft 7) describing the generated document
pub const SCHEME_SCHEMA_V1: &str = include_str!("../schemas/scheme.v1.json");

/// Validate `document` against `schema`, returning one message per violation
pub fn schema_violations(schema: &Value, document: &Value) -> Result<Vec<String>> {
    let compiled = JSONSchema::options()
        .compile(schema)
        .map_err(|e| ImportError::Schema(format!("Failed to compile JSON Schema: {}", e)))?;

    let violations = match compiled.validate(document) {
        Ok(()) => Vec::new(),
        Err(errors) => errors
            .map(|error| format!("{} at {}", error, error.instance_path))
            .collect(),
    };
    Ok(violations)
}

/// Validate against the bundled Scheme v1 schema
pub fn bundled_schema_violations(document: &Value) -> Result<Vec<String>> {
    let schema: Value = serde_json::from_str(SCHEME_SCHEMA_V1)?;
    schema_violations(&schema, document)
}

/// Ids used by more than one record, with the 1-based positions using them
pub fn duplicate_ids(schemes: &[Scheme]) -> BTreeMap<String, Vec<usize>> {
    let mut positions: BTreeMap<String, Vec<usize>> = BTreeMap::new();
    for (i, scheme) in schemes.iter().enumerate() {
        positions.entry(scheme.id.clone()).or_default().push(i + 1);
    }
    positions.retain(|_, at| at.len() > 1);
    positions
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_record() -> Value {
        json!({
            "id": "pm-kisan",
            "slug": "pm-kisan",
            "name": "PM Kisan",
            "summary": "Income support",
            "category": "farmer",
            "states": ["all"],
            "tags": ["income"],
            "benefits": ["Rs 6000 per year"],
            "documents": [],
            "applyLink": "https://pmkisan.gov.in",
            "rules": { "minAge": 18, "incomeMax": null, "gender": "any" }
        })
    }

    #[test]
    fn test_valid_document_has_no_violations() {
        let doc = json!([valid_record()]);
        assert!(bundled_schema_violations(&doc).unwrap().is_empty());
        assert!(bundled_schema_violations(&json!([])).unwrap().is_empty());
    }

    #[test]
    fn test_unknown_gender_is_rejected() {
        let mut record = valid_record();
        record["rules"]["gender"] = json!("nonbinary");
        let violations = bundled_schema_violations(&json!([record])).unwrap();
        assert_eq!(violations.len(), 1);
        assert!(violations[0].contains("/0/rules/gender"));
    }

    #[test]
    fn test_uppercase_slug_and_missing_field_are_rejected() {
        let mut record = valid_record();
        record["slug"] = json!("PM-Kisan");
        record.as_object_mut().unwrap().remove("applyLink");
        let violations = bundled_schema_violations(&json!([record])).unwrap();
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn test_fractional_income_is_rejected() {
        let mut record = valid_record();
        record["rules"]["incomeMax"] = json!(2.5);
        assert!(!bundled_schema_violations(&json!([record])).unwrap().is_empty());
    }

    #[test]
    fn test_duplicate_ids() {
        let record: Scheme = serde_json::from_value(valid_record()).unwrap();
        let mut other = record.clone();
        other.id = "ladli-behna".to_string();

        let dupes = duplicate_ids(&[record.clone(), other, record]);
        assert_eq!(dupes.len(), 1);
        assert_eq!(dupes["pm-kisan"], vec![1, 3]);
    }
}
