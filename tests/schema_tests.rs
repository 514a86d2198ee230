mod common;

use anyhow::Result;
use common::{sample_rows, write_workbook, HEADER};
use scheme_import::pipeline::{Pipeline, PipelineConfig};
use scheme_import::validate::bundled_schema_violations;
use serde_json::json;
use tempfile::tempdir;

#[test]
fn generated_document_is_valid() -> Result<()> {
    let dir = tempdir()?;
    let input = dir.path().join("schemes.xlsx");
    let output = dir.path().join("schemes.json");
    write_workbook(&input, &HEADER, &sample_rows())?;

    Pipeline::new(PipelineConfig {
        input_path: input,
        output_path: output.clone(),
    })
    .run()?;

    let doc: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(output)?)?;
    let violations = bundled_schema_violations(&doc)?;
    assert!(violations.is_empty(), "{violations:?}");
    Ok(())
}

#[test]
fn extra_fields_are_rejected() -> Result<()> {
    let doc = json!([{
        "id": "a", "slug": "a", "name": "A", "summary": "s", "category": "other",
        "states": ["all"], "tags": [], "benefits": [], "documents": [], "applyLink": "",
        "rules": { "minAge": 0, "incomeMax": null, "gender": "any" },
        "notes": "internal"
    }]);
    assert!(!bundled_schema_violations(&doc)?.is_empty());
    Ok(())
}

#[test]
fn top_level_must_be_an_array() -> Result<()> {
    assert!(!bundled_schema_violations(&json!({}))?.is_empty());
    Ok(())
}
