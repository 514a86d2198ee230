use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Input Excel not found: {}", .0.display())]
    MissingInput(PathBuf),

    #[error("Missing required column/value: {field}. Row: {row}")]
    MissingField { field: String, row: String },

    #[error("Malformed numeric value for {field}: {value:?}")]
    MalformedNumber { field: String, value: String },

    #[error("Workbook read failed: {0}")]
    Workbook(#[from] calamine::Error),

    #[error("Workbook has no sheets: {}", .0.display())]
    EmptyWorkbook(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Schema error: {0}")]
    Schema(String),
}

pub type Result<T> = std::result::Result<T, ImportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_message_names_field_and_row() {
        let err = ImportError::MissingField {
            field: "applyLink".to_string(),
            row: r#"{"name":"PM Kisan"}"#.to_string(),
        };
        assert_eq!(
            err.to_string(),
            r#"Missing required column/value: applyLink. Row: {"name":"PM Kisan"}"#
        );
    }

    #[test]
    fn test_missing_input_message_includes_path() {
        let err = ImportError::MissingInput(PathBuf::from("scripts/input/schemes.xlsx"));
        assert_eq!(err.to_string(), "Input Excel not found: scripts/input/schemes.xlsx");
    }
}
