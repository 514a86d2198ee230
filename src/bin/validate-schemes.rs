use anyhow::{Context, Result};
use clap::Parser;
use scheme_import::types::Scheme;
use scheme_import::validate::{duplicate_ids, schema_violations, SCHEME_SCHEMA_V1};
use serde_json::Value;
use std::{fs, path::Path, path::PathBuf, process::ExitCode};

/// Check a generated schemes document against the Scheme v1 schema.
#[derive(Parser, Debug)]
#[command(name = "validate-schemes", version, about = "Validate generated schemes JSON")]
struct Cli {
    /// Path to the generated schemes JSON file
    path: PathBuf,

    /// Schema file to use instead of the bundled schemas/scheme.v1.json
    #[arg(long)]
    schema: Option<PathBuf>,
}

fn load_json(path: &Path) -> Result<Value> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&data).with_context(|| format!("Failed to parse JSON in {}", path.display()))
}

fn main() -> Result<ExitCode> {
    let args = Cli::parse();

    let schema = match &args.schema {
        Some(path) => load_json(path)?,
        None => serde_json::from_str(SCHEME_SCHEMA_V1).context("Bundled schema is not valid JSON")?,
    };
    let document = load_json(&args.path)?;

    let violations = schema_violations(&schema, &document)?;
    if !violations.is_empty() {
        eprintln!("invalid:");
        for violation in &violations {
            eprintln!("- {}", violation);
        }
        return Ok(ExitCode::FAILURE);
    }

    let schemes: Vec<Scheme> = serde_json::from_value(document)
        .context("Document matches the schema but not the Scheme record shape")?;
    for (id, records) in duplicate_ids(&schemes) {
        eprintln!("warning: id '{}' is shared by records {:?}", id, records);
    }

    println!("valid ({} records)", schemes.len());
    Ok(ExitCode::SUCCESS)
}
