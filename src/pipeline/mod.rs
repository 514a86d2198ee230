// Import pipeline: workbook ingestion, record building, and JSON output

pub mod ingestion;
pub mod output;
pub mod processing;

use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use serde::Serialize;
use tracing::{debug, error, info, instrument, warn};

use crate::constants::{ALL_STATES, DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH};
use crate::error::{ImportError, Result};
use crate::metrics;
use crate::types::{RawRow, Scheme};
use crate::validate::duplicate_ids;
use processing::build_scheme;

/// Where the pipeline reads from and writes to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

/// Summary of a completed run
#[derive(Debug, Serialize)]
pub struct PipelineResult {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub rows_read: usize,
    pub records_written: usize,
    /// Distinct state tokens across all records, sorted, without `all`
    pub states: Vec<String>,
    /// Distinct categories across all records, sorted
    pub categories: Vec<String>,
    pub digest: String,
}

pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run the import end to end.
    ///
    /// Any failure aborts before the output file is touched.
    #[instrument(skip(self), fields(input = %self.config.input_path.display(), output = %self.config.output_path.display()))]
    pub fn run(&self) -> Result<PipelineResult> {
        let started = Instant::now();
        let input = &self.config.input_path;
        let output = &self.config.output_path;

        if !input.exists() {
            return Err(ImportError::MissingInput(input.clone()));
        }

        if let Some(dir) = output.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }

        info!("📥 Reading workbook {}", input.display());
        let rows = ingestion::read_rows(input)?;
        metrics::rows_read(rows.len());

        info!("🔧 Building {} records...", rows.len());
        let schemes = Self::build_all(&rows)?;
        Self::warn_duplicate_ids(&schemes);

        let digest = output::write_json_atomic(output, &schemes)?;
        metrics::records_written(schemes.len());
        metrics::run_duration(started.elapsed().as_secs_f64());
        info!(
            digest = %digest,
            "💾 Saved {} records to {}",
            schemes.len(),
            output.display()
        );

        let (states, categories) = Self::indexes(&schemes);
        Ok(PipelineResult {
            input_path: input.clone(),
            output_path: output.clone(),
            rows_read: rows.len(),
            records_written: schemes.len(),
            states,
            categories,
            digest,
        })
    }

    /// Build every row in order, stopping at the first invalid one
    fn build_all(rows: &[RawRow]) -> Result<Vec<Scheme>> {
        let mut schemes = Vec::with_capacity(rows.len());
        for (i, row) in rows.iter().enumerate() {
            match build_scheme(row) {
                Ok(scheme) => {
                    debug!(record = i + 1, id = %scheme.id, "built record");
                    schemes.push(scheme);
                }
                Err(e) => {
                    error!(record = i + 1, "Record build failed: {}", e);
                    return Err(e);
                }
            }
        }
        Ok(schemes)
    }

    /// Duplicate ids are reported, never merged or rejected
    fn warn_duplicate_ids(schemes: &[Scheme]) {
        for (id, records) in duplicate_ids(schemes) {
            warn!(id = %id, ?records, "{} records share the same id", records.len());
        }
    }

    fn indexes(schemes: &[Scheme]) -> (Vec<String>, Vec<String>) {
        let states: BTreeSet<&str> = schemes
            .iter()
            .flat_map(|s| s.states.iter().map(String::as_str))
            .filter(|s| *s != ALL_STATES)
            .collect();
        let categories: BTreeSet<&str> = schemes.iter().map(|s| s.category.as_str()).collect();

        (
            states.into_iter().map(str::to_string).collect(),
            categories.into_iter().map(str::to_string).collect(),
        )
    }
}
