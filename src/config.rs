use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{
    DEFAULT_CONFIG_FILE, DEFAULT_INPUT_PATH, DEFAULT_LOG_FILE, DEFAULT_OUTPUT_PATH,
    ENV_INPUT_PATH, ENV_OUTPUT_PATH,
};
use crate::error::{ImportError, Result};
use crate::pipeline::PipelineConfig;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub paths: PathsConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT_PATH),
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Directory for the rolling JSON log; file logging is off when unset
    pub dir: Option<PathBuf>,
    pub file_name: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            dir: None,
            file_name: DEFAULT_LOG_FILE.to_string(),
        }
    }
}

impl Config {
    /// Load configuration: defaults, then the config file, then the environment.
    ///
    /// An explicitly named file must exist; the default `scheme_import.toml`
    /// is optional.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut config = match explicit {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::from_file(Path::new(DEFAULT_CONFIG_FILE))?
            }
            None => Self::default(),
        };

        config.apply_overrides(
            std::env::var(ENV_INPUT_PATH).ok(),
            std::env::var(ENV_OUTPUT_PATH).ok(),
        );
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            ImportError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Replace the configured paths with any non-blank override
    pub fn apply_overrides(&mut self, input: Option<String>, output: Option<String>) {
        if let Some(input) = input.filter(|v| !v.trim().is_empty()) {
            self.paths.input = PathBuf::from(input.trim());
        }
        if let Some(output) = output.filter(|v| !v.trim().is_empty()) {
            self.paths.output = PathBuf::from(output.trim());
        }
    }

    pub fn pipeline_config(&self) -> PipelineConfig {
        PipelineConfig {
            input_path: self.paths.input.clone(),
            output_path: self.paths.output.clone(),
        }
    }
}
