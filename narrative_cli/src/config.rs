//! Runner configuration, read from TOML.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Top-level runner configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    /// Tracing filter used when `RUST_LOG` is unset.
    pub log_level: Option<String>,
    pub inputs: InputConfig,
    pub output: OutputConfig,
}

/// Where each collector's saved payload lives. A missing entry means the
/// source contributes nothing this run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub on_chain: Option<PathBuf>,
    pub repositories: Option<PathBuf>,
    pub social: Option<PathBuf>,
}

/// Where the report is published.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Every directory receives its own copy of the report.
    pub directories: Vec<PathBuf>,
    pub file_name: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directories: vec![PathBuf::from("data"), PathBuf::from("public/data")],
            file_name: "narratives.json".to_string(),
        }
    }
}

impl DetectorConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Filter directive for the tracing subscriber.
    pub fn log_filter(&self) -> &str {
        self.log_level.as_deref().unwrap_or("info")
    }
}
