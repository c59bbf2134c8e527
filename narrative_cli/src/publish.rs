//! Writes the report where the dashboard reads it.

use std::fs;
use std::path::{Path, PathBuf};

use narrative_core::DetectionReport;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum PublishError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Write the report as pretty JSON into every directory, creating them as needed.
///
/// Returns the paths written.
pub fn publish_report(
    report: &DetectionReport,
    directories: &[PathBuf],
    file_name: &str,
) -> Result<Vec<PathBuf>, PublishError> {
    let json = serde_json::to_string_pretty(report)?;
    let mut written = Vec::with_capacity(directories.len());

    for directory in directories {
        fs::create_dir_all(directory).map_err(|source| io_error(directory, source))?;

        let path = directory.join(file_name);
        fs::write(&path, &json).map_err(|source| io_error(&path, source))?;
        info!(path = %path.display(), "saved report");
        written.push(path);
    }

    Ok(written)
}

fn io_error(path: &Path, source: std::io::Error) -> PublishError {
    PublishError::Io {
        path: path.to_path_buf(),
        source,
    }
}
