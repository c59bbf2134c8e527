//! Error types for fallible collection.

use std::path::PathBuf;
use thiserror::Error;

/// Why a collector could not produce its payload.
///
/// The detector never propagates these: a failed collector degrades to an
/// empty payload for its source.
#[derive(Debug, Error)]
pub enum CollectError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed payload in {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("collector unavailable: {0}")]
    Unavailable(String),
}

pub type CollectResult<T> = Result<T, CollectError>;
