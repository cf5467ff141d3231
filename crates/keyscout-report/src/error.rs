//! Error types for report writing.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while writing comparison outputs.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Failed to write an output file.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize the report payload.
    #[error("failed to serialize report: {source}")]
    Serialize {
        #[source]
        source: serde_json::Error,
    },

    /// Failed to render the candidate table as CSV.
    #[error("failed to write CSV {path}: {message}")]
    Csv { path: PathBuf, message: String },

    /// Building the output frame failed.
    #[error("failed to build report frame: {message}")]
    Frame { message: String },
}

impl From<keyscout_match::MatchError> for ReportError {
    fn from(err: keyscout_match::MatchError) -> Self {
        Self::Frame {
            message: err.to_string(),
        }
    }
}

/// Result type for report operations.
pub type Result<T> = std::result::Result<T, ReportError>;
