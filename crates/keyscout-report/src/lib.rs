//! File outputs for comparison runs.
//!
//! Two formats are supported: the ranked candidate table as a plain CSV
//! file, and a JSON report that wraps the candidates with tool version,
//! generation timestamp, input provenance, and any selection warnings.

mod error;

use std::fs::File;
use std::path::Path;

use chrono::Utc;
use polars::prelude::{CsvWriter, SerWriter};
use serde::Serialize;
use tracing::info;

use keyscout_ingest::SourceInfo;
use keyscout_match::{MatchCandidate, MatchOutcome, SelectionWarning};

pub use error::{ReportError, Result};

const REPORT_SCHEMA: &str = "keyscout.match-report";
const REPORT_SCHEMA_VERSION: u32 = 1;

/// Everything a comparison run produced, ready for serialization.
#[derive(Debug, Serialize)]
pub struct ReportPayload {
    pub schema: &'static str,
    pub schema_version: u32,
    pub tool_version: &'static str,
    pub generated_at: String,
    pub left: SourceInfo,
    pub right: SourceInfo,
    pub warnings: Vec<SelectionWarning>,
    pub candidates: Vec<MatchCandidate>,
}

impl ReportPayload {
    /// Assembles the payload for one comparison run.
    pub fn new(left: SourceInfo, right: SourceInfo, outcome: &MatchOutcome) -> Self {
        Self {
            schema: REPORT_SCHEMA,
            schema_version: REPORT_SCHEMA_VERSION,
            tool_version: env!("CARGO_PKG_VERSION"),
            generated_at: Utc::now().to_rfc3339(),
            left,
            right,
            warnings: outcome.warnings.clone(),
            candidates: outcome.candidates.clone(),
        }
    }
}

/// Writes the ranked candidate table as a CSV file.
///
/// Columns follow the fixed result layout; the fan-out cell is empty where
/// the ratio is undefined.
pub fn write_candidates_csv(path: &Path, outcome: &MatchOutcome) -> Result<()> {
    let mut frame = outcome.to_frame()?;

    let mut file = File::create(path).map_err(|source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .with_separator(b',')
        .finish(&mut frame)
        .map_err(|e| ReportError::Csv {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    info!(path = %path.display(), rows = frame.height(), "wrote candidate csv");
    Ok(())
}

/// Writes the JSON report for one comparison run.
pub fn write_report_json(path: &Path, payload: &ReportPayload) -> Result<()> {
    let json = serde_json::to_string_pretty(payload)
        .map_err(|source| ReportError::Serialize { source })?;
    std::fs::write(path, format!("{json}\n")).map_err(|source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    info!(path = %path.display(), candidates = payload.candidates.len(), "wrote json report");
    Ok(())
}
