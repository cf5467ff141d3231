//! Option, record, and diagnostic types for the comparison engine.

use std::fmt;

use polars::prelude::DataFrame;
use serde::Serialize;

use crate::error::Result;
use crate::frame;

/// Which input table a diagnostic or error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// Options for [`compare_frames`](crate::compare_frames).
///
/// Column selections are optional. An absent selection means every column of
/// that side participates; a present selection is filtered against the
/// table's actual columns and de-duplicated before use.
#[derive(Debug, Clone, Default)]
pub struct CompareOptions {
    /// Candidate columns to consider on the left side.
    pub left_columns: Option<Vec<String>>,
    /// Candidate columns to consider on the right side.
    pub right_columns: Option<Vec<String>>,
}

impl CompareOptions {
    /// Restricts the left side to the given columns.
    pub fn with_left_columns(mut self, columns: Vec<String>) -> Self {
        self.left_columns = Some(columns);
        self
    }

    /// Restricts the right side to the given columns.
    pub fn with_right_columns(mut self, columns: Vec<String>) -> Self {
        self.right_columns = Some(columns);
        self
    }
}

/// Overlap and join statistics for one (left column, right column) pair.
///
/// Counts and percentages are all relative to the left table: a record says
/// how well the right column serves as a join target for the left column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchCandidate {
    /// Column name from the left table.
    pub left_column: String,
    /// Column name from the right table.
    pub right_column: String,
    /// Left rows whose value appears anywhere in the right column.
    pub matched_count: usize,
    /// `matched_count` over the left row count, in [0.0, 1.0].
    pub matched_percent: f64,
    /// Row count of the inner equi-join of the two single-column
    /// projections, with full fan-out replication.
    pub joined_rows: usize,
    /// Average joined rows per matched left row. Absent when nothing
    /// matched, since the ratio is undefined for zero matches.
    pub fan_out: Option<f64>,
    /// Left rows with no match anywhere in the right column.
    pub unmatched_count: usize,
    /// `unmatched_count` over the left row count, in [0.0, 1.0].
    pub unmatched_percent: f64,
}

/// Non-fatal notice that a user-supplied column selection lost entries.
///
/// Emitted when supplied names are missing from the table or collapse as
/// duplicates. The comparison continues with the surviving names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionWarning {
    /// Side whose selection was filtered.
    pub side: Side,
    /// Entries that did not survive filtering, sorted and de-duplicated.
    pub dropped: Vec<String>,
}

impl fmt::Display for SelectionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} column selection dropped {} entr{} (missing or duplicated): {}",
            self.side,
            self.dropped.len(),
            if self.dropped.len() == 1 { "y" } else { "ies" },
            self.dropped.join(", ")
        )
    }
}

/// Result of one comparison: ranked candidates plus selection diagnostics.
#[derive(Debug, Clone)]
pub struct MatchOutcome {
    /// One record per candidate pair, best first (highest overlap
    /// percentage, then lowest fan-out).
    pub candidates: Vec<MatchCandidate>,
    /// Non-fatal selection diagnostics, left side first.
    pub warnings: Vec<SelectionWarning>,
}

impl MatchOutcome {
    /// Projects the ranked records into the fixed eight-column frame.
    pub fn to_frame(&self) -> Result<DataFrame> {
        frame::candidates_frame(&self.candidates)
    }
}
