//! Projection of ranked candidate records into a DataFrame.
//!
//! Records are kept as a plain ordered sequence inside the engine; the
//! columnar form is produced only here, at the output boundary.

use polars::prelude::{Column, DataFrame, NamedFrom, Series};

use crate::error::Result;
use crate::types::MatchCandidate;

/// Left column-name column of the result frame.
pub const COL_LEFT_COLUMN: &str = "left_column";
/// Right column-name column of the result frame.
pub const COL_RIGHT_COLUMN: &str = "right_column";
/// Pre-merge match percentage column of the result frame.
pub const COL_MATCHED_PERCENT: &str = "matched_percent";
/// Fan-out ratio column of the result frame.
pub const COL_FAN_OUT: &str = "fan_out";
/// Pre-merge match count column of the result frame.
pub const COL_MATCHED_COUNT: &str = "matched_count";
/// Post-merge row count column of the result frame.
pub const COL_JOINED_ROWS: &str = "joined_rows";
/// Non-match count column of the result frame.
pub const COL_UNMATCHED_COUNT: &str = "unmatched_count";
/// Non-match percentage column of the result frame.
pub const COL_UNMATCHED_PERCENT: &str = "unmatched_percent";

/// Result frame column names in presentation order.
pub const RESULT_COLUMNS: [&str; 8] = [
    COL_LEFT_COLUMN,
    COL_RIGHT_COLUMN,
    COL_MATCHED_PERCENT,
    COL_FAN_OUT,
    COL_MATCHED_COUNT,
    COL_JOINED_ROWS,
    COL_UNMATCHED_COUNT,
    COL_UNMATCHED_PERCENT,
];

/// Builds the fixed eight-column result frame from ranked records.
///
/// Row order follows the record order. The fan-out column is null for
/// records where the ratio is undefined (zero matches).
pub fn candidates_frame(candidates: &[MatchCandidate]) -> Result<DataFrame> {
    let mut left_names: Vec<String> = Vec::with_capacity(candidates.len());
    let mut right_names: Vec<String> = Vec::with_capacity(candidates.len());
    let mut matched_percents: Vec<f64> = Vec::with_capacity(candidates.len());
    let mut fan_outs: Vec<Option<f64>> = Vec::with_capacity(candidates.len());
    let mut matched_counts: Vec<u64> = Vec::with_capacity(candidates.len());
    let mut joined_rows: Vec<u64> = Vec::with_capacity(candidates.len());
    let mut unmatched_counts: Vec<u64> = Vec::with_capacity(candidates.len());
    let mut unmatched_percents: Vec<f64> = Vec::with_capacity(candidates.len());

    for candidate in candidates {
        left_names.push(candidate.left_column.clone());
        right_names.push(candidate.right_column.clone());
        matched_percents.push(candidate.matched_percent);
        fan_outs.push(candidate.fan_out);
        matched_counts.push(candidate.matched_count as u64);
        joined_rows.push(candidate.joined_rows as u64);
        unmatched_counts.push(candidate.unmatched_count as u64);
        unmatched_percents.push(candidate.unmatched_percent);
    }

    let columns: Vec<Column> = vec![
        Series::new(COL_LEFT_COLUMN.into(), left_names).into(),
        Series::new(COL_RIGHT_COLUMN.into(), right_names).into(),
        Series::new(COL_MATCHED_PERCENT.into(), matched_percents).into(),
        Series::new(COL_FAN_OUT.into(), fan_outs).into(),
        Series::new(COL_MATCHED_COUNT.into(), matched_counts).into(),
        Series::new(COL_JOINED_ROWS.into(), joined_rows).into(),
        Series::new(COL_UNMATCHED_COUNT.into(), unmatched_counts).into(),
        Series::new(COL_UNMATCHED_PERCENT.into(), unmatched_percents).into(),
    ];
    Ok(DataFrame::new(columns)?)
}
