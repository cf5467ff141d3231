//! Pairwise column comparison.
//!
//! The engine runs the full Cartesian product of the resolved left and right
//! column selections. For each pair it measures how many left rows find
//! their value anywhere in the right column, then how many rows an inner
//! equi-join of the two single-column projections would produce.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::time::Instant;

use polars::prelude::{DataFrame, IntoLazy, JoinArgs, JoinType, NamedFrom, Series, col};
use tracing::{debug, info, warn};

use crate::error::{MatchError, Result};
use crate::key::column_keys;
use crate::types::{CompareOptions, MatchCandidate, MatchOutcome, SelectionWarning, Side};

/// Internal name of the single-column join projections.
const KEY_COLUMN: &str = "key";

/// Canonical keys of one right column, shared across the Cartesian product.
struct RightKeys {
    /// Distinct keys for the membership test.
    distinct: BTreeSet<String>,
    /// Single-column projection for the join, null keys preserved.
    projection: DataFrame,
}

/// Compares every candidate column pair between two tables.
///
/// For each (left column, right column) pair in the Cartesian product of the
/// resolved selections, measures:
///
/// - how many left rows hold a value that appears anywhere in the right
///   column (each duplicate left row counts on its own)
/// - how many rows an inner equi-join of the two columns produces, with
///   full fan-out replication
/// - the average fan-out per matched left row, and the non-match remainder
///
/// Candidates come back ranked best first: highest match percentage, then
/// lowest fan-out. Selections that lose entries during filtering produce
/// warnings in the outcome rather than failures; see
/// [`SelectionWarning`].
///
/// # Errors
///
/// Fails if either table has no rows, if a supplied selection resolves to
/// no usable columns, or if the underlying join fails.
pub fn compare_frames(
    left: &DataFrame,
    right: &DataFrame,
    options: &CompareOptions,
) -> Result<MatchOutcome> {
    if left.height() == 0 {
        return Err(MatchError::EmptyInput { side: Side::Left });
    }
    if right.height() == 0 {
        return Err(MatchError::EmptyInput { side: Side::Right });
    }

    let started = Instant::now();
    let mut warnings = Vec::new();
    let left_columns = resolve_selection(
        left,
        options.left_columns.as_deref(),
        Side::Left,
        &mut warnings,
    )?;
    let right_columns = resolve_selection(
        right,
        options.right_columns.as_deref(),
        Side::Right,
        &mut warnings,
    )?;

    let left_rows = left.height();

    // Right-column keys are reused across the whole Cartesian product, so
    // build them once up front.
    let mut right_cache: Vec<(String, RightKeys)> = Vec::with_capacity(right_columns.len());
    for name in &right_columns {
        let keys = column_keys(right.column(name)?)?;
        let distinct = keys.iter().flatten().cloned().collect();
        let projection = keys_frame(&keys)?;
        right_cache.push((
            name.clone(),
            RightKeys {
                distinct,
                projection,
            },
        ));
    }

    let mut candidates = Vec::with_capacity(left_columns.len() * right_columns.len());
    for left_name in &left_columns {
        let left_keys = column_keys(left.column(left_name)?)?;
        let left_projection = keys_frame(&left_keys)?;

        for (right_name, right_keys) in &right_cache {
            let matched_count = left_keys
                .iter()
                .filter(|key| {
                    key.as_deref()
                        .is_some_and(|key| right_keys.distinct.contains(key))
                })
                .count();
            let joined_rows = count_joined_rows(
                &left_projection,
                &right_keys.projection,
                left_name,
                right_name,
            )?;

            let fan_out = if matched_count == 0 {
                None
            } else {
                Some(joined_rows as f64 / matched_count as f64)
            };
            let unmatched_count = left_rows - matched_count;

            debug!(
                left_column = %left_name,
                right_column = %right_name,
                matched_count,
                joined_rows,
                "scored candidate pair"
            );

            candidates.push(MatchCandidate {
                left_column: left_name.clone(),
                right_column: right_name.clone(),
                matched_count,
                matched_percent: matched_count as f64 / left_rows as f64,
                joined_rows,
                fan_out,
                unmatched_count,
                unmatched_percent: unmatched_count as f64 / left_rows as f64,
            });
        }
    }

    sort_candidates(&mut candidates);

    info!(
        pairs = candidates.len(),
        left_columns = left_columns.len(),
        right_columns = right_columns.len(),
        duration_ms = started.elapsed().as_millis(),
        "compared column pairs"
    );

    Ok(MatchOutcome {
        candidates,
        warnings,
    })
}

/// Resolves one side's column selection against the table's actual columns.
///
/// An absent selection means every column, in table order. A present
/// selection is intersected with the actual columns and de-duplicated;
/// survivors come back sorted. Dropped entries produce a warning, an empty
/// survivor set is an error.
fn resolve_selection(
    frame: &DataFrame,
    requested: Option<&[String]>,
    side: Side,
    warnings: &mut Vec<SelectionWarning>,
) -> Result<Vec<String>> {
    let Some(requested) = requested else {
        return Ok(frame
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect());
    };

    let actual: BTreeSet<&str> = frame
        .get_column_names()
        .iter()
        .map(|name| name.as_str())
        .collect();

    let mut resolved: BTreeSet<String> = BTreeSet::new();
    let mut dropped: BTreeSet<String> = BTreeSet::new();
    for name in requested {
        let known = actual.contains(name.as_str());
        if known && resolved.insert(name.clone()) {
            continue;
        }
        dropped.insert(name.clone());
    }

    if !dropped.is_empty() {
        let warning = SelectionWarning {
            side,
            dropped: dropped.into_iter().collect(),
        };
        warn!(side = %side, dropped = ?warning.dropped, "column selection entries dropped");
        warnings.push(warning);
    }

    if resolved.is_empty() {
        return Err(MatchError::EmptySelection { side });
    }

    Ok(resolved.into_iter().collect())
}

/// Builds a single-column frame of canonical keys for joining.
fn keys_frame(keys: &[Option<String>]) -> Result<DataFrame> {
    let series = Series::new(KEY_COLUMN.into(), keys);
    Ok(DataFrame::new(vec![series.into()])?)
}

/// Counts the rows an inner equi-join of the two key projections produces.
///
/// Null keys never join, so null and NaN cells drop out on both sides.
fn count_joined_rows(
    left_projection: &DataFrame,
    right_projection: &DataFrame,
    left_column: &str,
    right_column: &str,
) -> Result<usize> {
    let joined = left_projection
        .clone()
        .lazy()
        .join(
            right_projection.clone().lazy(),
            [col(KEY_COLUMN)],
            [col(KEY_COLUMN)],
            JoinArgs::new(JoinType::Inner),
        )
        .collect()
        .map_err(|err| MatchError::Join {
            left_column: left_column.to_string(),
            right_column: right_column.to_string(),
            message: err.to_string(),
        })?;
    Ok(joined.height())
}

/// Orders candidates best first: match percentage descending, then fan-out
/// ascending with undefined fan-outs last among equals.
fn sort_candidates(candidates: &mut [MatchCandidate]) {
    candidates.sort_by(|a, b| {
        b.matched_percent
            .partial_cmp(&a.matched_percent)
            .unwrap_or(Ordering::Equal)
            .then_with(|| fan_out_order(a.fan_out, b.fan_out))
    });
}

fn fan_out_order(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
