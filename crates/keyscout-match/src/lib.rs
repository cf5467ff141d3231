//! Join-key candidate scoring between two tables.
//!
//! Given two Polars DataFrames with unknown or undocumented schemas, this
//! crate scores every candidate (left column, right column) pair by value
//! overlap and inner-join statistics, then ranks the pairs most likely to
//! serve as a join key between the two tables.
//!
//! # Features
//!
//! - **Canonical keys**: mixed scalar types compare through a canonical
//!   textual key, so an integer `5` and a float `5.0` agree
//! - **Selection policy**: optional per-side column selections, filtered
//!   against the actual schema with non-fatal diagnostics for dropped names
//! - **Ranked output**: candidates ordered by overlap percentage, then by
//!   join fan-out, available as records or as a projected DataFrame
//!
//! # Example
//!
//! ```ignore
//! use keyscout_match::{CompareOptions, compare_frames};
//! use polars::df;
//!
//! let left = df! { "order_id" => &[1, 1, 2, 3] }?;
//! let right = df! { "id" => &[1, 2, 3, 3] }?;
//!
//! let outcome = compare_frames(&left, &right, &CompareOptions::default())?;
//! for candidate in &outcome.candidates {
//!     println!(
//!         "{} / {}: {:.0}% matched",
//!         candidate.left_column,
//!         candidate.right_column,
//!         candidate.matched_percent * 100.0,
//!     );
//! }
//! ```

mod engine;
mod error;
mod frame;
mod key;
mod types;

// === Error Types ===
pub use error::{MatchError, Result};

// === Comparison Engine ===
pub use engine::compare_frames;

// === Canonical Keys ===
pub use key::{cell_key, column_keys, format_numeric};

// === Result Types ===
pub use frame::{
    COL_FAN_OUT, COL_JOINED_ROWS, COL_LEFT_COLUMN, COL_MATCHED_COUNT, COL_MATCHED_PERCENT,
    COL_RIGHT_COLUMN, COL_UNMATCHED_COUNT, COL_UNMATCHED_PERCENT, RESULT_COLUMNS,
    candidates_frame,
};
pub use types::{CompareOptions, MatchCandidate, MatchOutcome, SelectionWarning, Side};
