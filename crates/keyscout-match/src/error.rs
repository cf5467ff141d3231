//! Error types for the comparison engine.

use thiserror::Error;

use crate::types::Side;

/// Errors that can occur while comparing two tables.
#[derive(Debug, Error)]
pub enum MatchError {
    // === Validation Errors ===
    /// An input table has no rows.
    #[error("{side} table has no rows")]
    EmptyInput { side: Side },

    /// A user-supplied column selection resolved to nothing.
    #[error("{side} column selection is empty after filtering against the table's columns")]
    EmptySelection { side: Side },

    // === DataFrame Errors ===
    /// The inner join for one candidate pair failed.
    #[error("join failed for pair {left_column} / {right_column}: {message}")]
    Join {
        left_column: String,
        right_column: String,
        message: String,
    },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for MatchError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for comparison operations.
pub type Result<T> = std::result::Result<T, MatchError>;
