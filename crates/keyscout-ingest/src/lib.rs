//! CSV ingestion for join-key scouting.
//!
//! This crate turns CSV files into Polars DataFrames ready for column-pair
//! comparison, and records where each frame came from.
//!
//! # Features
//!
//! - **CSV Loading**: Read CSV files with configurable separator, header
//!   handling, schema-inference depth, and an optional row cap
//! - **Header Peeking**: List a file's column names without materializing
//!   data rows
//! - **Provenance**: Capture path, byte size, SHA-256 digest, and frame
//!   shape per input for logs and reports
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use keyscout_ingest::{ReadOptions, read_csv_table};
//!
//! let table = read_csv_table(Path::new("orders.csv"), &ReadOptions::default())?;
//! println!("{} rows from {}", table.frame.height(), table.source.path);
//! ```

mod error;
mod reader;
mod source;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use reader::{
    CsvTable, DEFAULT_INFER_SCHEMA_LENGTH, ReadOptions, read_csv_header, read_csv_table,
};

// === Provenance ===
pub use source::SourceInfo;
