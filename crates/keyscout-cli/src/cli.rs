//! CLI argument definitions for keyscout.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "keyscout",
    version,
    about = "Keyscout - Rank candidate join keys between two CSV tables",
    long_about = "Score every column pair between two CSV tables by value overlap\n\
                  and inner-join statistics to surface likely join keys.\n\
                  Prints a ranked table and can export the results to CSV or JSON."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compare two CSV tables and rank column pairs as join-key candidates.
    Compare(CompareArgs),

    /// List the column names of a CSV file.
    Columns(ColumnsArgs),
}

#[derive(Parser)]
pub struct CompareArgs {
    /// Path to the left CSV table.
    #[arg(value_name = "LEFT")]
    pub left: PathBuf,

    /// Path to the right CSV table.
    #[arg(value_name = "RIGHT")]
    pub right: PathBuf,

    /// Left-table columns to score, comma separated (default: all).
    #[arg(long = "left-columns", value_name = "COLS", value_delimiter = ',')]
    pub left_columns: Option<Vec<String>>,

    /// Right-table columns to score, comma separated (default: all).
    #[arg(long = "right-columns", value_name = "COLS", value_delimiter = ',')]
    pub right_columns: Option<Vec<String>>,

    /// Field separator used by both CSV files.
    #[arg(long = "delimiter", value_name = "CHAR", default_value = ",")]
    pub delimiter: char,

    /// Treat the first row as data instead of a header.
    #[arg(long = "no-header")]
    pub no_header: bool,

    /// Limit the printed table to the top N candidate pairs.
    #[arg(long = "top", value_name = "N")]
    pub top: Option<usize>,

    /// Write the full ranked candidate table to a CSV file.
    #[arg(long = "output-csv", value_name = "PATH")]
    pub output_csv: Option<PathBuf>,

    /// Write a JSON report with source fingerprints and warnings.
    #[arg(long = "output-json", value_name = "PATH")]
    pub output_json: Option<PathBuf>,
}

#[derive(Parser)]
pub struct ColumnsArgs {
    /// Path to the CSV file to inspect.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Field separator used by the CSV file.
    #[arg(long = "delimiter", value_name = "CHAR", default_value = ",")]
    pub delimiter: char,

    /// Treat the first row as data instead of a header.
    #[arg(long = "no-header")]
    pub no_header: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
