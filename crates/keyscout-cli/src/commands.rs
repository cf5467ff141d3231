//! Command implementations for the keyscout CLI.

use std::time::Instant;

use anyhow::{Result, anyhow};
use comfy_table::Table;
use tracing::{info, info_span};

use keyscout_ingest::{CsvTable, ReadOptions, read_csv_header, read_csv_table};
use keyscout_match::{CompareOptions, compare_frames};
use keyscout_report::{ReportPayload, write_candidates_csv, write_report_json};

use crate::cli::{ColumnsArgs, CompareArgs};
use crate::summary::apply_table_style;
use crate::types::CompareResult;

pub fn run_compare(args: &CompareArgs) -> Result<CompareResult> {
    let read_options = read_options(args.delimiter, args.no_header)?;

    // Stage 1: Load both tables
    let ingest_span = info_span!(
        "ingest",
        left = %args.left.display(),
        right = %args.right.display()
    );
    let ingest_start = Instant::now();
    let (left, right) = ingest_span.in_scope(|| -> Result<(CsvTable, CsvTable)> {
        let left = read_csv_table(&args.left, &read_options)?;
        let right = read_csv_table(&args.right, &read_options)?;
        Ok((left, right))
    })?;
    info!(
        left_rows = left.source.rows,
        right_rows = right.source.rows,
        duration_ms = ingest_start.elapsed().as_millis(),
        "ingest complete"
    );

    // Stage 2: Score every candidate column pair
    let compare_options = compare_options(args);
    let compare_span = info_span!("compare");
    let outcome =
        compare_span.in_scope(|| compare_frames(&left.frame, &right.frame, &compare_options))?;

    // Stage 3: Export reports
    if let Some(path) = &args.output_csv {
        write_candidates_csv(path, &outcome)?;
    }
    if let Some(path) = &args.output_json {
        let payload = ReportPayload::new(left.source.clone(), right.source.clone(), &outcome);
        write_report_json(path, &payload)?;
    }

    Ok(CompareResult {
        left: left.source,
        right: right.source,
        outcome,
        top: args.top,
        csv_path: args.output_csv.clone(),
        json_path: args.output_json.clone(),
    })
}

pub fn run_columns(args: &ColumnsArgs) -> Result<()> {
    let read_options = read_options(args.delimiter, args.no_header)?;
    let columns = read_csv_header(&args.file, &read_options)?;
    let mut table = Table::new();
    table.set_header(vec!["#", "Column"]);
    apply_table_style(&mut table);
    for (index, name) in columns.iter().enumerate() {
        table.add_row(vec![(index + 1).to_string(), name.clone()]);
    }
    println!("{table}");
    Ok(())
}

fn compare_options(args: &CompareArgs) -> CompareOptions {
    let mut options = CompareOptions::default();
    if let Some(columns) = &args.left_columns {
        options = options.with_left_columns(columns.clone());
    }
    if let Some(columns) = &args.right_columns {
        options = options.with_right_columns(columns.clone());
    }
    options
}

fn read_options(delimiter: char, no_header: bool) -> Result<ReadOptions> {
    if !delimiter.is_ascii() {
        return Err(anyhow!(
            "delimiter must be a single ASCII character, got {delimiter:?}"
        ));
    }
    Ok(ReadOptions::default()
        .with_separator(delimiter as u8)
        .with_has_header(!no_header))
}
