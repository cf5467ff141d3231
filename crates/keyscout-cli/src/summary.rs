use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use keyscout_match::MatchCandidate;

use crate::types::CompareResult;

pub fn print_summary(result: &CompareResult) {
    println!(
        "Left:  {} ({} rows, {} columns)",
        result.left.path, result.left.rows, result.left.columns
    );
    println!(
        "Right: {} ({} rows, {} columns)",
        result.right.path, result.right.rows, result.right.columns
    );
    if let Some(path) = &result.csv_path {
        println!("Candidates CSV: {}", path.display());
    }
    if let Some(path) = &result.json_path {
        println!("Report JSON: {}", path.display());
    }
    let candidates = &result.outcome.candidates;
    let shown = match result.top {
        Some(limit) => limit.min(candidates.len()),
        None => candidates.len(),
    };
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Left column"),
        header_cell("Right column"),
        header_cell("Match %"),
        header_cell("Fan-out"),
        header_cell("Matches"),
        header_cell("Join rows"),
        header_cell("Misses"),
        header_cell("Miss %"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Right);
    align_column(&mut table, 6, CellAlignment::Right);
    align_column(&mut table, 7, CellAlignment::Right);
    for candidate in &candidates[..shown] {
        table.add_row(candidate_row(candidate));
    }
    println!("{table}");
    if shown < candidates.len() {
        println!(
            "Showing top {shown} of {} candidate pairs.",
            candidates.len()
        );
    }
    if !result.outcome.warnings.is_empty() {
        eprintln!("Warnings:");
        for warning in &result.outcome.warnings {
            eprintln!("- {warning}");
        }
    }
}

fn candidate_row(candidate: &MatchCandidate) -> Vec<Cell> {
    vec![
        Cell::new(&candidate.left_column)
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold),
        Cell::new(&candidate.right_column),
        percent_cell(candidate.matched_percent),
        fan_out_cell(candidate.fan_out),
        Cell::new(candidate.matched_count),
        Cell::new(candidate.joined_rows),
        miss_cell(candidate.unmatched_count),
        miss_percent_cell(candidate.unmatched_percent),
    ]
}

fn percent_cell(percent: f64) -> Cell {
    let label = format!("{:.1}%", percent * 100.0);
    if percent >= 1.0 {
        Cell::new(label)
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else if percent > 0.0 {
        Cell::new(label)
    } else {
        dim_cell(label)
    }
}

fn fan_out_cell(fan_out: Option<f64>) -> Cell {
    match fan_out {
        Some(value) if value > 1.0 => Cell::new(format!("{value:.2}")).fg(Color::Yellow),
        Some(value) => Cell::new(format!("{value:.2}")),
        None => dim_cell("-"),
    }
}

fn miss_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).fg(Color::Red).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn miss_percent_cell(percent: f64) -> Cell {
    let label = format!("{:.1}%", percent * 100.0);
    if percent > 0.0 {
        Cell::new(label)
    } else {
        dim_cell(label)
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
    if table.column_count() >= 8 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Percentage(25)),
            ColumnConstraint::UpperBoundary(Width::Percentage(25)),
            ColumnConstraint::LowerBoundary(Width::Fixed(8)),
            ColumnConstraint::LowerBoundary(Width::Fixed(8)),
            ColumnConstraint::LowerBoundary(Width::Fixed(8)),
            ColumnConstraint::LowerBoundary(Width::Fixed(10)),
            ColumnConstraint::LowerBoundary(Width::Fixed(7)),
            ColumnConstraint::LowerBoundary(Width::Fixed(7)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
