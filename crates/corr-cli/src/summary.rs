use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use corr_model::{ColumnKind, Direction, Strength};
use corr_report::{format_percent, format_r};

use crate::commands::{AnalyzeOutcome, ColumnsOutcome};

/// Run overview and result table.
pub fn analyze_summary(outcome: &AnalyzeOutcome) -> String {
    let run = &outcome.run;
    let mut lines = vec![
        format!("Target: {}", run.target),
        format!("Dataset: {} rows x {} columns", run.shape.rows, run.shape.columns),
    ];
    if let Some(path) = &outcome.report_path {
        lines.push(format!("Report: {}", path.display()));
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Candidate"),
        header_cell("r"),
        header_cell("R²"),
        header_cell("n"),
        header_cell("Strength"),
        header_cell("Direction"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 1..=3 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for result in &run.results {
        table.add_row(vec![
            Cell::new(&result.candidate)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            result.r.map_or_else(|| dim_cell("-"), |r| Cell::new(format_r(r))),
            result
                .r_squared
                .map_or_else(|| dim_cell("-"), |v| Cell::new(format_percent(v))),
            Cell::new(result.n),
            strength_cell(result.strength),
            direction_cell(result.direction),
        ]);
    }
    lines.push(table.to_string());

    if !run.excluded.is_empty() {
        let mut excluded = Table::new();
        excluded.set_header(vec![header_cell("Excluded"), header_cell("Reason")]);
        apply_summary_table_style(&mut excluded);
        for exclusion in &run.excluded {
            excluded.add_row(vec![
                Cell::new(&exclusion.name),
                dim_cell(exclusion.reason.as_str()),
            ]);
        }
        lines.push(excluded.to_string());
    }
    lines.join("\n")
}

/// Column listing with kind, distinct count and eligibility.
pub fn columns_summary(outcome: &ColumnsOutcome) -> String {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Kind"),
        header_cell("Distinct"),
        header_cell("Missing"),
        header_cell("Status"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    let classification = &outcome.classification;
    for (descriptor, missing) in classification.descriptors.iter().zip(&outcome.missing) {
        let kind = match descriptor.kind {
            ColumnKind::Numeric => Cell::new("numeric"),
            ColumnKind::NonNumeric => dim_cell("non-numeric"),
        };
        let status = match classification.exclusion_for(&descriptor.name) {
            Some(reason) => dim_cell(reason.as_str()),
            None => Cell::new("eligible").fg(Color::Green),
        };
        table.add_row(vec![
            Cell::new(&descriptor.name),
            kind,
            Cell::new(descriptor.distinct_count),
            count_cell(*missing),
            status,
        ]);
    }
    format!("Target: {}\n{table}", outcome.target)
}

fn strength_cell(strength: Strength) -> Cell {
    let cell = Cell::new(strength.as_str());
    match strength {
        Strength::Strong => cell.fg(Color::Green).add_attribute(Attribute::Bold),
        Strength::Moderate => cell.fg(Color::Yellow),
        Strength::Weak => cell,
        Strength::Indeterminate => cell.fg(Color::DarkGrey),
    }
}

fn direction_cell(direction: Direction) -> Cell {
    match direction {
        Direction::None => dim_cell(direction.as_str()),
        Direction::Positive | Direction::Negative => Cell::new(direction.as_str()),
    }
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).fg(Color::Yellow)
    } else {
        dim_cell(count)
    }
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
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
