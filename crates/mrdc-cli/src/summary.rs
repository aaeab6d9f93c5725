use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use mrdc_cli::types::{JobSummary, RunResult};

pub fn print_summary(result: &RunResult) {
    println!("Output: {}", result.output_dir.display());
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Entity"),
        header_cell("Destination"),
        header_cell("Rows In"),
        header_cell("Rows Out"),
        header_cell("Null"),
        header_cell("Outlier"),
        header_cell("Invalid"),
        header_cell("Nulled Fields"),
        header_cell("Corrections"),
        header_cell("Written"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 2..=8 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    align_column(&mut table, 9, CellAlignment::Center);

    let mut total_in = 0usize;
    let mut total_out = 0usize;
    let mut total_dropped = 0usize;
    for job in &result.jobs {
        if let Some(report) = &job.report {
            total_in += report.rows_in;
            total_out += report.rows_out;
            total_dropped += report.dropped();
        }
        table.add_row(job_row(job));
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format!("{total_dropped} dropped"))
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(total_in).add_attribute(Attribute::Bold),
        Cell::new(total_out).add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
        dim_cell("-"),
        dim_cell("-"),
        dim_cell("-"),
        dim_cell("-"),
    ]);
    println!("{table}");

    let errors: Vec<&String> = result.jobs.iter().filter_map(|job| job.error.as_ref()).collect();
    if !errors.is_empty() {
        eprintln!("Errors:");
        for error in errors {
            eprintln!("- {error}");
        }
    }
}

fn job_row(job: &JobSummary) -> Vec<Cell> {
    let entity = Cell::new(job.entity.as_str()).add_attribute(Attribute::Bold);
    let destination = Cell::new(&job.destination);
    let written = written_cell(job);
    match &job.report {
        Some(report) => vec![
            entity,
            destination,
            Cell::new(report.rows_in),
            Cell::new(report.rows_out),
            count_cell(report.null_dropped, Color::Yellow),
            count_cell(report.outlier_dropped, Color::Yellow),
            count_cell(report.invalid_dropped, Color::Yellow),
            count_cell(report.nulled_fields(), Color::Yellow),
            count_cell(report.corrections_applied, Color::Blue),
            written,
        ],
        None => {
            let mut row = vec![entity, destination];
            row.extend((0..7).map(|_| dim_cell("-")));
            row.push(written);
            row
        }
    }
}

fn written_cell(job: &JobSummary) -> Cell {
    match (&job.output, &job.error) {
        (Some(_), _) => Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        (None, Some(_)) => Cell::new("✗")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        (None, None) => dim_cell("-"),
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value.to_string()).fg(Color::DarkGrey)
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
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
