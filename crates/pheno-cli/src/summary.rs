use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use pheno_cli::pipeline::ConvertOutcome;

pub fn print_summary(outcome: &ConvertOutcome) {
    println!("Input: {}", outcome.input.display());
    println!(
        "Ontology: {} ({} codes)",
        outcome.ontology.display(),
        outcome.vocabulary_size
    );
    match &outcome.clean_csv {
        Some(path) => println!("Clean CSV: {}", path.display()),
        None => println!("Clean CSV: not written (dry run)"),
    }
    if let Some(path) = &outcome.report {
        println!("Error report: {}", path.display());
    }

    let summary = &outcome.summary;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Step"), header_cell("Count")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Rows"), Cell::new(summary.rows)]);
    table.add_row(vec![
        Cell::new(format!("Date columns ({})", outcome.date_order)),
        Cell::new(summary.dates.columns),
    ]);
    table.add_row(vec![
        Cell::new("Dates converted"),
        Cell::new(summary.dates.converted),
    ]);
    table.add_row(vec![Cell::new("Dates empty"), dim_cell(summary.dates.empty)]);
    table.add_row(vec![
        Cell::new("Dates unreadable"),
        count_cell(summary.dates.failed, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Phenotype codes kept"),
        if summary.phenotype_column_found {
            Cell::new(summary.kept_codes)
        } else {
            dim_cell("column missing")
        },
    ]);
    table.add_row(vec![
        Cell::new("Rows with invalid codes")
            .add_attribute(Attribute::Bold),
        count_cell(summary.incident_rows, Color::Red).add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new("Invalid codes dropped"),
        count_cell(summary.invalid_codes, Color::Red),
    ]);
    println!("{table}");
    print_incident_table(outcome);
}

fn print_incident_table(outcome: &ConvertOutcome) {
    if outcome.incidents.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Row"),
        header_cell("Sample"),
        header_cell("Invalid codes"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for incident in &outcome.incidents {
        table.add_row(vec![
            Cell::new(incident.row_index + outcome.header_row),
            Cell::new(&incident.sample_id),
            Cell::new(incident.invalid_codes.join(", ")).fg(Color::Red),
        ]);
    }
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

pub fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count == 0 {
        dim_cell(count)
    } else {
        Cell::new(count).fg(color)
    }
}

pub fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
