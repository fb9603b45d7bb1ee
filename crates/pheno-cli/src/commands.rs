use std::path::Path;

use anyhow::{Context, Result};
use comfy_table::{Cell, CellAlignment, Color, Table};
use tracing::info_span;

use pheno_cli::config::{ConvertConfig, ConvertSettings};
use pheno_cli::pipeline::{ConvertOutcome, convert_file};
use pheno_ingest::{list_columns, read_input_table};
use pheno_ontology::load_codes;

use crate::cli::{ColumnsArgs, ConvertArgs, OntologyArgs};
use crate::summary::{align_column, apply_table_style, dim_cell, header_cell};

pub fn run_convert(args: &ConvertArgs, config_path: Option<&Path>) -> Result<ConvertOutcome> {
    let config = ConvertConfig::load_optional(config_path)?;
    let settings = ConvertSettings::resolve(&args.overrides(), &config)?;
    convert_file(&settings)
}

pub fn run_columns(args: &ColumnsArgs, config_path: Option<&Path>) -> Result<()> {
    let config = ConvertConfig::load_optional(config_path)?;
    let header_row = args.header_row.unwrap_or_else(|| config.header_row());
    let span = info_span!("columns", input = %args.input.display());
    let _guard = span.enter();

    let df = read_input_table(&args.input, header_row)
        .with_context(|| format!("read input {}", args.input.display()))?;
    let date_columns = config.base_date_columns();

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Column"),
        header_cell("Date column"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Center);
    for (idx, name) in list_columns(&df).into_iter().enumerate() {
        let is_date = date_columns.contains(&name);
        table.add_row(vec![
            Cell::new(idx + 1),
            Cell::new(&name),
            if is_date {
                Cell::new("yes").fg(Color::Green)
            } else {
                dim_cell("-")
            },
        ]);
    }
    println!("Input: {} (header row {header_row})", args.input.display());
    println!("{table}");
    Ok(())
}

pub fn run_ontology(args: &OntologyArgs) -> Result<()> {
    let codes = load_codes(&args.path)
        .with_context(|| format!("load ontology {}", args.path.display()))?;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Ontology"), header_cell("Codes")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![
        Cell::new(args.path.display()),
        Cell::new(codes.len()),
    ]);
    println!("{table}");
    if let (Some(first), Some(last)) = (codes.iter().next(), codes.iter().last()) {
        println!("Range: {first} .. {last}");
    }
    Ok(())
}
