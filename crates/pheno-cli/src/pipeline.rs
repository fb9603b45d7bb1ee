//! One `convert` run: ontology, input table, conversion, outputs.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info, info_span};

use pheno_ingest::read_input_table;
use pheno_model::{ConversionSummary, InvalidCodeIncident};
use pheno_ontology::load_codes;
use pheno_output::{
    clean_output_path, report_output_path, write_clean_csv, write_incident_report,
};
use pheno_transform::run_conversion;

use crate::config::ConvertSettings;
use crate::logging::redact_value;

/// Result of a `convert` run, printed as a table or as JSON.
#[derive(Debug, Clone, Serialize)]
pub struct ConvertOutcome {
    pub input: PathBuf,
    pub ontology: PathBuf,
    /// Number of codes in the validation set.
    pub vocabulary_size: usize,
    pub header_row: usize,
    pub date_order: &'static str,
    pub summary: ConversionSummary,
    pub incidents: Vec<InvalidCodeIncident>,
    /// `None` on a dry run.
    pub clean_csv: Option<PathBuf>,
    /// `None` on a dry run or when there were no incidents.
    pub report: Option<PathBuf>,
    pub dry_run: bool,
}

impl ConvertOutcome {
    pub fn has_incidents(&self) -> bool {
        !self.incidents.is_empty()
    }
}

/// Run the whole conversion described by `settings`.
pub fn convert_file(settings: &ConvertSettings) -> Result<ConvertOutcome> {
    let span = info_span!("convert", input = %settings.input.display());
    let _guard = span.enter();
    let start = Instant::now();

    let valid = load_codes(&settings.ontology)
        .with_context(|| format!("load ontology {}", settings.ontology.display()))?;
    let df = read_input_table(&settings.input, settings.header_row)
        .with_context(|| format!("read input {}", settings.input.display()))?;
    let conversion = run_conversion(&df, &settings.options, &valid).context("convert table")?;

    for incident in &conversion.incidents {
        debug!(
            row = incident.row_index + settings.header_row,
            sample = redact_value(&incident.sample_id),
            invalid = ?incident.invalid_codes,
            "row reported"
        );
    }

    let (clean_csv, report) = if settings.dry_run {
        info!("dry run, no files written");
        (None, None)
    } else {
        let output_dir = settings.output_dir.as_deref();
        let clean_path = clean_output_path(&settings.input, output_dir);
        write_clean_csv(&conversion.table, &clean_path, settings.data_marker)
            .context("write clean table")?;
        let report = write_incident_report(
            &conversion.incidents,
            settings.header_row,
            &report_output_path(&settings.input, output_dir),
        )
        .context("write invalid code report")?;
        (Some(clean_path), report)
    };

    info!(
        rows = conversion.summary.rows,
        incidents = conversion.incidents.len(),
        duration_ms = start.elapsed().as_millis(),
        "convert finished"
    );

    Ok(ConvertOutcome {
        input: settings.input.clone(),
        ontology: settings.ontology.clone(),
        vocabulary_size: valid.len(),
        header_row: settings.header_row,
        date_order: settings.options.date_order.label(),
        summary: conversion.summary,
        incidents: conversion.incidents,
        clean_csv,
        report,
        dry_run: settings.dry_run,
    })
}
