//! CLI argument definitions for the phenotype converter.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use pheno_cli::config::ConvertOverrides;

#[derive(Parser)]
#[command(
    name = "pheno-convert",
    version,
    about = "Clean clinician phenotype tables for LIMS import",
    long_about = "Clean clinician phenotype tables for LIMS import.\n\n\
                  Normalizes date columns to YYYY-MM-DD, keeps only HPO codes found in\n\
                  the given ontology, and reports every row where codes were dropped."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// TOML file with defaults for `convert` (command-line flags win).
    #[arg(long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
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

    /// Allow sample ids and cell values in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert a clinician table and write the cleaned CSV and error report.
    Convert(ConvertArgs),

    /// List the columns of a table and mark the preselected date columns.
    Columns(ColumnsArgs),

    /// Load an ontology and report how many codes it defines.
    Ontology(OntologyArgs),
}

#[derive(Args)]
pub struct ConvertArgs {
    /// Clinician table (CSV, semicolon or tab separated).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Ontology file: an OBO release or a delimited code list.
    #[arg(long = "ontology", value_name = "PATH")]
    pub ontology: Option<PathBuf>,

    /// 1-based line holding the column names (default: 2).
    #[arg(long = "header-row", value_name = "N")]
    pub header_row: Option<usize>,

    /// Column holding free-text phenotype codes (default: "Phenotypes Id").
    #[arg(long = "phenotype-column", value_name = "NAME")]
    pub phenotype_column: Option<String>,

    /// Column used to identify samples in the report (default: "BioSample Name").
    #[arg(long = "sample-id-column", value_name = "NAME")]
    pub sample_id_column: Option<String>,

    /// Additional date column to normalize (repeatable).
    #[arg(long = "date-column", value_name = "NAME")]
    pub date_columns: Vec<String>,

    /// Do not include the preselected date columns.
    #[arg(long = "no-default-date-columns")]
    pub no_default_date_columns: bool,

    /// Read ambiguous numeric dates such as 01-02-2001 as day first.
    #[arg(long = "day-first")]
    pub day_first: bool,

    /// Output directory (default: next to the input file).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Omit the leading [DATA] line from the cleaned CSV.
    #[arg(long = "no-data-marker")]
    pub no_data_marker: bool,

    /// Convert and report without writing any file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Print the run summary as JSON instead of tables.
    #[arg(long = "summary-json")]
    pub summary_json: bool,
}

impl ConvertArgs {
    pub fn overrides(&self) -> ConvertOverrides {
        ConvertOverrides {
            input: self.input.clone(),
            ontology: self.ontology.clone(),
            header_row: self.header_row,
            phenotype_column: self.phenotype_column.clone(),
            sample_id_column: self.sample_id_column.clone(),
            date_columns: self.date_columns.clone(),
            no_default_date_columns: self.no_default_date_columns,
            day_first: self.day_first,
            output_dir: self.output_dir.clone(),
            no_data_marker: self.no_data_marker,
            dry_run: self.dry_run,
        }
    }
}

#[derive(Args)]
pub struct ColumnsArgs {
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// 1-based line holding the column names (default: 2).
    #[arg(long = "header-row", value_name = "N")]
    pub header_row: Option<usize>,
}

#[derive(Args)]
pub struct OntologyArgs {
    #[arg(value_name = "PATH")]
    pub path: PathBuf,
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
