//! Convert settings: TOML config file merged with command-line overrides.
//!
//! Precedence is command line, then config file, then built-in defaults.
//!
//! ```toml
//! ontology = "hp.obo"
//! header_row = 2
//! phenotype_column = "Phenotypes Id"
//! sample_id_column = "BioSample Name"
//! date_columns = ["Date Of Birth", "Due Date"]
//! day_first = false
//! output_dir = "cleaned"
//! data_marker = true
//! ```
//!
//! Relative paths in the file are resolved against the file's directory.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use pheno_ingest::DEFAULT_HEADER_ROW;
use pheno_model::{ConversionOptions, DEFAULT_DATE_COLUMNS, DateOrder};

/// Contents of a `--config` file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConvertConfig {
    pub ontology: Option<PathBuf>,
    pub header_row: Option<usize>,
    pub phenotype_column: Option<String>,
    pub sample_id_column: Option<String>,
    /// Replaces the preselected date columns.
    pub date_columns: Option<Vec<String>>,
    pub day_first: Option<bool>,
    pub output_dir: Option<PathBuf>,
    pub data_marker: Option<bool>,
}

impl ConvertConfig {
    /// Load a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let mut config: Self = toml::from_str(&contents)
            .with_context(|| format!("parse config {}", path.display()))?;
        if let Some(base) = path.parent() {
            config.ontology = config.ontology.map(|p| resolve_relative(base, p));
            config.output_dir = config.output_dir.map(|p| resolve_relative(base, p));
        }
        Ok(config)
    }

    /// Load `path` if given, otherwise return an empty config.
    pub fn load_optional(path: Option<&Path>) -> Result<Self> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }

    /// Date columns before command-line additions.
    pub fn base_date_columns(&self) -> Vec<String> {
        match &self.date_columns {
            Some(columns) => columns.clone(),
            None => DEFAULT_DATE_COLUMNS.iter().map(ToString::to_string).collect(),
        }
    }

    pub fn header_row(&self) -> usize {
        self.header_row.unwrap_or(DEFAULT_HEADER_ROW)
    }
}

fn resolve_relative(base: &Path, path: PathBuf) -> PathBuf {
    if path.is_relative() && !base.as_os_str().is_empty() {
        base.join(path)
    } else {
        path
    }
}

/// Values given on the command line for one `convert` run.
#[derive(Debug, Clone, Default)]
pub struct ConvertOverrides {
    pub input: PathBuf,
    pub ontology: Option<PathBuf>,
    pub header_row: Option<usize>,
    pub phenotype_column: Option<String>,
    pub sample_id_column: Option<String>,
    /// Added to the base date columns.
    pub date_columns: Vec<String>,
    /// Start from no date columns instead of the configured or preselected ones.
    pub no_default_date_columns: bool,
    pub day_first: bool,
    pub output_dir: Option<PathBuf>,
    pub no_data_marker: bool,
    pub dry_run: bool,
}

/// Fully resolved settings for one `convert` run.
#[derive(Debug, Clone)]
pub struct ConvertSettings {
    pub input: PathBuf,
    pub ontology: PathBuf,
    /// 1-based header row; also the offset for report row numbers.
    pub header_row: usize,
    pub options: ConversionOptions,
    /// `None` writes next to the input file.
    pub output_dir: Option<PathBuf>,
    pub data_marker: bool,
    pub dry_run: bool,
}

impl ConvertSettings {
    /// Merge command-line values over the config file and defaults.
    pub fn resolve(overrides: &ConvertOverrides, config: &ConvertConfig) -> Result<Self> {
        let Some(ontology) = overrides.ontology.clone().or_else(|| config.ontology.clone())
        else {
            bail!("no ontology given: pass --ontology or set `ontology` in the config file");
        };
        let header_row = overrides.header_row.unwrap_or_else(|| config.header_row());
        if header_row == 0 {
            bail!("header row is 1-based, got 0");
        }

        let mut date_columns = if overrides.no_default_date_columns {
            Vec::new()
        } else {
            config.base_date_columns()
        };
        for column in &overrides.date_columns {
            let column = column.trim();
            if !column.is_empty() && !date_columns.iter().any(|c| c == column) {
                date_columns.push(column.to_string());
            }
        }

        let default_options = ConversionOptions::default();
        let phenotype_column = overrides
            .phenotype_column
            .clone()
            .or_else(|| config.phenotype_column.clone())
            .unwrap_or(default_options.phenotype_column);
        if phenotype_column.trim().is_empty() {
            bail!("phenotype column name cannot be empty");
        }
        let sample_id_column = overrides
            .sample_id_column
            .clone()
            .or_else(|| config.sample_id_column.clone())
            .unwrap_or(default_options.sample_id_column);
        let date_order = if overrides.day_first || config.day_first.unwrap_or(false) {
            DateOrder::DayFirst
        } else {
            DateOrder::MonthFirst
        };

        Ok(Self {
            input: overrides.input.clone(),
            ontology,
            header_row,
            options: ConversionOptions::new(phenotype_column.trim())
                .with_sample_id_column(sample_id_column)
                .with_date_columns(date_columns)
                .with_date_order(date_order),
            output_dir: overrides
                .output_dir
                .clone()
                .or_else(|| config.output_dir.clone()),
            data_marker: !overrides.no_data_marker && config.data_marker.unwrap_or(true),
            dry_run: overrides.dry_run,
        })
    }
}
