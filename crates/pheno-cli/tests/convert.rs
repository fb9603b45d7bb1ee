//! End-to-end tests for a `convert` run on files.
#![allow(missing_docs)]

use std::fs;
use std::path::Path;

use insta::assert_snapshot;
use tempfile::TempDir;

use pheno_cli::config::{ConvertConfig, ConvertOverrides, ConvertSettings};
use pheno_cli::pipeline::convert_file;

const ONTOLOGY: &str = "format-version: 1.2\n\
ontology: hp\n\
\n\
[Term]\n\
id: HP:0000001\n\
name: All\n\
\n\
[Term]\n\
id: HP:0001250\n\
name: Seizure\n";

const INPUT: &str = "Patient export,,,\n\
BioSample Name,Date Of Birth,Phenotypes Id,Notes\n\
S001,5/19/1991,HP:0001250 and HP:0012345,first\n\
S002,2020-01-03,HP:0000001; HP:A99,\n\
S003,sometime,,third\n";

fn write_fixtures(dir: &Path) -> ConvertOverrides {
    fs::write(dir.join("hp.obo"), ONTOLOGY).unwrap();
    fs::write(dir.join("patients.csv"), INPUT).unwrap();
    ConvertOverrides {
        input: dir.join("patients.csv"),
        ontology: Some(dir.join("hp.obo")),
        ..ConvertOverrides::default()
    }
}

#[test]
fn convert_writes_clean_csv_and_report() {
    let dir = TempDir::new().unwrap();
    let overrides = write_fixtures(dir.path());
    let settings = ConvertSettings::resolve(&overrides, &ConvertConfig::default()).unwrap();

    let outcome = convert_file(&settings).unwrap();

    assert_eq!(outcome.vocabulary_size, 2);
    assert_eq!(outcome.summary.rows, 3);
    assert_eq!(outcome.summary.dates.failed, 1);
    assert!(outcome.has_incidents());

    let clean = fs::read_to_string(dir.path().join("patients_CLEAN.csv")).unwrap();
    assert_snapshot!(clean.trim_end(), @r"
    [DATA],,,
    BioSample Name,Date Of Birth,Phenotypes Id,Notes
    S001,1991-05-19,HP:0001250,first
    S002,2020-01-03,HP:0000001,
    S003,WRONG_DATE_CONVERSION,,third
    ");

    let report_path = dir.path().join("patients_HPO_ERROR_REPORT.txt");
    assert_eq!(outcome.report.as_deref(), Some(report_path.as_path()));
    let report = fs::read_to_string(report_path).unwrap();
    assert_snapshot!(report.trim_end(), @r"
    Invalid or missing HPO codes:

    Row 2 | Sample: S001 | Invalid: HP:0012345
    ");
}

#[test]
fn dry_run_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let mut overrides = write_fixtures(dir.path());
    overrides.dry_run = true;
    let settings = ConvertSettings::resolve(&overrides, &ConvertConfig::default()).unwrap();

    let outcome = convert_file(&settings).unwrap();

    assert_eq!(outcome.incidents.len(), 1);
    assert_eq!(outcome.clean_csv, None);
    assert_eq!(outcome.report, None);
    assert!(!dir.path().join("patients_CLEAN.csv").exists());
    assert!(!dir.path().join("patients_HPO_ERROR_REPORT.txt").exists());
}

#[test]
fn clean_run_writes_no_report() {
    let dir = TempDir::new().unwrap();
    let mut overrides = write_fixtures(dir.path());
    fs::write(
        dir.path().join("patients.csv"),
        "BioSample Name,Phenotypes Id\nS001,HP:0000001\n",
    )
    .unwrap();
    overrides.header_row = Some(1);
    overrides.no_data_marker = true;
    overrides.output_dir = Some(dir.path().join("out"));
    let settings = ConvertSettings::resolve(&overrides, &ConvertConfig::default()).unwrap();

    let outcome = convert_file(&settings).unwrap();

    assert!(!outcome.has_incidents());
    assert_eq!(outcome.report, None);
    let clean = fs::read_to_string(dir.path().join("out").join("patients_CLEAN.csv")).unwrap();
    assert_eq!(clean, "BioSample Name,Phenotypes Id\nS001,HP:0000001\n");
}

#[test]
fn summary_serializes_to_json() {
    let dir = TempDir::new().unwrap();
    let mut overrides = write_fixtures(dir.path());
    overrides.dry_run = true;
    let settings = ConvertSettings::resolve(&overrides, &ConvertConfig::default()).unwrap();

    let outcome = convert_file(&settings).unwrap();
    let json = serde_json::to_value(&outcome).unwrap();

    assert_eq!(json["summary"]["rows"], 3);
    assert_eq!(json["date_order"], "month-first");
    assert_eq!(json["incidents"][0]["sample_id"], "S001");
}

#[test]
fn missing_ontology_file_fails_with_context() {
    let dir = TempDir::new().unwrap();
    let mut overrides = write_fixtures(dir.path());
    overrides.ontology = Some(dir.path().join("missing.obo"));
    let settings = ConvertSettings::resolve(&overrides, &ConvertConfig::default()).unwrap();

    let err = convert_file(&settings).unwrap_err();

    assert!(format!("{err:#}").contains("load ontology"));
}
