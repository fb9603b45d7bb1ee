#![allow(missing_docs)]

use std::io::Write;

use tempfile::NamedTempFile;

use pheno_common::column_strings;
use pheno_ingest::{DEFAULT_HEADER_ROW, IngestError, list_columns, read_input_table};

fn create_temp_csv(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file
}

#[test]
fn test_title_row_above_header_is_skipped() {
    let file = create_temp_csv(
        "Patient export,,\n BioSample Name ,Date Of Birth,Phenotypes Id\nS001,5/19/1991,HP:0001250\nS002,,\n",
    );
    let df = read_input_table(file.path(), DEFAULT_HEADER_ROW).unwrap();

    assert_eq!(
        list_columns(&df),
        vec!["BioSample Name", "Date Of Birth", "Phenotypes Id"]
    );
    assert_eq!(df.height(), 2);
    assert_eq!(column_strings(&df, "Phenotypes Id").unwrap(), vec!["HP:0001250", ""]);
}

#[test]
fn test_all_columns_read_as_text() {
    let file = create_temp_csv("Sample;Age;Code\nS001;007;HP:0000001\n");
    let df = read_input_table(file.path(), 1).unwrap();

    assert_eq!(column_strings(&df, "Age").unwrap(), vec!["007"]);
}

#[test]
fn test_tab_separated_export() {
    let file = create_temp_csv("Sample\tCodes\nS001\tHP:0000001, HP:0000118\n");
    let df = read_input_table(file.path(), 1).unwrap();

    assert_eq!(list_columns(&df), vec!["Sample", "Codes"]);
    assert_eq!(
        column_strings(&df, "Codes").unwrap(),
        vec!["HP:0000001, HP:0000118"]
    );
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = read_input_table(&dir.path().join("absent.csv"), 1);
    assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
}
