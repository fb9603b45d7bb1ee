//! Validation set loaders for OBO and delimited sources.

use std::path::Path;
use std::time::Instant;

use csv::ReaderBuilder;
use tracing::{debug, info};

use pheno_common::sniff_delimiter;
use pheno_model::{HPO_PREFIX, ValidationSet};

use crate::error::{OntologyError, Result};
use crate::shape::{SourceShape, detect_shape};

/// Tag that opens an identifier line in OBO text.
const OBO_ID_TAG: &str = "id: ";

/// Lines sampled for delimiter detection.
const DELIMITER_SAMPLE_LINES: usize = 50;

/// Load the validation set from an ontology source.
///
/// The shape is detected from the extension and content (see
/// [`detect_shape`]). Fails with [`OntologyError::SourceUnreadable`] when the
/// file cannot be read, and with [`OntologyError::EmptyVocabulary`] when it
/// yields no code.
pub fn load_codes(path: &Path) -> Result<ValidationSet> {
    let start = Instant::now();
    let contents =
        std::fs::read_to_string(path).map_err(|e| OntologyError::unreadable(path, e))?;
    let shape = detect_shape(path, &contents);
    debug!(path = %path.display(), shape = %shape, "detected ontology source shape");

    let codes = match shape {
        SourceShape::Obo => parse_obo_codes(&contents),
        SourceShape::Delimited => parse_delimited_codes(&contents).map_err(|message| {
            OntologyError::SourceMalformed {
                path: path.to_path_buf(),
                message,
            }
        })?,
    };

    if codes.is_empty() {
        return Err(OntologyError::EmptyVocabulary {
            path: path.to_path_buf(),
        });
    }

    info!(
        path = %path.display(),
        shape = %shape,
        code_count = codes.len(),
        duration_ms = start.elapsed().as_millis(),
        "ontology loaded"
    );
    Ok(codes)
}

/// Collect the codes of every `id: ` line in OBO text.
///
/// Other lines, including `alt_id:` and `is_a:` references, are ignored, as
/// are ids that do not have the `HP:<digits>` shape.
pub fn parse_obo_codes(contents: &str) -> ValidationSet {
    let mut codes = ValidationSet::new();
    for line in contents.lines() {
        let line = line.trim_start_matches('\u{feff}');
        if let Some(rest) = line.strip_prefix(OBO_ID_TAG) {
            codes.insert(rest.trim());
        }
    }
    codes
}

/// Collect every cell that starts with `HP:` from a headerless delimited table.
///
/// The delimiter is sniffed from the leading lines. Rows may have differing
/// field counts. Returns the CSV error message on parse failure.
pub fn parse_delimited_codes(contents: &str) -> std::result::Result<ValidationSet, String> {
    let contents = contents.trim_start_matches('\u{feff}');
    let sample: Vec<&str> = contents.lines().take(DELIMITER_SAMPLE_LINES).collect();
    let delimiter = sniff_delimiter(&sample);
    debug!(delimiter = %char::from(delimiter).escape_default(), "sniffed code list delimiter");

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(contents.as_bytes());

    let mut codes = ValidationSet::new();
    for record in reader.records() {
        let record = record.map_err(|e| e.to_string())?;
        for cell in &record {
            let cell = cell.trim();
            if cell.starts_with(HPO_PREFIX) {
                codes.insert(cell);
            }
        }
    }
    Ok(codes)
}

#[cfg(test)]
mod tests {
    use super::*;

    const OBO_SAMPLE: &str = "\
format-version: 1.2
ontology: hp

[Term]
id: HP:0000001
name: All

[Term]
id: HP:0000118
name: Phenotypic abnormality
alt_id: HP:0000119
is_a: HP:0000001 ! All

[Typedef]
id: part_of
";

    #[test]
    fn test_parse_obo_codes() {
        let codes = parse_obo_codes(OBO_SAMPLE);
        assert_eq!(codes.len(), 2);
        assert!(codes.contains("HP:0000001"));
        assert!(codes.contains("HP:0000118"));
        assert!(!codes.contains("HP:0000119"));
    }

    #[test]
    fn test_parse_obo_trims_trailing_whitespace() {
        let codes = parse_obo_codes("id: HP:0001250   \r\n");
        assert!(codes.contains("HP:0001250"));
    }

    #[test]
    fn test_parse_delimited_codes_any_column() {
        let contents = "Seizure,HP:0001250\nHP:0012345,Other\nfree text,,HP:0000001\n";
        let codes = parse_delimited_codes(contents).unwrap();
        assert_eq!(
            codes.iter().collect::<Vec<_>>(),
            vec!["HP:0000001", "HP:0001250", "HP:0012345"]
        );
    }

    #[test]
    fn test_parse_delimited_single_column() {
        let codes = parse_delimited_codes("HP:0000001\nHP:0000002\n").unwrap();
        assert_eq!(codes.len(), 2);
    }
}
