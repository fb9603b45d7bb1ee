//! Output file naming.

use std::path::{Path, PathBuf};

/// Suffix appended to the input stem for the cleaned table.
pub const CLEAN_SUFFIX: &str = "_CLEAN.csv";

/// Suffix appended to the input stem for the invalid-code report.
pub const REPORT_SUFFIX: &str = "_HPO_ERROR_REPORT.txt";

/// `<dir>/<stem>_CLEAN.csv` for `input`, where `dir` is `output_dir` if
/// given and the input's own directory otherwise.
pub fn clean_output_path(input: &Path, output_dir: Option<&Path>) -> PathBuf {
    sibling_path(input, output_dir, CLEAN_SUFFIX)
}

/// `<dir>/<stem>_HPO_ERROR_REPORT.txt` for `input`.
pub fn report_output_path(input: &Path, output_dir: Option<&Path>) -> PathBuf {
    sibling_path(input, output_dir, REPORT_SUFFIX)
}

fn sibling_path(input: &Path, output_dir: Option<&Path>, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let dir = output_dir
        .map(Path::to_path_buf)
        .or_else(|| input.parent().map(Path::to_path_buf))
        .unwrap_or_default();
    dir.join(format!("{stem}{suffix}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_next_to_input() {
        let input = Path::new("/data/run1/patients.xlsx.csv");
        assert_eq!(
            clean_output_path(input, None),
            PathBuf::from("/data/run1/patients.xlsx_CLEAN.csv")
        );
        assert_eq!(
            report_output_path(input, None),
            PathBuf::from("/data/run1/patients.xlsx_HPO_ERROR_REPORT.txt")
        );
    }

    #[test]
    fn test_paths_in_output_dir() {
        let input = Path::new("/data/run1/patients.csv");
        assert_eq!(
            clean_output_path(input, Some(Path::new("/out"))),
            PathBuf::from("/out/patients_CLEAN.csv")
        );
    }

    #[test]
    fn test_bare_file_name() {
        assert_eq!(
            clean_output_path(Path::new("patients.csv"), None),
            PathBuf::from("patients_CLEAN.csv")
        );
    }
}
