//! Source shape detection.

use std::fmt;
use std::path::Path;

/// Number of leading lines inspected when the extension is not conclusive.
const SNIFF_LINES: usize = 30;

/// The two accepted ontology source layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceShape {
    /// Line-oriented OBO ontology text.
    Obo,
    /// Headerless delimited code table.
    Delimited,
}

impl SourceShape {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Obo => "obo",
            Self::Delimited => "delimited",
        }
    }
}

impl fmt::Display for SourceShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Decide the shape of an ontology source.
///
/// An `.obo` extension is conclusive. Otherwise the leading lines are checked
/// for OBO header or stanza markers (`format-version:`, `[Term]`).
pub fn detect_shape(path: &Path, contents: &str) -> SourceShape {
    let is_obo_ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("obo"));
    if is_obo_ext {
        return SourceShape::Obo;
    }

    let looks_like_obo = contents
        .lines()
        .take(SNIFF_LINES)
        .map(|line| line.trim_start_matches('\u{feff}').trim())
        .any(|line| line.starts_with("format-version:") || line == "[Term]");
    if looks_like_obo {
        SourceShape::Obo
    } else {
        SourceShape::Delimited
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_obo_extension_wins() {
        assert_eq!(detect_shape(Path::new("hp.OBO"), "HP:1,HP:2"), SourceShape::Obo);
    }

    #[test]
    fn test_obo_content_without_extension() {
        let contents = "format-version: 1.2\ndata-version: hp/releases/2024-04-26\n";
        assert_eq!(detect_shape(Path::new("hp.txt"), contents), SourceShape::Obo);

        let contents = "\n[Term]\nid: HP:0000001\n";
        assert_eq!(detect_shape(Path::new("terms"), contents), SourceShape::Obo);
    }

    #[test]
    fn test_plain_list_is_delimited() {
        let contents = "HP:0000001,All\nHP:0000118,Phenotypic abnormality\n";
        assert_eq!(detect_shape(Path::new("codes.csv"), contents), SourceShape::Delimited);
    }
}
