//! Delimiter sniffing for loosely-formatted text tables.
//!
//! Vocabulary lists and clinician exports come as comma, semicolon, tab or
//! pipe separated text with no declared dialect. The sniffer picks the
//! candidate whose per-line field count is the most consistent.

/// Delimiters considered by [`sniff_delimiter`], in tie-break order.
pub const CANDIDATE_DELIMITERS: [u8; 4] = [b',', b'\t', b';', b'|'];

/// Picks the most plausible delimiter for a sample of lines.
///
/// A candidate that appears the same non-zero number of times on every
/// non-empty line wins over one with irregular counts; among equally
/// consistent candidates the higher count wins. Quoted sections are
/// ignored. Falls back to `,` when no candidate appears at all, which also
/// reads single-column files correctly.
///
/// ```
/// use pheno_common::sniff_delimiter;
///
/// assert_eq!(sniff_delimiter(&["a;b;c", "1;2;3"]), b';');
/// assert_eq!(sniff_delimiter(&["HP:0000001"]), b',');
/// ```
pub fn sniff_delimiter<S: AsRef<str>>(lines: &[S]) -> u8 {
    let sample: Vec<&str> = lines
        .iter()
        .map(AsRef::as_ref)
        .filter(|line| !line.trim().is_empty())
        .collect();
    if sample.is_empty() {
        return b',';
    }

    let mut best: Option<(bool, usize, u8)> = None;
    for &delimiter in &CANDIDATE_DELIMITERS {
        let counts: Vec<usize> = sample
            .iter()
            .map(|line| count_unquoted(line, delimiter))
            .collect();
        let min = counts.iter().copied().min().unwrap_or(0);
        let max = counts.iter().copied().max().unwrap_or(0);
        if max == 0 {
            continue;
        }
        let consistent = min == max;
        let better = match best {
            None => true,
            Some((best_consistent, best_max, _)) => (consistent, max) > (best_consistent, best_max),
        };
        if better {
            best = Some((consistent, max, delimiter));
        }
    }
    best.map_or(b',', |(_, _, delimiter)| delimiter)
}

fn count_unquoted(line: &str, delimiter: u8) -> usize {
    let mut in_quotes = false;
    let mut count = 0;
    for byte in line.bytes() {
        if byte == b'"' {
            in_quotes = !in_quotes;
        } else if byte == delimiter && !in_quotes {
            count += 1;
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sniff_tab_separated() {
        let lines = ["HP:0000001\tAll", "HP:0000118\tPhenotypic abnormality"];
        assert_eq!(sniff_delimiter(&lines), b'\t');
    }

    #[test]
    fn test_sniff_prefers_consistent_candidate() {
        // Commas appear inside free text on one line only.
        let lines = [
            "HP:0001250;Seizure;yes",
            "HP:0012345;Abnormal, unspecified;no",
        ];
        assert_eq!(sniff_delimiter(&lines), b';');
    }

    #[test]
    fn test_sniff_ignores_quoted_delimiters() {
        let lines = ["\"a;b\",c", "\"d;e\",f"];
        assert_eq!(sniff_delimiter(&lines), b',');
    }

    #[test]
    fn test_sniff_empty_sample_defaults_to_comma() {
        let lines: [&str; 0] = [];
        assert_eq!(sniff_delimiter(&lines), b',');
        assert_eq!(sniff_delimiter(&["", "   "]), b',');
    }
}
