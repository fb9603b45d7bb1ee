//! Validation set of recognized phenotype codes.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Prefix shared by every Human Phenotype Ontology identifier.
pub const HPO_PREFIX: &str = "HP:";

/// Returns true if `value` has the canonical `HP:<digits>` shape.
///
/// ```
/// use pheno_model::is_phenotype_code;
///
/// assert!(is_phenotype_code("HP:0001250"));
/// assert!(!is_phenotype_code("HP:A99"));
/// assert!(!is_phenotype_code("HP:"));
/// assert!(!is_phenotype_code(" HP:0001250"));
/// ```
pub fn is_phenotype_code(value: &str) -> bool {
    value
        .strip_prefix(HPO_PREFIX)
        .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
}

/// The set of phenotype codes a conversion run accepts.
///
/// Built once by the ontology loader and then only read. Every member is
/// guaranteed to match [`is_phenotype_code`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationSet {
    codes: BTreeSet<String>,
}

impl ValidationSet {
    /// Create an empty validation set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a code, returning whether it was admitted.
    ///
    /// Values that do not have the `HP:<digits>` shape are rejected.
    /// Re-inserting an existing code is accepted and leaves the set unchanged.
    pub fn insert(&mut self, code: impl Into<String>) -> bool {
        let code = code.into();
        if !is_phenotype_code(&code) {
            return false;
        }
        self.codes.insert(code);
        true
    }

    /// Membership test.
    pub fn contains(&self, code: &str) -> bool {
        self.codes.contains(code)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Iterate codes in lexical order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.codes.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for ValidationSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for code in iter {
            set.insert(code);
        }
        set
    }
}

impl<S: Into<String>> Extend<S> for ValidationSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for code in iter {
            self.insert(code);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_rejects_malformed_codes() {
        let mut set = ValidationSet::new();
        assert!(set.insert("HP:0000001"));
        assert!(!set.insert("HP:A99"));
        assert!(!set.insert("MONDO:0000001"));
        assert!(!set.insert("hp:0000002"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_duplicates_collapse() {
        let set: ValidationSet = ["HP:0000001", "HP:0000001", "HP:0000118"]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 2);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["HP:0000001", "HP:0000118"]);
    }
}
