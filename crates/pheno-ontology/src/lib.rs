//! Phenotype ontology loading.
//!
//! Builds the [`ValidationSet`](pheno_model::ValidationSet) a conversion run
//! checks phenotype codes against. Two source shapes are accepted and told
//! apart without caller-side flags:
//!
//! - **OBO**: an ontology release such as `hp.obo`, where every term carries an
//!   `id: HP:0000001` line
//! - **Delimited**: an ad hoc code list (CSV, TSV, ...) with no header, where
//!   codes may sit in any column
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use pheno_ontology::load_codes;
//!
//! let codes = load_codes(Path::new("assets/hp.obo"))?;
//! assert!(codes.contains("HP:0000001"));
//! ```

mod error;
mod loader;
mod shape;

pub use error::{OntologyError, Result};
pub use loader::{load_codes, parse_delimited_codes, parse_obo_codes};
pub use shape::{SourceShape, detect_shape};
