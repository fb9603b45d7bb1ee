//! CLI library components for the phenotype converter.

#![allow(missing_docs)]

pub mod config;
pub mod logging;
pub mod pipeline;
