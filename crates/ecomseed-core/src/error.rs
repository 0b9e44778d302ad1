//! # Error Types
//!
//! Defines `EcomSeedError`, the unified error enum for every failure mode in
//! the ecomseed pipeline. Every variant includes enough context (table name,
//! column name, row index, file path) to debug immediately without digging
//! through logs.

use thiserror::Error;

/// All errors that can occur in ecomseed operations.
#[derive(Error, Debug)]
pub enum EcomSeedError {
    #[error("Invalid generation input: {message}")]
    InvalidInput { message: String },

    #[error("Cannot generate {dependent}: the {referenced} collection is empty, so no reference can be drawn")]
    EmptyReferencePool {
        dependent: &'static str,
        referenced: &'static str,
    },

    #[error("Order item sampling needs {requested} distinct products but the catalog only holds {available}\n  Lower max_items_per_order or extend the product catalog")]
    CatalogExhausted { requested: usize, available: usize },

    #[error("Row {row_index} of {table} is missing declared column '{column}'")]
    MissingColumn {
        table: String,
        column: String,
        row_index: usize,
    },

    #[error("Output error: {message}: {source}")]
    Output {
        message: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error in {path} at line {line}: {message}")]
    Parse {
        path: String,
        line: usize,
        message: String,
    },

    #[error("Configuration error: {message}")]
    Config { message: String },
}

pub type Result<T> = std::result::Result<T, EcomSeedError>;
