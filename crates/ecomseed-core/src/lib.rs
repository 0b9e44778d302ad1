pub mod catalog;
pub mod check;
pub mod config;
pub mod error;
pub mod generate;
pub mod model;
pub mod output;

// Re-export key types for convenience
pub use error::{EcomSeedError, Result};
pub use generate::{generate_dataset, Dataset, GenerationSpec};
