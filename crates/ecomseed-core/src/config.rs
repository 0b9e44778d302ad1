//! # Configuration File Parser
//!
//! Reads and parses `ecomseed.toml`, the optional user configuration file
//! that sets generation defaults without requiring CLI flags. CLI flags win
//! over the file; the file wins over built-in defaults.
//!
//! Example `ecomseed.toml`:
//!
//! ```toml
//! [generate]
//! customers = 50
//! orders = 100
//! seed = 42
//! max_items_per_order = 4
//!
//! [output]
//! dir = "data"
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::{EcomSeedError, Result};
use crate::generate::GenerationSpec;

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = "ecomseed.toml";

/// Top-level ecomseed.toml structure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EcomSeedConfig {
    /// Default generation settings.
    pub generate: GenerateConfig,
    /// Output settings.
    pub output: OutputConfig,
}

/// Default generation settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GenerateConfig {
    /// Number of customers to generate.
    pub customers: Option<usize>,
    /// Number of orders to generate.
    pub orders: Option<usize>,
    /// Fixed random seed for deterministic generation.
    pub seed: Option<u64>,
    /// Upper bound on line items per order.
    pub max_items_per_order: Option<usize>,
}

/// Output settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory the table files are written into.
    pub dir: Option<String>,
}

impl EcomSeedConfig {
    /// Fold the file's generation settings over the built-in defaults.
    pub fn generation_spec(&self) -> GenerationSpec {
        let defaults = GenerationSpec::default();
        GenerationSpec {
            customers: self.generate.customers.unwrap_or(defaults.customers),
            orders: self.generate.orders.unwrap_or(defaults.orders),
            seed: self.generate.seed.unwrap_or(defaults.seed),
            max_items_per_order: self
                .generate
                .max_items_per_order
                .unwrap_or(defaults.max_items_per_order),
        }
    }
}

/// Read and parse an ecomseed.toml file from the given directory.
///
/// Returns `None` if the file doesn't exist (config is optional).
/// Returns an error if the file exists but can't be parsed.
pub fn read_config(dir: &Path) -> Result<Option<EcomSeedConfig>> {
    let path = dir.join(CONFIG_FILE_NAME);
    if !path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(&path).map_err(|e| EcomSeedError::Config {
        message: format!("Failed to read {}: {}", path.display(), e),
    })?;

    let config: EcomSeedConfig = toml::from_str(&content).map_err(|e| EcomSeedError::Config {
        message: format!("Failed to parse {}: {}", path.display(), e),
    })?;

    Ok(Some(config))
}
