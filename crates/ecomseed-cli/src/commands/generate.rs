use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use ecomseed_core::config::read_config;
use ecomseed_core::generate::{generate_dataset, GenerationSpec};
use ecomseed_core::output::json::write_dataset_json;
use ecomseed_core::output::write_dataset_csv;

use crate::args::{GenerateArgs, OutputFormat};

pub fn run(args: &GenerateArgs) -> Result<()> {
    let config = read_config(Path::new("."))
        .context("Failed to load ecomseed.toml")?
        .unwrap_or_default();

    // Precedence: CLI flag > config file > built-in default.
    let file_spec = config.generation_spec();
    let spec = GenerationSpec {
        customers: args.customers.unwrap_or(file_spec.customers),
        orders: args.orders.unwrap_or(file_spec.orders),
        seed: args.seed.unwrap_or(file_spec.seed),
        max_items_per_order: file_spec.max_items_per_order,
    };

    let out_dir: PathBuf = args
        .out
        .clone()
        .or_else(|| config.output.dir.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("data"));

    info!(
        customers = spec.customers,
        orders = spec.orders,
        seed = spec.seed,
        "generating dataset"
    );

    let data = generate_dataset(&spec)?;

    match args.format {
        OutputFormat::Csv => {
            let written = write_dataset_csv(&out_dir, &data)?;
            for path in &written {
                println!("wrote {}", path.display());
            }
        }
        OutputFormat::Json => {
            std::fs::create_dir_all(&out_dir)
                .with_context(|| format!("creating {}", out_dir.display()))?;
            let path = out_dir.join("dataset.json");
            let file =
                File::create(&path).with_context(|| format!("creating {}", path.display()))?;
            write_dataset_json(&mut BufWriter::new(file), &data)?;
            println!("wrote {}", path.display());
        }
    }

    println!(
        "Generated {} customers, {} products, {} orders, {} order items, {} payments (seed {})",
        data.customers.len(),
        data.products.len(),
        data.orders.len(),
        data.order_items.len(),
        data.payments.len(),
        spec.seed
    );

    Ok(())
}
