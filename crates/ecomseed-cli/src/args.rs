use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "ecomseed",
    about = "Generate a deterministic, referentially consistent e-commerce dataset",
    version,
    after_help = "Examples:\n  ecomseed generate --customers 50 --orders 100 --out data\n  ecomseed generate --seed 7 --format json --out data\n  ecomseed preview --rows 5\n  ecomseed check --dir data"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate the dataset and write one file per table
    Generate(GenerateArgs),

    /// Print a sample of each generated table without writing files
    Preview(PreviewArgs),

    /// Validate written table files against the dataset invariants
    Check(CheckArgs),
}

#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Number of customers to generate
    #[arg(long)]
    pub customers: Option<usize>,

    /// Number of orders to generate
    #[arg(long)]
    pub orders: Option<usize>,

    /// Random seed for deterministic generation
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output directory for the table files
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Output format
    #[arg(long, default_value = "csv")]
    pub format: OutputFormat,
}

#[derive(Parser, Debug)]
pub struct PreviewArgs {
    /// Number of sample rows to show per table
    #[arg(long, default_value = "5")]
    pub rows: usize,

    /// Random seed for the previewed run
    #[arg(long, default_value = "42")]
    pub seed: u64,
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Directory holding the five table CSV files
    #[arg(long, default_value = "data")]
    pub dir: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Csv,
    Json,
}
