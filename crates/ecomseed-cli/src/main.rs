use clap::Parser;
use tracing_subscriber::EnvFilter;

mod args;
mod commands;

use args::{Cli, Command};

fn main() {
    let cli = Cli::parse();

    // Initialize logging; RUST_LOG wins over the verbosity flag.
    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_target(false)
        .init();

    let result = match &cli.command {
        Command::Generate(args) => commands::generate::run(args),
        Command::Preview(args) => commands::preview::run(args),
        Command::Check(args) => commands::check::run(args),
    };

    if let Err(err) = result {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
