//! Command-line interface for jsonforge
//!
//! # Usage Examples
//!
//! ## Generate
//! ```bash
//! # Resolve a template with a fixed seed
//! jsonforge generate --template countries.json5 --seed 42 --pretty
//!
//! # Unseeded run (the chosen seed is logged for replay)
//! RUST_LOG=info jsonforge generate --template countries.json5
//! ```
//!
//! ## Check
//! ```bash
//! # Validate template syntax, placeholders, and repeat markers
//! jsonforge check --template countries.json5
//! ```

use clap::{Parser, Subcommand};
use jsonforge::{run_check, run_generate, CheckOpts, GenerateOpts};

#[derive(Parser)]
#[command(name = "jsonforge")]
#[command(about = "A tool for generating mock JSON data from JSON5-like templates")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a template into mock JSON data
    Generate {
        #[command(flatten)]
        opts: GenerateOpts,
    },

    /// Parse and validate a template without generating data
    Check {
        #[command(flatten)]
        opts: CheckOpts,
    },
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { opts } => run_generate(&opts),
        Commands::Check { opts } => run_check(&opts),
    }
}
