//! jsonforge library
//!
//! A library for generating mock JSON data from JSON5-like templates.
//!
//! # Features
//!
//! - Template dialect: JSON5-style documents with unquoted keys,
//!   single-quoted strings, trailing commas, and comments
//! - Placeholders: `{{funcName(arg, ...)}}` tokens resolved into
//!   generated values (names, emails, numbers, dates, lorem text)
//! - Repeat markers: `{{repeat(min, max)}}` as the first element of an
//!   array clones the remaining element templates a random number of times
//! - Reproducibility: output is fully determined by the template and seed
//!
//! # CLI Usage
//!
//! ```bash
//! # Resolve a template with a fixed seed
//! jsonforge generate --template countries.json5 --seed 42 --pretty
//!
//! # Write the generated document to a file
//! jsonforge generate --template countries.json5 --output countries.json
//!
//! # Validate a template without generating data
//! jsonforge check --template countries.json5
//! ```

use anyhow::Context;
use clap::Parser;
use mockdata_generator::DataGenerator;
use rand::Rng;
use std::path::PathBuf;
use template_core::Template;

#[derive(Parser, Clone)]
pub struct GenerateOpts {
    /// Template file to resolve
    #[arg(long, env = "JSONFORGE_TEMPLATE")]
    pub template: PathBuf,

    /// Seed for deterministic output (drawn from entropy when omitted)
    #[arg(long, env = "JSONFORGE_SEED")]
    pub seed: Option<u64>,

    /// Output file (stdout when omitted)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Pretty-print the generated JSON
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Parser, Clone)]
pub struct CheckOpts {
    /// Template file to validate
    #[arg(long, env = "JSONFORGE_TEMPLATE")]
    pub template: PathBuf,
}

/// Resolve a template and write the generated document.
pub fn run_generate(opts: &GenerateOpts) -> anyhow::Result<()> {
    let template = Template::from_file(&opts.template)
        .with_context(|| format!("Failed to parse template {:?}", opts.template))?;

    // Log the seed so an unseeded run can be replayed
    let seed = opts.seed.unwrap_or_else(|| rand::rng().random());
    tracing::info!(seed, template = %opts.template.display(), "Resolving template");

    let mut generator = DataGenerator::new(template, seed);
    let doc = generator.generate()?;

    let mut rendered = if opts.pretty {
        serde_json::to_string_pretty(&doc)?
    } else {
        serde_json::to_string(&doc)?
    };
    rendered.push('\n');

    match &opts.output {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("Failed to write output to {path:?}"))?;
            tracing::info!(path = %path.display(), "Wrote generated document");
        }
        None => print!("{rendered}"),
    }

    Ok(())
}

/// Parse and validate a template without generating data.
pub fn run_check(opts: &CheckOpts) -> anyhow::Result<()> {
    Template::from_file(&opts.template)
        .with_context(|| format!("Template {:?} failed validation", opts.template))?;

    println!("{}: OK", opts.template.display());
    Ok(())
}
