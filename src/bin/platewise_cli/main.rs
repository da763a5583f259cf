// ABOUTME: Platewise CLI - generate meal plans, browse templates and validate datasets
// ABOUTME: Reads JSON preferences from a file or stdin and writes plan JSON to stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Generate a plan from a preferences file
//! platewise-cli generate --preferences prefs.json
//!
//! # Read preferences from stdin and print a readable summary
//! echo '{"target_calories": 2000, "diet_type": "vegan", "days": 3}' | platewise-cli generate -p - --summary
//!
//! # Use a custom dataset
//! platewise-cli --dataset foods.json generate -p prefs.json
//!
//! # List keto dinner templates
//! platewise-cli templates --diet keto --slot dinner
//!
//! # Validate a dataset file
//! platewise-cli check-dataset foods.json
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use clap::{Parser, Subcommand};
use platewise::constants::service_names;
use platewise::logging::LoggingConfig;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = service_names::CLI,
    about = "Platewise meal plan generator",
    long_about = "Generate deterministic meal plans from a food catalog and dietary preferences."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// JSON dataset file (defaults to the builtin dataset)
    #[arg(long, global = true)]
    dataset: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Generate a meal plan (or a batch, when the document is a JSON array)
    Generate {
        /// Preferences JSON file, or `-` for stdin
        #[arg(long, short = 'p')]
        preferences: String,

        /// Print compact JSON
        #[arg(long)]
        compact: bool,

        /// Print a readable summary instead of JSON
        #[arg(long, conflicts_with = "compact")]
        summary: bool,
    },

    /// List meal templates
    Templates {
        /// Only templates compatible with this diet
        #[arg(long)]
        diet: Option<String>,

        /// Only templates for this slot
        #[arg(long)]
        slot: Option<String>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Validate a dataset file without generating anything
    CheckDataset {
        /// Dataset JSON file
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging.level = "debug".into();
    }
    logging.init()?;
    debug!(dataset = ?cli.dataset, "Platewise CLI starting");

    match cli.command {
        Command::Generate {
            preferences,
            compact,
            summary,
        } => {
            let service = helpers::service::load_service(cli.dataset.as_deref())?;
            commands::generate::run(&service, &preferences, compact, summary)
        }
        Command::Templates { diet, slot, json } => {
            let service = helpers::service::load_service(cli.dataset.as_deref())?;
            commands::templates::list(&service, diet.as_deref(), slot.as_deref(), json)
        }
        Command::CheckDataset { path } => commands::dataset::check(&path),
    }
}
