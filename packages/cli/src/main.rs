#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CLI entry point for the housing report.
//!
//! Reads a CSV of buildings, prints the number of buildings per height
//! category and the address with the least residential area per occupant.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use housing_report::{ReportFormat, run_report};

#[derive(Parser)]
#[command(name = "housing_report", about = "Housing height and living-space report")]
struct Cli {
    /// CSV file with one building per row
    #[arg(default_value = "housing_data.csv")]
    input: PathBuf,
    /// TOML file overriding the category thresholds
    #[arg(long)]
    thresholds: Option<PathBuf>,
    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// Plain-text report
    Text,
    /// Pretty-printed JSON summary
    Json,
}

impl From<Format> for ReportFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => Self::Text,
            Format::Json => Self::Json,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    log::debug!("Reading houses from {}", cli.input.display());

    let report = run_report(&cli.input, cli.thresholds.as_deref(), cli.format.into())?;
    println!("{report}");

    Ok(())
}
