use std::path::PathBuf;

use clap::Parser;

use crate::report::OutputFormat;

/// Work out what smoking costs in money and time.
///
/// Inputs left off the command line are restored from the last run. Values
/// that are given are clamped to the configured bounds (by default price
/// 1-50, packs 0.5-50, years 1-50); values that do not parse count as zero
/// before clamping.
#[derive(Parser, Debug)]
#[command(name = "cost-calculator")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Price of one pack, in dollars
    #[arg(short, long)]
    pub price: Option<String>,

    /// Packs smoked per week (fractions allowed)
    #[arg(short = 'k', long)]
    pub packs: Option<String>,

    /// Years spent smoking
    #[arg(short, long)]
    pub years: Option<String>,

    /// CSV file (name,unit_cost,icon) replacing the built-in alternatives
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Cache backend: sqlite, memory or none (overrides the config file)
    #[arg(long)]
    pub backend: Option<String>,

    /// Cache connection string, e.g. a SQLite file path (overrides the config file)
    #[arg(long)]
    pub db: Option<String>,

    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Clear the remembered inputs before calculating
    #[arg(long, default_value_t = false)]
    pub forget: bool,

    /// Log debug output to stderr
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}
