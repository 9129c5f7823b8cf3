//! Command-line interface definitions.
//!
//! `hindsight` takes a single budget and reports the buy opportunities that
//! budget would have caught over the trailing window. Options override the
//! config file.

use clap::Parser;
use rust_decimal::Decimal;
use std::path::PathBuf;

/// Find the buy opportunities you missed over a trailing window.
///
/// For every instrument in the ticker list, finds the lowest buy price
/// followed by the highest later sale, then picks the most profitable
/// opportunities that fit in BUDGET.
#[derive(Parser, Debug)]
#[command(name = "hindsight")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Budget in USD available for buy prices
    #[arg(value_name = "BUDGET", allow_negative_numbers = true)]
    pub budget: Decimal,

    /// Path to configuration file [default: hindsight.toml if present]
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the ticker list (JSON array of symbols)
    #[arg(long)]
    pub tickers: Option<PathBuf>,

    /// Override the number of concurrent fetches
    #[arg(short, long)]
    pub workers: Option<usize>,

    /// Override the trailing window length in days
    #[arg(long)]
    pub window_days: Option<u32>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Override log level (debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Use JSON log format instead of pretty
    #[arg(long)]
    pub json_logs: bool,

    /// Color output mode [auto, always, never]
    #[arg(long, default_value = "auto", hide_possible_values = true)]
    pub color: ColorChoice,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}
