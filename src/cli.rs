//! Command-line interface for tinge.
//!
//! Handles CLI argument parsing and execution logic for one-shot lookups.

use crate::errors::Result;
use clap::Parser;
use std::io;
use tracing::Level;

use crate::{nearest, palette, repl};

/// Command-line arguments for tinge.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// The hex color code to look up, e.g. `#8ECAE6`. Omit to run interactively.
    pub query: Option<String>,

    /// How many matches to print.
    #[arg(
        short = 'n',
        long,
        value_name = "COUNT",
        default_value_t = nearest::DEFAULT_TOP_N,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub results: usize,

    /// Set the logging level.
    #[arg(long, short = 'L', value_name = "LEVEL", default_value_t = if cfg!(debug_assertions) { Level::DEBUG } else { Level::INFO })]
    pub log_level: Level,
}

/// Executes a one-shot lookup and prints the ranked matches.
///
/// # Arguments
/// * `query` - The hex color code to look up
/// * `results` - Number of matches to print
///
/// # Returns
/// Result indicating success or an invalid query
pub fn run(query: &str, results: usize) -> Result<()> {
    let start = std::time::Instant::now();
    let matches = nearest::find_nearest(query, palette::hexes(), results)?;

    tracing::debug!(
        query = query,
        candidates = palette::count(),
        duration = ?start.elapsed(),
        "nearest-color lookup completed"
    );

    let stdout = io::stdout();
    repl::write_matches(&mut stdout.lock(), query, &matches)?;

    Ok(())
}
