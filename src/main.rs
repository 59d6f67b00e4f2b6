//! Tinge - Look up the nearest named colors to any hex code.
//!
//! A command-line tool that ranks a fixed palette of named colors by
//! Euclidean RGB distance to a query color, interactively or one-shot.

use std::io;

use clap::Parser;
use tinge::cli::{self, Cli};
use tinge::errors::Result;
use tinge::repl;
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(cli.log_level)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    match cli.query.as_deref() {
        Some(query) => cli::run(query, cli.results),
        None => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            repl::run(stdin.lock(), stdout.lock(), cli.results)
        }
    }
}
