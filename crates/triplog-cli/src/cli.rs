//! Command-line argument definitions.

use std::path::PathBuf;

use clap::Parser;

/// Driver trip log reporter.
///
/// Reads a line-oriented log of driver registrations and trips,
/// aggregates miles and duration per driver, and prints a summary
/// sorted by distance descending.
#[derive(Debug, Parser)]
#[command(name = "triplog", version, about, long_about = None)]
pub struct Cli {
    /// Path to the input log, resolved against the configured base
    /// directory.
    ///
    /// Optional at the clap level so a missing path maps to this
    /// tool's own exit code instead of clap's usage error.
    pub input: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Emit the report as JSON instead of text.
    #[arg(long)]
    pub json: bool,
}
