//! Command-line arguments for the demo.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use clap::Parser;

use crate::model::op::Op;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Integers to fold.
    pub values: Vec<String>,

    /// Path to a text file with more integers.
    /// Numbers may be separated by commas, spaces, or new lines.
    #[clap(long)]
    pub path: Option<String>,

    /// Operation applied to the numbers.
    #[clap(long, value_enum, default_value_t = Op::Sum)]
    pub op: Op,

    /// Print the outcome as a JSON object instead of plain text.
    #[clap(long)]
    pub json: bool,
}
