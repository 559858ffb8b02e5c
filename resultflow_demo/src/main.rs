//! Resultflow demo: folds integers given on the command line and/or in a file.
//!
//! Every fallible step (reading the file, parsing each token, the checked fold itself) runs
//! inside a single do-block, so the first problem ends the run and is reported as is.
//!
//! Usage example (CLI):
//! ```bash
//! resultflow_demo --op product --path ./numbers.txt 2 3
//! resultflow_demo --json 1 2 x
//! ```
//!
//! The numbers file may separate values with commas, spaces, or new lines.
#![warn(missing_docs)]
mod args;
mod error;
mod model;
mod result;

use crate::args::Args;
use crate::error::DemoError;
use crate::model::tokens::{parse_number, split_tokens};
use crate::result::DemoResult;
use clap::Parser;
use log::{debug, info};
use resultflow::Result;
use std::fs;
use std::path::PathBuf;

/// Collects the tokens from `args`, parses them and applies the selected operation.
fn evaluate(args: &Args) -> DemoResult<i64> {
    Result::do_block(|u| {
        let mut tokens = args.values.clone();
        if let Some(raw) = &args.path {
            let path = normalize_path(raw);
            info!("Reading numbers from {}", path.display());
            let text = u.unwrap(fs::read_to_string(&path).map_err(DemoError::from));
            tokens.extend(split_tokens(&text));
        }
        debug!("Tokens: {:?}", tokens);

        let numbers: Vec<i64> = tokens
            .iter()
            .map(|token| u.unwrap(parse_number(token)))
            .collect();
        info!("Parsed {} numbers", numbers.len());
        args.op.fold(&numbers)
    })
}

fn main() -> std::result::Result<(), DemoError> {
    init_logger();
    let args = Args::parse();
    info!("Folding with {}", args.op);

    let outcome = evaluate(&args);
    if let Some(line) = render(&outcome, args.json)? {
        println!("{line}");
    }
    // A failure is reported once, by returning it.
    outcome.into_std().map(|_| ())
}

/// Line printed on stdout for `outcome`. A plain-text failure prints nothing.
fn render(outcome: &DemoResult<i64>, json: bool) -> std::result::Result<Option<String>, DemoError> {
    if json {
        let printable = outcome.as_ref().map_err(|e| e.to_string());
        return Ok(Some(serde_json::to_string(&printable)?));
    }
    Ok(outcome.value().map(|value| value.to_string()))
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}

/// Normalize a CLI-provided path string by trimming whitespace and matching quotes.
///
/// This allows passing Windows paths in quotes without breaking parsing.
fn normalize_path(raw: &str) -> PathBuf {
    let trimmed = raw.trim();
    let no_quotes = trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed);
    PathBuf::from(no_quotes)
}
