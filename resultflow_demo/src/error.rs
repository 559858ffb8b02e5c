//! Error types used across the demo.
//!
//! The `DemoError` enum unifies I/O, number parsing, and arithmetic failures so that
//! they can travel through a single do-block.
use std::io;
use std::num::ParseIntError;

use thiserror::Error;

use crate::model::op::Op;

/// Unified error type for the application.
#[derive(Error, Debug)]
pub enum DemoError {
    /// I/O error while reading the numbers file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// A token that is not an integer.
    #[error("Invalid number {token:?}: {source}")]
    InvalidNumber {
        /// The offending token.
        token: String,
        /// Why it did not parse.
        #[source]
        source: ParseIntError,
    },
    /// No numbers were supplied.
    #[error("No numbers to fold")]
    Empty,
    /// The fold left the `i64` range.
    #[error("Overflow while applying {0}")]
    Overflow(Op),
    /// Failure while encoding the outcome as JSON.
    #[error("JSON serialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),
}
