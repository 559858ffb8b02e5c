//! Data model of the demo.
//!
//! - `op`: the folding operations selectable on the command line.
//! - `tokens`: splitting and parsing of numeric input.
pub mod op;
pub mod tokens;
