//! Result type alias used by the demo.
//!
//! Defaults the error type to `DemoError`, so functions can simply return `DemoResult<T>`.
use crate::error::DemoError;

/// Demo-wide `resultflow::Result` alias with `DemoError` as the default error.
pub type DemoResult<T, E = DemoError> = resultflow::Result<T, E>;
