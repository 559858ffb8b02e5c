//!
//! Explicit success/failure values with short-circuiting do-blocks.
//!
//! This crate aggregates:
//! - `result`: the `Result<V, E>` tagged union and its constructors.
//! - `all`: aggregation of several results into one, stopping at the first failure.
//! - `do_block`: the synchronous short-circuit executor and its `Unwrap` handle.
//! - `async_result`: the `AsyncResult` alias, async constructors and the async executor.
//! - `repr`: serde support using the `{"ok": .., "val" | "err": ..}` object shape.
//!
//! ```
//! use resultflow::Result;
//!
//! let joined: Result<String, u8> = Result::do_block(|u| {
//!     let a = u.unwrap(Result::val("a"));
//!     let b = u.unwrap(Result::val("b"));
//!     Result::val(format!("{a}{b}"))
//! });
//! assert_eq!(joined, Result::val("ab".to_string()));
//! ```
#![warn(missing_docs)]

// Short-circuiting unwinds out of the callback; with `panic = "abort"` every failure would
// take the process down instead.
#[cfg(panic = "abort")]
compile_error!("resultflow requires `panic = \"unwind\"`");

pub mod all;
pub mod async_result;
pub mod do_block;
#[cfg(feature = "serde")]
mod repr;
pub mod result;

pub use all::AllResults;
pub use async_result::AsyncResult;
pub use do_block::Unwrap;
pub use result::Result;
