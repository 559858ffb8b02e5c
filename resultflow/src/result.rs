//! The success/failure value shared by every part of the crate.
//!
//! A `Result` is either `Success(value)` or `Failure(error)`; the variant never changes after
//! construction. Constructors are generic over the side they leave empty, so
//! `Result::val(1)` unifies with whatever error type the call site expects and
//! `Result::err("boom")` with whatever value type.
use std::convert::Infallible;

use crate::all::AllResults;
use crate::do_block::{self, Unwrap};

/// Discriminated success/failure container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use = "this `Result` may be a `Failure` variant, which should be handled"]
pub enum Result<V, E> {
    /// The operation produced a value.
    Success(V),
    /// The operation failed with a domain error.
    Failure(E),
}

use self::Result::{Failure, Success};

impl<V, E> Result<V, E> {
    /// Wraps `value` as a `Success`.
    pub const fn val(value: V) -> Self {
        Success(value)
    }

    /// Wraps `error` as a `Failure`.
    pub const fn err(error: E) -> Self {
        Failure(error)
    }

    /// `true` for `Success`.
    pub const fn is_success(&self) -> bool {
        matches!(self, Success(_))
    }

    /// `true` for `Failure`.
    pub const fn is_failure(&self) -> bool {
        matches!(self, Failure(_))
    }

    /// Borrows the success value, if any.
    pub const fn value(&self) -> Option<&V> {
        match self {
            Success(value) => Some(value),
            Failure(_) => None,
        }
    }

    /// Borrows the failure error, if any.
    pub const fn error(&self) -> Option<&E> {
        match self {
            Success(_) => None,
            Failure(error) => Some(error),
        }
    }

    /// Consumes the result, keeping only the success value.
    pub fn into_value(self) -> Option<V> {
        match self {
            Success(value) => Some(value),
            Failure(_) => None,
        }
    }

    /// Consumes the result, keeping only the failure error.
    pub fn into_error(self) -> Option<E> {
        match self {
            Success(_) => None,
            Failure(error) => Some(error),
        }
    }

    /// Converts `&Result<V, E>` into `Result<&V, &E>`.
    pub const fn as_ref(&self) -> Result<&V, &E> {
        match self {
            Success(value) => Success(value),
            Failure(error) => Failure(error),
        }
    }

    /// Maps the success value, leaving a failure untouched.
    pub fn map<U, F>(self, f: F) -> Result<U, E>
    where
        F: FnOnce(V) -> U,
    {
        match self {
            Success(value) => Success(f(value)),
            Failure(error) => Failure(error),
        }
    }

    /// Maps the failure error, leaving a success untouched.
    pub fn map_err<G, F>(self, f: F) -> Result<V, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Success(value) => Success(value),
            Failure(error) => Failure(f(error)),
        }
    }

    /// Chains a fallible step after a success.
    pub fn and_then<U, F>(self, f: F) -> Result<U, E>
    where
        F: FnOnce(V) -> Result<U, E>,
    {
        match self {
            Success(value) => f(value),
            Failure(error) => Failure(error),
        }
    }

    /// Converts into the standard library's `Result`, e.g. to use `?`.
    pub fn into_std(self) -> std::result::Result<V, E> {
        self.into()
    }

    /// Aggregates a fixed group of results (tuple, array or `Vec`).
    ///
    /// The first failure, in input order, is returned and nothing after it is inspected.
    /// Otherwise the values come back in the same order and shape as the input.
    ///
    /// ```
    /// use resultflow::Result;
    ///
    /// let count: Result<i32, String> = Result::val(1);
    /// let name: Result<&str, String> = Result::val("two");
    /// let both: Result<(i32, &str), String> = Result::all((count, name));
    /// assert_eq!(both, Result::val((1, "two")));
    /// ```
    pub fn all<S>(results: S) -> Self
    where
        S: AllResults<E, Values = V>,
    {
        results.all()
    }

    /// Runs `callback` as a do-block.
    ///
    /// The callback receives an [`Unwrap`] handle. Unwrapping a success hands back its value;
    /// unwrapping a failure abandons the rest of the callback and makes this call return that
    /// failure unchanged. Panics unrelated to the handle pass through untouched. The handle
    /// is only valid inside `callback`.
    ///
    /// ```
    /// use resultflow::Result;
    ///
    /// let res: Result<i32, &str> = Result::do_block(|u| {
    ///     let x = u.unwrap(Result::val(1));
    ///     let y: i32 = u.unwrap(Result::err("nope"));
    ///     Result::val(x + y)
    /// });
    /// assert_eq!(res, Result::err("nope"));
    /// ```
    pub fn do_block<F>(callback: F) -> Self
    where
        E: Send + 'static,
        F: for<'scope> FnOnce(Unwrap<'scope, E>) -> Self,
    {
        do_block::run(callback)
    }
}

impl<E> Result<(), E> {
    /// A `Success` carrying no data.
    pub const fn void() -> Self {
        Success(())
    }
}

impl<V> Result<V, Infallible> {
    /// Re-types a result that cannot fail to any error type.
    pub fn widen_err<E>(self) -> Result<V, E> {
        match self {
            Success(value) => Success(value),
            Failure(never) => match never {},
        }
    }
}

impl<E> Result<Infallible, E> {
    /// Re-types a result that cannot succeed to any value type.
    pub fn widen_val<V>(self) -> Result<V, E> {
        match self {
            Success(never) => match never {},
            Failure(error) => Failure(error),
        }
    }
}

impl<V, E> From<std::result::Result<V, E>> for Result<V, E> {
    fn from(result: std::result::Result<V, E>) -> Self {
        match result {
            Ok(value) => Success(value),
            Err(error) => Failure(error),
        }
    }
}

impl<V, E> From<Result<V, E>> for std::result::Result<V, E> {
    fn from(result: Result<V, E>) -> Self {
        match result {
            Success(value) => Ok(value),
            Failure(error) => Err(error),
        }
    }
}
