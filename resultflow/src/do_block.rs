//! Short-circuit executor.
//!
//! A do-block is a callback that receives an [`Unwrap`] handle and returns a `Result`.
//! Unwrapping a `Success` gives the value back; unwrapping a `Failure` unwinds out of the
//! callback with a private sentinel payload, which the enclosing do-block catches and turns
//! into `Failure(error)`.
//!
//! Catching is keyed on identity, not shape:
//! - the payload must downcast to this module's `Sentinel<E>`, which no caller can build;
//! - the sentinel must carry the `ScopeId` of the catching invocation.
//!
//! Any other unwind (a real panic, or a sentinel aimed at an enclosing do-block) is re-raised
//! with `resume_unwind` and its payload untouched. `resume_unwind` does not run the panic
//! hook, so short-circuits stay silent and real panics report once, where they happened.
//!
//! A short-circuit is an unwind, and code between the unwrap and the do-block sees it as one:
//! - a `MutexGuard` alive at that point poisons its mutex, so drop guards before unwrapping;
//! - unwinding into an `extern "C"` frame aborts the process, so never unwrap inside a
//!   callback invoked through FFI.
use std::any::Any;
use std::fmt;
use std::marker::PhantomData;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicU64, Ordering};

use log::trace;

use crate::result::Result::{self, Failure, Success};

static NEXT_SCOPE: AtomicU64 = AtomicU64::new(1);

/// Identity of one do-block invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ScopeId(u64);

impl ScopeId {
    pub(crate) fn next() -> Self {
        ScopeId(NEXT_SCOPE.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ScopeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Unwind payload of a failed unwrap.
struct Sentinel<E> {
    scope: ScopeId,
    error: E,
}

/// Handle passed to a do-block callback.
///
/// `Copy`, so it can be used from nested closures and moved into `async` blocks.
///
/// The synchronous executor hands out a handle branded with a fresh, invariant `'scope`, so
/// the handle cannot outlive its block:
///
/// ```compile_fail
/// use std::cell::Cell;
/// use resultflow::{Result, Unwrap};
///
/// let slot: Cell<Option<Unwrap<'_, u8>>> = Cell::new(None);
/// let _: Result<(), u8> = Result::do_block(|u| {
///     slot.set(Some(u));
///     Result::void()
/// });
/// ```
///
/// The async executor hands out `Unwrap<'static, E>`, because the callback's future has to
/// own its handle. Such a handle can be kept past its block. Unwrapping a `Failure` through
/// it later raises an unwind that no do-block claims: it passes through every enclosing
/// block and, uncaught, ends the thread without a panic message.
pub struct Unwrap<'scope, E> {
    scope: ScopeId,
    _brand: PhantomData<&'scope mut &'scope ()>,
    _error: PhantomData<fn(E) -> E>,
}

impl<E> Clone for Unwrap<'_, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for Unwrap<'_, E> {}

impl<E> fmt::Debug for Unwrap<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Unwrap").field("scope", &self.scope).finish()
    }
}

impl<E: Send + 'static> Unwrap<'_, E> {
    pub(crate) fn new(scope: ScopeId) -> Self {
        Unwrap {
            scope,
            _brand: PhantomData,
            _error: PhantomData,
        }
    }

    /// Returns the value of a `Success`, or abandons the do-block with the error of a
    /// `Failure`.
    ///
    /// Accepts this crate's `Result` as well as `std::result::Result`. On failure this never
    /// returns; the enclosing do-block evaluates to `Failure(error)` with `error` moved through
    /// as is.
    ///
    /// The failure unwinds through every frame between here and the do-block. A
    /// `MutexGuard` held across this call poisons its mutex when the result is a `Failure`,
    /// and an `extern "C"` frame in between aborts the process.
    pub fn unwrap<X>(&self, result: impl Into<Result<X, E>>) -> X {
        match result.into() {
            Success(value) => value,
            Failure(error) => panic::resume_unwind(Box::new(Sentinel {
                scope: self.scope,
                error,
            })),
        }
    }
}

/// Runs `callback` under a fresh scope. See [`Result::do_block`].
pub(crate) fn run<V, E, F>(callback: F) -> Result<V, E>
where
    E: Send + 'static,
    F: for<'scope> FnOnce(Unwrap<'scope, E>) -> Result<V, E>,
{
    let scope = ScopeId::next();
    // Every unwind we do not own is re-raised below, so no broken state is observed here.
    match panic::catch_unwind(AssertUnwindSafe(|| callback(Unwrap::new(scope)))) {
        Ok(result) => result,
        Err(payload) => Failure(recover(scope, payload)),
    }
}

/// Extracts the error carried by a sentinel of `scope`, re-raising anything else.
pub(crate) fn recover<E: Send + 'static>(scope: ScopeId, payload: Box<dyn Any + Send>) -> E {
    match payload.downcast::<Sentinel<E>>() {
        Ok(sentinel) if sentinel.scope == scope => {
            trace!("do-block {} short-circuited", scope);
            sentinel.error
        }
        Ok(sentinel) => {
            trace!(
                "do-block {} passing through a short-circuit of {}",
                scope, sentinel.scope
            );
            panic::resume_unwind(sentinel)
        }
        Err(payload) => {
            trace!("do-block {} re-raising a panic", scope);
            panic::resume_unwind(payload)
        }
    }
}
