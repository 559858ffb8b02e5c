//! Asynchronous counterparts of the constructors and the do-block executor.
//!
//! An [`AsyncResult`] is just a future that eventually yields a [`Result`]. The constructors
//! here return already-resolved futures; call `.boxed()` (from `futures::FutureExt`) when an
//! `AsyncResult` is needed.
//!
//! [`do_block`] accepts a callback that builds a future. The callback may await between
//! unwraps; the [`Unwrap`] handle itself only takes resolved results, so every short-circuit
//! starts and ends inside a single poll. Each poll of the callback's future runs under its own
//! catch region.
use std::future::Future;
use std::panic::{self, AssertUnwindSafe};

use futures::FutureExt;
use futures::future::{self, BoxFuture, Ready};

use crate::do_block::{self, ScopeId, Unwrap};
use crate::result::Result::{self, Failure};

/// A future resolving to a [`Result`].
pub type AsyncResult<'a, V, E> = BoxFuture<'a, Result<V, E>>;

/// A resolved future of `Success(value)`.
pub fn val<V, E>(value: V) -> Ready<Result<V, E>> {
    future::ready(Result::val(value))
}

/// A resolved future of `Success(())`.
pub fn void<E>() -> Ready<Result<(), E>> {
    future::ready(Result::void())
}

/// A resolved future of `Failure(error)`.
pub fn err<V, E>(error: E) -> Ready<Result<V, E>> {
    future::ready(Result::err(error))
}

/// Runs an asynchronous do-block.
///
/// Same contract as [`Result::do_block`]: the first failing unwrap, before or after any
/// await point, ends the block with that failure; a block that runs to completion yields its
/// own result; panics unrelated to the handle propagate to whoever polls the returned future.
///
/// The handle is `'static` so that the returned future can own it. Do not keep it past the
/// block; see [`Unwrap`].
///
/// ```
/// use futures::executor::block_on;
/// use resultflow::{Result, async_result};
///
/// let res: Result<i32, &str> = block_on(async_result::do_block(|u| async move {
///     let a = u.unwrap(async_result::val(1).await);
///     let b: i32 = u.unwrap(async_result::err("late").await);
///     Result::val(a + b)
/// }));
/// assert_eq!(res, Result::err("late"));
/// ```
pub async fn do_block<V, E, F, Fut>(callback: F) -> Result<V, E>
where
    E: Send + 'static,
    F: FnOnce(Unwrap<'static, E>) -> Fut,
    Fut: Future<Output = Result<V, E>>,
{
    let scope = ScopeId::next();

    // A plain closure returning an `async` block may unwrap before the future exists.
    let pending = match panic::catch_unwind(AssertUnwindSafe(|| callback(Unwrap::new(scope)))) {
        Ok(pending) => pending,
        Err(payload) => return Failure(do_block::recover(scope, payload)),
    };

    match AssertUnwindSafe(pending).catch_unwind().await {
        Ok(result) => result,
        Err(payload) => Failure(do_block::recover(scope, payload)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn constructors_resolve_immediately() {
        assert_eq!(block_on(val::<_, ()>("v")), Result::val("v"));
        assert_eq!(block_on(void::<u8>()), Result::void());
        assert_eq!(block_on(err::<(), _>(9)), Result::err(9));
    }

    #[test]
    fn constructors_box_into_async_result() {
        let pending: Vec<AsyncResult<'static, i32, String>> =
            vec![val(1).boxed(), err("x".to_string()).boxed()];
        let resolved: Vec<_> = pending.into_iter().map(block_on).collect();
        assert_eq!(resolved, vec![Result::val(1), Result::err("x".to_string())]);
    }

    #[test]
    fn unwrap_before_the_future_is_built() {
        let res: Result<i32, &str> = block_on(do_block(|u| {
            let early: i32 = u.unwrap(Result::err("eager"));
            async move { Result::val(early) }
        }));
        assert_eq!(res, Result::err("eager"));
    }

    #[test]
    fn panic_while_building_the_future_escapes() {
        let outcome = panic::catch_unwind(|| {
            block_on(do_block(|_u| -> Ready<Result<(), u8>> {
                panic!("no future built")
            }))
        });
        let payload = outcome.expect_err("the panic must leave the do-block");
        assert_eq!(payload.downcast_ref::<&str>(), Some(&"no future built"));
    }

    #[test]
    fn completes_with_the_callback_result() {
        let res: Result<String, u8> = block_on(do_block(|u| async move {
            let x = u.unwrap(val("foo").await);
            let y = u.unwrap(val("bar").await);
            Result::val(format!("{x}{y}"))
        }));
        assert_eq!(res, Result::val("foobar".to_string()));
    }
}
