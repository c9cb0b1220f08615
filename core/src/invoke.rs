//! Invoke-and-capture.
//!
//! Every entry point calls its callable exactly once, immediately, inside
//! `catch_unwind`. Whether the result is delivered as a pair or as a future
//! resolving to a pair is decided by which entry point the caller picks, not
//! by inspecting the callable's return value.
//!
//! | Callable returns          | Entry point          | Yields                      |
//! |---------------------------|----------------------|-----------------------------|
//! | `T`                       | [`invoke`]           | `Pair<T, Panic>`            |
//! | `Result<T, E>`            | [`try_invoke`]       | `Pair<T, Failure<E>>`       |
//! | `impl Future<Output = T>` | [`invoke_async`]     | [`Capture`] → `Pair<T, Panic>` |
//! | `impl Future<Output = Result<T, E>>` | [`try_invoke_async`] | [`TryCapture`] → `Pair<T, Failure<E>>` |

use std::future::Future;
use std::panic::{AssertUnwindSafe, catch_unwind};

use futures_util::future::{self, Either};

use handled_types::{Failure, Pair, Panic};

use crate::capture::{Capture, TryCapture, capture, settle, try_capture, try_settle};

/// Call `f` and capture a panic as the error slot.
pub fn invoke<F, T>(f: F) -> Pair<T, Panic>
where
    F: FnOnce() -> T,
{
    settle(catch_unwind(AssertUnwindSafe(f)))
}

/// Call `f` and capture either its `Err` or a panic as the error slot.
pub fn try_invoke<F, T, E>(f: F) -> Pair<T, Failure<E>>
where
    F: FnOnce() -> Result<T, E>,
{
    try_settle(catch_unwind(AssertUnwindSafe(f)))
}

/// Call `f` now and capture the future it returns.
///
/// A panic raised while `f` itself runs (before any future exists) settles the
/// returned future immediately; it resolves on first poll.
pub fn invoke_async<F, Fut>(f: F) -> Capture<Fut>
where
    F: FnOnce() -> Fut,
    Fut: Future,
{
    match catch_unwind(AssertUnwindSafe(f)) {
        Ok(fut) => capture(fut),
        Err(payload) => Either::Left(future::ready(settle(Err(payload)))),
    }
}

/// Call `f` now and capture the fallible future it returns.
pub fn try_invoke_async<F, Fut, T, E>(f: F) -> TryCapture<Fut, T, E>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    match catch_unwind(AssertUnwindSafe(f)) {
        Ok(fut) => try_capture(fut),
        Err(payload) => Either::Left(future::ready(try_settle(Err(payload)))),
    }
}
