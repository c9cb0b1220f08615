//! Futures that settle into result pairs.
//!
//! [`Capture`] and [`TryCapture`] are nameable compositions of `futures-util`
//! combinators. The left branch is an already-settled pair (the callable
//! panicked before producing a future); the right branch drives the inner
//! future under `catch_unwind`. Dropping either one drops the inner future,
//! so cancellation stays whatever the inner future makes of it.

use std::any::Any;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::thread;

use futures_util::FutureExt;
use futures_util::future::{CatchUnwind, Either, Map, Ready};
use tracing::debug;

use handled_types::{Failure, Pair, Panic};

/// Future returned by [`invoke_async`](crate::invoke_async) and
/// [`CaptureExt::capture`]. Resolves to `Pair<Fut::Output, Panic>`.
pub type Capture<Fut> = Either<
    Ready<Pair<<Fut as Future>::Output, Panic>>,
    Map<
        CatchUnwind<AssertUnwindSafe<Fut>>,
        fn(thread::Result<<Fut as Future>::Output>) -> Pair<<Fut as Future>::Output, Panic>,
    >,
>;

/// Future returned by [`try_invoke_async`](crate::try_invoke_async) and
/// [`CaptureExt::try_capture`]. Resolves to `Pair<T, Failure<E>>`.
pub type TryCapture<Fut, T, E> = Either<
    Ready<Pair<T, Failure<E>>>,
    Map<
        CatchUnwind<AssertUnwindSafe<Fut>>,
        fn(thread::Result<Result<T, E>>) -> Pair<T, Failure<E>>,
    >,
>;

/// Capture an already-built future.
pub trait CaptureExt: Future + Sized {
    /// Resolve to a pair, with a panic while polling in the error slot.
    fn capture(self) -> Capture<Self> {
        capture(self)
    }

    /// Resolve to a pair, with an `Err` output or a panic in the error slot.
    fn try_capture<T, E>(self) -> TryCapture<Self, T, E>
    where
        Self: Future<Output = Result<T, E>>,
    {
        try_capture(self)
    }
}

impl<Fut: Future> CaptureExt for Fut {}

pub(crate) fn capture<Fut: Future>(fut: Fut) -> Capture<Fut> {
    let on_settle: fn(thread::Result<Fut::Output>) -> Pair<Fut::Output, Panic> = settle;
    Either::Right(AssertUnwindSafe(fut).catch_unwind().map(on_settle))
}

pub(crate) fn try_capture<Fut, T, E>(fut: Fut) -> TryCapture<Fut, T, E>
where
    Fut: Future<Output = Result<T, E>>,
{
    let on_settle: fn(thread::Result<Result<T, E>>) -> Pair<T, Failure<E>> = try_settle;
    Either::Right(AssertUnwindSafe(fut).catch_unwind().map(on_settle))
}

pub(crate) fn settle<T>(outcome: thread::Result<T>) -> Pair<T, Panic> {
    match outcome {
        Ok(value) => Pair::from_value(value),
        Err(payload) => Pair::from_error(captured_panic(payload)),
    }
}

pub(crate) fn try_settle<T, E>(outcome: thread::Result<Result<T, E>>) -> Pair<T, Failure<E>> {
    match outcome {
        Ok(Ok(value)) => Pair::from_value(value),
        Ok(Err(error)) => {
            debug!(kind = "error", "Captured failure at invocation boundary");
            Pair::from_error(Failure::Returned(error))
        }
        Err(payload) => Pair::from_error(Failure::Panicked(captured_panic(payload))),
    }
}

fn captured_panic(payload: Box<dyn Any + Send>) -> Panic {
    let panic = Panic::new(payload);
    debug!(
        kind = "panic",
        reason = panic.message(),
        "Captured failure at invocation boundary"
    );
    panic
}
