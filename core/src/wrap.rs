//! Wrap a callable so that calling it returns a pair instead of raising.
//!
//! The wrapped callable takes the original argument list as a tuple:
//! `wrap(|a: i32, b: i32| a + b).call((2, 3))`. Each call binds the arguments
//! into a zero-argument closure and hands it to the matching `invoke` entry
//! point, so a synchronous callable stays synchronous and an asynchronous one
//! yields a future.

use std::any::type_name;
use std::fmt;
use std::future::Future;
use std::marker::PhantomData;

use handled_types::{Failure, Pair, Panic};

use crate::capture::{Capture, TryCapture};
use crate::invoke::{invoke, invoke_async, try_invoke, try_invoke_async};

/// Callable returns a plain value.
#[derive(Debug, Clone, Copy)]
pub struct Plain;

/// Callable returns `Result<T, E>`.
#[derive(Debug, Clone, Copy)]
pub struct Fallible;

/// Callable returns a future.
#[derive(Debug, Clone, Copy)]
pub struct PlainAsync;

/// Callable returns a future of `Result<T, E>`.
#[derive(Debug, Clone, Copy)]
pub struct FallibleAsync;

/// A callable whose calls return pairs. `K` selects the capture flavour.
pub struct Wrapped<F, K> {
    callable: F,
    _kind: PhantomData<fn() -> K>,
}

impl<F, K> Wrapped<F, K> {
    fn new(callable: F) -> Self {
        Self {
            callable,
            _kind: PhantomData,
        }
    }

    /// Unwrap the original callable.
    pub fn into_inner(self) -> F {
        self.callable
    }
}

impl<F: Clone, K> Clone for Wrapped<F, K> {
    fn clone(&self) -> Self {
        Self::new(self.callable.clone())
    }
}

impl<F, K> fmt::Debug for Wrapped<F, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wrapped")
            .field("kind", &type_name::<K>())
            .finish_non_exhaustive()
    }
}

/// Wrap a callable returning a plain value; panics fill the error slot.
pub fn wrap<F>(callable: F) -> Wrapped<F, Plain> {
    Wrapped::new(callable)
}

/// Wrap a callable returning `Result`; `Err` and panics fill the error slot.
pub fn try_wrap<F>(callable: F) -> Wrapped<F, Fallible> {
    Wrapped::new(callable)
}

/// Wrap a callable returning a future; each call yields a [`Capture`].
pub fn wrap_async<F>(callable: F) -> Wrapped<F, PlainAsync> {
    Wrapped::new(callable)
}

/// Wrap a callable returning a future of `Result`; each call yields a [`TryCapture`].
pub fn try_wrap_async<F>(callable: F) -> Wrapped<F, FallibleAsync> {
    Wrapped::new(callable)
}

/// Call with an argument tuple.
///
/// Implemented for [`Wrapped`] callables of arity 0 through 8 whose callable is
/// `Fn`. Stateful `FnMut` callables go through [`CallMut`].
pub trait Call<Args> {
    type Output;

    fn call(&self, args: Args) -> Self::Output;
}

/// Call with an argument tuple, allowing the callable to mutate captured state.
pub trait CallMut<Args> {
    type Output;

    fn call_mut(&mut self, args: Args) -> Self::Output;
}

macro_rules! impl_call {
    ($($arg:ident: $ty:ident),*) => {
        impl<F, T, $($ty,)*> Call<($($ty,)*)> for Wrapped<F, Plain>
        where
            F: Fn($($ty),*) -> T,
        {
            type Output = Pair<T, Panic>;

            fn call(&self, ($($arg,)*): ($($ty,)*)) -> Self::Output {
                invoke(|| (self.callable)($($arg),*))
            }
        }

        impl<F, T, E, $($ty,)*> Call<($($ty,)*)> for Wrapped<F, Fallible>
        where
            F: Fn($($ty),*) -> Result<T, E>,
        {
            type Output = Pair<T, Failure<E>>;

            fn call(&self, ($($arg,)*): ($($ty,)*)) -> Self::Output {
                try_invoke(|| (self.callable)($($arg),*))
            }
        }

        impl<F, Fut, $($ty,)*> Call<($($ty,)*)> for Wrapped<F, PlainAsync>
        where
            F: Fn($($ty),*) -> Fut,
            Fut: Future,
        {
            type Output = Capture<Fut>;

            fn call(&self, ($($arg,)*): ($($ty,)*)) -> Self::Output {
                invoke_async(|| (self.callable)($($arg),*))
            }
        }

        impl<F, Fut, T, E, $($ty,)*> Call<($($ty,)*)> for Wrapped<F, FallibleAsync>
        where
            F: Fn($($ty),*) -> Fut,
            Fut: Future<Output = Result<T, E>>,
        {
            type Output = TryCapture<Fut, T, E>;

            fn call(&self, ($($arg,)*): ($($ty,)*)) -> Self::Output {
                try_invoke_async(|| (self.callable)($($arg),*))
            }
        }

        impl<F, T, $($ty,)*> CallMut<($($ty,)*)> for Wrapped<F, Plain>
        where
            F: FnMut($($ty),*) -> T,
        {
            type Output = Pair<T, Panic>;

            fn call_mut(&mut self, ($($arg,)*): ($($ty,)*)) -> Self::Output {
                invoke(|| (self.callable)($($arg),*))
            }
        }

        impl<F, T, E, $($ty,)*> CallMut<($($ty,)*)> for Wrapped<F, Fallible>
        where
            F: FnMut($($ty),*) -> Result<T, E>,
        {
            type Output = Pair<T, Failure<E>>;

            fn call_mut(&mut self, ($($arg,)*): ($($ty,)*)) -> Self::Output {
                try_invoke(|| (self.callable)($($arg),*))
            }
        }

        impl<F, Fut, $($ty,)*> CallMut<($($ty,)*)> for Wrapped<F, PlainAsync>
        where
            F: FnMut($($ty),*) -> Fut,
            Fut: Future,
        {
            type Output = Capture<Fut>;

            fn call_mut(&mut self, ($($arg,)*): ($($ty,)*)) -> Self::Output {
                invoke_async(|| (self.callable)($($arg),*))
            }
        }

        impl<F, Fut, T, E, $($ty,)*> CallMut<($($ty,)*)> for Wrapped<F, FallibleAsync>
        where
            F: FnMut($($ty),*) -> Fut,
            Fut: Future<Output = Result<T, E>>,
        {
            type Output = TryCapture<Fut, T, E>;

            fn call_mut(&mut self, ($($arg,)*): ($($ty,)*)) -> Self::Output {
                try_invoke_async(|| (self.callable)($($arg),*))
            }
        }
    };
}

impl_call!();
impl_call!(a1: A1);
impl_call!(a1: A1, a2: A2);
impl_call!(a1: A1, a2: A2, a3: A3);
impl_call!(a1: A1, a2: A2, a3: A3, a4: A4);
impl_call!(a1: A1, a2: A2, a3: A3, a4: A4, a5: A5);
impl_call!(a1: A1, a2: A2, a3: A3, a4: A4, a5: A5, a6: A6);
impl_call!(a1: A1, a2: A2, a3: A3, a4: A4, a5: A5, a6: A6, a7: A7);
impl_call!(a1: A1, a2: A2, a3: A3, a4: A4, a5: A5, a6: A6, a7: A7, a8: A8);
