//! Convert raised failures into returned result pairs.
//!
//! Instead of wrapping a call in `catch_unwind` or matching on its `Result`,
//! callers get back a [`Pair`] with exactly one of `(value, error)` populated:
//!
//! ```
//! use handled_core::{Call, invoke, wrap};
//!
//! let (value, error) = invoke(|| 42).into_tuple();
//! assert_eq!(value, Some(42));
//! assert!(error.is_none());
//!
//! let add = wrap(|a: i32, b: i32| a + b);
//! assert_eq!(add.call((2, 3)).into_value(), Some(5));
//! ```
//!
//! - **`invoke`**: call a zero-argument callable once and capture its failure
//! - **`capture`**: the futures the async entry points return
//! - **`wrap`**: turn an argument-taking callable into a pair-returning one
//!
//! Panics are only captured when the binary unwinds (`panic = "unwind"`, the
//! default). Captured failures are reported to `tracing` at debug level and
//! never re-raised.

mod capture;
mod invoke;
mod wrap;

pub use capture::{Capture, CaptureExt, TryCapture};
pub use invoke::{invoke, invoke_async, try_invoke, try_invoke_async};
pub use wrap::{
    Call, CallMut, Fallible, FallibleAsync, Plain, PlainAsync, Wrapped, try_wrap, try_wrap_async,
    wrap, wrap_async,
};

pub use handled_types::{Failure, Pair, Panic};
