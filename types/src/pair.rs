//! The result pair.
//!
//! A `Pair` is what callers receive instead of a raised failure: an ordered
//! `(value, error)` pair with exactly one slot populated.

/// This type enforces the invariant that exactly one of the two slots is
/// populated. The representation is private, so the only ways to build a
/// `Pair` are [`Pair::from_value`], [`Pair::from_error`] and conversion from a
/// `Result`. Both-populated and both-empty pairs cannot be expressed.
///
/// # Invariants
///
/// - `is_value() != is_error()` for every pair
/// - `into_tuple()` yields `(Some(_), None)` or `(None, Some(_))`, never anything else
///
/// The representation is private, so callers cannot reach into it and
/// rearrange the slots:
///
/// ```compile_fail
/// use handled_types::Pair;
///
/// let pair = Pair::<i32, &str>::from_value(1);
/// let _slot = pair.0;
/// ```
///
/// Dropping a pair without looking at it is flagged:
///
/// ```compile_fail
/// use handled_types::Pair;
///
/// #[deny(unused_must_use)]
/// fn main() {
///     Pair::<i32, &str>::from_error("ignored");
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use = "a pair carries an error slot that should be inspected"]
pub struct Pair<T, E>(Slot<T, E>);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Slot<T, E> {
    Value(T),
    Error(E),
}

impl<T, E> Pair<T, E> {
    pub const fn from_value(value: T) -> Self {
        Self(Slot::Value(value))
    }

    pub const fn from_error(error: E) -> Self {
        Self(Slot::Error(error))
    }

    #[must_use]
    pub const fn is_value(&self) -> bool {
        matches!(self.0, Slot::Value(_))
    }

    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self.0, Slot::Error(_))
    }

    #[must_use]
    pub const fn value_ref(&self) -> Option<&T> {
        match &self.0 {
            Slot::Value(value) => Some(value),
            Slot::Error(_) => None,
        }
    }

    #[must_use]
    pub const fn error_ref(&self) -> Option<&E> {
        match &self.0 {
            Slot::Value(_) => None,
            Slot::Error(error) => Some(error),
        }
    }

    /// Split into the `(value, error)` shape, for `let (value, err) = ...` call sites.
    #[must_use]
    pub fn into_tuple(self) -> (Option<T>, Option<E>) {
        match self.0 {
            Slot::Value(value) => (Some(value), None),
            Slot::Error(error) => (None, Some(error)),
        }
    }

    #[must_use]
    pub fn into_value(self) -> Option<T> {
        match self.0 {
            Slot::Value(value) => Some(value),
            Slot::Error(_) => None,
        }
    }

    #[must_use]
    pub fn into_error(self) -> Option<E> {
        match self.0 {
            Slot::Value(_) => None,
            Slot::Error(error) => Some(error),
        }
    }

    pub fn into_result(self) -> Result<T, E> {
        match self.0 {
            Slot::Value(value) => Ok(value),
            Slot::Error(error) => Err(error),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Pair<U, E> {
        match self.0 {
            Slot::Value(value) => Pair::from_value(f(value)),
            Slot::Error(error) => Pair::from_error(error),
        }
    }

    pub fn map_error<F>(self, f: impl FnOnce(E) -> F) -> Pair<T, F> {
        match self.0 {
            Slot::Value(value) => Pair::from_value(value),
            Slot::Error(error) => Pair::from_error(f(error)),
        }
    }
}

impl<T, E> From<Result<T, E>> for Pair<T, E> {
    fn from(value: Result<T, E>) -> Self {
        match value {
            Ok(value) => Self::from_value(value),
            Err(error) => Self::from_error(error),
        }
    }
}

impl<T, E> From<Pair<T, E>> for Result<T, E> {
    fn from(value: Pair<T, E>) -> Self {
        value.into_result()
    }
}
