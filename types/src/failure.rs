//! Failures captured from fallible callables.

use thiserror::Error;

use crate::Panic;

/// What a fallible callable raised: either the `Err` it returned or the panic
/// it unwound with. The error is kept as returned, without wrapping or
/// classification.
#[derive(Debug, Error)]
pub enum Failure<E> {
    #[error("{0}")]
    Returned(E),
    #[error("panicked: {0}")]
    Panicked(#[from] Panic),
}

impl<E> Failure<E> {
    #[must_use]
    pub fn is_panic(&self) -> bool {
        matches!(self, Self::Panicked(_))
    }

    #[must_use]
    pub fn as_error(&self) -> Option<&E> {
        match self {
            Self::Returned(error) => Some(error),
            Self::Panicked(_) => None,
        }
    }

    #[must_use]
    pub fn as_panic(&self) -> Option<&Panic> {
        match self {
            Self::Returned(_) => None,
            Self::Panicked(panic) => Some(panic),
        }
    }

    #[must_use]
    pub fn into_error(self) -> Option<E> {
        match self {
            Self::Returned(error) => Some(error),
            Self::Panicked(_) => None,
        }
    }
}
