//! Captured panic payloads.

use std::any::Any;
use std::error::Error;
use std::fmt;
use std::panic::resume_unwind;

const UNKNOWN_PANIC: &str = "unknown panic";

/// A panic payload captured at an invocation boundary.
///
/// The payload is kept exactly as it was unwound. [`Panic::message`] reads the
/// usual `&'static str` / `String` payloads; anything else reports
/// `"unknown panic"` while the original payload stays available through
/// [`Panic::payload`].
pub struct Panic {
    payload: Box<dyn Any + Send>,
}

impl Panic {
    #[must_use]
    pub fn new(payload: Box<dyn Any + Send>) -> Self {
        Self { payload }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        if let Some(s) = self.payload.downcast_ref::<&'static str>() {
            s
        } else if let Some(s) = self.payload.downcast_ref::<String>() {
            s.as_str()
        } else {
            UNKNOWN_PANIC
        }
    }

    #[must_use]
    pub fn payload(&self) -> &(dyn Any + Send) {
        &*self.payload
    }

    #[must_use]
    pub fn into_payload(self) -> Box<dyn Any + Send> {
        self.payload
    }

    /// Continue unwinding with the original payload.
    pub fn resume(self) -> ! {
        resume_unwind(self.payload)
    }
}

impl fmt::Debug for Panic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Panic").field(&self.message()).finish()
    }
}

impl fmt::Display for Panic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl Error for Panic {}
