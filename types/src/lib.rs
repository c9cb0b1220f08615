//! Core data types for handled.
//!
//! This crate contains the result pair returned in place of a raised failure,
//! plus the two shapes a captured failure can take. No IO, no async, and no
//! dependencies beyond `thiserror`.

mod failure;
mod pair;
mod panic;

pub use failure::Failure;
pub use pair::Pair;
pub use panic::Panic;
