#![forbid(unsafe_code)]
//! seqquery-core: shared vocabulary for the seqquery operators.
//!
//! Errors, configuration, dynamic `Scalar` values, lookup `Key`s and the
//! `ToNumber` coercion live here. No operator logic; see `seqquery-operators`.

pub mod config;
pub mod error;
pub mod key;
pub mod numeric;
pub mod prelude;
pub mod types;

pub use error::{Error, Result};
