#![forbid(unsafe_code)]
//! seqquery: eager LINQ-style query operators over Rust slices.
//!
//! Re-exports the workspace crates under one roof:
//! - [`base`]: errors, `QueryConfig`, `Key`, `Scalar`, `ToNumber`;
//! - [`ops`]: the operators, as free functions and the [`SequenceExt`] trait.

pub use seqquery_core as base;
pub use seqquery_operators as ops;

pub use seqquery_core::prelude::*;
pub use seqquery_operators::{Dictionary, Lookup, OrderSpec, SequenceExt};
