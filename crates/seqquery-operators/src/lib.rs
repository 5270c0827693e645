#![forbid(unsafe_code)]
//! seqquery-operators: eager relational operators over slices
//! (lookup/set algebra/join/order/aggregate/slice/generate).
//!
//! Design intent:
//! - Every operator is a pure, synchronous function of its inputs and returns
//!   a freshly allocated `Vec`/map; inputs are borrowed and never mutated.
//! - Selectors are called once per element per pass.
//! - Operators that consult `QueryConfig` have a `*_with` variant; the plain
//!   form uses `QueryConfig::default()`.

pub mod metrics;
pub mod traits;

pub mod aggregate;
pub mod generate;
pub mod lookup;
pub mod project;
pub mod set_ops;
pub mod slice;

pub mod join;
pub mod sort;

pub use lookup::{Dictionary, Lookup};
pub use sort::OrderSpec;
pub use traits::SequenceExt;
