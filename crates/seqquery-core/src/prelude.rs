//! Convenient re-exports for downstream crates.

pub use crate::config::{EmptyExtrema, QueryConfig};
pub use crate::error::{Error, Result};
pub use crate::key::Key;
pub use crate::numeric::ToNumber;
pub use crate::types::{JoinType, Scalar};
