//! Query configuration that callers can serialize/deserialize.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// What `min`/`max` return for an empty sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyExtrema {
    /// `min` yields `+inf`, `max` yields `-inf`.
    #[default]
    Infinity,
    /// Fail with `Error::EmptySequence`.
    Error,
}

impl FromStr for EmptyExtrema {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "infinity" | "inf" => Ok(EmptyExtrema::Infinity),
            "error" => Ok(EmptyExtrema::Error),
            other => Err(Error::Config(format!(
                "unknown empty-extrema policy '{other}' (expected 'infinity' or 'error')"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    /// Result of `min`/`max` over an empty sequence.
    pub empty_extrema: EmptyExtrema,

    /// Use hash-set containment for the `Eq + Hash` set operators. When false
    /// they run the same linear scan as the comparer variants.
    pub hash_fast_path: bool,

    /// Initial capacity of the key index built by lookups and joins.
    pub lookup_capacity_hint: Option<usize>,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            empty_extrema: EmptyExtrema::Infinity,
            hash_fast_path: true,
            lookup_capacity_hint: None,
        }
    }
}

impl QueryConfig {
    /// Create a config from environment variables, falling back to defaults.
    ///
    /// Environment variables:
    /// - `SEQQUERY_EMPTY_EXTREMA`: `infinity` or `error`
    /// - `SEQQUERY_HASH_FAST_PATH`: `true` or `false`
    /// - `SEQQUERY_LOOKUP_CAPACITY`: initial lookup capacity
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(s) = std::env::var("SEQQUERY_EMPTY_EXTREMA") {
            if let Ok(v) = s.parse::<EmptyExtrema>() {
                cfg.empty_extrema = v;
            }
        }

        if let Ok(s) = std::env::var("SEQQUERY_HASH_FAST_PATH") {
            if let Ok(v) = s.trim().parse::<bool>() {
                cfg.hash_fast_path = v;
            }
        }

        if let Ok(s) = std::env::var("SEQQUERY_LOOKUP_CAPACITY") {
            if let Ok(v) = s.trim().parse::<usize>() {
                cfg.lookup_capacity_hint = Some(v);
            }
        }

        cfg
    }

    pub fn with_empty_extrema(mut self, policy: EmptyExtrema) -> Self {
        self.empty_extrema = policy;
        self
    }

    pub fn with_hash_fast_path(mut self, enabled: bool) -> Self {
        self.hash_fast_path = enabled;
        self
    }

    pub fn with_lookup_capacity(mut self, capacity: usize) -> Self {
        self.lookup_capacity_hint = Some(capacity);
        self
    }
}
