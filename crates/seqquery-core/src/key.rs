//! Map keys for lookups and dictionaries built from dynamic values.
//!
//! Only string-like and integer-like values are legal keys. Statically-typed
//! callers can key lookups by any `Eq + Hash` type instead; `Key` covers the
//! case where the key is only known at runtime (e.g. a `Scalar` field).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::Scalar;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Key {
    Int(i64),
    Str(String),
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Int(i) => write!(f, "{i}"),
            Key::Str(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Key {
    fn from(v: i64) -> Self {
        Key::Int(v)
    }
}

impl From<i32> for Key {
    fn from(v: i32) -> Self {
        Key::Int(i64::from(v))
    }
}

impl From<u32> for Key {
    fn from(v: u32) -> Self {
        Key::Int(i64::from(v))
    }
}

impl From<&str> for Key {
    fn from(v: &str) -> Self {
        Key::Str(v.to_string())
    }
}

impl From<String> for Key {
    fn from(v: String) -> Self {
        Key::Str(v)
    }
}

fn float_key(f: f64) -> Result<Key> {
    if !f.is_finite() {
        return Err(Error::InvalidKeyType(format!(
            "non-finite number {f} cannot be used as a key"
        )));
    }
    // 2^63 is the first float past i64::MAX; i64::MIN itself is exact.
    let upper = -(i64::MIN as f64);
    if f.fract() != 0.0 || f < i64::MIN as f64 || f >= upper {
        return Err(Error::InvalidKeyType(format!(
            "fractional or out-of-range number {f} cannot be used as a key"
        )));
    }
    Ok(Key::Int(f as i64))
}

impl TryFrom<&Scalar> for Key {
    type Error = Error;

    fn try_from(value: &Scalar) -> Result<Self> {
        match value {
            Scalar::I32(i) => Ok(Key::Int(i64::from(*i))),
            Scalar::I64(i) => Ok(Key::Int(*i)),
            Scalar::F32(f) => float_key(f64::from(*f)),
            Scalar::F64(f) => float_key(*f),
            Scalar::Str(s) => Ok(Key::Str(s.clone())),
            other => Err(Error::InvalidKeyType(format!(
                "{} values cannot be used as keys",
                other.type_name()
            ))),
        }
    }
}

impl TryFrom<Scalar> for Key {
    type Error = Error;

    fn try_from(value: Scalar) -> Result<Self> {
        match value {
            Scalar::Str(s) => Ok(Key::Str(s)),
            other => Key::try_from(&other),
        }
    }
}

impl TryFrom<f64> for Key {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self> {
        float_key(value)
    }
}

impl TryFrom<u64> for Key {
    type Error = Error;

    fn try_from(value: u64) -> Result<Self> {
        i64::try_from(value)
            .map(Key::Int)
            .map_err(|_| Error::InvalidKeyType(format!("{value} overflows an integer key")))
    }
}

impl TryFrom<usize> for Key {
    type Error = Error;

    fn try_from(value: usize) -> Result<Self> {
        i64::try_from(value)
            .map(Key::Int)
            .map_err(|_| Error::InvalidKeyType(format!("{value} overflows an integer key")))
    }
}
