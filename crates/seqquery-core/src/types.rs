//! Dynamically-typed element values.
//!
//! Most callers query strongly-typed slices and never touch this module.
//! `Scalar` exists for heterogeneous data (decoded records, loosely-typed
//! inputs) where keys, truthiness and ordering must be decided at runtime.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Scalar {
    Null,
    Bool(bool),
    I32(i32),
    I64(i64),
    F32(f32),
    F64(f64),
    Str(String),
    Bin(Vec<u8>),
}

impl Scalar {
    /// Human-readable type name, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Scalar::Null => "null",
            Scalar::Bool(_) => "bool",
            Scalar::I32(_) => "i32",
            Scalar::I64(_) => "i64",
            Scalar::F32(_) => "f32",
            Scalar::F64(_) => "f64",
            Scalar::Str(_) => "string",
            Scalar::Bin(_) => "binary",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Scalar::Null)
    }

    /// Falsy values are `Null`, `false`, zero, NaN, the empty string and
    /// empty binary. Everything else is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Scalar::Null => false,
            Scalar::Bool(b) => *b,
            Scalar::I32(i) => *i != 0,
            Scalar::I64(i) => *i != 0,
            Scalar::F32(f) => *f != 0.0 && !f.is_nan(),
            Scalar::F64(f) => *f != 0.0 && !f.is_nan(),
            Scalar::Str(s) => !s.is_empty(),
            Scalar::Bin(b) => !b.is_empty(),
        }
    }

    /// Total order over scalars.
    ///
    /// Nulls sort first. Numbers of any width compare by value, with NaN
    /// after every other number. Other type mixes are ordered by rank:
    /// null, bool, number, string, binary.
    pub fn total_cmp(&self, other: &Scalar) -> Ordering {
        scalar_cmp(self, other)
    }

    /// Integer variants widened to `i64`.
    fn as_int(&self) -> Option<i64> {
        match self {
            Scalar::I32(i) => Some(i64::from(*i)),
            Scalar::I64(i) => Some(*i),
            _ => None,
        }
    }

    /// Any numeric variant as `f64`.
    fn as_float(&self) -> Option<f64> {
        match self {
            Scalar::I32(i) => Some(f64::from(*i)),
            Scalar::I64(i) => Some(*i as f64),
            Scalar::F32(f) => Some(f64::from(*f)),
            Scalar::F64(f) => Some(*f),
            _ => None,
        }
    }
}

/// Equality agrees with [`Scalar::total_cmp`]: `I32(3) == F64(3.0)` and NaN
/// equals NaN.
impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        scalar_cmp(self, other) == Ordering::Equal
    }
}

impl PartialOrd for Scalar {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(scalar_cmp(self, other))
    }
}

impl From<bool> for Scalar {
    fn from(v: bool) -> Self {
        Scalar::Bool(v)
    }
}

impl From<i32> for Scalar {
    fn from(v: i32) -> Self {
        Scalar::I32(v)
    }
}

impl From<i64> for Scalar {
    fn from(v: i64) -> Self {
        Scalar::I64(v)
    }
}

impl From<f32> for Scalar {
    fn from(v: f32) -> Self {
        Scalar::F32(v)
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Scalar::F64(v)
    }
}

impl From<&str> for Scalar {
    fn from(v: &str) -> Self {
        Scalar::Str(v.to_string())
    }
}

impl From<String> for Scalar {
    fn from(v: String) -> Self {
        Scalar::Str(v)
    }
}

impl<T: Into<Scalar>> From<Option<T>> for Scalar {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Scalar::Null)
    }
}

/// Relational join variants; they differ in which side's unmatched rows survive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JoinType {
    Inner,
    Left,
    Right,
    Full,
}

fn float_cmp(x: f64, y: f64) -> Ordering {
    if x.is_nan() && y.is_nan() {
        Ordering::Equal
    } else if x.is_nan() {
        Ordering::Greater
    } else if y.is_nan() {
        Ordering::Less
    } else {
        x.partial_cmp(&y).unwrap_or(Ordering::Equal)
    }
}

fn scalar_cmp(a: &Scalar, b: &Scalar) -> Ordering {
    use Scalar::*;

    match (a, b) {
        (Null, Null) => Ordering::Equal,
        (Null, _) => Ordering::Less,
        (_, Null) => Ordering::Greater,
        (Bool(x), Bool(y)) => x.cmp(y),
        (Str(x), Str(y)) => x.cmp(y),
        (Bin(x), Bin(y)) => x.cmp(y),
        _ => match (a.as_int(), b.as_int()) {
            (Some(x), Some(y)) => x.cmp(&y),
            _ => match (a.as_float(), b.as_float()) {
                (Some(x), Some(y)) => float_cmp(x, y),
                // Mixed types: order by rank
                _ => scalar_type_order(a).cmp(&scalar_type_order(b)),
            },
        },
    }
}

fn scalar_type_order(s: &Scalar) -> u8 {
    use Scalar::*;
    match s {
        Null => 0,
        Bool(_) => 1,
        I32(_) | I64(_) | F32(_) | F64(_) => 2,
        Str(_) => 3,
        Bin(_) => 4,
    }
}
