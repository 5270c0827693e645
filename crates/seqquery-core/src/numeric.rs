//! Numeric coercion used by `sum`/`average`/`min`/`max` when no selector is given.
//!
//! Coercion never fails: values with no numeric reading become NaN, which then
//! propagates through the arithmetic the way callers expect from a fold.

use crate::types::Scalar;

pub trait ToNumber {
    fn to_number(&self) -> f64;
}

macro_rules! impl_to_number_lossless {
    ($($t:ty),*) => {
        $(
            impl ToNumber for $t {
                fn to_number(&self) -> f64 {
                    f64::from(*self)
                }
            }
        )*
    };
}

macro_rules! impl_to_number_cast {
    ($($t:ty),*) => {
        $(
            impl ToNumber for $t {
                fn to_number(&self) -> f64 {
                    *self as f64
                }
            }
        )*
    };
}

impl_to_number_lossless!(i8, i16, i32, u8, u16, u32, f32, f64);
impl_to_number_cast!(i64, i128, isize, u64, u128, usize);

impl ToNumber for bool {
    fn to_number(&self) -> f64 {
        if *self {
            1.0
        } else {
            0.0
        }
    }
}

/// Blank text reads as zero; anything else must parse as a float.
impl ToNumber for str {
    fn to_number(&self) -> f64 {
        let trimmed = self.trim();
        if trimmed.is_empty() {
            return 0.0;
        }
        trimmed.parse::<f64>().unwrap_or(f64::NAN)
    }
}

impl ToNumber for String {
    fn to_number(&self) -> f64 {
        self.as_str().to_number()
    }
}

impl<T: ToNumber + ?Sized> ToNumber for &T {
    fn to_number(&self) -> f64 {
        (**self).to_number()
    }
}

impl<T: ToNumber> ToNumber for Option<T> {
    fn to_number(&self) -> f64 {
        match self {
            Some(v) => v.to_number(),
            None => f64::NAN,
        }
    }
}

impl ToNumber for Scalar {
    fn to_number(&self) -> f64 {
        match self {
            Scalar::Null => 0.0,
            Scalar::Bool(b) => b.to_number(),
            Scalar::I32(i) => f64::from(*i),
            Scalar::I64(i) => *i as f64,
            Scalar::F32(f) => f64::from(*f),
            Scalar::F64(f) => *f,
            Scalar::Str(s) => s.to_number(),
            Scalar::Bin(_) => f64::NAN,
        }
    }
}
