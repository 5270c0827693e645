//! Sequence generators: arithmetic ranges and positional zips.

use seqquery_core::error::{Error, Result};

/// Numbers that `range` can step through.
pub trait RangeStep: Copy + PartialOrd + std::fmt::Display {
    const ZERO: Self;
    const ONE: Self;

    /// `self + step`, or `None` once the next value is not representable.
    fn advance(self, step: Self) -> Option<Self>;

    fn is_finite_step(self) -> bool {
        true
    }
}

macro_rules! impl_range_step_int {
    ($($t:ty),*) => {
        $(
            impl RangeStep for $t {
                const ZERO: Self = 0;
                const ONE: Self = 1;

                fn advance(self, step: Self) -> Option<Self> {
                    self.checked_add(step)
                }
            }
        )*
    };
}

macro_rules! impl_range_step_float {
    ($($t:ty),*) => {
        $(
            impl RangeStep for $t {
                const ZERO: Self = 0.0;
                const ONE: Self = 1.0;

                fn advance(self, step: Self) -> Option<Self> {
                    Some(self + step)
                }

                fn is_finite_step(self) -> bool {
                    self.is_finite()
                }
            }
        )*
    };
}

impl_range_step_int!(i32, i64, isize);
impl_range_step_float!(f32, f64);

/// `start, start + step, …` while below `stop` (positive step) or above it
/// (negative step). A step pointing away from `stop` yields an empty range.
pub fn range<N: RangeStep>(start: N, stop: N, step: N) -> Result<Vec<N>> {
    if step == N::ZERO {
        return Err(Error::InvalidArgument(
            "range() step argument must not be zero".into(),
        ));
    }
    if !step.is_finite_step() {
        return Err(Error::InvalidArgument(format!(
            "range() step argument must be finite, got {step}"
        )));
    }

    let ascending = step > N::ZERO;
    let mut out = Vec::new();
    let mut current = start;
    while (ascending && current < stop) || (!ascending && current > stop) {
        out.push(current);
        match current.advance(step) {
            Some(next) if next != current => current = next,
            Some(_) => {
                return Err(Error::InvalidArgument(format!(
                    "range() step {step} is too small to advance past {current}"
                )))
            }
            None => break,
        }
    }
    Ok(out)
}

/// `range(0, stop, 1)`.
pub fn range_to<N: RangeStep>(stop: N) -> Result<Vec<N>> {
    range(N::ZERO, stop, N::ONE)
}

/// `range(start, stop, 1)`.
pub fn range_between<N: RangeStep>(start: N, stop: N) -> Result<Vec<N>> {
    range(start, stop, N::ONE)
}

/// Pair elements positionally; the output is as long as the shorter input.
pub fn zip<A, B, R, F>(seq: &[A], other: &[B], mut selector: F) -> Vec<R>
where
    F: FnMut(&A, &B) -> R,
{
    seq.iter()
        .zip(other.iter())
        .map(|(a, b)| selector(a, b))
        .collect()
}

pub fn zip3<A, B, C, R, F>(seq: &[A], other1: &[B], other2: &[C], mut selector: F) -> Vec<R>
where
    F: FnMut(&A, &B, &C) -> R,
{
    let len = seq.len().min(other1.len()).min(other2.len());
    (0..len)
        .map(|i| selector(&seq[i], &other1[i], &other2[i]))
        .collect()
}

pub fn zip4<A, B, C, D, R, F>(
    seq: &[A],
    other1: &[B],
    other2: &[C],
    other3: &[D],
    mut selector: F,
) -> Vec<R>
where
    F: FnMut(&A, &B, &C, &D) -> R,
{
    let len = seq
        .len()
        .min(other1.len())
        .min(other2.len())
        .min(other3.len());
    (0..len)
        .map(|i| selector(&seq[i], &other1[i], &other2[i], &other3[i]))
        .collect()
}

pub fn zip5<A, B, C, D, E, R, F>(
    seq: &[A],
    other1: &[B],
    other2: &[C],
    other3: &[D],
    other4: &[E],
    mut selector: F,
) -> Vec<R>
where
    F: FnMut(&A, &B, &C, &D, &E) -> R,
{
    let len = seq
        .len()
        .min(other1.len())
        .min(other2.len())
        .min(other3.len())
        .min(other4.len());
    (0..len)
        .map(|i| selector(&seq[i], &other1[i], &other2[i], &other3[i], &other4[i]))
        .collect()
}
