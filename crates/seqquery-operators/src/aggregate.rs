//! Numeric aggregation: `count`, `sum`, `average`, `min`, `max`.
//!
//! Without a selector, elements are coerced through `ToNumber`. Selectors may
//! return any `ToNumber` type. NaN propagates through every fold.
//!
//! Empty input:
//! - `sum` is 0;
//! - `average` is NaN (0 / 0);
//! - `min`/`max` follow `QueryConfig::empty_extrema`: `+inf`/`-inf` by
//!   default, or `Error::EmptySequence`.

use seqquery_core::config::{EmptyExtrema, QueryConfig};
use seqquery_core::error::{Error, Result};
use seqquery_core::numeric::ToNumber;

pub fn count<T>(seq: &[T]) -> usize {
    seq.len()
}

pub fn count_where<T, P>(seq: &[T], mut predicate: P) -> usize
where
    P: FnMut(&T, usize, &[T]) -> bool,
{
    seq.iter()
        .enumerate()
        .filter(|(i, item)| predicate(*item, *i, seq))
        .count()
}

pub fn sum<T: ToNumber>(seq: &[T]) -> f64 {
    seq.iter().fold(0.0, |acc, item| acc + item.to_number())
}

pub fn sum_by<T, N, F>(seq: &[T], mut selector: F) -> f64
where
    N: ToNumber,
    F: FnMut(&T, usize, &[T]) -> N,
{
    seq.iter()
        .enumerate()
        .fold(0.0, |acc, (i, item)| acc + selector(item, i, seq).to_number())
}

pub fn average<T: ToNumber>(seq: &[T]) -> f64 {
    sum(seq) / seq.len() as f64
}

pub fn average_by<T, N, F>(seq: &[T], selector: F) -> f64
where
    N: ToNumber,
    F: FnMut(&T, usize, &[T]) -> N,
{
    sum_by(seq, selector) / seq.len() as f64
}

fn nan_min(acc: f64, v: f64) -> f64 {
    if acc.is_nan() || v.is_nan() {
        f64::NAN
    } else {
        acc.min(v)
    }
}

fn nan_max(acc: f64, v: f64) -> f64 {
    if acc.is_nan() || v.is_nan() {
        f64::NAN
    } else {
        acc.max(v)
    }
}

fn extremum<I>(
    values: I,
    seed: f64,
    fold: fn(f64, f64) -> f64,
    op: &'static str,
    config: &QueryConfig,
) -> Result<f64>
where
    I: ExactSizeIterator<Item = f64>,
{
    if values.len() == 0 && config.empty_extrema == EmptyExtrema::Error {
        return Err(Error::EmptySequence { op });
    }
    Ok(values.fold(seed, fold))
}

pub fn min<T: ToNumber>(seq: &[T]) -> Result<f64> {
    min_with(seq, &QueryConfig::default())
}

pub fn min_with<T: ToNumber>(seq: &[T], config: &QueryConfig) -> Result<f64> {
    extremum(
        seq.iter().map(ToNumber::to_number),
        f64::INFINITY,
        nan_min,
        "min",
        config,
    )
}

pub fn min_by<T, N, F>(seq: &[T], selector: F) -> Result<f64>
where
    N: ToNumber,
    F: FnMut(&T, usize, &[T]) -> N,
{
    min_by_with(seq, selector, &QueryConfig::default())
}

pub fn min_by_with<T, N, F>(seq: &[T], mut selector: F, config: &QueryConfig) -> Result<f64>
where
    N: ToNumber,
    F: FnMut(&T, usize, &[T]) -> N,
{
    extremum(
        seq.iter()
            .enumerate()
            .map(|(i, item)| selector(item, i, seq).to_number()),
        f64::INFINITY,
        nan_min,
        "min",
        config,
    )
}

pub fn max<T: ToNumber>(seq: &[T]) -> Result<f64> {
    max_with(seq, &QueryConfig::default())
}

pub fn max_with<T: ToNumber>(seq: &[T], config: &QueryConfig) -> Result<f64> {
    extremum(
        seq.iter().map(ToNumber::to_number),
        f64::NEG_INFINITY,
        nan_max,
        "max",
        config,
    )
}

pub fn max_by<T, N, F>(seq: &[T], selector: F) -> Result<f64>
where
    N: ToNumber,
    F: FnMut(&T, usize, &[T]) -> N,
{
    max_by_with(seq, selector, &QueryConfig::default())
}

pub fn max_by_with<T, N, F>(seq: &[T], mut selector: F, config: &QueryConfig) -> Result<f64>
where
    N: ToNumber,
    F: FnMut(&T, usize, &[T]) -> N,
{
    extremum(
        seq.iter()
            .enumerate()
            .map(|(i, item)| selector(item, i, seq).to_number()),
        f64::NEG_INFINITY,
        nan_max,
        "max",
        config,
    )
}
