//! Positional slicing and single-element access.
//!
//! `take`/`skip` clamp to the sequence bounds. `take_where`/`skip_where`
//! stop at the first element failing the predicate.
//!
//! `first`/`last`/`single` fail with `EmptySequence` on empty input and
//! `single` also fails with `MultipleElements` when more than one element is
//! present. The `*_or_default` forms return `None` instead of the emptiness
//! error but keep every other failure.

use seqquery_core::error::{Error, Result};

pub fn take<T: Clone>(seq: &[T], count: usize) -> Vec<T> {
    seq[..count.min(seq.len())].to_vec()
}

pub fn skip<T: Clone>(seq: &[T], count: usize) -> Vec<T> {
    seq[count.min(seq.len())..].to_vec()
}

/// Longest prefix whose elements all satisfy `predicate`.
pub fn take_where<T, P>(seq: &[T], mut predicate: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T, usize, &[T]) -> bool,
{
    let end = seq
        .iter()
        .enumerate()
        .position(|(i, item)| !predicate(item, i, seq))
        .unwrap_or(seq.len());
    seq[..end].to_vec()
}

/// Everything after the longest prefix satisfying `predicate`.
pub fn skip_where<T, P>(seq: &[T], mut predicate: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T, usize, &[T]) -> bool,
{
    let start = seq
        .iter()
        .enumerate()
        .position(|(i, item)| !predicate(item, i, seq))
        .unwrap_or(seq.len());
    seq[start..].to_vec()
}

pub fn first<T>(seq: &[T]) -> Result<&T> {
    seq.first().ok_or(Error::EmptySequence { op: "first" })
}

/// Apply `selector` to the first element.
pub fn first_by<T, U, F>(seq: &[T], selector: F) -> Result<U>
where
    F: FnOnce(&T, usize, &[T]) -> U,
{
    let item = first(seq)?;
    Ok(selector(item, 0, seq))
}

pub fn first_or_default<T>(seq: &[T]) -> Option<&T> {
    seq.first()
}

pub fn first_or_default_by<T, U, F>(seq: &[T], selector: F) -> Option<U>
where
    F: FnOnce(&T, usize, &[T]) -> U,
{
    seq.first().map(|item| selector(item, 0, seq))
}

pub fn last<T>(seq: &[T]) -> Result<&T> {
    seq.last().ok_or(Error::EmptySequence { op: "last" })
}

/// Apply `selector` to the last element.
pub fn last_by<T, U, F>(seq: &[T], selector: F) -> Result<U>
where
    F: FnOnce(&T, usize, &[T]) -> U,
{
    let item = last(seq)?;
    Ok(selector(item, seq.len() - 1, seq))
}

pub fn last_or_default<T>(seq: &[T]) -> Option<&T> {
    seq.last()
}

pub fn last_or_default_by<T, U, F>(seq: &[T], selector: F) -> Option<U>
where
    F: FnOnce(&T, usize, &[T]) -> U,
{
    seq.last().map(|item| selector(item, seq.len() - 1, seq))
}

pub fn single<T>(seq: &[T]) -> Result<&T> {
    match seq {
        [] => Err(Error::EmptySequence { op: "single" }),
        [only] => Ok(only),
        _ => Err(Error::MultipleElements {
            op: "single",
            len: seq.len(),
        }),
    }
}

pub fn single_by<T, U, F>(seq: &[T], selector: F) -> Result<U>
where
    F: FnOnce(&T, usize, &[T]) -> U,
{
    let item = single(seq)?;
    Ok(selector(item, 0, seq))
}

/// `Ok(None)` on empty input; still fails with `MultipleElements`.
pub fn single_or_default<T>(seq: &[T]) -> Result<Option<&T>> {
    match seq {
        [] => Ok(None),
        [only] => Ok(Some(only)),
        _ => Err(Error::MultipleElements {
            op: "single_or_default",
            len: seq.len(),
        }),
    }
}

pub fn single_or_default_by<T, U, F>(seq: &[T], selector: F) -> Result<Option<U>>
where
    F: FnOnce(&T, usize, &[T]) -> U,
{
    Ok(single_or_default(seq)?.map(|item| selector(item, 0, seq)))
}
