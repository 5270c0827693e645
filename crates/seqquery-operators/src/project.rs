//! Projection, filtering and element tests.

use crate::metrics::emit_span;

/// Project every element through `selector`.
pub fn select<T, U, F>(seq: &[T], mut selector: F) -> Vec<U>
where
    F: FnMut(&T, usize, &[T]) -> U,
{
    seq.iter()
        .enumerate()
        .map(|(i, item)| selector(item, i, seq))
        .collect()
}

/// Keep the elements that satisfy `predicate` (the relational `where`).
pub fn filter<T, P>(seq: &[T], mut predicate: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T, usize, &[T]) -> bool,
{
    let out: Vec<T> = seq
        .iter()
        .enumerate()
        .filter(|(i, item)| predicate(*item, *i, seq))
        .map(|(_, item)| item.clone())
        .collect();
    emit_span("filter", &[("input", seq.len()), ("output", out.len())]);
    out
}

/// Project every element to a sequence and flatten the results in order.
pub fn select_many<T, U, I, F>(seq: &[T], mut selector: F) -> Vec<U>
where
    I: IntoIterator<Item = U>,
    F: FnMut(&T, usize, &[T]) -> I,
{
    let mut out = Vec::new();
    for (i, item) in seq.iter().enumerate() {
        out.extend(selector(item, i, seq));
    }
    out
}

/// True if any element satisfies `predicate`; false on empty input.
pub fn any<T, P>(seq: &[T], mut predicate: P) -> bool
where
    P: FnMut(&T, usize, &[T]) -> bool,
{
    seq.iter().enumerate().any(|(i, item)| predicate(item, i, seq))
}

/// True if every element satisfies `predicate`; true on empty input.
pub fn all<T, P>(seq: &[T], mut predicate: P) -> bool
where
    P: FnMut(&T, usize, &[T]) -> bool,
{
    seq.iter().enumerate().all(|(i, item)| predicate(item, i, seq))
}

pub fn contains<T: PartialEq>(seq: &[T], value: &T) -> bool {
    seq.iter().any(|item| item == value)
}

/// Containment under a custom equality, called as `cmp(element, value)`.
pub fn contains_by<T, F>(seq: &[T], value: &T, cmp: F) -> bool
where
    F: Fn(&T, &T) -> bool,
{
    seq.iter().any(|item| cmp(item, value))
}

/// Drop absent elements.
pub fn ignore_none<T: Clone>(seq: &[Option<T>]) -> Vec<T> {
    seq.iter().flatten().cloned().collect()
}

/// Replace absent elements with a copy of `item`.
pub fn replace_none<T: Clone>(seq: &[Option<T>], item: T) -> Vec<T> {
    seq.iter()
        .map(|slot| slot.clone().unwrap_or_else(|| item.clone()))
        .collect()
}

/// Replace absent elements with `factory(index, seq)`.
pub fn replace_none_with<T, F>(seq: &[Option<T>], mut factory: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(usize, &[Option<T>]) -> T,
{
    seq.iter()
        .enumerate()
        .map(|(i, slot)| match slot {
            Some(v) => v.clone(),
            None => factory(i, seq),
        })
        .collect()
}

pub fn copy<T: Clone>(seq: &[T]) -> Vec<T> {
    seq.to_vec()
}

/// `count` back-to-back copies of `seq`.
pub fn repeat<T: Clone>(seq: &[T], count: usize) -> Vec<T> {
    let mut out = Vec::with_capacity(seq.len().saturating_mul(count));
    for _ in 0..count {
        out.extend_from_slice(seq);
    }
    out
}
