//! Set algebra over sequences: `distinct`, `except`, `intersect`, `union`.
//!
//! Every operator returns elements in first-occurrence order and never emits
//! two elements that are equal under the active equality.
//!
//! Two strategies:
//! - `*_by(cmp)`: linear containment scans against an accumulator, O(n·m);
//!   the comparer is called as `cmp(existing, candidate)`.
//! - plain / `*_with(config)`: `Eq + Hash` containment through hash sets,
//!   O(n + m) amortized. Disabling `hash_fast_path` routes them through the
//!   linear scan with `==`; the output is identical.
//!
//! An absent `other` sequence is the empty slice.

use std::collections::HashSet;
use std::hash::Hash;

use seqquery_core::config::QueryConfig;

use crate::metrics::emit_span;
use crate::project::contains_by;

pub fn distinct<T: Eq + Hash + Clone>(seq: &[T]) -> Vec<T> {
    distinct_with(seq, &QueryConfig::default())
}

pub fn distinct_with<T: Eq + Hash + Clone>(seq: &[T], config: &QueryConfig) -> Vec<T> {
    if !config.hash_fast_path {
        return distinct_by(seq, |a, b| a == b);
    }
    let mut seen: HashSet<&T> = HashSet::with_capacity(seq.len());
    let out: Vec<T> = seq
        .iter()
        .filter(|item| seen.insert(*item))
        .cloned()
        .collect();
    emit_span("distinct", &[("input", seq.len()), ("output", out.len())]);
    out
}

pub fn distinct_by<T, F>(seq: &[T], cmp: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T, &T) -> bool,
{
    let mut out: Vec<T> = Vec::new();
    for item in seq {
        if !contains_by(&out, item, &cmp) {
            out.push(item.clone());
        }
    }
    emit_span("distinct", &[("input", seq.len()), ("output", out.len())]);
    out
}

/// Elements of `seq` that do not appear in `other`.
pub fn except<T: Eq + Hash + Clone>(seq: &[T], other: &[T]) -> Vec<T> {
    except_with(seq, other, &QueryConfig::default())
}

pub fn except_with<T: Eq + Hash + Clone>(seq: &[T], other: &[T], config: &QueryConfig) -> Vec<T> {
    if !config.hash_fast_path {
        return except_by(seq, other, |a, b| a == b);
    }
    let excluded: HashSet<&T> = other.iter().collect();
    let mut seen: HashSet<&T> = HashSet::new();
    let out: Vec<T> = seq
        .iter()
        .filter(|item| !excluded.contains(*item) && seen.insert(*item))
        .cloned()
        .collect();
    emit_span(
        "except",
        &[("input", seq.len()), ("other", other.len()), ("output", out.len())],
    );
    out
}

pub fn except_by<T, F>(seq: &[T], other: &[T], cmp: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T, &T) -> bool,
{
    let other = distinct_by(other, &cmp);
    let mut out: Vec<T> = Vec::new();
    for item in seq {
        if !contains_by(&out, item, &cmp) && !contains_by(&other, item, &cmp) {
            out.push(item.clone());
        }
    }
    emit_span(
        "except",
        &[("input", seq.len()), ("other", other.len()), ("output", out.len())],
    );
    out
}

/// Elements of `seq` that also appear in `other`.
pub fn intersect<T: Eq + Hash + Clone>(seq: &[T], other: &[T]) -> Vec<T> {
    intersect_with(seq, other, &QueryConfig::default())
}

pub fn intersect_with<T: Eq + Hash + Clone>(
    seq: &[T],
    other: &[T],
    config: &QueryConfig,
) -> Vec<T> {
    if !config.hash_fast_path {
        return intersect_by(seq, other, |a, b| a == b);
    }
    let wanted: HashSet<&T> = other.iter().collect();
    let mut seen: HashSet<&T> = HashSet::new();
    let out: Vec<T> = seq
        .iter()
        .filter(|item| wanted.contains(*item) && seen.insert(*item))
        .cloned()
        .collect();
    emit_span(
        "intersect",
        &[("input", seq.len()), ("other", other.len()), ("output", out.len())],
    );
    out
}

pub fn intersect_by<T, F>(seq: &[T], other: &[T], cmp: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T, &T) -> bool,
{
    let other = distinct_by(other, &cmp);
    let mut out: Vec<T> = Vec::new();
    for item in seq {
        if !contains_by(&out, item, &cmp) && contains_by(&other, item, &cmp) {
            out.push(item.clone());
        }
    }
    emit_span(
        "intersect",
        &[("input", seq.len()), ("other", other.len()), ("output", out.len())],
    );
    out
}

/// `distinct(seq)` followed by the elements of `other` not yet present.
pub fn union<T: Eq + Hash + Clone>(seq: &[T], other: &[T]) -> Vec<T> {
    union_with(seq, other, &QueryConfig::default())
}

pub fn union_with<T: Eq + Hash + Clone>(seq: &[T], other: &[T], config: &QueryConfig) -> Vec<T> {
    if !config.hash_fast_path {
        return union_by(seq, other, |a, b| a == b);
    }
    let mut seen: HashSet<&T> = HashSet::with_capacity(seq.len() + other.len());
    let out: Vec<T> = seq
        .iter()
        .chain(other.iter())
        .filter(|item| seen.insert(*item))
        .cloned()
        .collect();
    emit_span(
        "union",
        &[("input", seq.len()), ("other", other.len()), ("output", out.len())],
    );
    out
}

pub fn union_by<T, F>(seq: &[T], other: &[T], cmp: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T, &T) -> bool,
{
    let other = distinct_by(other, &cmp);
    let mut out: Vec<T> = Vec::new();
    for item in seq.iter().chain(other.iter()) {
        if !contains_by(&out, item, &cmp) {
            out.push(item.clone());
        }
    }
    emit_span(
        "union",
        &[("input", seq.len()), ("other", other.len()), ("output", out.len())],
    );
    out
}
