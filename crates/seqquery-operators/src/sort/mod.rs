//! Stable multi-key ordering.
//!
//! `order_by` builds a `(keys…, original_index)` decoration, sorts the row
//! indices with a stable sort, then gathers the rows. Specs are applied left
//! to right; the first unequal key decides and a descending spec reverses it.
//! NaN-like keys sort last in either direction. Rows that tie on every spec
//! keep their input order.

pub mod keys;

use std::cmp::Ordering;

use crate::metrics::emit_span;

pub use keys::{directed_cmp, key_cmp, SortKeys};

type KeyExtractor<'a, T> = Box<dyn Fn(&[T]) -> Box<dyn SortKeys + 'a> + 'a>;

/// One ordering key: a selector plus a direction.
pub struct OrderSpec<'a, T> {
    extract: KeyExtractor<'a, T>,
    descending: bool,
}

impl<'a, T: 'a> OrderSpec<'a, T> {
    pub fn new<K, F>(selector: F, descending: bool) -> Self
    where
        K: PartialOrd + 'a,
        F: Fn(&T) -> K + 'a,
    {
        let extract: KeyExtractor<'a, T> = Box::new(move |seq: &[T]| {
            let column: Vec<K> = seq.iter().map(&selector).collect();
            Box::new(column) as Box<dyn SortKeys + 'a>
        });
        Self {
            extract,
            descending,
        }
    }

    pub fn asc<K, F>(selector: F) -> Self
    where
        K: PartialOrd + 'a,
        F: Fn(&T) -> K + 'a,
    {
        Self::new(selector, false)
    }

    pub fn desc<K, F>(selector: F) -> Self
    where
        K: PartialOrd + 'a,
        F: Fn(&T) -> K + 'a,
    {
        Self::new(selector, true)
    }

    pub fn is_descending(&self) -> bool {
        self.descending
    }
}

impl<T> std::fmt::Debug for OrderSpec<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderSpec")
            .field("descending", &self.descending)
            .finish_non_exhaustive()
    }
}

/// Return a new copy of `seq` ordered by `specs`. The input is untouched.
///
/// An empty spec list sorts ascending by the elements themselves, as
/// [`sorted_partial`] does.
pub fn order_by<T: PartialOrd + Clone>(seq: &[T], specs: &[OrderSpec<'_, T>]) -> Vec<T> {
    if specs.is_empty() {
        emit_span("order_by", &[("input", seq.len()), ("keys", 0)]);
        return sorted_partial(seq);
    }

    let columns: Vec<_> = specs
        .iter()
        .map(|spec| ((spec.extract)(seq), spec.descending))
        .collect();

    let mut indices: Vec<usize> = (0..seq.len()).collect();
    indices.sort_by(|&a, &b| {
        for (column, descending) in &columns {
            match column.compare(a, b, *descending) {
                Ordering::Equal => continue,
                ord => return ord,
            }
        }
        Ordering::Equal
    });

    emit_span("order_by", &[("input", seq.len()), ("keys", specs.len())]);
    indices.into_iter().map(|i| seq[i].clone()).collect()
}

/// Stable ascending copy under the element type's total order.
pub fn sorted<T: Ord + Clone>(seq: &[T]) -> Vec<T> {
    let mut out = seq.to_vec();
    out.sort();
    out
}

/// Stable ascending copy under a partial order; incomparable values (NaN)
/// sort last.
pub fn sorted_partial<T: PartialOrd + Clone>(seq: &[T]) -> Vec<T> {
    let mut out = seq.to_vec();
    out.sort_by(key_cmp);
    out
}
