//! Materialized sort-key columns.
//!
//! Keys are extracted once per element and per spec, then the sort compares
//! row indices against these columns instead of re-running selectors.

use std::cmp::Ordering;

pub trait SortKeys {
    /// Compare the keys of rows `a` and `b` in the given direction.
    fn compare(&self, a: usize, b: usize, descending: bool) -> Ordering;
}

impl<K: PartialOrd> SortKeys for Vec<K> {
    fn compare(&self, a: usize, b: usize, descending: bool) -> Ordering {
        directed_cmp(&self[a], &self[b], descending)
    }
}

/// Compare two keys; values incomparable with themselves (NaN) sort after
/// every comparable value and tie with each other.
pub fn key_cmp<K: PartialOrd>(x: &K, y: &K) -> Ordering {
    match x.partial_cmp(y) {
        Some(ord) => ord,
        None => {
            let x_unordered = x.partial_cmp(x).is_none();
            let y_unordered = y.partial_cmp(y).is_none();
            x_unordered.cmp(&y_unordered)
        }
    }
}

/// Like [`key_cmp`], but comparable keys are reversed when `descending`.
/// Incomparable keys stay last in both directions.
pub fn directed_cmp<K: PartialOrd>(x: &K, y: &K, descending: bool) -> Ordering {
    match x.partial_cmp(y) {
        Some(ord) if descending => ord.reverse(),
        Some(ord) => ord,
        None => key_cmp(x, y),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nan_sorts_last_both_directions() {
        assert_eq!(key_cmp(&f64::NAN, &1.0), Ordering::Greater);
        assert_eq!(key_cmp(&1.0, &f64::NAN), Ordering::Less);
        assert_eq!(key_cmp(&f64::NAN, &f64::NAN), Ordering::Equal);
        assert_eq!(directed_cmp(&f64::NAN, &1.0, true), Ordering::Greater);
        assert_eq!(directed_cmp(&2.0, &1.0, true), Ordering::Less);
    }
}
