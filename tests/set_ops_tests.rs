//! Set algebra tests (distinct / except / intersect / union)

use seqquery_core::config::QueryConfig;
use seqquery_operators::set_ops::{
    distinct, distinct_by, distinct_with, except, except_by, except_with, intersect,
    intersect_by, intersect_with, union, union_by, union_with,
};
use seqquery_operators::SequenceExt;

fn ci_eq(a: &String, b: &String) -> bool {
    a.eq_ignore_ascii_case(b)
}

fn words(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_distinct_keeps_first_occurrence_order() {
    assert_eq!(distinct(&[3, 1, 3, 2, 1, 4]), vec![3, 1, 2, 4]);
    let empty: [i32; 0] = [];
    assert!(distinct(&empty).is_empty());
}

#[test]
fn test_distinct_by_custom_comparer() {
    let data = words(&["Apple", "apple", "Pear", "APPLE", "pear", "fig"]);
    assert_eq!(distinct_by(&data, ci_eq), words(&["Apple", "Pear", "fig"]));
}

#[test]
fn test_distinct_by_floats_without_hash() {
    let data = [1.0, 1.0000001, 2.0, 2.05];
    let near = |a: &f64, b: &f64| (a - b).abs() < 0.01;
    assert_eq!(distinct_by(&data, near), vec![1.0, 2.0, 2.05]);
}

#[test]
fn test_except() {
    assert_eq!(except(&[1, 2, 2, 3, 4, 5], &[2, 4, 4]), vec![1, 3, 5]);
    assert_eq!(except(&[1, 1, 2], &[]), vec![1, 2]);
    assert!(except(&[1, 2], &[1, 2, 3]).is_empty());
}

#[test]
fn test_except_by() {
    let data = words(&["A", "b", "C", "a"]);
    let other = words(&["B"]);
    assert_eq!(except_by(&data, &other, ci_eq), words(&["A", "C"]));
}

#[test]
fn test_intersect() {
    assert_eq!(intersect(&[5, 1, 5, 2, 3], &[3, 5, 7, 5]), vec![5, 3]);
    assert!(intersect(&[1, 2, 3], &[]).is_empty());
}

#[test]
fn test_intersect_by() {
    let data = words(&["x", "Y", "z", "X"]);
    let other = words(&["y", "X"]);
    assert_eq!(intersect_by(&data, &other, ci_eq), words(&["x", "Y"]));
}

#[test]
fn test_union() {
    assert_eq!(union(&[1, 2, 2, 3], &[3, 4, 1, 5, 4]), vec![1, 2, 3, 4, 5]);
    assert_eq!(union(&[], &[2, 2, 1]), vec![2, 1]);
}

#[test]
fn test_union_by() {
    let data = words(&["a", "A", "b"]);
    let other = words(&["B", "c", "C"]);
    assert_eq!(union_by(&data, &other, ci_eq), words(&["a", "b", "c"]));
}

#[test]
fn test_linear_and_hash_strategies_agree() {
    let seq = vec![9, 3, 9, 1, 4, 3, 7, 1];
    let other = vec![3, 8, 8, 4, 0];
    let hash = QueryConfig::default();
    let linear = QueryConfig::default().with_hash_fast_path(false);

    assert_eq!(distinct_with(&seq, &hash), distinct_with(&seq, &linear));
    assert_eq!(
        except_with(&seq, &other, &hash),
        except_with(&seq, &other, &linear)
    );
    assert_eq!(
        intersect_with(&seq, &other, &hash),
        intersect_with(&seq, &other, &linear)
    );
    assert_eq!(
        union_with(&seq, &other, &hash),
        union_with(&seq, &other, &linear)
    );
}

#[test]
fn test_method_call_surface() {
    let seq = vec!["a", "b", "a", "c"];
    assert_eq!(seq.distinct(), vec!["a", "b", "c"]);
    assert_eq!(seq.except(&["b"]), vec!["a", "c"]);
    assert_eq!(seq.intersect(&["c", "a"]), vec!["a", "c"]);
    assert_eq!(seq.union(&["d"]), vec!["a", "b", "c", "d"]);
}
