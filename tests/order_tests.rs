//! Multi-key ordering tests

use std::cell::Cell;

use seqquery_core::types::Scalar;
use seqquery_operators::sort::{order_by, sorted, sorted_partial, OrderSpec};
use seqquery_operators::SequenceExt;

#[derive(Debug, Clone, PartialEq, PartialOrd)]
struct Row {
    dept: &'static str,
    salary: u32,
    name: &'static str,
}

fn staff() -> Vec<Row> {
    vec![
        Row { dept: "ops", salary: 50, name: "ana" },
        Row { dept: "eng", salary: 70, name: "bo" },
        Row { dept: "ops", salary: 60, name: "cy" },
        Row { dept: "eng", salary: 70, name: "di" },
        Row { dept: "eng", salary: 90, name: "ed" },
    ]
}

fn names(rows: &[Row]) -> Vec<&'static str> {
    rows.iter().map(|r| r.name).collect()
}

#[test]
fn test_ties_keep_input_order() {
    let data = vec![(1, 'a'), (0, 'b'), (1, 'c'), (0, 'd')];
    let out = order_by(&data, &[OrderSpec::asc(|p: &(i32, char)| p.0)]);
    assert_eq!(out, vec![(0, 'b'), (0, 'd'), (1, 'a'), (1, 'c')]);
}

#[test]
fn test_descending_keeps_ties_stable() {
    let data = vec![(1, 'a'), (0, 'b'), (1, 'c'), (0, 'd')];
    let out = order_by(&data, &[OrderSpec::desc(|p: &(i32, char)| p.0)]);
    assert_eq!(out, vec![(1, 'a'), (1, 'c'), (0, 'b'), (0, 'd')]);
}

#[test]
fn test_multi_key_mixed_direction() {
    let out = order_by(
        &staff(),
        &[
            OrderSpec::asc(|r: &Row| r.dept),
            OrderSpec::desc(|r: &Row| r.salary),
        ],
    );
    assert_eq!(names(&out), vec!["ed", "bo", "di", "cy", "ana"]);
}

#[test]
fn test_later_keys_only_break_ties() {
    let out = order_by(
        &staff(),
        &[
            OrderSpec::desc(|r: &Row| r.salary),
            OrderSpec::asc(|r: &Row| r.name),
        ],
    );
    assert_eq!(names(&out), vec!["ed", "bo", "di", "cy", "ana"]);
}

#[test]
fn test_input_is_not_modified() {
    let data = staff();
    let _ = order_by(&data, &[OrderSpec::asc(|r: &Row| r.salary)]);
    assert_eq!(data, staff());
}

#[test]
fn test_empty_specs_sort_by_element() {
    let data = vec![3, 1, 2];
    assert_eq!(order_by(&data, &[]), vec![1, 2, 3]);
    assert_eq!(data, vec![3, 1, 2]);
    assert_eq!(sorted(&data), vec![1, 2, 3]);

    let floats = vec![2.5, f64::NAN, -1.0];
    let out = order_by(&floats, &[]);
    assert_eq!(&out[..2], &[-1.0, 2.5]);
    assert!(out[2].is_nan());

    let words = vec!["pear", "fig", "apple"];
    assert_eq!(words.order_by(&[]), vec!["apple", "fig", "pear"]);
}

#[test]
fn test_empty_input() {
    let data: Vec<i32> = vec![];
    assert!(order_by(&data, &[OrderSpec::asc(|x: &i32| *x)]).is_empty());
}

#[test]
fn test_nan_keys_sort_last() {
    let data = vec![2.0, f64::NAN, 1.0, 3.0];
    let asc = order_by(&data, &[OrderSpec::asc(|x: &f64| *x)]);
    assert_eq!(&asc[..3], &[1.0, 2.0, 3.0]);
    assert!(asc[3].is_nan());

    let desc = order_by(&data, &[OrderSpec::desc(|x: &f64| *x)]);
    assert_eq!(&desc[..3], &[3.0, 2.0, 1.0]);
    assert!(desc[3].is_nan());

    let partial = sorted_partial(&data);
    assert_eq!(&partial[..3], &[1.0, 2.0, 3.0]);
    assert!(partial[3].is_nan());
}

#[test]
fn test_selector_runs_once_per_element_per_spec() {
    let calls = Cell::new(0usize);
    let data = vec![5, 3, 8, 1, 9, 2, 7];
    let out = order_by(
        &data,
        &[OrderSpec::asc(|x: &i32| {
            calls.set(calls.get() + 1);
            *x
        })],
    );
    assert_eq!(out, vec![1, 2, 3, 5, 7, 8, 9]);
    assert_eq!(calls.get(), data.len());
}

#[test]
fn test_spec_direction_accessor() {
    let spec = OrderSpec::desc(|x: &i32| *x);
    assert!(spec.is_descending());
    assert!(!OrderSpec::asc(|x: &i32| *x).is_descending());
}

#[test]
fn test_order_by_method_chain() {
    let top = staff()
        .filter(|r, _, _| r.dept == "eng")
        .order_by(&[OrderSpec::desc(|r: &Row| r.salary)])
        .take_n(2);
    assert_eq!(names(&top), vec!["ed", "bo"]);
}

#[test]
fn test_scalar_keys_order_numerically_across_widths() {
    let data = vec![Scalar::I64(1), Scalar::I32(5), Scalar::F64(0.5), Scalar::Null];
    let asc = order_by(&data, &[OrderSpec::asc(|s: &Scalar| s.clone())]);
    assert_eq!(
        asc,
        vec![Scalar::Null, Scalar::F64(0.5), Scalar::I64(1), Scalar::I32(5)]
    );
    assert_eq!(order_by(&data, &[]), asc);
}
