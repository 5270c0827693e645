//! Join tests: inner, left, right and full outer

use seqquery_core::config::QueryConfig;
use seqquery_core::types::JoinType;
use seqquery_operators::join::{inner_join, join, join_with, left_join, outer_join, right_join};
use seqquery_operators::SequenceExt;

#[derive(Debug, Clone, PartialEq)]
struct Customer {
    id: u32,
    name: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
struct Order {
    customer_id: u32,
    item: &'static str,
}

fn customers() -> Vec<Customer> {
    vec![
        Customer { id: 1, name: "ana" },
        Customer { id: 2, name: "bo" },
        Customer { id: 3, name: "cy" },
    ]
}

fn orders() -> Vec<Order> {
    vec![
        Order { customer_id: 2, item: "lamp" },
        Order { customer_id: 1, item: "desk" },
        Order { customer_id: 2, item: "sofa" },
        Order { customer_id: 9, item: "ghost" },
    ]
}

#[test]
fn test_inner_join_rows_in_left_key_order() {
    let rows = inner_join(
        &customers(),
        &orders(),
        |c| c.id,
        |o| o.customer_id,
        |c, o| Some((c.name, o.item)),
    );
    assert_eq!(rows, vec![("ana", "desk"), ("bo", "lamp"), ("bo", "sofa")]);
}

#[test]
fn test_inner_join_row_count_is_product_of_buckets() {
    let left = vec![1, 1, 2, 3];
    let right = vec![1, 1, 1, 2, 4];
    let rows = inner_join(&left, &right, |x| *x, |x| *x, |l, r| Some((*l, *r)));
    // key 1: 2 x 3, key 2: 1 x 1
    assert_eq!(rows.len(), 7);
}

#[test]
fn test_left_join_emits_every_left_row() {
    let rows = left_join(
        &customers(),
        &orders(),
        |c| c.id,
        |o| o.customer_id,
        |c, o| Some((c.name, o.map(|o| o.item))),
    );
    assert_eq!(
        rows,
        vec![
            ("ana", Some("desk")),
            ("bo", Some("lamp")),
            ("bo", Some("sofa")),
            ("cy", None),
        ]
    );
}

#[test]
fn test_right_join_follows_right_key_order() {
    let rows = right_join(
        &customers(),
        &orders(),
        |c| c.id,
        |o| o.customer_id,
        |c, o| Some((c.map(|c| c.name), o.item)),
    );
    assert_eq!(
        rows,
        vec![
            (Some("bo"), "lamp"),
            (Some("bo"), "sofa"),
            (Some("ana"), "desk"),
            (None, "ghost"),
        ]
    );
}

#[test]
fn test_outer_join_left_keys_then_right_only_keys() {
    let rows = outer_join(
        &customers(),
        &orders(),
        |c| c.id,
        |o| o.customer_id,
        |c, o| Some((c.map(|c| c.name), o.map(|o| o.item))),
    );
    assert_eq!(
        rows,
        vec![
            (Some("ana"), Some("desk")),
            (Some("bo"), Some("lamp")),
            (Some("bo"), Some("sofa")),
            (Some("cy"), None),
            (None, Some("ghost")),
        ]
    );
}

#[test]
fn test_selector_none_drops_row() {
    let rows = left_join(
        &customers(),
        &orders(),
        |c| c.id,
        |o| o.customer_id,
        |c, o| o.map(|o| format!("{}:{}", c.name, o.item)),
    );
    // unmatched "cy" is filtered out by the selector
    assert_eq!(rows, vec!["ana:desk", "bo:lamp", "bo:sofa"]);

    let only_sofa = inner_join(
        &customers(),
        &orders(),
        |c| c.id,
        |o| o.customer_id,
        |_, o| (o.item == "sofa").then_some(o.item),
    );
    assert_eq!(only_sofa, vec!["sofa"]);
}

#[test]
fn test_empty_sides() {
    let none: Vec<Order> = vec![];
    let rows = left_join(
        &customers(),
        &none,
        |c| c.id,
        |o| o.customer_id,
        |c, o| Some((c.id, o.is_some())),
    );
    assert_eq!(rows, vec![(1, false), (2, false), (3, false)]);

    let rows = inner_join(
        &customers(),
        &none,
        |c| c.id,
        |o| o.customer_id,
        |c, _| Some(c.id),
    );
    assert!(rows.is_empty());
}

#[test]
fn test_dispatch_matches_named_variants() {
    let left = vec![1, 2, 2, 5];
    let right = vec![2, 3, 5, 5];
    let pair = |l: Option<&i32>, r: Option<&i32>| Some((l.copied(), r.copied()));

    let full = join(JoinType::Full, &left, &right, |x| *x, |x| *x, pair);
    let named = outer_join(&left, &right, |x| *x, |x| *x, pair);
    assert_eq!(full, named);

    let inner = join(JoinType::Inner, &left, &right, |x| *x, |x| *x, pair);
    assert_eq!(
        inner,
        vec![
            (Some(2), Some(2)),
            (Some(2), Some(2)),
            (Some(5), Some(5)),
            (Some(5), Some(5)),
        ]
    );
}

#[test]
fn test_capacity_hint_does_not_change_rows() {
    let cfg = QueryConfig::default().with_lookup_capacity(64);
    let pair = |c: Option<&Customer>, o: Option<&Order>| Some((c.map(|c| c.id), o.map(|o| o.item)));
    let hinted = join_with(
        JoinType::Left,
        &customers(),
        &orders(),
        |c| c.id,
        |o| o.customer_id,
        pair,
        &cfg,
    );
    let plain = join(
        JoinType::Left,
        &customers(),
        &orders(),
        |c| c.id,
        |o| o.customer_id,
        pair,
    );
    assert_eq!(hinted, plain);
}

#[test]
fn test_join_method_surface() {
    let names = customers()
        .inner_join(&orders(), |c| c.id, |o| o.customer_id, |c, _| Some(c.name))
        .distinct();
    assert_eq!(names, vec!["ana", "bo"]);

    let totals = customers().left_join(
        &orders(),
        |c| c.id,
        |o| o.customer_id,
        |c, o| Some((c.id, o.is_some() as u32)),
    );
    assert_eq!(totals.len(), 4);
}
