use criterion::{criterion_group, criterion_main, Criterion};
use seqquery_core::types::Scalar;
use seqquery_operators::join::inner_join;
use seqquery_operators::lookup::to_lookup_scalar;
use seqquery_operators::set_ops::{distinct, distinct_by};
use seqquery_operators::sort::{order_by, OrderSpec};

#[derive(Clone, PartialEq, PartialOrd)]
struct Row {
    group: Scalar,
    order: i64,
    value: f64,
}

fn make_rows(rows: usize) -> Vec<Row> {
    (0..rows)
        .map(|i| Row {
            group: Scalar::Str(format!("group-{}", i % 4)),
            order: (rows - i) as i64,
            value: (i % 10) as f64,
        })
        .collect()
}

fn bench_distinct(c: &mut Criterion) {
    let data: Vec<u32> = (0..1024).map(|i| i % 97).collect();
    c.bench_function("distinct_hash", |b| b.iter(|| distinct(&data)));
    c.bench_function("distinct_by_linear", |b| {
        b.iter(|| distinct_by(&data, |a, b| a == b))
    });
}

fn bench_lookup(c: &mut Criterion) {
    let rows = make_rows(1024);
    c.bench_function("to_lookup_scalar", |b| {
        b.iter(|| {
            let _ = to_lookup_scalar(&rows, |r, _, _| r.group.clone()).unwrap();
        })
    });
}

fn bench_inner_join(c: &mut Criterion) {
    let left: Vec<(u32, u32)> = (0..1024).map(|i| (i % 128, i)).collect();
    let right: Vec<(u32, u32)> = (0..256).map(|i| (i % 128, i)).collect();
    c.bench_function("inner_join", |b| {
        b.iter(|| inner_join(&left, &right, |l| l.0, |r| r.0, |l, r| Some(l.1 + r.1)))
    });
}

fn bench_order_by(c: &mut Criterion) {
    let rows = make_rows(1024);
    c.bench_function("order_by_two_keys", |b| {
        b.iter(|| {
            order_by(
                &rows,
                &[
                    OrderSpec::asc(|r: &Row| r.value),
                    OrderSpec::desc(|r: &Row| r.order),
                ],
            )
        })
    });
}

criterion_group!(
    queries,
    bench_distinct,
    bench_lookup,
    bench_inner_join,
    bench_order_by
);
criterion_main!(queries);
