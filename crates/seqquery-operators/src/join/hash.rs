//! Lookup join.
//!
//! Cost: O(|left| + |right|) to group, plus O(Σ_key |left(key)| × |right(key)|)
//! to emit. No join-order optimization.

use std::hash::Hash;

use seqquery_core::config::QueryConfig;
use seqquery_core::types::JoinType;

use crate::lookup::Lookup;
use crate::metrics::emit_span;

fn group_side<'a, T, K, F>(seq: &'a [T], key: F, config: &QueryConfig) -> Lookup<K, &'a T>
where
    K: Eq + Hash + Clone,
    F: Fn(&T) -> K,
{
    Lookup::build(seq, |item, _, _| key(item), |item, _, _| item, config)
}

/// A missing bucket becomes a single absent placeholder so exactly one row is
/// emitted per element on the other side.
fn padded<'a, T>(bucket: Option<&[&'a T]>) -> Vec<Option<&'a T>> {
    match bucket {
        Some(items) => items.iter().map(|item| Some(*item)).collect(),
        None => vec![None],
    }
}

fn op_name(kind: JoinType) -> &'static str {
    match kind {
        JoinType::Inner => "inner_join",
        JoinType::Left => "left_join",
        JoinType::Right => "right_join",
        JoinType::Full => "outer_join",
    }
}

pub fn join_with<L, R, K, Out, FL, FR, FS>(
    kind: JoinType,
    left: &[L],
    right: &[R],
    left_key: FL,
    right_key: FR,
    mut result: FS,
    config: &QueryConfig,
) -> Vec<Out>
where
    K: Eq + Hash + Clone,
    FL: Fn(&L) -> K,
    FR: Fn(&R) -> K,
    FS: FnMut(Option<&L>, Option<&R>) -> Option<Out>,
{
    let lookup_left = group_side(left, left_key, config);
    let lookup_right = group_side(right, right_key, config);

    let keys: Vec<&K> = match kind {
        JoinType::Inner => lookup_left
            .keys()
            .filter(|k| lookup_right.contains_key(*k))
            .collect(),
        JoinType::Left => lookup_left.keys().collect(),
        JoinType::Right => lookup_right.keys().collect(),
        JoinType::Full => lookup_left
            .keys()
            .chain(
                lookup_right
                    .keys()
                    .filter(|k| !lookup_left.contains_key(*k)),
            )
            .collect(),
    };

    let mut out = Vec::new();
    for key in keys {
        let lefts = padded(lookup_left.get(key));
        let rights = padded(lookup_right.get(key));
        for l in &lefts {
            for r in &rights {
                if let Some(row) = result(*l, *r) {
                    out.push(row);
                }
            }
        }
    }

    emit_span(
        op_name(kind),
        &[
            ("left", left.len()),
            ("right", right.len()),
            ("keys", lookup_left.len() + lookup_right.len()),
            ("rows", out.len()),
        ],
    );
    out
}
