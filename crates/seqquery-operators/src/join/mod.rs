//! Relational joins: inner, full outer, left and right.
//!
//! All variants go through the lookup join in [`hash`]: both sides are grouped
//! into a `Lookup`, a key set is chosen per `JoinType`, and each key emits the
//! cross product of its buckets (left bucket outer loop, right bucket inner
//! loop).
//!
//! The result selector returns `Option<R>`; `None` drops the row. Callers can
//! use this to filter while projecting, which also means a selector that
//! returns `None` for a padded row removes that row from an outer join.

pub mod hash;

use std::hash::Hash;

use seqquery_core::config::QueryConfig;
use seqquery_core::types::JoinType;

pub use hash::join_with;

/// Dispatch on `kind` with a uniform selector; a side is `None` where the key
/// had no match on that side.
pub fn join<L, R, K, Out, FL, FR, FS>(
    kind: JoinType,
    left: &[L],
    right: &[R],
    left_key: FL,
    right_key: FR,
    result: FS,
) -> Vec<Out>
where
    K: Eq + Hash + Clone,
    FL: Fn(&L) -> K,
    FR: Fn(&R) -> K,
    FS: FnMut(Option<&L>, Option<&R>) -> Option<Out>,
{
    join_with(
        kind,
        left,
        right,
        left_key,
        right_key,
        result,
        &QueryConfig::default(),
    )
}

/// Rows for keys present on both sides, in left-key order.
pub fn inner_join<L, R, K, Out, FL, FR, FS>(
    left: &[L],
    right: &[R],
    left_key: FL,
    right_key: FR,
    mut result: FS,
) -> Vec<Out>
where
    K: Eq + Hash + Clone,
    FL: Fn(&L) -> K,
    FR: Fn(&R) -> K,
    FS: FnMut(&L, &R) -> Option<Out>,
{
    join(
        JoinType::Inner,
        left,
        right,
        left_key,
        right_key,
        |l, r| match (l, r) {
            (Some(l), Some(r)) => result(l, r),
            _ => None,
        },
    )
}

/// Every left row at least once; unmatched left rows pair with `None`.
pub fn left_join<L, R, K, Out, FL, FR, FS>(
    left: &[L],
    right: &[R],
    left_key: FL,
    right_key: FR,
    mut result: FS,
) -> Vec<Out>
where
    K: Eq + Hash + Clone,
    FL: Fn(&L) -> K,
    FR: Fn(&R) -> K,
    FS: FnMut(&L, Option<&R>) -> Option<Out>,
{
    join(
        JoinType::Left,
        left,
        right,
        left_key,
        right_key,
        |l, r| l.and_then(|l| result(l, r)),
    )
}

/// Every right row at least once, in right-key order; unmatched right rows
/// pair with `None`.
pub fn right_join<L, R, K, Out, FL, FR, FS>(
    left: &[L],
    right: &[R],
    left_key: FL,
    right_key: FR,
    mut result: FS,
) -> Vec<Out>
where
    K: Eq + Hash + Clone,
    FL: Fn(&L) -> K,
    FR: Fn(&R) -> K,
    FS: FnMut(Option<&L>, &R) -> Option<Out>,
{
    join(
        JoinType::Right,
        left,
        right,
        left_key,
        right_key,
        |l, r| r.and_then(|r| result(l, r)),
    )
}

/// Full outer join: left keys first, then right-only keys in right order.
pub fn outer_join<L, R, K, Out, FL, FR, FS>(
    left: &[L],
    right: &[R],
    left_key: FL,
    right_key: FR,
    result: FS,
) -> Vec<Out>
where
    K: Eq + Hash + Clone,
    FL: Fn(&L) -> K,
    FR: Fn(&R) -> K,
    FS: FnMut(Option<&L>, Option<&R>) -> Option<Out>,
{
    join(JoinType::Full, left, right, left_key, right_key, result)
}
