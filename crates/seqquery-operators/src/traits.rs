//! Method-call surface over slices.
//!
//! `SequenceExt` forwards to the free functions in the operator modules so
//! queries can be chained: `orders.filter(..).order_by(..)`. It is
//! implemented for `[T]`, so it applies to `Vec<T>`, arrays and slices.
//!
//! Element access that slices already provide inherently (`first`, `last`,
//! `contains`, `repeat`) is not duplicated here because inherent methods
//! would shadow it; use the `slice`/`project` functions for the error-raising
//! forms.

use std::hash::Hash;

use seqquery_core::error::Result;
use seqquery_core::numeric::ToNumber;

use crate::lookup::{Dictionary, Lookup};
use crate::sort::OrderSpec;
use crate::{aggregate, join, lookup, project, set_ops, slice, sort};

pub trait SequenceExt<T> {
    fn select<U, F>(&self, selector: F) -> Vec<U>
    where
        F: FnMut(&T, usize, &[T]) -> U;

    fn filter<P>(&self, predicate: P) -> Vec<T>
    where
        T: Clone,
        P: FnMut(&T, usize, &[T]) -> bool;

    fn select_many<U, I, F>(&self, selector: F) -> Vec<U>
    where
        I: IntoIterator<Item = U>,
        F: FnMut(&T, usize, &[T]) -> I;

    fn any_where<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T, usize, &[T]) -> bool;

    fn all_where<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T, usize, &[T]) -> bool;

    fn distinct(&self) -> Vec<T>
    where
        T: Eq + Hash + Clone;

    fn distinct_by<F>(&self, cmp: F) -> Vec<T>
    where
        T: Clone,
        F: Fn(&T, &T) -> bool;

    fn except(&self, other: &[T]) -> Vec<T>
    where
        T: Eq + Hash + Clone;

    fn intersect(&self, other: &[T]) -> Vec<T>
    where
        T: Eq + Hash + Clone;

    fn union(&self, other: &[T]) -> Vec<T>
    where
        T: Eq + Hash + Clone;

    fn order_by(&self, specs: &[OrderSpec<'_, T>]) -> Vec<T>
    where
        T: PartialOrd + Clone;

    fn to_lookup<K, F>(&self, key_selector: F) -> Lookup<K, T>
    where
        T: Clone,
        K: Eq + Hash + Clone,
        F: FnMut(&T, usize, &[T]) -> K;

    fn to_dictionary<K, F>(&self, key_selector: F) -> Dictionary<K, T>
    where
        T: Clone,
        K: Eq + Hash + Clone,
        F: FnMut(&T, usize, &[T]) -> K;

    fn inner_join<R, K, Out, FL, FR, FS>(
        &self,
        right: &[R],
        left_key: FL,
        right_key: FR,
        result: FS,
    ) -> Vec<Out>
    where
        K: Eq + Hash + Clone,
        FL: Fn(&T) -> K,
        FR: Fn(&R) -> K,
        FS: FnMut(&T, &R) -> Option<Out>;

    fn left_join<R, K, Out, FL, FR, FS>(
        &self,
        right: &[R],
        left_key: FL,
        right_key: FR,
        result: FS,
    ) -> Vec<Out>
    where
        K: Eq + Hash + Clone,
        FL: Fn(&T) -> K,
        FR: Fn(&R) -> K,
        FS: FnMut(&T, Option<&R>) -> Option<Out>;

    fn count_where<P>(&self, predicate: P) -> usize
    where
        P: FnMut(&T, usize, &[T]) -> bool;

    fn sum_by<N, F>(&self, selector: F) -> f64
    where
        N: ToNumber,
        F: FnMut(&T, usize, &[T]) -> N;

    fn average_by<N, F>(&self, selector: F) -> f64
    where
        N: ToNumber,
        F: FnMut(&T, usize, &[T]) -> N;

    fn min_by<N, F>(&self, selector: F) -> Result<f64>
    where
        N: ToNumber,
        F: FnMut(&T, usize, &[T]) -> N;

    fn max_by<N, F>(&self, selector: F) -> Result<f64>
    where
        N: ToNumber,
        F: FnMut(&T, usize, &[T]) -> N;

    fn take_n(&self, count: usize) -> Vec<T>
    where
        T: Clone;

    fn skip_n(&self, count: usize) -> Vec<T>
    where
        T: Clone;

    fn take_where<P>(&self, predicate: P) -> Vec<T>
    where
        T: Clone,
        P: FnMut(&T, usize, &[T]) -> bool;

    fn skip_where<P>(&self, predicate: P) -> Vec<T>
    where
        T: Clone,
        P: FnMut(&T, usize, &[T]) -> bool;

    fn single(&self) -> Result<&T>;

    fn single_or_default(&self) -> Result<Option<&T>>;
}

impl<T> SequenceExt<T> for [T] {
    fn select<U, F>(&self, selector: F) -> Vec<U>
    where
        F: FnMut(&T, usize, &[T]) -> U,
    {
        project::select(self, selector)
    }

    fn filter<P>(&self, predicate: P) -> Vec<T>
    where
        T: Clone,
        P: FnMut(&T, usize, &[T]) -> bool,
    {
        project::filter(self, predicate)
    }

    fn select_many<U, I, F>(&self, selector: F) -> Vec<U>
    where
        I: IntoIterator<Item = U>,
        F: FnMut(&T, usize, &[T]) -> I,
    {
        project::select_many(self, selector)
    }

    fn any_where<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T, usize, &[T]) -> bool,
    {
        project::any(self, predicate)
    }

    fn all_where<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T, usize, &[T]) -> bool,
    {
        project::all(self, predicate)
    }

    fn distinct(&self) -> Vec<T>
    where
        T: Eq + Hash + Clone,
    {
        set_ops::distinct(self)
    }

    fn distinct_by<F>(&self, cmp: F) -> Vec<T>
    where
        T: Clone,
        F: Fn(&T, &T) -> bool,
    {
        set_ops::distinct_by(self, cmp)
    }

    fn except(&self, other: &[T]) -> Vec<T>
    where
        T: Eq + Hash + Clone,
    {
        set_ops::except(self, other)
    }

    fn intersect(&self, other: &[T]) -> Vec<T>
    where
        T: Eq + Hash + Clone,
    {
        set_ops::intersect(self, other)
    }

    fn union(&self, other: &[T]) -> Vec<T>
    where
        T: Eq + Hash + Clone,
    {
        set_ops::union(self, other)
    }

    fn order_by(&self, specs: &[OrderSpec<'_, T>]) -> Vec<T>
    where
        T: PartialOrd + Clone,
    {
        sort::order_by(self, specs)
    }

    fn to_lookup<K, F>(&self, key_selector: F) -> Lookup<K, T>
    where
        T: Clone,
        K: Eq + Hash + Clone,
        F: FnMut(&T, usize, &[T]) -> K,
    {
        lookup::to_lookup(self, key_selector)
    }

    fn to_dictionary<K, F>(&self, key_selector: F) -> Dictionary<K, T>
    where
        T: Clone,
        K: Eq + Hash + Clone,
        F: FnMut(&T, usize, &[T]) -> K,
    {
        lookup::to_dictionary(self, key_selector)
    }

    fn inner_join<R, K, Out, FL, FR, FS>(
        &self,
        right: &[R],
        left_key: FL,
        right_key: FR,
        result: FS,
    ) -> Vec<Out>
    where
        K: Eq + Hash + Clone,
        FL: Fn(&T) -> K,
        FR: Fn(&R) -> K,
        FS: FnMut(&T, &R) -> Option<Out>,
    {
        join::inner_join(self, right, left_key, right_key, result)
    }

    fn left_join<R, K, Out, FL, FR, FS>(
        &self,
        right: &[R],
        left_key: FL,
        right_key: FR,
        result: FS,
    ) -> Vec<Out>
    where
        K: Eq + Hash + Clone,
        FL: Fn(&T) -> K,
        FR: Fn(&R) -> K,
        FS: FnMut(&T, Option<&R>) -> Option<Out>,
    {
        join::left_join(self, right, left_key, right_key, result)
    }

    fn count_where<P>(&self, predicate: P) -> usize
    where
        P: FnMut(&T, usize, &[T]) -> bool,
    {
        aggregate::count_where(self, predicate)
    }

    fn sum_by<N, F>(&self, selector: F) -> f64
    where
        N: ToNumber,
        F: FnMut(&T, usize, &[T]) -> N,
    {
        aggregate::sum_by(self, selector)
    }

    fn average_by<N, F>(&self, selector: F) -> f64
    where
        N: ToNumber,
        F: FnMut(&T, usize, &[T]) -> N,
    {
        aggregate::average_by(self, selector)
    }

    fn min_by<N, F>(&self, selector: F) -> Result<f64>
    where
        N: ToNumber,
        F: FnMut(&T, usize, &[T]) -> N,
    {
        aggregate::min_by(self, selector)
    }

    fn max_by<N, F>(&self, selector: F) -> Result<f64>
    where
        N: ToNumber,
        F: FnMut(&T, usize, &[T]) -> N,
    {
        aggregate::max_by(self, selector)
    }

    fn take_n(&self, count: usize) -> Vec<T>
    where
        T: Clone,
    {
        slice::take(self, count)
    }

    fn skip_n(&self, count: usize) -> Vec<T>
    where
        T: Clone,
    {
        slice::skip(self, count)
    }

    fn take_where<P>(&self, predicate: P) -> Vec<T>
    where
        T: Clone,
        P: FnMut(&T, usize, &[T]) -> bool,
    {
        slice::take_where(self, predicate)
    }

    fn skip_where<P>(&self, predicate: P) -> Vec<T>
    where
        T: Clone,
        P: FnMut(&T, usize, &[T]) -> bool,
    {
        slice::skip_where(self, predicate)
    }

    fn single(&self) -> Result<&T> {
        slice::single(self)
    }

    fn single_or_default(&self) -> Result<Option<&T>> {
        slice::single_or_default(self)
    }
}
