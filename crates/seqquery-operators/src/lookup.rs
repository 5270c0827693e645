//! Grouping: `Lookup` (key → bucket) and `Dictionary` (key → single value).
//!
//! Both keep keys in first-appearance order and are built in one pass over
//! the source. The join engine builds one `Lookup` per side.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

use seqquery_core::config::QueryConfig;
use seqquery_core::error::Result;
use seqquery_core::key::Key;
use seqquery_core::types::Scalar;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::metrics::emit_span;

/// Ordered mapping from key to the elements that produced it.
///
/// Invariants:
/// - key order is the order in which each key was first seen;
/// - bucket order is source order.
#[derive(Debug, Clone)]
pub struct Lookup<K, V> {
    index: HashMap<K, usize>,
    groups: Vec<(K, Vec<V>)>,
}

impl<K: Eq + Hash + Clone, V> Default for Lookup<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash + Clone, V> Lookup<K, V> {
    pub fn new() -> Self {
        Self {
            index: HashMap::new(),
            groups: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            index: HashMap::with_capacity(capacity),
            groups: Vec::with_capacity(capacity),
        }
    }

    /// Build a lookup in one pass. Both selectors run exactly once per element.
    pub fn build<'a, T, F, G>(
        seq: &'a [T],
        mut key_selector: F,
        mut element_selector: G,
        config: &QueryConfig,
    ) -> Self
    where
        F: FnMut(&'a T, usize, &'a [T]) -> K,
        G: FnMut(&'a T, usize, &'a [T]) -> V,
    {
        let mut lookup = match config.lookup_capacity_hint {
            Some(cap) => Self::with_capacity(cap),
            None => Self::new(),
        };
        for (i, item) in seq.iter().enumerate() {
            let key = key_selector(item, i, seq);
            let value = element_selector(item, i, seq);
            lookup.push(key, value);
        }
        emit_span(
            "lookup",
            &[("input", seq.len()), ("keys", lookup.len())],
        );
        lookup
    }

    /// Fallible variant of [`Lookup::build`]; the first key error aborts the build.
    pub fn try_build<'a, T, F, G>(
        seq: &'a [T],
        mut key_selector: F,
        mut element_selector: G,
        config: &QueryConfig,
    ) -> Result<Self>
    where
        F: FnMut(&'a T, usize, &'a [T]) -> Result<K>,
        G: FnMut(&'a T, usize, &'a [T]) -> V,
    {
        let mut lookup = match config.lookup_capacity_hint {
            Some(cap) => Self::with_capacity(cap),
            None => Self::new(),
        };
        for (i, item) in seq.iter().enumerate() {
            let key = key_selector(item, i, seq)?;
            let value = element_selector(item, i, seq);
            lookup.push(key, value);
        }
        emit_span(
            "lookup",
            &[("input", seq.len()), ("keys", lookup.len())],
        );
        Ok(lookup)
    }

    /// Append `value` to the bucket for `key`, creating the bucket on first sight.
    pub fn push(&mut self, key: K, value: V) {
        match self.index.get(&key) {
            Some(&slot) => self.groups[slot].1.push(value),
            None => {
                self.index.insert(key.clone(), self.groups.len());
                self.groups.push((key, vec![value]));
            }
        }
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&[V]>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index
            .get(key)
            .map(|&slot| self.groups[slot].1.as_slice())
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(key)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Keys in first-appearance order.
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.groups.iter().map(|(k, _)| k)
    }

    /// `(key, bucket)` pairs in first-appearance order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &[V])> + '_ {
        self.groups.iter().map(|(k, v)| (k, v.as_slice()))
    }

    pub fn into_groups(self) -> Vec<(K, Vec<V>)> {
        self.groups
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for Lookup<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.groups == other.groups
    }
}

impl<K, V> IntoIterator for Lookup<K, V> {
    type Item = (K, Vec<V>);
    type IntoIter = std::vec::IntoIter<(K, Vec<V>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

impl<K: Serialize, V: Serialize> Serialize for Lookup<K, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for (k, bucket) in &self.groups {
            map.serialize_entry(k, bucket)?;
        }
        map.end()
    }
}

/// Ordered mapping from key to a single value; the last write for a key wins
/// but the key keeps the position of its first appearance.
#[derive(Debug, Clone)]
pub struct Dictionary<K, V> {
    index: HashMap<K, usize>,
    entries: Vec<(K, V)>,
}

impl<K: Eq + Hash + Clone, V> Default for Dictionary<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash + Clone, V> Dictionary<K, V> {
    pub fn new() -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }

    /// Insert or overwrite; returns the replaced value if any.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self.index.get(&key) {
            Some(&slot) => Some(std::mem::replace(&mut self.entries[slot].1, value)),
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(key).map(|&slot| &self.entries[slot].1)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.entries.iter().map(|(k, _)| k)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    pub fn into_entries(self) -> Vec<(K, V)> {
        self.entries
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for Dictionary<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K: Serialize, V: Serialize> Serialize for Dictionary<K, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// Group elements by key, keeping the elements themselves.
pub fn to_lookup<T, K, F>(seq: &[T], key_selector: F) -> Lookup<K, T>
where
    T: Clone,
    K: Eq + Hash + Clone,
    F: FnMut(&T, usize, &[T]) -> K,
{
    Lookup::build(
        seq,
        key_selector,
        |item, _, _| item.clone(),
        &QueryConfig::default(),
    )
}

/// Group projected elements by key.
pub fn to_lookup_map<'a, T, K, V, F, G>(
    seq: &'a [T],
    key_selector: F,
    element_selector: G,
) -> Lookup<K, V>
where
    K: Eq + Hash + Clone,
    F: FnMut(&'a T, usize, &'a [T]) -> K,
    G: FnMut(&'a T, usize, &'a [T]) -> V,
{
    Lookup::build(seq, key_selector, element_selector, &QueryConfig::default())
}

/// Group by a dynamically-typed key. Keys that are neither string-like nor
/// integer-like fail with `InvalidKeyType`.
pub fn to_lookup_scalar<T, F>(seq: &[T], mut key_selector: F) -> Result<Lookup<Key, T>>
where
    T: Clone,
    F: FnMut(&T, usize, &[T]) -> Scalar,
{
    Lookup::try_build(
        seq,
        |item, i, s| Key::try_from(key_selector(item, i, s)),
        |item, _, _| item.clone(),
        &QueryConfig::default(),
    )
}

pub fn to_dictionary<T, K, F>(seq: &[T], key_selector: F) -> Dictionary<K, T>
where
    T: Clone,
    K: Eq + Hash + Clone,
    F: FnMut(&T, usize, &[T]) -> K,
{
    to_dictionary_map(seq, key_selector, |item, _, _| item.clone())
}

pub fn to_dictionary_map<'a, T, K, V, F, G>(
    seq: &'a [T],
    mut key_selector: F,
    mut element_selector: G,
) -> Dictionary<K, V>
where
    K: Eq + Hash + Clone,
    F: FnMut(&'a T, usize, &'a [T]) -> K,
    G: FnMut(&'a T, usize, &'a [T]) -> V,
{
    let mut dict = Dictionary::new();
    for (i, item) in seq.iter().enumerate() {
        let key = key_selector(item, i, seq);
        let value = element_selector(item, i, seq);
        dict.insert(key, value);
    }
    emit_span("dictionary", &[("input", seq.len()), ("keys", dict.len())]);
    dict
}
