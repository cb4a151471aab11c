//! Purpose: Leaf producers adapting owned collections into enumerables.
//! Exports: `from_slice`, `from_map`.
//! Role: Pipeline roots; every chain starts at one of these.
//! Invariants: Slice entries are emitted in index order; map order is arbitrary per run.
use std::collections::HashMap;
use std::hash::Hash;

use crate::core::conduit::{Entry, Enumerable, spawn_producer};

/// Adapts an ordered sequence into a keyed sequence, using each element's
/// index as its key.
///
/// The producer starts immediately and emits `(index, value)` in index
/// order, then completes. An empty vector yields an enumerable whose first
/// pull reports exhaustion right away.
pub fn from_slice<T>(items: Vec<T>) -> Enumerable<usize, T>
where
    T: Send + 'static,
{
    spawn_producer("slice", move |tx| {
        for (index, value) in items.into_iter().enumerate() {
            if tx.send(Entry { key: index, val: value }).is_err() {
                return false;
            }
        }
        true
    })
}

/// Adapts an associative mapping into a keyed sequence.
///
/// Entries are emitted in whatever order the map yields them: arbitrary and
/// not reproducible across runs or calls. Consumers may only rely on the
/// set of entries, never on their order.
pub fn from_map<K, V>(map: HashMap<K, V>) -> Enumerable<K, V>
where
    K: Eq + Hash + Send + 'static,
    V: Send + 'static,
{
    spawn_producer("map", move |tx| {
        for (key, val) in map {
            if tx.send(Entry { key, val }).is_err() {
                return false;
            }
        }
        true
    })
}
