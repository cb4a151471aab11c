//! Purpose: Lazy transformation stages composing one enumerable into another.
//! Exports: `Enumerable::{filter, map_entries, map_values}`.
//! Role: Each stage drains its upstream on its own producer thread.
//! Invariants: Caller closures run exactly once per upstream entry, in upstream order.
//! Invariants: Stages never buffer beyond the single in-flight handoff.
use tracing::trace;

use crate::core::conduit::{Entry, Enumerable, spawn_producer};

impl<K, V> Enumerable<K, V>
where
    K: Send + 'static,
    V: Send + 'static,
{
    /// Keeps only the entries satisfying `predicate`, preserving relative
    /// order. Rejected entries are discarded immediately, never buffered or
    /// revisited.
    ///
    /// The predicate must be total; fallible logic belongs in an earlier
    /// step that reduces it to a boolean.
    pub fn filter<F>(self, mut predicate: F) -> Enumerable<K, V>
    where
        F: FnMut(&K, &V) -> bool + Send + 'static,
    {
        spawn_producer("filter", move |tx| {
            let mut kept = 0usize;
            let mut dropped = 0usize;
            for (key, val) in self {
                if !predicate(&key, &val) {
                    dropped += 1;
                    continue;
                }
                kept += 1;
                if tx.send(Entry { key, val }).is_err() {
                    return false;
                }
            }
            trace!(kept, dropped, "filter drained upstream");
            true
        })
    }

    /// Transforms key and value, 1:1 and order-preserving; the output key
    /// and value types may differ from the input's.
    ///
    /// Duplicate output keys are not resolved here; only
    /// [`Enumerable::to_map`] applies last-write-wins.
    pub fn map_entries<L, U, F>(self, mut transform: F) -> Enumerable<L, U>
    where
        L: Send + 'static,
        U: Send + 'static,
        F: FnMut(K, V) -> (L, U) + Send + 'static,
    {
        spawn_producer("map_entries", move |tx| {
            for (key, val) in self {
                let (key, val) = transform(key, val);
                if tx.send(Entry { key, val }).is_err() {
                    return false;
                }
            }
            true
        })
    }

    /// Transforms values only, leaving every key untouched. The common case
    /// of [`Enumerable::map_entries`], kept separate so callers need not
    /// thread the key through.
    pub fn map_values<U, F>(self, mut transform: F) -> Enumerable<K, U>
    where
        U: Send + 'static,
        F: FnMut(V) -> U + Send + 'static,
    {
        spawn_producer("map_values", move |tx| {
            for (key, val) in self {
                let val = transform(val);
                if tx.send(Entry { key, val }).is_err() {
                    return false;
                }
            }
            true
        })
    }
}
