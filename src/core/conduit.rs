//! Purpose: Rendezvous conduit transport backing every pipeline stage.
//! Exports: `Entry`, `Enumerable`, `spawn_producer`.
//! Role: Internal single-producer/single-consumer handoff primitives.
//! Invariants: Each conduit has exactly one producer; it closes exactly once.
//! Invariants: Handoffs are synchronous; at most one entry is in flight per conduit.
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::mpsc::{Receiver, SyncSender, sync_channel};

use tracing::trace;

/// A single key/value pair in flight between pipeline stages.
pub(crate) struct Entry<K, V> {
    pub(crate) key: K,
    pub(crate) val: V,
}

/// A handle to a live, demand-driven keyed sequence.
///
/// An `Enumerable` owns the consuming end of a rendezvous conduit fed by
/// exactly one producer thread. The producer starts running as soon as the
/// source or stage that feeds it is constructed; laziness here means
/// demand-driven delivery, not deferred startup. Pull entries one at a time
/// through the [`Iterator`] impl, or drain in bulk with [`values`],
/// [`keys`], or [`to_map`].
///
/// Dropping an `Enumerable` disconnects the conduit; its producer (and
/// every producer upstream of it) observes the failed handoff and exits.
///
/// [`values`]: Enumerable::values
/// [`keys`]: Enumerable::keys
/// [`to_map`]: Enumerable::to_map
pub struct Enumerable<K, V> {
    rx: Receiver<Entry<K, V>>,
}

/// Opens a fresh rendezvous conduit, starts `produce` on its own thread,
/// and returns the consuming handle.
///
/// `produce` must emit entries through the sender it is given and return
/// `true` after emitting its final entry, or `false` if a handoff failed
/// because the consumer was dropped mid-sequence. The conduit closes when
/// the sender drops at the end of the thread, exactly once either way.
pub(crate) fn spawn_producer<K, V, F>(stage: &'static str, produce: F) -> Enumerable<K, V>
where
    K: Send + 'static,
    V: Send + 'static,
    F: FnOnce(&SyncSender<Entry<K, V>>) -> bool + Send + 'static,
{
    let (tx, rx) = sync_channel(0);
    let _ = std::thread::spawn(move || {
        trace!(stage, "producer running");
        if produce(&tx) {
            trace!(stage, "producer completed");
        } else {
            trace!(stage, "consumer gone, producer exiting early");
        }
    });
    Enumerable { rx }
}

impl<K, V> Iterator for Enumerable<K, V> {
    type Item = (K, V);

    /// Blocks until the producer hands off the next entry (`Some`) or has
    /// completed with nothing further (`None`). This is the only point a
    /// consumer suspends waiting on upstream work. Once exhausted, every
    /// subsequent call returns `None`.
    fn next(&mut self) -> Option<(K, V)> {
        self.rx.recv().ok().map(|entry| (entry.key, entry.val))
    }
}

impl<K, V> Enumerable<K, V> {
    /// Drains the sequence and returns every value in delivery order.
    pub fn values(self) -> Vec<V> {
        self.map(|(_, val)| val).collect()
    }

    /// Drains the sequence and returns every key in delivery order.
    pub fn keys(self) -> Vec<K> {
        self.map(|(key, _)| key).collect()
    }

    /// Drains the sequence into a mapping.
    ///
    /// If the same key is delivered more than once, the later delivery
    /// wins. This is the only place key uniqueness matters; upstream stages
    /// never deduplicate.
    pub fn to_map(self) -> HashMap<K, V>
    where
        K: Eq + Hash,
    {
        self.collect()
    }
}
