//! Purpose: Lazy keyed-sequence pipelines over rendezvous channels.
//! Exports: `api` (stable surface), `core` (conduit, sources, stages).
//! Role: Pure in-process library; no I/O, no persisted state.
//! Invariants: Every source or stage is one producer thread plus one rendezvous conduit.
//! Invariants: Pulling from the outermost enumerable transitively drives the whole chain.
//! Invariants: Dropping an enumerable tears down its upstream producers.
pub mod api;
pub mod core;
