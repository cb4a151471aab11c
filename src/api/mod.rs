//! Purpose: Define the stable public surface of the crate.
//! Exports: `Enumerable`, `from_slice`, `from_map`.
//! Role: Additive-only re-export boundary over the core modules.
//! Invariants: This module is the supported import path for callers.
pub use crate::core::conduit::Enumerable;
pub use crate::core::source::{from_map, from_slice};
