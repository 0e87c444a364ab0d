//! Tracing/logging setup shared by anything embedding the ledger store.

/// Tracing configuration (filters, layers).
pub mod tracing;

pub use tracing::{init, init_with_filter};
