//! Core engine modules - query cache and the background fetch thread.
//!
//! Independent of the UI: the widgets only see [`query::QueryStatus`]
//! values and never touch the network or the cache directly.

pub mod query;
pub(crate) mod worker;

// Re-exports for convenience
pub use query::{CacheStats, PageKey, QueryClient, QueryConfig, QueryStatus};
