//! Utility modules for the lookup engine.

pub mod cache;

pub use cache::{CacheStats, TableCache};
