//! # tallycache
//!
//! Fixed-capacity LRU cache.
//!
//! ## Architecture
//! - **HashMap**: AHash-backed map owning the stored values (O(1) lookup)
//! - **Recency list**: doubly linked list of keys simulated over an index
//!   arena (O(1) promotion and eviction)
//! - **Counters**: hit/miss/insertion/eviction statistics
//!
//! The cache is single-threaded by design; callers sharing one across
//! threads wrap it in a lock.

#![warn(missing_docs)]

mod lru;
mod stats;

pub use lru::LruCache;
pub use stats::CacheStats;
