//! GCA Async Cache
//!
//! Memoizes expensive external lookups (schedules, programs, catalogs) and
//! guarantees at most one in-flight creation per key, so concurrent sync and
//! read requests never stampede the upstream source.
//!
//! # Core Concepts
//!
//! - [`AsyncCache::get_or_create`]: return a live entry or run the creator
//!   exactly once while other callers for the same key wait
//! - Failures are never cached; a failed creation releases the key for retry
//! - Entries expire after a fixed TTL and the least recently accessed entry
//!   is evicted once capacity is reached

mod cache;

pub use cache::{AsyncCache, CacheStats};
