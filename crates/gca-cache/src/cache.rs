//! Per-key dogpile-safe cache
//!
//! Locking here is cooperative: the per-key mutex deduplicates logical work,
//! it does not protect the stored values, which are immutable snapshots once
//! inserted. The lock table itself is the only shared structure needing
//! mutual exclusion, and the sharded map provides it.

use dashmap::DashMap;
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::time::{Duration, Instant};

/// Cache counters for monitoring
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of live entries
    pub entry_count: u64,
    /// Number of per-key locks currently tracked
    pub lock_count: u64,
}

struct Entry<T> {
    value: T,
    expires_at: Instant,
    last_access: Instant,
}

/// Async key → value cache with TTL and per-key creator mutual exclusion
///
/// Values are cloned out on every hit; wrap large values in `Arc` at the
/// call site. The expiry clock is [`tokio::time::Instant`], so tests can run
/// against a paused clock.
pub struct AsyncCache<T> {
    entries: DashMap<String, Entry<T>>,
    locks: DashMap<String, Arc<Mutex<()>>>,
    ttl: Duration,
    max_capacity: usize,
}

impl<T> fmt::Debug for AsyncCache<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AsyncCache")
            .field("entries", &self.entries.len())
            .field("locks", &self.locks.len())
            .field("ttl", &self.ttl)
            .field("max_capacity", &self.max_capacity)
            .finish()
    }
}

impl<T: Clone + Send + Sync + 'static> AsyncCache<T> {
    /// Create a cache with the given entry TTL and capacity bound
    #[must_use]
    pub fn new(ttl: Duration, max_capacity: usize) -> Self {
        Self {
            entries: DashMap::new(),
            locks: DashMap::new(),
            ttl,
            max_capacity,
        }
    }

    /// Return the cached value for `key`, or create it exactly once
    ///
    /// A live entry is returned without taking the per-key lock. On a miss
    /// the caller acquires the key's lock, re-checks (another caller may have
    /// populated the entry while it waited), and only then runs `creator`.
    /// Concurrent callers for the same key therefore observe either the
    /// pre-existing value or the result of exactly one creator invocation.
    ///
    /// # Errors
    /// A creator failure propagates to the caller that ran it, is never
    /// cached, and leaves the key absent so the next caller retries.
    pub async fn get_or_create<F, Fut, E>(&self, key: &str, creator: F) -> Result<T, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        if let Some(value) = self.lookup(key) {
            return Ok(value);
        }

        let lock = self.key_lock(key);
        let guard = lock.lock().await;

        if let Some(value) = self.lookup(key) {
            return Ok(value);
        }

        tracing::debug!(key, "cache miss, invoking creator");
        match creator().await {
            Ok(value) => {
                self.store(key, value.clone());
                Ok(value)
            }
            Err(err) => {
                drop(guard);
                drop(lock);
                self.discard_idle_lock(key);
                Err(err)
            }
        }
    }

    /// Drop one entry
    pub fn invalidate(&self, key: &str) {
        self.entries.remove(key);
        self.discard_idle_lock(key);
    }

    /// Drop all entries and all currently unheld per-key locks
    ///
    /// Held locks stay so in-flight waiters keep a consistent view of the
    /// key they are blocked on.
    pub fn clear(&self) {
        self.entries.clear();
        self.locks.retain(|_, lock| lock.try_lock().is_err());
    }

    /// Current counters
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entry_count: self.entries.len() as u64,
            lock_count: self.locks.len() as u64,
        }
    }

    /// Live (non-expired) value for `key`; expired entries are removed
    fn lookup(&self, key: &str) -> Option<T> {
        let now = Instant::now();
        let mut expired = false;
        if let Some(mut entry) = self.entries.get_mut(key) {
            if now < entry.expires_at {
                entry.last_access = now;
                return Some(entry.value.clone());
            }
            expired = true;
        }
        if expired {
            self.entries.remove(key);
        }
        None
    }

    /// Lock for `key`, created on demand under the lock table's own guard
    fn key_lock(&self, key: &str) -> Arc<Mutex<()>> {
        self.locks
            .entry(key.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .value()
            .clone()
    }

    /// Remove the key's lock when nothing references it and no value is
    /// cached, bounding growth of the lock table
    fn discard_idle_lock(&self, key: &str) {
        self.locks.remove_if(key, |_, lock| {
            Arc::strong_count(lock) == 1 && !self.entries.contains_key(key)
        });
    }

    fn store(&self, key: &str, value: T) {
        if self.entries.len() >= self.max_capacity && !self.entries.contains_key(key) {
            self.evict_lru();
        }
        let now = Instant::now();
        self.entries.insert(
            key.to_string(),
            Entry {
                value,
                expires_at: now + self.ttl,
                last_access: now,
            },
        );
    }

    /// Evict the least recently accessed entry and its unheld lock
    fn evict_lru(&self) {
        let oldest = self
            .entries
            .iter()
            .min_by_key(|entry| entry.value().last_access)
            .map(|entry| entry.key().clone());
        if let Some(key) = oldest {
            tracing::debug!(key = %key, "evicting least recently used entry");
            self.entries.remove(&key);
            self.locks.remove_if(&key, |_, lock| lock.try_lock().is_ok());
        }
    }
}
