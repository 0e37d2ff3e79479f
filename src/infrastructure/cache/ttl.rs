//! Bounded in-memory cache with per-entry time-to-live
//!
//! Entries expire a fixed duration after insertion and are lazily purged on
//! access. When the cache is full, the least-recently-inserted entry is
//! evicted first (insertion order, not access order); the goal is bounding
//! memory, not tracking recency of use.

use std::collections::{HashMap, VecDeque};
use std::hash::Hash;
use std::sync::Mutex;
use std::time::{Duration, Instant};

#[derive(Debug)]
struct Slot<V> {
    value: V,
    expires_at: Instant,
}

#[derive(Debug)]
struct Inner<K, V> {
    entries: HashMap<K, Slot<V>>,
    // Front is the oldest insertion, the next eviction victim
    order: VecDeque<K>,
}

/// Thread-safe key-value cache with fixed capacity and entry lifetime.
///
/// One mutex guards both the map and the insertion-order queue, so readers
/// and writers are serialized and no caller observes a torn entry. Misses
/// are a normal `None`, never an error.
#[derive(Debug)]
pub struct TtlCache<K, V> {
    inner: Mutex<Inner<K, V>>,
    capacity: usize,
    ttl: Duration,
}

impl<K, V> TtlCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    /// Creates a cache. Capacity and TTL are fixed for its lifetime.
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        assert!(capacity > 0, "cache capacity must be non-zero");
        Self {
            inner: Mutex::new(Inner {
                entries: HashMap::with_capacity(capacity),
                order: VecDeque::with_capacity(capacity),
            }),
            capacity,
            ttl,
        }
    }

    /// Returns the cached value, or `None` for absent or expired keys.
    /// An expired entry is removed on the way out.
    pub fn get(&self, key: &K) -> Option<V> {
        let now = Instant::now();
        let mut inner = self.inner.lock().unwrap();

        let expired = match inner.entries.get(key) {
            Some(slot) if now < slot.expires_at => return Some(slot.value.clone()),
            Some(_) => true,
            None => false,
        };

        if expired {
            inner.entries.remove(key);
            inner.order.retain(|k| k != key);
        }

        None
    }

    /// Inserts a value, valid for the cache's TTL from now.
    ///
    /// Re-inserting an existing key refreshes its value, expiry, and
    /// insertion-order position. Inserting a new key into a full cache
    /// evicts the oldest insertion first.
    pub fn put(&self, key: K, value: V) {
        let expires_at = Instant::now() + self.ttl;
        let mut inner = self.inner.lock().unwrap();

        if inner.entries.remove(&key).is_some() {
            inner.order.retain(|k| k != &key);
        }

        while inner.entries.len() >= self.capacity {
            match inner.order.pop_front() {
                Some(oldest) => {
                    inner.entries.remove(&oldest);
                }
                None => break,
            }
        }

        inner.order.push_back(key.clone());
        inner.entries.insert(key, Slot { value, expires_at });
    }

    /// Number of stored entries, counting not-yet-purged expired ones
    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
