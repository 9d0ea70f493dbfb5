use super::{AccessClock, CacheEntry, CacheMetrics};
use bytes::Bytes;
use compact_str::CompactString;
use mesh_agent_application::ports::SessionStore;
use mesh_agent_domain::CacheStats;
use rustc_hash::FxBuildHasher;
use std::collections::{BTreeMap, HashMap};
use std::num::NonZeroUsize;
use std::sync::atomic::Ordering as AtomicOrdering;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, info};

struct CacheState {
    entries: HashMap<CompactString, CacheEntry, FxBuildHasher>,

    /// Recency index, oldest stamp first. Holds every key exactly once, under
    /// its `queued_at` stamp. Reads under the shared lock cannot move keys
    /// here, so a queued stamp may lag behind the live one until eviction
    /// reconciles it.
    recency: BTreeMap<u64, CompactString>,
}

impl CacheState {
    /// Removes the entry with the oldest live stamp.
    ///
    /// Keys popped with a stale stamp are re-queued under their live stamp;
    /// each re-queue pays for a read that happened since the last one, so the
    /// scan is amortized by the reads themselves.
    fn evict_lru(&mut self) -> Option<CompactString> {
        while let Some((_, key)) = self.recency.pop_first() {
            let Some(entry) = self.entries.get_mut(&key) else {
                continue;
            };

            if entry.is_requeue_needed() {
                let live = entry.last_access();
                entry.queued_at = live;
                self.recency.insert(live, key);
                continue;
            }

            self.entries.remove(&key);
            return Some(key);
        }
        None
    }
}

/// Bounded session store with least-recently-used eviction.
///
/// `get` runs under a shared lock so concurrent readers proceed together;
/// `put` and `delete` take the exclusive lock since the value map and the
/// recency index change together.
pub struct SessionCache {
    state: RwLock<CacheState>,
    capacity: NonZeroUsize,
    clock: AccessClock,
    metrics: CacheMetrics,
}

impl SessionCache {
    pub fn new(capacity: NonZeroUsize) -> Self {
        info!(capacity = capacity.get(), "Initializing session cache");

        Self {
            state: RwLock::new(CacheState {
                entries: HashMap::with_capacity_and_hasher(
                    capacity.get().min(64 * 1024),
                    FxBuildHasher,
                ),
                recency: BTreeMap::new(),
            }),
            capacity,
            clock: AccessClock::new(),
            metrics: CacheMetrics::default(),
        }
    }

    // A panic while holding the lock cannot leave the two maps half-updated
    // in a way later calls rely on, so poisoning is ignored.
    fn read_state(&self) -> RwLockReadGuard<'_, CacheState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, CacheState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn get(&self, key: &str) -> Option<Bytes> {
        let state = self.read_state();

        match state.entries.get(key) {
            Some(entry) => {
                entry.touch(self.clock.tick());
                self.metrics.hits.fetch_add(1, AtomicOrdering::Relaxed);
                Some(entry.value.clone())
            }
            None => {
                self.metrics.misses.fetch_add(1, AtomicOrdering::Relaxed);
                None
            }
        }
    }

    pub fn put(&self, key: &str, value: Bytes) {
        let mut state = self.write_state();
        let stamp = self.clock.tick();

        if let Some(entry) = state.entries.get_mut(key) {
            entry.overwrite(value, stamp);
            self.metrics.overwrites.fetch_add(1, AtomicOrdering::Relaxed);
            return;
        }

        if state.entries.len() >= self.capacity.get() {
            if let Some(evicted) = state.evict_lru() {
                self.metrics.evictions.fetch_add(1, AtomicOrdering::Relaxed);
                debug!(evicted = %evicted, inserted = %key, "Evicted least recently used session");
            }
        }

        let key = CompactString::from(key);
        state.recency.insert(stamp, key.clone());
        state.entries.insert(key, CacheEntry::new(value, stamp));
        self.metrics.insertions.fetch_add(1, AtomicOrdering::Relaxed);
    }

    pub fn delete(&self, key: &str) -> bool {
        let mut state = self.write_state();

        match state.entries.remove(key) {
            Some(entry) => {
                state.recency.remove(&entry.queued_at);
                self.metrics.deletions.fetch_add(1, AtomicOrdering::Relaxed);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.read_state().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity.get()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.read_state().entries.contains_key(key)
    }

    /// Keys ordered from least to most recently used. Does not touch recency.
    pub fn keys_by_recency(&self) -> Vec<String> {
        let state = self.read_state();
        let mut keys: Vec<(u64, &CompactString)> = state
            .entries
            .iter()
            .map(|(k, e)| (e.last_access(), k))
            .collect();
        keys.sort_unstable_by_key(|(stamp, _)| *stamp);
        keys.into_iter().map(|(_, k)| k.to_string()).collect()
    }

    pub fn stats(&self) -> CacheStats {
        let m = &self.metrics;
        CacheStats {
            entries: self.len(),
            capacity: self.capacity(),
            hits: m.hits.load(AtomicOrdering::Relaxed),
            misses: m.misses.load(AtomicOrdering::Relaxed),
            insertions: m.insertions.load(AtomicOrdering::Relaxed),
            overwrites: m.overwrites.load(AtomicOrdering::Relaxed),
            evictions: m.evictions.load(AtomicOrdering::Relaxed),
            deletions: m.deletions.load(AtomicOrdering::Relaxed),
            hit_rate: m.hit_rate(),
        }
    }
}

impl SessionStore for SessionCache {
    fn get(&self, key: &str) -> Option<Bytes> {
        SessionCache::get(self, key)
    }

    fn put(&self, key: &str, value: Bytes) {
        SessionCache::put(self, key, value)
    }

    fn delete(&self, key: &str) -> bool {
        SessionCache::delete(self, key)
    }

    fn len(&self) -> usize {
        SessionCache::len(self)
    }

    fn stats(&self) -> CacheStats {
        SessionCache::stats(self)
    }
}
