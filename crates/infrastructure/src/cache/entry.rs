use bytes::Bytes;
use std::sync::atomic::{AtomicU64, Ordering};

/// Session value plus recency bookkeeping.
pub struct CacheEntry {
    pub(crate) value: Bytes,

    /// Live recency stamp. Readers bump it under the shared lock.
    last_access: AtomicU64,

    /// Stamp under which the key currently sits in the recency index.
    /// Only changed under the exclusive lock; `queued_at <= last_access`.
    pub(crate) queued_at: u64,
}

impl CacheEntry {
    pub(crate) fn new(value: Bytes, stamp: u64) -> Self {
        Self {
            value,
            last_access: AtomicU64::new(stamp),
            queued_at: stamp,
        }
    }

    #[inline]
    pub fn last_access(&self) -> u64 {
        self.last_access.load(Ordering::Relaxed)
    }

    /// Records a read. `fetch_max` keeps the newest stamp when readers race.
    #[inline]
    pub(crate) fn touch(&self, stamp: u64) {
        self.last_access.fetch_max(stamp, Ordering::Relaxed);
    }

    /// Records a write; caller holds the exclusive lock.
    #[inline]
    pub(crate) fn overwrite(&mut self, value: Bytes, stamp: u64) {
        self.value = value;
        *self.last_access.get_mut() = stamp;
    }

    /// True when reads happened since the entry was last queued.
    #[inline]
    pub(crate) fn is_requeue_needed(&mut self) -> bool {
        *self.last_access.get_mut() != self.queued_at
    }
}
