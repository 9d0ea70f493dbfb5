use std::sync::atomic::{AtomicU64, Ordering};

/// Logical clock used as the cache's `last_access` timestamp.
///
/// Every call to [`AccessClock::tick`] returns a distinct, strictly larger
/// value, so two accesses never collide and an older insertion always carries
/// a smaller stamp than a newer one.
#[derive(Debug, Default)]
pub struct AccessClock {
    now: AtomicU64,
}

impl AccessClock {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn tick(&self) -> u64 {
        self.now.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Last stamp handed out (0 before the first tick).
    #[inline]
    pub fn now(&self) -> u64 {
        self.now.load(Ordering::Relaxed)
    }
}
