pub mod clock;
pub mod entry;
pub mod metrics;
pub mod storage;

pub use clock::AccessClock;
pub use entry::CacheEntry;
pub use metrics::CacheMetrics;
pub use storage::SessionCache;
