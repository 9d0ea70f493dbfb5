use bytes::Bytes;
use mesh_agent_domain::CacheStats;

/// Bounded key-value store for session data.
///
/// All methods must be safe to call concurrently from any number of request
/// handlers and must never block on I/O.
pub trait SessionStore: Send + Sync {
    /// Returns the current value and refreshes its recency.
    fn get(&self, key: &str) -> Option<Bytes>;

    /// Inserts or overwrites. May evict the least recently used entry.
    fn put(&self, key: &str, value: Bytes);

    /// Returns whether an entry was removed.
    fn delete(&self, key: &str) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn stats(&self) -> CacheStats;
}
