use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CacheStats {
    pub entries: usize,
    pub capacity: usize,
    pub hits: u64,
    pub misses: u64,
    pub insertions: u64,
    pub overwrites: u64,
    pub evictions: u64,
    pub deletions: u64,
    /// Percentage of reads served from the cache (0.0 - 100.0)
    pub hit_rate: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RoutingStats {
    pub total_routes: usize,
    pub degraded_routes: usize,
    pub failovers: u64,
}

/// Everything the edge metrics endpoint reports.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EdgeMetrics {
    pub cache: CacheStats,
    pub routing: RoutingStats,
}
