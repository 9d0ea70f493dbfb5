use mesh_agent_domain::{CacheStats, EdgeMetrics, RoutingStats};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheMetricsResponse {
    pub entries: usize,
    pub capacity: usize,
    pub hits: u64,
    pub misses: u64,
    pub insertions: u64,
    pub overwrites: u64,
    pub evictions: u64,
    pub deletions: u64,
    pub hit_rate: f64,
}

impl From<CacheStats> for CacheMetricsResponse {
    fn from(stats: CacheStats) -> Self {
        Self {
            entries: stats.entries,
            capacity: stats.capacity,
            hits: stats.hits,
            misses: stats.misses,
            insertions: stats.insertions,
            overwrites: stats.overwrites,
            evictions: stats.evictions,
            deletions: stats.deletions,
            hit_rate: stats.hit_rate,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutingMetricsResponse {
    pub total_routes: usize,
    pub degraded_routes: usize,
    pub failovers: u64,
}

impl From<RoutingStats> for RoutingMetricsResponse {
    fn from(stats: RoutingStats) -> Self {
        Self {
            total_routes: stats.total_routes,
            degraded_routes: stats.degraded_routes,
            failovers: stats.failovers,
        }
    }
}

/// Response DTO for `/metrics/edge`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeMetricsResponse {
    pub cache: CacheMetricsResponse,
    pub routing: RoutingMetricsResponse,
}

impl From<EdgeMetrics> for EdgeMetricsResponse {
    fn from(metrics: EdgeMetrics) -> Self {
        Self {
            cache: metrics.cache.into(),
            routing: metrics.routing.into(),
        }
    }
}
