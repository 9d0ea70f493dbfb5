pub mod get_edge_metrics;

pub use get_edge_metrics::GetEdgeMetricsUseCase;
