pub mod cache;
pub mod metrics;
pub mod routes;

// Re-export use cases
pub use cache::{DeleteSessionUseCase, GetSessionUseCase, PutSessionUseCase};
pub use metrics::GetEdgeMetricsUseCase;
pub use routes::{
    GetRoutesUseCase, MarkHealthyUseCase, ReelectPrimaryUseCase, RegisterRouteUseCase,
    RemoveRouteUseCase, ResolveRouteUseCase, TriggerFailoverUseCase,
};
