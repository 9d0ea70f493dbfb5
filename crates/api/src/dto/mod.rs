pub mod metrics;
pub mod route;

pub use metrics::{CacheMetricsResponse, EdgeMetricsResponse, RoutingMetricsResponse};
pub use route::{
    EdgeNodeResponse, FailoverRequest, FailoverResponse, ReelectResponse, RegisterRouteRequest,
    ResolveResponse, RouteResponse,
};
