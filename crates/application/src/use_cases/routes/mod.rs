pub mod get_routes;
pub mod mark_healthy;
pub mod reelect_primary;
pub mod register_route;
pub mod remove_route;
pub mod resolve_route;
pub mod trigger_failover;

pub use get_routes::GetRoutesUseCase;
pub use mark_healthy::MarkHealthyUseCase;
pub use reelect_primary::ReelectPrimaryUseCase;
pub use register_route::RegisterRouteUseCase;
pub use remove_route::RemoveRouteUseCase;
pub use resolve_route::ResolveRouteUseCase;
pub use trigger_failover::TriggerFailoverUseCase;
