use mesh_agent_application::ports::{RouteRegistry, SessionStore};
use mesh_agent_application::use_cases::{
    DeleteSessionUseCase, GetEdgeMetricsUseCase, GetRoutesUseCase, GetSessionUseCase,
    MarkHealthyUseCase, PutSessionUseCase, ReelectPrimaryUseCase, RegisterRouteUseCase,
    RemoveRouteUseCase, ResolveRouteUseCase, TriggerFailoverUseCase,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub get_session: Arc<GetSessionUseCase>,
    pub put_session: Arc<PutSessionUseCase>,
    pub delete_session: Arc<DeleteSessionUseCase>,
    pub register_route: Arc<RegisterRouteUseCase>,
    pub resolve_route: Arc<ResolveRouteUseCase>,
    pub trigger_failover: Arc<TriggerFailoverUseCase>,
    pub mark_healthy: Arc<MarkHealthyUseCase>,
    pub reelect_primary: Arc<ReelectPrimaryUseCase>,
    pub remove_route: Arc<RemoveRouteUseCase>,
    pub get_routes: Arc<GetRoutesUseCase>,
    pub get_metrics: Arc<GetEdgeMetricsUseCase>,
}

impl AppState {
    /// Wires every use case against one session store and one route registry.
    pub fn from_ports(store: Arc<dyn SessionStore>, routes: Arc<dyn RouteRegistry>) -> Self {
        Self {
            get_session: Arc::new(GetSessionUseCase::new(store.clone())),
            put_session: Arc::new(PutSessionUseCase::new(store.clone())),
            delete_session: Arc::new(DeleteSessionUseCase::new(store.clone())),
            register_route: Arc::new(RegisterRouteUseCase::new(routes.clone())),
            resolve_route: Arc::new(ResolveRouteUseCase::new(routes.clone())),
            trigger_failover: Arc::new(TriggerFailoverUseCase::new(routes.clone())),
            mark_healthy: Arc::new(MarkHealthyUseCase::new(routes.clone())),
            reelect_primary: Arc::new(ReelectPrimaryUseCase::new(routes.clone())),
            remove_route: Arc::new(RemoveRouteUseCase::new(routes.clone())),
            get_routes: Arc::new(GetRoutesUseCase::new(routes.clone())),
            get_metrics: Arc::new(GetEdgeMetricsUseCase::new(store, routes)),
        }
    }
}
