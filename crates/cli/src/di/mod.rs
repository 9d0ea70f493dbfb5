use mesh_agent_api::AppState;
use mesh_agent_domain::Config;
use mesh_agent_infrastructure::{RouteTable, SessionCache};
use std::num::NonZeroUsize;
use std::sync::Arc;

/// Long-lived components owned by `main` for the lifetime of the process.
pub struct Components {
    pub cache: Arc<SessionCache>,
    pub routes: Arc<RouteTable>,
}

impl Components {
    pub fn build(config: &Config) -> anyhow::Result<Self> {
        let capacity = NonZeroUsize::new(config.cache.capacity)
            .ok_or_else(|| anyhow::anyhow!("cache.capacity must be greater than 0"))?;

        let cache = Arc::new(SessionCache::new(capacity));
        let routes = Arc::new(RouteTable::new());

        routes.preload(
            config
                .routes
                .iter()
                .map(|r| (r.destination.as_str(), r.nodes.as_slice())),
        )?;

        Ok(Self { cache, routes })
    }

    pub fn app_state(&self) -> AppState {
        AppState::from_ports(self.cache.clone(), self.routes.clone())
    }
}
