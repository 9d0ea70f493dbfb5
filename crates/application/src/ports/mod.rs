pub mod route_registry;
pub mod session_store;

pub use route_registry::{RouteRegistry, RouteResolution};
pub use session_store::SessionStore;
