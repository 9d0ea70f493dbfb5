pub mod cache;
pub mod routing;

pub use cache::SessionCache;
pub use routing::RouteTable;
