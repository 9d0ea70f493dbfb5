mod route;
pub mod table;

pub use table::RouteTable;
