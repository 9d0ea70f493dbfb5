//! Mesh Agent Application Layer
//!
//! Ports describe what the request handlers need from the session cache and
//! the route table; use cases are the operations the HTTP layer invokes.
pub mod ports;
pub mod use_cases;
