//! Configuration module for Mesh Agent
//!
//! This module contains all configuration structures organized by domain:
//! - `root`: Main configuration and CLI overrides
//! - `server`: HTTP listener binding
//! - `cache`: Session cache sizing
//! - `routing`: Static routes registered at startup
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod cache;
pub mod errors;
pub mod logging;
pub mod root;
pub mod routing;
pub mod server;

pub use cache::CacheConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use routing::StaticRoute;
pub use server::ServerConfig;
