use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use super::cache::CacheConfig;
use super::errors::ConfigError;
use super::logging::{LoggingConfig, LOG_LEVELS};
use super::routing::StaticRoute;
use super::server::ServerConfig;
use crate::edge_node::EdgeNode;
use crate::route::RouteSnapshot;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub cache: CacheConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub routes: Vec<StaticRoute>,
}

/// Command-line values that take precedence over the config file
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub bind_address: Option<String>,
    pub port: Option<u16>,
    pub cache_capacity: Option<usize>,
    pub log_level: Option<String>,
}

impl Config {
    /// Load configuration from an optional TOML file, then apply CLI overrides.
    ///
    /// Without a path the built-in defaults are used.
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(p) => Self::from_file(p)?,
            None => Self::default(),
        };

        config.apply_overrides(overrides);
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(capacity) = overrides.cache_capacity {
            self.cache.capacity = capacity;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation(
                "server.port must be greater than 0".into(),
            ));
        }

        if self.cache.capacity == 0 {
            return Err(ConfigError::Validation(
                "cache.capacity must be greater than 0".into(),
            ));
        }

        let level = self.logging.level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::Validation(format!(
                "logging.level '{}' is not one of {:?}",
                self.logging.level, LOG_LEVELS
            )));
        }

        let mut destinations = HashSet::new();
        for route in &self.routes {
            RouteSnapshot::validate_destination(&route.destination)
                .map_err(ConfigError::Validation)?;

            if !destinations.insert(route.destination.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "Route '{}' is declared more than once",
                    route.destination
                )));
            }

            if route.nodes.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "Route '{}' must list at least one node",
                    route.destination
                )));
            }

            let mut nodes = HashSet::new();
            for node in &route.nodes {
                EdgeNode::validate_id(node).map_err(ConfigError::Validation)?;
                if !nodes.insert(node.as_str()) {
                    return Err(ConfigError::Validation(format!(
                        "Route '{}' lists node '{}' more than once",
                        route.destination, node
                    )));
                }
            }
        }

        Ok(())
    }
}
