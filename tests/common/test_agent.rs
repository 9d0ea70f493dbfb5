use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use mesh_agent_api::{create_api_routes, AppState};
use mesh_agent_domain::Config;
use mesh_agent_infrastructure::{RouteTable, SessionCache};
use serde_json::Value;
use std::num::NonZeroUsize;
use std::sync::Arc;
use tower::ServiceExt;

use super::fixtures::TestConfig;

/// In-process agent: the real router over real components, no sockets.
#[derive(Clone)]
pub struct TestAgent {
    router: Router,
    pub cache: Arc<SessionCache>,
    pub routes: Arc<RouteTable>,
}

impl TestAgent {
    pub fn start() -> Self {
        TestAgentBuilder::new().build()
    }

    pub async fn request(&self, method: Method, uri: &str, body: Body) -> (StatusCode, Vec<u8>) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(body)
            .unwrap();

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, bytes.to_vec())
    }

    pub async fn json(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let body = body.map_or_else(Body::empty, |v| Body::from(v.to_string()));
        let (status, bytes) = self.request(method, uri, body).await;
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    pub async fn put_session(&self, key: &str, value: &str) -> StatusCode {
        let body = Body::from(value.to_string());
        self.request(Method::PUT, &format!("/cache/{key}"), body).await.0
    }

    pub async fn get_session(&self, key: &str) -> Option<String> {
        let (status, bytes) = self
            .request(Method::GET, &format!("/cache/{key}"), Body::empty())
            .await;
        (status == StatusCode::OK).then(|| String::from_utf8(bytes).unwrap())
    }

    pub async fn register(&self, destination: &str, nodes: &[&str]) -> StatusCode {
        let body = serde_json::json!({ "destination": destination, "nodes": nodes });
        self.json(Method::POST, "/routes", Some(body)).await.0
    }

    /// Resolved node id, or the status code when resolution failed.
    pub async fn resolve(&self, destination: &str) -> Result<String, StatusCode> {
        let (status, body) = self
            .json(Method::GET, &format!("/route/{destination}"), None)
            .await;
        match status {
            StatusCode::OK => Ok(body["node"].as_str().unwrap().to_string()),
            other => Err(other),
        }
    }

    pub async fn fail(&self, destination: &str, node: &str) -> (StatusCode, Value) {
        let body = serde_json::json!({ "destination": destination, "node": node });
        self.json(Method::POST, "/failover", Some(body)).await
    }

    pub async fn recover(&self, node: &str) -> StatusCode {
        self.request(Method::POST, &format!("/nodes/{node}/healthy"), Body::empty())
            .await
            .0
    }

    pub async fn metrics(&self) -> Value {
        self.json(Method::GET, "/metrics/edge", None).await.1
    }
}

pub struct TestAgentBuilder {
    cache_capacity: usize,
    config_toml: Option<String>,
}

impl TestAgentBuilder {
    pub fn new() -> Self {
        Self {
            cache_capacity: TestConfig::default_cache_capacity(),
            config_toml: None,
        }
    }

    pub fn with_cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = capacity;
        self
    }

    /// Registers the `[[routes]]` of a TOML config at startup.
    pub fn with_config(mut self, toml: &str) -> Self {
        self.config_toml = Some(toml.to_string());
        self
    }

    pub fn build(self) -> TestAgent {
        let cache = Arc::new(SessionCache::new(
            NonZeroUsize::new(self.cache_capacity).unwrap(),
        ));
        let routes = Arc::new(RouteTable::new());

        if let Some(toml) = self.config_toml {
            let config = Config::from_toml_str(&toml).unwrap();
            config.validate().unwrap();
            routes
                .preload(
                    config
                        .routes
                        .iter()
                        .map(|r| (r.destination.as_str(), r.nodes.as_slice())),
                )
                .unwrap();
        }

        let state = AppState::from_ports(cache.clone(), routes.clone());

        TestAgent {
            router: create_api_routes(state),
            cache,
            routes,
        }
    }
}

impl Default for TestAgentBuilder {
    fn default() -> Self {
        Self::new()
    }
}
