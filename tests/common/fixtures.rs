/// Common test sizes
pub struct TestConfig;

impl TestConfig {
    pub fn default_cache_capacity() -> usize {
        128
    }

    /// Concurrent client tasks in load tests
    pub fn concurrent_clients() -> usize {
        16
    }

    pub fn small_load_requests() -> usize {
        200
    }

    pub fn large_load_requests() -> usize {
        20_000
    }
}

/// Static route definitions shaped like a `[[routes]]` config section.
pub fn static_routes_toml() -> &'static str {
    r#"
    [[routes]]
    destination = "checkout"
    nodes = ["edge-eu-1", "edge-eu-2", "edge-us-1"]

    [[routes]]
    destination = "search"
    nodes = ["edge-us-1", "edge-us-2"]
    "#
}
