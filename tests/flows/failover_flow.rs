#[path = "../common/mod.rs"]
mod common;

use axum::http::{Method, StatusCode};
use common::{fixtures, TestAgent, TestAgentBuilder};
use serde_json::Value;

// ============================================================================
// Failover Chain
// ============================================================================

#[tokio::test]
async fn test_failover_walks_candidates_then_degrades() {
    let agent = TestAgent::start();
    assert_eq!(agent.register("svc", &["A", "B", "C"]).await, StatusCode::CREATED);
    assert_eq!(agent.resolve("svc").await, Ok("A".to_string()));

    agent.fail("svc", "A").await;
    assert_eq!(agent.resolve("svc").await, Ok("B".to_string()));

    agent.fail("svc", "B").await;
    assert_eq!(agent.resolve("svc").await, Ok("C".to_string()));

    let (status, outcome) = agent.fail("svc", "C").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(outcome["degraded"], true);
    assert_eq!(agent.resolve("svc").await, Err(StatusCode::SERVICE_UNAVAILABLE));

    assert_eq!(agent.recover("A").await, StatusCode::NO_CONTENT);
    assert_eq!(agent.resolve("svc").await, Err(StatusCode::SERVICE_UNAVAILABLE));
}

#[tokio::test]
async fn test_recovered_node_rejoins_as_standby() {
    let agent = TestAgent::start();
    agent.register("svc", &["A", "B", "C"]).await;

    agent.fail("svc", "A").await;
    agent.recover("A").await;
    assert_eq!(agent.resolve("svc").await, Ok("B".to_string()));

    // B fails: the scan after B reaches C before wrapping to A.
    agent.fail("svc", "B").await;
    assert_eq!(agent.resolve("svc").await, Ok("C".to_string()));

    agent.fail("svc", "C").await;
    assert_eq!(agent.resolve("svc").await, Ok("A".to_string()));
}

#[tokio::test]
async fn test_operator_reelection_restores_service() {
    let agent = TestAgent::start();
    agent.register("svc", &["A", "B"]).await;
    agent.fail("svc", "A").await;
    agent.fail("svc", "B").await;
    agent.recover("B").await;
    agent.recover("A").await;

    let (status, body) = agent
        .json(Method::POST, "/routes/svc/reelect", None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["primary"], "A");
    assert_eq!(agent.resolve("svc").await, Ok("A".to_string()));
}

#[tokio::test]
async fn test_reregistration_resets_health() {
    let agent = TestAgent::start();
    agent.register("svc", &["A", "B"]).await;
    agent.fail("svc", "A").await;
    agent.fail("svc", "B").await;

    assert_eq!(agent.register("svc", &["A", "B"]).await, StatusCode::CREATED);
    assert_eq!(agent.resolve("svc").await, Ok("A".to_string()));
}

// ============================================================================
// Static Routes
// ============================================================================

#[tokio::test]
async fn test_static_routes_from_config() {
    let agent = TestAgentBuilder::new()
        .with_config(fixtures::static_routes_toml())
        .build();

    assert_eq!(agent.resolve("checkout").await, Ok("edge-eu-1".to_string()));
    assert_eq!(agent.resolve("search").await, Ok("edge-us-1".to_string()));

    // Health is tracked per route: edge-us-1 failing for search leaves it
    // serving checkout.
    agent.fail("checkout", "edge-eu-1").await;
    agent.fail("checkout", "edge-eu-2").await;
    agent.fail("search", "edge-us-1").await;
    assert_eq!(agent.resolve("checkout").await, Ok("edge-us-1".to_string()));
    assert_eq!(agent.resolve("search").await, Ok("edge-us-2".to_string()));

    assert_eq!(agent.recover("edge-us-1").await, StatusCode::NO_CONTENT);
    assert_eq!(agent.resolve("search").await, Ok("edge-us-2".to_string()));

    let (_, routes) = agent.json(Method::GET, "/routes", None).await;
    let search = routes
        .as_array()
        .unwrap()
        .iter()
        .find(|r| r["destination"] == "search")
        .unwrap();
    assert_eq!(search["candidates"][0]["healthy"], true);
    assert_ne!(search["candidates"][0]["last_failure"], Value::Null);
}

// ============================================================================
// Metrics
// ============================================================================

#[tokio::test]
async fn test_metrics_follow_failover_activity() {
    let agent = TestAgent::start();
    agent.register("one", &["A", "B"]).await;
    agent.register("two", &["C"]).await;

    agent.fail("one", "B").await;
    agent.fail("one", "A").await;
    agent.fail("two", "C").await;

    let metrics = agent.metrics().await;
    assert_eq!(metrics["routing"]["total_routes"], 2);
    assert_eq!(metrics["routing"]["degraded_routes"], 2);
    assert_eq!(metrics["routing"]["failovers"], 2);

    agent
        .json(Method::DELETE, "/routes/two", None)
        .await;
    let metrics = agent.metrics().await;
    assert_eq!(metrics["routing"]["total_routes"], 1);
    assert_eq!(metrics["routing"]["degraded_routes"], 1);
}

// ============================================================================
// Concurrency
// ============================================================================

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_failover_on_one_destination_does_not_block_others() {
    let agent = TestAgent::start();
    for i in 0..20 {
        agent.register(&format!("svc-{i}"), &["A", "B", "C"]).await;
    }

    let flapping = {
        let agent = agent.clone();
        tokio::spawn(async move {
            for _ in 0..100 {
                agent.fail("svc-0", "A").await;
                agent.recover("A").await;
                agent.json(Method::POST, "/routes/svc-0/reelect", None).await;
            }
        })
    };

    let readers: Vec<_> = (1..20)
        .map(|i| {
            let agent = agent.clone();
            tokio::spawn(async move {
                for _ in 0..100 {
                    assert!(agent.resolve(&format!("svc-{i}")).await.is_ok());
                }
            })
        })
        .collect();

    flapping.await.unwrap();
    for reader in readers {
        reader.await.unwrap();
    }

    assert_eq!(agent.resolve("svc-0").await, Ok("A".to_string()));
}
