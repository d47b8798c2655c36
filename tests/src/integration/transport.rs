//! # Transport Failures
//!
//! Unreachable or slow services surface as `UpstreamUnavailable` at every
//! hop, and unknown function names as `UnknownFunction`.

#[cfg(test)]
mod tests {
    use crate::fixtures::{args, TestNode};
    use node_runtime::NodeConfig;
    use shared_types::ErrorKind;
    use std::sync::Arc;
    use std::time::Duration;

    #[tokio::test]
    async fn test_unknown_function_on_every_service() {
        let node = TestNode::check_only().await;

        for endpoint in node.endpoints.all() {
            let failure = node
                .client
                .invoke(endpoint, "deallocate", args(&["C1", "10"]))
                .await
                .into_result()
                .unwrap_err();
            assert_eq!(failure.kind, ErrorKind::UnknownFunction);
            assert!(failure.message.contains("deallocate"));
        }

        node.stop().await;
    }

    #[tokio::test]
    async fn test_unregistered_orchestrator_name() {
        let node = TestNode::check_only().await;
        node.create_circuit("C1", "100").await;

        let failure = node
            .client
            .invoke(
                &node.endpoints.coordinator,
                "submit",
                args(&[
                    "no-such-orchestrator",
                    "inventory-ledger",
                    "provisioning-ledger",
                    "O1",
                    "op",
                    "C1",
                    "10",
                ]),
            )
            .await
            .into_result()
            .unwrap_err();
        assert_eq!(failure.kind, ErrorKind::UpstreamUnavailable);
        assert!(failure.message.contains("no-such-orchestrator"));

        node.stop().await;
    }

    #[tokio::test]
    async fn test_unregistered_inventory_name() {
        let node = TestNode::check_only().await;

        let failure = node
            .client
            .invoke(
                &node.endpoints.coordinator,
                "submit",
                args(&[
                    "process-orchestrator",
                    "missing-inventory",
                    "provisioning-ledger",
                    "O1",
                    "op",
                    "C1",
                    "10",
                ]),
            )
            .await
            .into_result()
            .unwrap_err();
        assert_eq!(failure.kind, ErrorKind::UpstreamUnavailable);
        assert!(failure.message.contains("checkCapacity"));

        node.stop().await;
    }

    #[tokio::test]
    async fn test_submit_addressed_to_non_orchestrator() {
        let node = TestNode::check_only().await;
        node.create_circuit("C1", "100").await;

        // Addressed to the coordinator's own name, which is registered but
        // does not serve `admit`
        let failure = node
            .client
            .invoke(
                &node.endpoints.coordinator,
                "submit",
                args(&[
                    "order-coordinator",
                    "inventory-ledger",
                    "provisioning-ledger",
                    "O1",
                    "op",
                    "C1",
                    "10",
                ]),
            )
            .await
            .into_result()
            .unwrap_err();
        assert_eq!(failure.kind, ErrorKind::UnknownFunction);

        node.stop().await;
    }

    #[tokio::test]
    async fn test_stopped_node_is_unavailable() {
        let node = TestNode::with_timeout(Duration::from_millis(200)).await;
        node.runtime.shutdown().await;

        let outcome = node.submit("O1", "C1", "10").await;
        assert_eq!(outcome.failure_kind(), Some(ErrorKind::UpstreamUnavailable));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_submit_burst_on_small_bus_capacity_is_fully_answered() {
        let mut config = NodeConfig::default();
        config.bus.capacity = 16;
        config.bus.call_timeout_ms = 5_000;
        let node = Arc::new(TestNode::start(config).await);
        node.create_circuit("C1", "1000000").await;

        let mut handles = Vec::new();
        for i in 0..200 {
            let node = Arc::clone(&node);
            handles.push(tokio::spawn(async move {
                let outcome = node.submit(&format!("O{i}"), "C1", "1").await;
                (i, outcome)
            }));
        }
        for handle in handles {
            let (i, outcome) = handle.await.unwrap();
            assert!(outcome.is_success(), "O{i} failed: {outcome:?}");
        }

        // Every success is a stored order and nothing was answered late
        for i in 0..200 {
            assert!(node.get_order(&format!("O{i}")).await.is_success());
        }
        let stats = node.runtime.container().event_bus.stats();
        assert_eq!(stats.replies_orphaned, 0);
        assert_eq!(node.runtime.container().event_bus.pending_calls(), 0);
    }
}
