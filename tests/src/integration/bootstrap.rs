//! # Bootstrap
//!
//! Startup self-test and the `init` surface of every service.

#[cfg(test)]
mod tests {
    use crate::fixtures::{args, TestNode};
    use node_runtime::{NodeConfig, NodeRuntime, ServiceId, SELF_TEST_KEY};
    use shared_types::{ErrorKind, LedgerStore};

    #[tokio::test]
    async fn test_self_test_writes_every_store() {
        let node = TestNode::check_only().await;
        let container = node.runtime.container();

        assert!(container.stores.inventory.get(SELF_TEST_KEY).unwrap().is_some());
        assert!(container.stores.provisioning.get(SELF_TEST_KEY).unwrap().is_some());
        assert!(container.stores.orchestrator.get(SELF_TEST_KEY).unwrap().is_some());
        assert!(container.stores.coordinator.get(SELF_TEST_KEY).unwrap().is_some());
        assert!(node.runtime.registry().is_healthy());

        node.stop().await;
    }

    #[tokio::test]
    async fn test_self_test_failure_stops_startup() {
        let runtime = NodeRuntime::new(NodeConfig::default()).unwrap();
        runtime.container().stores.inventory.set_writable(false);

        let err = runtime.start().await.unwrap_err();
        assert!(err.to_string().contains(ServiceId::InventoryLedger.name()));

        runtime.shutdown().await;
    }

    #[tokio::test]
    async fn test_init_arity_over_the_bus() {
        let node = TestNode::check_only().await;

        let outcome = node
            .client
            .invoke(&node.endpoints.inventory, "init", args(&["k", "v"]))
            .await;
        // `init` is not an invoke function
        assert_eq!(outcome.failure_kind(), Some(ErrorKind::UnknownFunction));

        let written = node.client.init(&node.endpoints.inventory, "k", "v").await;
        assert!(written.is_success());

        node.stop().await;
    }

    #[tokio::test]
    async fn test_custom_endpoint_names() {
        let mut config = NodeConfig::default();
        config.endpoints.inventory = "inv-west".to_string();
        config.endpoints.coordinator = "front-door".to_string();
        let node = TestNode::start(config).await;

        assert!(node.create_circuit("C1", "100").await.is_success());
        assert!(node.submit("O1", "C1", "10").await.is_success());
        assert!(node.get_order("O1").await.is_success());

        node.stop().await;
    }
}
