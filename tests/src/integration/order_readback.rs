//! # Order Read-Back
//!
//! `getOrder → get` returns the stored bytes untouched and keeps the two
//! `NotFound` cases apart.

#[cfg(test)]
mod tests {
    use crate::fixtures::TestNode;
    use shared_types::{ErrorKind, LedgerRecord, OrderRecord};

    #[tokio::test]
    async fn test_get_order_returns_stored_bytes() {
        let node = TestNode::check_only().await;
        node.create_circuit("C1", "100").await;
        node.submit("O1", "C1", "60").await;

        let bytes = node.get_order("O1").await.into_result().unwrap().unwrap();
        assert_eq!(Some(&bytes), node.provisioning_snapshot().get("O1"));

        let record = OrderRecord::decode(&bytes).unwrap();
        assert_eq!(record.order_id, "O1");
        assert_eq!(record.operator_id, "op-1");
        assert_eq!(record.created_at.len(), 14);

        // Field names on the wire
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["requestedBandwidth"], 60);
        assert_eq!(json["status"], true);

        node.stop().await;
    }

    #[tokio::test]
    async fn test_never_existed_and_pending_are_distinct() {
        let node = TestNode::check_only().await;
        node.open_order("O2").await;

        let absent = node.get_order("O1").await.into_result().unwrap_err();
        let pending = node.get_order("O2").await.into_result().unwrap_err();

        assert_eq!(absent.kind, ErrorKind::NotFound);
        assert_eq!(pending.kind, ErrorKind::NotFound);
        assert_ne!(absent.message, pending.message);
        assert!(pending.message.contains("not a completed order"));

        node.stop().await;
    }

    #[tokio::test]
    async fn test_get_order_argument_errors() {
        let node = TestNode::check_only().await;

        let short = node
            .client
            .invoke(
                &node.endpoints.coordinator,
                "getOrder",
                vec!["O1".to_string()],
            )
            .await;
        assert_eq!(short.failure_kind(), Some(ErrorKind::InvalidArgument));

        let empty = node.get_order("").await;
        assert_eq!(empty.failure_kind(), Some(ErrorKind::InvalidArgument));

        node.stop().await;
    }

    #[tokio::test]
    async fn test_query_by_circuit_id() {
        let node = TestNode::check_only().await;
        node.create_circuit("C1", "100").await;
        node.create_circuit("C2", "10").await;

        let bytes = node
            .client
            .invoke(
                &node.endpoints.inventory,
                "queryByCircuitId",
                vec!["C2".to_string()],
            )
            .await
            .into_result()
            .unwrap()
            .unwrap();
        let rows: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(rows.as_array().unwrap().len(), 1);
        assert_eq!(rows[0]["key"], "C2");
        assert_eq!(rows[0]["record"]["unallocatedBandwidth"], 10);

        node.stop().await;
    }
}
