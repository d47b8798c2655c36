//! # Admission Flows
//!
//! `submit → admit → checkCapacity → [allocate] → openOrder → complete`
//!
//! Covers the over-commit hazard of check-only admission, the reserve
//! variant that closes it, and rejection leaving both ledgers untouched.

#[cfg(test)]
mod tests {
    use crate::fixtures::{args, TestNode};
    use shared_types::{CallOutcome, ErrorKind, LedgerRecord, OrderRecord};
    use std::sync::Arc;

    // =========================================================================
    // CHECK-ONLY (observed protocol)
    // =========================================================================

    #[tokio::test]
    async fn test_check_only_over_commits_circuit() {
        let node = TestNode::check_only().await;
        assert!(node.create_circuit("C1", "100").await.is_success());
        assert_eq!(node.capacity("C1").await.unallocated_bandwidth, 100);

        assert_eq!(node.submit("O1", "C1", "60").await, CallOutcome::ok());
        let first = node.get_order("O1").await.into_result().unwrap().unwrap();
        assert!(OrderRecord::decode(&first).unwrap().status);

        // No allocate ran, so the second decision sees the full 100 again
        assert_eq!(node.capacity("C1").await.unallocated_bandwidth, 100);
        assert_eq!(node.submit("O2", "C1", "50").await, CallOutcome::ok());

        let second = node.get_order("O2").await.into_result().unwrap().unwrap();
        let second = OrderRecord::decode(&second).unwrap();
        assert_eq!(second.requested_bandwidth, 50);
        assert_eq!(second.circuit_id, "C1");

        // 110 committed against a 100 circuit
        let record = node.capacity("C1").await;
        assert_eq!(record.allocated_bandwidth, 0);
        assert!(record.is_balanced());

        node.stop().await;
    }

    #[tokio::test]
    async fn test_manual_allocate_is_separate_from_admission() {
        let node = TestNode::check_only().await;
        node.create_circuit("C1", "100").await;

        node.submit("O1", "C1", "60").await;
        assert!(node.allocate("C1", "60").await.is_success());

        let record = node.capacity("C1").await;
        assert_eq!(record.allocated_bandwidth, 60);
        assert_eq!(record.unallocated_bandwidth, 40);

        let rejected = node.submit("O2", "C1", "50").await;
        assert_eq!(rejected.failure_kind(), Some(ErrorKind::CapacityExceeded));

        node.stop().await;
    }

    // =========================================================================
    // RESERVE-ON-ADMIT
    // =========================================================================

    #[tokio::test]
    async fn test_reserve_on_admit_rejects_second_order() {
        let node = TestNode::reserve_on_admit().await;
        node.create_circuit("C1", "100").await;

        assert!(node.submit("O1", "C1", "60").await.is_success());
        assert_eq!(node.capacity("C1").await.unallocated_bandwidth, 40);

        let before = node.provisioning_snapshot();
        let rejected = node.submit("O2", "C1", "50").await;
        assert_eq!(rejected.failure_kind(), Some(ErrorKind::CapacityExceeded));

        assert_eq!(node.provisioning_snapshot(), before);
        assert_eq!(
            node.get_order("O2").await.failure_kind(),
            Some(ErrorKind::NotFound)
        );
        assert_eq!(node.capacity("C1").await.unallocated_bandwidth, 40);

        node.stop().await;
    }

    #[tokio::test]
    async fn test_reserve_on_admit_exact_fit() {
        let node = TestNode::reserve_on_admit().await;
        node.create_circuit("C1", "100").await;

        assert!(node.submit("O1", "C1", "100").await.is_success());
        let record = node.capacity("C1").await;
        assert_eq!(record.unallocated_bandwidth, 0);
        assert_eq!(record.allocated_bandwidth, 100);

        node.stop().await;
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_reserve_never_goes_negative() {
        let node = Arc::new(TestNode::reserve_on_admit().await);
        node.create_circuit("C1", "100").await;

        let mut handles = Vec::new();
        for i in 0..10 {
            let node = Arc::clone(&node);
            handles.push(tokio::spawn(async move {
                node.submit(&format!("O{i}"), "C1", "30").await
            }));
        }
        let mut admitted = 0u64;
        for handle in handles {
            if handle.await.unwrap().is_success() {
                admitted += 1;
            }
        }

        // Allocation is last-writer-wins, so lost updates can admit more
        // orders than fit; the record itself always balances.
        let record = node.capacity("C1").await;
        assert!(record.is_balanced());
        assert!(admitted >= 1);
        assert!(record.allocated_bandwidth <= admitted * 30);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_check_only_submits_all_admitted() {
        let node = Arc::new(TestNode::check_only().await);
        node.create_circuit("C1", "100").await;

        let mut handles = Vec::new();
        for i in 0..8 {
            let node = Arc::clone(&node);
            handles.push(tokio::spawn(async move {
                node.submit(&format!("O{i}"), "C1", "60").await
            }));
        }
        for handle in handles {
            assert!(handle.await.unwrap().is_success());
        }

        // 480 committed against 100
        for i in 0..8 {
            assert!(node.get_order(&format!("O{i}")).await.is_success());
        }
        assert_eq!(node.capacity("C1").await.unallocated_bandwidth, 100);
    }

    // =========================================================================
    // REJECTION LEAVES STORES UNCHANGED
    // =========================================================================

    #[tokio::test]
    async fn test_over_capacity_submit_changes_nothing() {
        for node in [TestNode::check_only().await, TestNode::reserve_on_admit().await] {
            node.create_circuit("C1", "100").await;
            let inventory = node.inventory_snapshot();
            let provisioning = node.provisioning_snapshot();

            let outcome = node.submit("O1", "C1", "101").await;
            assert_eq!(outcome.failure_kind(), Some(ErrorKind::CapacityExceeded));

            assert_eq!(node.inventory_snapshot(), inventory);
            assert_eq!(node.provisioning_snapshot(), provisioning);
            node.stop().await;
        }
    }

    #[tokio::test]
    async fn test_unknown_circuit_is_upstream_unavailable() {
        let node = TestNode::check_only().await;
        let provisioning = node.provisioning_snapshot();

        let failure = node
            .submit("O1", "C404", "10")
            .await
            .into_result()
            .unwrap_err();
        assert_eq!(failure.kind, ErrorKind::UpstreamUnavailable);
        assert!(failure.message.contains("[NotFound]"));
        assert_eq!(node.provisioning_snapshot(), provisioning);

        node.stop().await;
    }

    #[tokio::test]
    async fn test_invalid_submit_arguments() {
        let node = TestNode::check_only().await;
        node.create_circuit("C1", "100").await;

        for requested in ["0", "-1", "1e3", ""] {
            let outcome = node.submit("O1", "C1", requested).await;
            assert_eq!(outcome.failure_kind(), Some(ErrorKind::InvalidArgument));
        }
        assert_eq!(
            node.get_order("O1").await.failure_kind(),
            Some(ErrorKind::NotFound)
        );

        node.stop().await;
    }

    #[tokio::test]
    async fn test_admit_addressed_to_other_orchestrator() {
        let node = TestNode::check_only().await;
        node.create_circuit("C1", "100").await;

        let outcome = node
            .client
            .invoke(
                &node.endpoints.orchestrator,
                "admit",
                args(&[
                    "process-orchestrator-2",
                    "inventory-ledger",
                    "provisioning-ledger",
                    "C1",
                    "10",
                    "O1",
                    "op",
                ]),
            )
            .await;
        assert_eq!(outcome.failure_kind(), Some(ErrorKind::InvalidArgument));

        node.stop().await;
    }

    #[tokio::test]
    async fn test_resubmitting_order_fails_commit() {
        let node = TestNode::check_only().await;
        node.create_circuit("C1", "100").await;
        node.submit("O1", "C1", "10").await;
        let stored = node.provisioning_snapshot();

        let again = node.submit("O1", "C1", "10").await;
        assert_eq!(again.failure_kind(), Some(ErrorKind::CommitFailed));
        assert_eq!(node.provisioning_snapshot(), stored);

        node.stop().await;
    }

    #[tokio::test]
    async fn test_commit_failure_strands_reserved_capacity() {
        let node = TestNode::reserve_on_admit().await;
        node.create_circuit("C1", "100").await;
        node.runtime
            .container()
            .stores
            .provisioning
            .set_writable(false);

        let outcome = node.submit("O1", "C1", "60").await;
        assert_eq!(outcome.failure_kind(), Some(ErrorKind::CommitFailed));

        // Nothing releases the reservation
        assert_eq!(node.capacity("C1").await.unallocated_bandwidth, 40);

        node.stop().await;
    }

    // =========================================================================
    // PLACEHOLDER POLICY
    // =========================================================================

    #[tokio::test]
    async fn test_require_existing_needs_placeholder() {
        let node = TestNode::require_existing().await;
        node.create_circuit("C1", "100").await;

        let missing = node.submit("O1", "C1", "10").await;
        assert_eq!(missing.failure_kind(), Some(ErrorKind::CommitFailed));

        assert!(node.open_order("O1").await.is_success());
        assert!(node.submit("O1", "C1", "10").await.is_success());
        assert!(node.get_order("O1").await.is_success());

        node.stop().await;
    }

    #[tokio::test]
    async fn test_require_existing_accepts_init_placeholder() {
        let node = TestNode::require_existing().await;
        node.create_circuit("C1", "100").await;

        let placed = node
            .client
            .init(&node.endpoints.provisioning, "O7", "reserved-by-ops")
            .await;
        assert!(placed.is_success());
        assert!(node.submit("O7", "C1", "10").await.is_success());

        node.stop().await;
    }
}
