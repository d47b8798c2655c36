//! # Circuit-Reserve Admission Benchmarks
//!
//! | Path | Hops |
//! |------|------|
//! | `checkCapacity` | client → cr-01 |
//! | `submit` (check-only) | client → cr-04 → cr-03 → cr-01, cr-02 ×2 |
//! | `submit` (reserve) | as above plus `allocate` |

use std::sync::atomic::{AtomicU64, Ordering};

use criterion::{criterion_group, criterion_main, Criterion};
use cr_tests::fixtures::TestNode;
use tokio::runtime::Runtime;

fn bench_check_capacity(c: &mut Criterion) {
    let rt = Runtime::new().expect("tokio runtime");
    let node = rt.block_on(async {
        let node = TestNode::check_only().await;
        node.create_circuit("C1", "1000000").await;
        node
    });

    c.bench_function("cr-01-check-capacity", |b| {
        b.to_async(&rt).iter(|| node.capacity("C1"))
    });

    rt.block_on(node.stop());
}

fn bench_submit(c: &mut Criterion) {
    let rt = Runtime::new().expect("tokio runtime");
    let mut group = c.benchmark_group("cr-04-submit");

    for (label, node) in [
        ("check-only", rt.block_on(TestNode::check_only())),
        ("reserve", rt.block_on(TestNode::reserve_on_admit())),
    ] {
        rt.block_on(node.create_circuit("C1", &u64::MAX.to_string()));
        let next = AtomicU64::new(0);

        group.bench_function(label, |b| {
            b.to_async(&rt).iter(|| async {
                let order_id = format!("O{}", next.fetch_add(1, Ordering::Relaxed));
                node.submit(&order_id, "C1", "1").await
            })
        });

        rt.block_on(node.stop());
    }

    group.finish();
}

criterion_group!(benches, bench_check_capacity, bench_submit);
criterion_main!(benches);
