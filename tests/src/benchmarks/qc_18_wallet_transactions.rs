//! # QC-18 Wallet Transactions Benchmarks
//!
//! Ingestion cost per batch through the full pipeline (upsert, reconcile,
//! decorate, tag, publish) over in-memory storage.
//!
//! Conditions:
//! - Fresh batches of pending sends
//! - Re-ingestion of an already stored batch (idempotent path)
//! - Confirmation of one nonce with many competing pending rows

use criterion::{BatchSize, BenchmarkId, Criterion, Throughput};
use qc_18_wallet_transactions::TransactionManagerApi;
use shared_types::Transaction;
use tokio::runtime::Runtime;

use crate::fixtures::{manager, outgoing};

fn pending_batch(size: u64) -> Vec<Transaction> {
    (0..size).map(|nonce| outgoing(1, nonce)).collect()
}

/// Register the ingestion benchmarks.
pub fn bench_ingestion(c: &mut Criterion) {
    let runtime = match Runtime::new() {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Skipping ingestion benchmarks: {e}");
            return;
        }
    };
    let mut group = c.benchmark_group("qc-18-wallet-transactions");

    for size in [10u64, 100, 1_000] {
        group.throughput(Throughput::Elements(size));

        group.bench_with_input(BenchmarkId::new("handle_fresh", size), &size, |b, size| {
            b.iter_batched(
                || (manager(), pending_batch(*size)),
                |(manager, batch)| runtime.block_on(manager.handle(batch)),
                BatchSize::SmallInput,
            )
        });

        let warm = manager();
        let batch = pending_batch(size);
        let _ = runtime.block_on(warm.handle(batch.clone()));
        group.bench_with_input(BenchmarkId::new("handle_repeat", size), &batch, |b, batch| {
            b.iter(|| runtime.block_on(warm.handle(batch.clone())))
        });
    }

    group.bench_function("confirm_against_100_competitors", |b| {
        b.iter_batched(
            || {
                let manager = manager();
                let competitors: Vec<Transaction> =
                    (0..100u8).map(|id| outgoing(id, 0)).collect();
                let _ = runtime.block_on(manager.handle(competitors));
                manager
            },
            |manager| {
                let winner = outgoing(200, 0).confirmed_at(1, 1);
                runtime.block_on(manager.handle(vec![winner]))
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}
