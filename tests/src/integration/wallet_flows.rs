//! # Wallet Ingestion Flows
//!
//! Sync output enters qc-18, which reconciles, tags and publishes on the
//! shared bus; the wallet UI side reads through subscriptions and queries.
//!
//! ## Flows Tested:
//!
//! 1. **Replacement**: a speed-up confirms, the original is marked replaced
//! 2. **Filtered feed**: token-only subscribers see only token batches
//! 3. **Bootstrap**: explorer records seed history before live sync
//! 4. **Storage failure**: nothing is published for a failed batch

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::time::timeout;
    use tokio_stream::StreamExt;
    use tracing::Instrument;

    use quantum_telemetry::subsystem_span;

    use qc_18_wallet_transactions::{
        JsonRecordSource, TransactionManagerApi, TransactionManagerError,
    };
    use shared_bus::InMemoryTransactionBus;
    use shared_types::{StorageError, TagFilter, TransactionDecoration, U256};

    use crate::fixtures::*;

    // =============================================================================
    // REPLACEMENT FLOW
    // =============================================================================

    /// A wallet submits nonce 5, then a speed-up for the same nonce. Sync
    /// later observes the speed-up confirmed.
    #[tokio::test]
    async fn test_speed_up_replaces_original() {
        init_test_logging();
        let manager = manager();
        let mut feed = manager.subscribe_all();

        let mut original = outgoing(1, 5);
        original.gas_price = U256::from(10_000_000_000u64);
        let mut speed_up = outgoing(2, 5);
        speed_up.gas_price = U256::from(20_000_000_000u64);

        manager
            .handle(vec![original.clone(), speed_up.clone()])
            .await
            .unwrap();
        let pending = manager
            .pending_full_transactions(&TagFilter::all())
            .await
            .unwrap();
        assert_eq!(pending.len(), 2);

        let confirmed = speed_up.clone().confirmed_at(1_000, 1_700_000_000);
        let touched = manager.handle(vec![confirmed]).await.unwrap();

        assert_eq!(touched.len(), 2);
        assert_eq!(touched[0].hash(), speed_up.hash);
        assert_eq!(touched[1].hash(), original.hash);
        assert!(touched[1].transaction.is_failed);
        assert_eq!(touched[1].transaction.replaced_with, Some(speed_up.hash));

        assert!(manager
            .pending_full_transactions(&TagFilter::all())
            .await
            .unwrap()
            .is_empty());

        // Both batches reached the unfiltered feed, in order.
        let first = feed.recv().await.unwrap();
        let second = feed.recv().await.unwrap();
        assert!(first.sequence < second.sequence);
        assert_eq!(second.hashes(), vec![speed_up.hash, original.hash]);
    }

    /// Three pending rows share a nonce; one confirms. History shows the
    /// winner confirmed and the two losers failed, newest first.
    #[tokio::test]
    async fn test_nonce_exclusivity_in_history() {
        let manager = manager();
        manager
            .handle(vec![outgoing(1, 5), outgoing(2, 5), outgoing(4, 6)])
            .await
            .unwrap();
        manager
            .handle(vec![outgoing(3, 5).confirmed_at(10, 100)])
            .await
            .unwrap();

        let history = manager
            .full_transactions_before(&TagFilter::all(), None, Some(10))
            .await
            .unwrap();

        // Rows without a block rank first, replaced ones included.
        let live: Vec<_> = history
            .iter()
            .filter(|full| full.transaction.nonce == 5 && !full.transaction.is_failed)
            .collect();
        assert_eq!(live.len(), 1);
        assert_eq!(live[0].hash(), hash(3, 5));
        assert_eq!(history[0].hash(), hash(4, 6));
        assert_eq!(history.last().unwrap().hash(), hash(3, 5));
    }

    // =============================================================================
    // FILTERED FEED FLOW
    // =============================================================================

    #[tokio::test]
    async fn test_filtered_feed_suppresses_empty_batches() {
        let manager = manager();
        let filter = TagFilter::new([vec!["incoming"], vec!["tokenTransfer", "tokenApprove"]]);
        let mut tokens_in = manager.subscribe_filtered(filter);
        let mut everything = manager.subscribe_all();

        // Batch 1: native only, nothing for the token feed.
        manager.handle(vec![incoming(1, 0)]).await.unwrap();
        // Batch 2: an incoming token transfer and an outgoing one.
        manager
            .handle(vec![
                token_transfer(2, 0, PEER, WALLET),
                token_transfer(3, 1, WALLET, PEER),
            ])
            .await
            .unwrap();

        let delivered = timeout(Duration::from_secs(1), tokens_in.recv())
            .await
            .expect("filtered batch")
            .unwrap();
        assert_eq!(delivered.sequence, 2);
        assert_eq!(delivered.hashes(), vec![hash(2, 0)]);
        assert!(matches!(
            delivered.transactions[0].decoration,
            TransactionDecoration::TokenTransfer { to: WALLET, .. }
        ));
        assert_eq!(tokens_in.try_recv().unwrap(), None);

        assert_eq!(everything.recv().await.unwrap().len(), 1);
        assert_eq!(everything.recv().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_token_contract_tag_query() {
        let manager = manager();
        manager
            .handle(vec![
                token_transfer(1, 0, PEER, WALLET),
                outgoing(2, 0),
                token_transfer(3, 1, WALLET, PEER),
            ])
            .await
            .unwrap();

        let contract_tag = format!("tokenTransfer_0x{}", hex::encode(TOKEN));
        let rows = manager
            .full_transactions_before(&TagFilter::new([vec![contract_tag]]), None, None)
            .await
            .unwrap();

        let mut found: Vec<_> = rows.iter().map(|row| row.hash()).collect();
        found.sort();
        assert_eq!(found, vec![hash(1, 0), hash(3, 1)]);
    }

    #[tokio::test]
    async fn test_shared_bus_stream_consumer() {
        let bus = Arc::new(InMemoryTransactionBus::new());
        let manager = qc_18_wallet_transactions::TransactionManager::with_bus(
            qc_18_wallet_transactions::WalletTransactionsConfig::for_testing().with_wallet(WALLET),
            Arc::new(qc_18_wallet_transactions::InMemoryTransactionStorage::new()),
            qc_18_wallet_transactions::CallDataDecorator::new(),
            Arc::clone(&bus),
        );
        let stream = bus.subscribe_all().into_stream();

        for nonce in 0..3 {
            manager.handle(vec![outgoing(1, nonce)]).await.unwrap();
        }
        drop(manager);
        drop(bus);

        let sequences: Vec<u64> = stream.map(|batch| batch.sequence).collect().await;
        assert_eq!(sequences, vec![1, 2, 3]);
    }

    // =============================================================================
    // BOOTSTRAP FLOW
    // =============================================================================

    fn explorer_body(rows: &[serde_json::Value]) -> String {
        serde_json::json!({ "status": "1", "message": "OK", "result": rows }).to_string()
    }

    fn explorer_row(hash_hex: &str, nonce: u64, block: u64, from: &str, to: &str) -> serde_json::Value {
        serde_json::json!({
            "blockNumber": block.to_string(),
            "timeStamp": (1_600_000_000 + block).to_string(),
            "hash": hash_hex,
            "nonce": nonce.to_string(),
            "from": from,
            "to": to,
            "value": "1000",
            "gas": "21000",
            "gasPrice": "1000000000",
            "isError": "0",
            "input": "0x",
        })
    }

    #[tokio::test]
    async fn test_bootstrap_then_live_sync() {
        init_test_logging();
        let manager = manager();
        let wallet = format!("0x{}", hex::encode(WALLET));
        let peer = format!("0x{}", hex::encode(PEER));
        let body = explorer_body(&[
            explorer_row(&format!("0x{}", hex::encode(hash(1, 0))), 0, 10, &wallet, &peer),
            explorer_row("0xnot-a-hash", 1, 11, &wallet, &peer),
            explorer_row(&format!("0x{}", hex::encode(hash(2, 0))), 0, 12, &peer, &wallet),
        ]);

        let span = subsystem_span!("bootstrap", subsystem = "wallet-transactions", start_block = 0u64);
        let seeded = manager
            .sync_from_source(&JsonRecordSource::new(body), 0)
            .instrument(span)
            .await
            .unwrap();
        assert_eq!(seeded.len(), 2);
        assert_eq!(manager.metrics().records_rejected, 1);

        // Live sync continues with a pending send at the next nonce.
        manager.handle(vec![outgoing(3, 1)]).await.unwrap();

        let history = manager
            .full_transactions_before(&TagFilter::all(), None, None)
            .await
            .unwrap();
        assert_eq!(
            history.iter().map(|row| row.hash()).collect::<Vec<_>>(),
            vec![hash(3, 1), hash(2, 0), hash(1, 0)]
        );

        let incoming_only = manager
            .full_transactions_before(&TagFilter::new([vec!["incoming"]]), None, None)
            .await
            .unwrap();
        assert_eq!(incoming_only.len(), 1);
        assert_eq!(incoming_only[0].hash(), hash(2, 0));
    }

    // =============================================================================
    // FAILURE FLOW
    // =============================================================================

    #[tokio::test]
    async fn test_storage_failure_publishes_nothing() {
        init_test_logging();
        let manager = manager();
        let mut feed = manager.subscribe_all();
        manager.handle(vec![outgoing(1, 0)]).await.unwrap();
        let _ = feed.recv().await.unwrap();

        manager.storage().set_fail_writes(true);
        let result = manager.handle(vec![outgoing(2, 1)]).await;
        assert!(matches!(
            result,
            Err(TransactionManagerError::Storage(StorageError::WriteFailed(_)))
        ));
        assert_eq!(feed.try_recv().unwrap(), None);

        // Recovery: the same batch goes through once the store is back.
        manager.storage().set_fail_writes(false);
        manager.handle(vec![outgoing(2, 1)]).await.unwrap();
        assert_eq!(feed.recv().await.unwrap().hashes(), vec![hash(2, 1)]);
    }
}
