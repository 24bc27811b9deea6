//! # Transaction Submission Flows
//!
//! A signed transaction is encoded by qc-19 and handed to a peer transport.
//! The bytes are checked with an independent RLP decoder, and the submitted
//! transaction later shows up through qc-18 when sync observes it.

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;

    use async_trait::async_trait;
    use parking_lot::Mutex;

    use qc_18_wallet_transactions::TransactionManagerApi;
    use qc_19_les_messages::{
        encode_send_transaction, EncodingError, MessageTransport, SendError, TransactionSender,
        TransportError, SEND_TX_V2_CODE,
    };
    use shared_types::{TagFilter, Transaction};

    use crate::fixtures::*;

    /// Transport that records frames instead of writing to a socket.
    #[derive(Default, Clone)]
    struct CapturingTransport {
        frames: Arc<Mutex<Vec<(u8, Vec<u8>)>>>,
    }

    #[async_trait]
    impl MessageTransport for CapturingTransport {
        async fn send_message(&self, code: u8, payload: Vec<u8>) -> Result<(), TransportError> {
            self.frames.lock().push((code, payload));
            Ok(())
        }
    }

    #[test]
    fn test_wire_format_against_reference_decoder() {
        let tx = raw_transfer(42);
        let sig = signature();
        let payload = encode_send_transaction(9, &tx, &sig).unwrap();

        let root = rlp::Rlp::new(&payload);
        assert!(root.is_list());
        assert_eq!(root.val_at::<u64>(0).unwrap(), 9);

        let signed = root.at(1).unwrap().at(0).unwrap();
        assert_eq!(signed.item_count().unwrap(), 9);
        assert_eq!(signed.val_at::<u64>(0).unwrap(), 42);
        assert_eq!(signed.val_at::<u64>(1).unwrap(), 20_000_000_000);
        assert_eq!(signed.val_at::<u64>(2).unwrap(), 21_000);
        assert_eq!(signed.at(3).unwrap().data().unwrap(), &PEER);
        assert_eq!(signed.val_at::<u64>(4).unwrap(), 100_000_000_000_000_000);
        assert!(signed.at(5).unwrap().data().unwrap().is_empty());
        assert_eq!(signed.val_at::<u8>(6).unwrap(), 27);
        assert_eq!(signed.at(7).unwrap().data().unwrap(), sig.r.as_slice());
        assert_eq!(signed.at(8).unwrap().data().unwrap(), sig.s.as_slice());
    }

    #[test]
    fn test_zero_integers_encode_as_empty_strings() {
        let mut tx = raw_transfer(0);
        tx.value = shared_types::U256::zero();
        let payload = encode_send_transaction(0, &tx, &signature()).unwrap();

        let root = rlp::Rlp::new(&payload);
        assert_eq!(root.at(0).unwrap().as_raw(), &[0x80u8]);
        let signed = root.at(1).unwrap().at(0).unwrap();
        assert_eq!(signed.at(0).unwrap().as_raw(), &[0x80u8]);
        assert_eq!(signed.at(4).unwrap().as_raw(), &[0x80u8]);
    }

    #[test]
    fn test_token_call_data_survives_encoding() {
        let mut tx = raw_transfer(1);
        tx.to = Some(TOKEN);
        tx.value = shared_types::U256::zero();
        tx.data = transfer_call(PEER, 50);

        let payload = encode_send_transaction(1, &tx, &signature()).unwrap();
        let signed = rlp::Rlp::new(&payload).at(1).unwrap().at(0).unwrap();
        assert_eq!(signed.at(5).unwrap().data().unwrap(), tx.data.as_slice());
    }

    #[tokio::test]
    async fn test_concurrent_senders_get_unique_request_ids() {
        let transport = CapturingTransport::default();
        let frames = Arc::clone(&transport.frames);
        let sender = Arc::new(TransactionSender::new(transport));

        let mut handles = Vec::new();
        for nonce in 0..16u64 {
            let sender = Arc::clone(&sender);
            handles.push(tokio::spawn(async move {
                sender.send(raw_transfer(nonce), signature()).await
            }));
        }

        let mut ids = HashSet::new();
        for handle in handles {
            ids.insert(handle.await.unwrap().unwrap());
        }
        assert_eq!(ids.len(), 16);

        let frames = frames.lock();
        assert_eq!(frames.len(), 16);
        assert!(frames.iter().all(|(code, _)| *code == SEND_TX_V2_CODE));
        let decoded: HashSet<u64> = frames
            .iter()
            .map(|(_, payload)| rlp::Rlp::new(payload).val_at::<u64>(0).unwrap())
            .collect();
        assert_eq!(decoded, ids);
    }

    #[tokio::test]
    async fn test_bad_signature_never_reaches_transport() {
        let transport = CapturingTransport::default();
        let frames = Arc::clone(&transport.frames);
        let sender = TransactionSender::new(transport);

        let mut sig = signature();
        sig.s = Vec::new();
        let result = sender.send(raw_transfer(0), sig).await;

        assert_eq!(
            result,
            Err(SendError::Encoding(EncodingError::EmptySignatureComponent("s")))
        );
        assert!(frames.lock().is_empty());
    }

    /// Submit through the peer, then let sync report the transaction back
    /// as pending and later as confirmed.
    #[tokio::test]
    async fn test_submitted_transaction_tracked_by_manager() {
        init_test_logging();
        let transport = CapturingTransport::default();
        let sender = TransactionSender::new(transport);
        let manager = manager();

        let body = raw_transfer(0);
        sender.send(body.clone(), signature()).await.unwrap();

        let observed = Transaction {
            value: body.value,
            gas_limit: body.gas_limit,
            gas_price: body.gas_price,
            input: body.data.clone(),
            ..Transaction::pending(hash(7, 0), WALLET, body.to, body.nonce)
        };
        manager.handle(vec![observed.clone()]).await.unwrap();

        let outgoing_pending = manager
            .pending_full_transactions(&TagFilter::new([vec!["outgoing"]]))
            .await
            .unwrap();
        assert_eq!(outgoing_pending.len(), 1);
        assert_eq!(outgoing_pending[0].hash(), observed.hash);

        manager
            .handle(vec![observed.clone().confirmed_at(500, 1_700_000_500)])
            .await
            .unwrap();
        assert!(manager
            .pending_full_transactions(&TagFilter::all())
            .await
            .unwrap()
            .is_empty());
    }
}
