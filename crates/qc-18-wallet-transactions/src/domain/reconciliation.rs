//! # Nonce Reconciliation
//!
//! A sender can only ever have one transaction per nonce included in the
//! chain. Once nonce N confirms, every other pending transaction from that
//! sender with nonce N is dead: it is marked failed and pointed at the
//! confirmed transaction through `replaced_with`.
//!
//! These functions are pure. The manager loads the inputs from storage and
//! persists the output.

use shared_types::{Address, Hash, Transaction};
use std::collections::{BTreeSet, HashMap};

/// Distinct nonces of `transactions`, ascending.
pub fn distinct_nonces(transactions: &[Transaction]) -> Vec<u64> {
    transactions
        .iter()
        .map(|tx| tx.nonce)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Compute the pending transactions superseded by `confirmed`.
///
/// Returns updated copies of the affected pending rows, in `pending` order.
/// A row is never matched against itself (same hash), and rows already
/// marked failed are left alone.
pub fn find_replacements(pending: &[Transaction], confirmed: &[Transaction]) -> Vec<Transaction> {
    let mut winners: HashMap<(Address, u64), Hash> = HashMap::new();
    for tx in confirmed.iter().filter(|tx| !tx.is_pending()) {
        winners.entry((tx.from, tx.nonce)).or_insert(tx.hash);
    }

    pending
        .iter()
        .filter(|tx| tx.is_pending() && !tx.is_failed)
        .filter_map(|tx| {
            let winner = winners.get(&(tx.from, tx.nonce))?;
            if *winner == tx.hash {
                return None;
            }
            let mut replaced = tx.clone();
            replaced.mark_replaced(*winner);
            Some(replaced)
        })
        .collect()
}

/// Merge an ingested batch with reconciled rows for decoration.
///
/// Deduplicated by hash. For a hash present in both, the reconciled row
/// wins. Input order is kept; reconciled rows not in the input follow. A
/// hash repeated in the input keeps its first position and its last value,
/// matching upsert semantics.
pub fn merge_for_decoration(
    input: Vec<Transaction>,
    reconciled: Vec<Transaction>,
) -> Vec<Transaction> {
    let mut order: Vec<Hash> = Vec::with_capacity(input.len() + reconciled.len());
    let mut latest: HashMap<Hash, Transaction> = HashMap::with_capacity(order.capacity());

    for tx in input.into_iter().chain(reconciled) {
        if !latest.contains_key(&tx.hash) {
            order.push(tx.hash);
        }
        latest.insert(tx.hash, tx);
    }

    order
        .into_iter()
        .filter_map(|hash| latest.remove(&hash))
        .collect()
}
