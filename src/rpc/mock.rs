//! Mock ledger for orchestration tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use solana_hash::Hash;
use solana_pubkey::Pubkey;
use solana_signature::Signature;
use solana_transaction::Transaction;

use crate::error::RpcError;

use super::LedgerRpc;

/// Scripted ledger: fixed rent and blockhash, configurable holding-account
/// existence, and an optional send that fails.
pub(crate) struct MockLedger {
    pub rent: u64,
    pub holding_exists: bool,
    /// Zero-based index of the send that fails, if any.
    pub fail_send_at: Option<usize>,
    /// Every submitted transaction, in order.
    pub sent: Mutex<Vec<Transaction>>,
    sends: AtomicUsize,
}

impl MockLedger {
    pub fn new() -> Self {
        Self {
            rent: 2_500_000,
            holding_exists: false,
            fail_send_at: None,
            sent: Mutex::new(Vec::new()),
            sends: AtomicUsize::new(0),
        }
    }

    pub fn with_existing_holding_account() -> Self {
        Self {
            holding_exists: true,
            ..Self::new()
        }
    }

    pub fn failing_send_at(index: usize) -> Self {
        Self {
            fail_send_at: Some(index),
            ..Self::new()
        }
    }
}

#[async_trait]
impl LedgerRpc for MockLedger {
    async fn minimum_balance_for_rent_exemption(
        &self,
        _data_len: usize,
    ) -> Result<u64, RpcError> {
        Ok(self.rent)
    }

    async fn latest_blockhash(&self) -> Result<Hash, RpcError> {
        Ok(Hash::default())
    }

    async fn account_exists(&self, _address: &Pubkey) -> Result<bool, RpcError> {
        Ok(self.holding_exists)
    }

    async fn send_transaction(&self, transaction: &Transaction) -> Result<Signature, RpcError> {
        let n = self.sends.fetch_add(1, Ordering::SeqCst);
        if self.fail_send_at == Some(n) {
            return Err(RpcError::Submission(format!(
                "mock rejection of send #{n}"
            )));
        }
        self.sent.lock().unwrap().push(transaction.clone());
        Ok(transaction.signatures[0])
    }
}
