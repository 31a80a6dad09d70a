//! Ledger RPC access behind a trait seam.
//!
//! The orchestrator only needs four network operations; keeping them behind
//! [`LedgerRpc`] lets tests drive the full issuance flow without a validator.

#[cfg(test)]
pub(crate) mod mock;

use async_trait::async_trait;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_commitment_config::CommitmentConfig;
use solana_hash::Hash;
use solana_pubkey::Pubkey;
use solana_signature::Signature;
use solana_transaction::Transaction;

use crate::error::RpcError;
use crate::network::DEVNET_RPC_URL;

/// The ledger reads and writes the issuance flow performs.
#[async_trait]
pub trait LedgerRpc: Send + Sync {
    /// Minimum balance for an account of `data_len` bytes to be rent-exempt.
    async fn minimum_balance_for_rent_exemption(&self, data_len: usize)
        -> Result<u64, RpcError>;

    /// Latest blockhash for transaction signing.
    async fn latest_blockhash(&self) -> Result<Hash, RpcError>;

    /// Whether an account exists on-chain at `address`.
    async fn account_exists(&self, address: &Pubkey) -> Result<bool, RpcError>;

    /// Submit a signed transaction and wait for acknowledgement.
    async fn send_transaction(&self, transaction: &Transaction) -> Result<Signature, RpcError>;
}

/// [`LedgerRpc`] over a Solana JSON-RPC endpoint.
pub struct SolanaRpc {
    inner: RpcClient,
}

impl SolanaRpc {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            inner: RpcClient::new_with_commitment(url.into(), CommitmentConfig::confirmed()),
        }
    }

    pub fn devnet() -> Self {
        Self::new(DEVNET_RPC_URL)
    }
}

#[async_trait]
impl LedgerRpc for SolanaRpc {
    async fn minimum_balance_for_rent_exemption(
        &self,
        data_len: usize,
    ) -> Result<u64, RpcError> {
        self.inner
            .get_minimum_balance_for_rent_exemption(data_len)
            .await
            .map_err(|e| RpcError::RentQuery(e.to_string()))
    }

    async fn latest_blockhash(&self) -> Result<Hash, RpcError> {
        self.inner
            .get_latest_blockhash()
            .await
            .map_err(|e| RpcError::Blockhash(e.to_string()))
    }

    async fn account_exists(&self, address: &Pubkey) -> Result<bool, RpcError> {
        let response = self
            .inner
            .get_account_with_commitment(address, self.inner.commitment())
            .await
            .map_err(|e| RpcError::AccountQuery(e.to_string()))?;
        Ok(response.value.is_some())
    }

    async fn send_transaction(&self, transaction: &Transaction) -> Result<Signature, RpcError> {
        self.inner
            .send_and_confirm_transaction(transaction)
            .await
            .map_err(|e| RpcError::Submission(e.to_string()))
    }
}
