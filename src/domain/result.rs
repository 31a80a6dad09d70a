//! Final issuance outcome.

use solana_pubkey::Pubkey;
use solana_signature::Signature;

/// Produced only when every operation group was acknowledged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuanceResult {
    /// Address of the newly created mint.
    pub mint: Pubkey,
    /// The payer's associated token account holding the supply.
    pub holding_account: Pubkey,
    /// Signature of the holding-account creation, absent when the account
    /// already existed and creation was skipped.
    pub holding_account_creation_signature: Option<Signature>,
    /// Deposited amount in base units (`initial_supply * 10^decimals`).
    pub supplied_amount: u64,
}
