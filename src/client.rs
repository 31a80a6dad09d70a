//! High-level client — `Launchpad`, the token issuance orchestrator.
//!
//! Sequences upload → metadata composition → transaction building →
//! submission, one suspension point per network call. Steps are never run
//! concurrently because each depends on the previous step's output. A failed
//! step is terminal for the request; there is no compensation for on-chain
//! state already created (a mint whose deposit failed stays on-chain,
//! unfunded).

use std::sync::Arc;

use async_lock::RwLock;
use solana_instruction::Instruction;
use solana_keypair::Keypair;
use solana_message::Message;
use solana_pubkey::Pubkey;
use solana_signature::Signature;
use solana_signer::Signer;
use solana_transaction::Transaction;
use thiserror::Error;

use crate::config::PinningConfig;
use crate::domain::metadata::{compose, MetadataDocument};
use crate::domain::{IssuanceRequest, IssuanceResult};
use crate::error::{LaunchError, RpcError};
use crate::pin::{AssetStore, PinataClient};
use crate::program::{
    build_create_mint_group, build_deposit_group, build_holding_account_group,
    holding_account_address, metadata_record_space, mint_account_space, CreateMintParams,
};
use crate::rpc::{LedgerRpc, SolanaRpc};
use crate::shared::raw_mint_amount;

// ─── Stage ───────────────────────────────────────────────────────────────────

/// Where an issuance currently stands.
///
/// `Succeeded` and `Failed` are terminal; everything between `Idle` and the
/// terminals means a request is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Idle,
    Uploading,
    ComposingMetadata,
    BuildingTransaction,
    SubmittingMint,
    CheckingHoldingAccount,
    SubmittingHoldingAccountCreation,
    SubmittingDeposit,
    Succeeded,
    Failed,
}

impl Stage {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Stage::Succeeded | Stage::Failed)
    }

    pub fn is_busy(&self) -> bool {
        !matches!(self, Stage::Idle | Stage::Succeeded | Stage::Failed)
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Stage::Idle => "idle",
            Stage::Uploading => "uploading image",
            Stage::ComposingMetadata => "composing metadata",
            Stage::BuildingTransaction => "building transaction",
            Stage::SubmittingMint => "submitting mint creation",
            Stage::CheckingHoldingAccount => "checking holding account",
            Stage::SubmittingHoldingAccountCreation => "submitting holding account creation",
            Stage::SubmittingDeposit => "submitting deposit",
            Stage::Succeeded => "succeeded",
            Stage::Failed => "failed",
        };
        write!(f, "{s}")
    }
}

/// An issuance that stopped short of `Succeeded`.
///
/// Carries the stage at which the originating error occurred so callers can
/// judge what on-chain state (if any) was already created.
#[derive(Debug, Error)]
#[error("issuance failed while {stage}: {source}")]
pub struct IssuanceFailure {
    pub stage: Stage,
    #[source]
    pub source: LaunchError,
}

fn at<E: Into<LaunchError>>(stage: Stage) -> impl FnOnce(E) -> IssuanceFailure {
    move |source| IssuanceFailure {
        stage,
        source: source.into(),
    }
}

/// Read-only view of the orchestrator's stage, observed by the presentation
/// layer, never mutated by it.
#[derive(Clone)]
pub struct Progress(Arc<RwLock<Stage>>);

impl Progress {
    pub async fn stage(&self) -> Stage {
        *self.0.read().await
    }

    pub async fn is_busy(&self) -> bool {
        self.stage().await.is_busy()
    }
}

// ─── Launchpad ───────────────────────────────────────────────────────────────

/// The issuance orchestrator.
///
/// Generic over the ledger and storage seams so the full flow is testable
/// without a validator or a pinning account. `issue` takes `&mut self`:
/// one request per launchpad at a time, by construction.
pub struct Launchpad<R, S> {
    rpc: R,
    store: S,
    stage: Arc<RwLock<Stage>>,
}

impl Launchpad<SolanaRpc, PinataClient> {
    /// Launchpad against Solana devnet and the configured pinning backend.
    pub fn devnet(config: PinningConfig) -> Self {
        Self::new(SolanaRpc::devnet(), PinataClient::new(config))
    }
}

impl<R: LedgerRpc, S: AssetStore> Launchpad<R, S> {
    pub fn new(rpc: R, store: S) -> Self {
        Self {
            rpc,
            store,
            stage: Arc::new(RwLock::new(Stage::Idle)),
        }
    }

    /// Handle for observing issuance progress.
    pub fn progress(&self) -> Progress {
        Progress(self.stage.clone())
    }

    /// Run one issuance to completion.
    ///
    /// The mint identity is generated inside this call and discarded with it;
    /// a retry after failure starts over with a fresh identity.
    pub async fn issue(
        &mut self,
        request: IssuanceRequest,
        payer: &dyn Signer,
    ) -> Result<IssuanceResult, IssuanceFailure> {
        let outcome = self.run(&request, payer).await;

        match &outcome {
            Ok(result) => {
                tracing::info!(mint = %result.mint, holding_account = %result.holding_account,
                    supplied_amount = result.supplied_amount, "issuance succeeded");
                self.set_stage(Stage::Succeeded).await;
            }
            Err(failure) => {
                tracing::warn!(stage = %failure.stage, error = %failure.source, "issuance failed");
                self.set_stage(Stage::Failed).await;
            }
        }

        outcome
    }

    async fn run(
        &self,
        request: &IssuanceRequest,
        payer: &dyn Signer,
    ) -> Result<IssuanceResult, IssuanceFailure> {
        let payer_address = payer.pubkey();

        self.set_stage(Stage::Uploading).await;
        let format = request.image_format();
        let image_address = self
            .store
            .store(request.image().to_vec(), format.file_name(), format.mime())
            .await
            .map_err(at(Stage::Uploading))?;

        self.set_stage(Stage::ComposingMetadata).await;
        let document = MetadataDocument::for_request(request, &image_address);
        let metadata_address = compose(&self.store, &document)
            .await
            .map_err(at(Stage::ComposingMetadata))?;

        self.set_stage(Stage::BuildingTransaction).await;
        let mint = Keypair::new();
        let mint_address = mint.pubkey();

        let mint_space = mint_account_space().map_err(at(Stage::BuildingTransaction))?;
        let metadata_space =
            metadata_record_space(request.name(), request.symbol(), metadata_address.as_str())
                .map_err(at(Stage::BuildingTransaction))?;
        let rent_lamports = self
            .rpc
            .minimum_balance_for_rent_exemption(mint_space + metadata_space)
            .await
            .map_err(at(Stage::BuildingTransaction))?;
        let amount = raw_mint_amount(request.initial_supply(), request.decimals())
            .map_err(at(Stage::BuildingTransaction))?;

        let create_group = build_create_mint_group(&CreateMintParams {
            payer: &payer_address,
            mint: &mint_address,
            decimals: request.decimals(),
            name: request.name(),
            symbol: request.symbol(),
            uri: metadata_address.as_str(),
            rent_lamports,
            mint_space,
        })
        .map_err(at(Stage::BuildingTransaction))?;

        // The mint account is being created and must authorize its own
        // creation: two signers for group 1.
        self.set_stage(Stage::SubmittingMint).await;
        self.submit_group(&create_group, &payer_address, &[payer, &mint])
            .await
            .map_err(at(Stage::SubmittingMint))?;

        self.set_stage(Stage::CheckingHoldingAccount).await;
        let holding_account = holding_account_address(&payer_address, &mint_address);
        let exists = self
            .rpc
            .account_exists(&holding_account)
            .await
            .map_err(at(Stage::CheckingHoldingAccount))?;

        let holding_account_creation_signature = if exists {
            tracing::debug!(%holding_account, "holding account exists, skipping creation");
            None
        } else {
            self.set_stage(Stage::SubmittingHoldingAccountCreation).await;
            let group =
                build_holding_account_group(&payer_address, &payer_address, &mint_address);
            let signature = self
                .submit_group(&group, &payer_address, &[payer])
                .await
                .map_err(at(Stage::SubmittingHoldingAccountCreation))?;
            Some(signature)
        };

        self.set_stage(Stage::SubmittingDeposit).await;
        let deposit_group =
            build_deposit_group(&mint_address, &holding_account, &payer_address, amount)
                .map_err(at(Stage::SubmittingDeposit))?;
        self.submit_group(&deposit_group, &payer_address, &[payer])
            .await
            .map_err(at(Stage::SubmittingDeposit))?;

        Ok(IssuanceResult {
            mint: mint_address,
            holding_account,
            holding_account_creation_signature,
            supplied_amount: amount,
        })
    }

    /// Sign and submit one operation group, waiting for acknowledgement.
    async fn submit_group(
        &self,
        instructions: &[Instruction],
        payer: &Pubkey,
        signers: &[&dyn Signer],
    ) -> Result<Signature, LaunchError> {
        let blockhash = self.rpc.latest_blockhash().await?;
        let message = Message::new_with_blockhash(instructions, Some(payer), &blockhash);
        let mut transaction = Transaction::new_unsigned(message);
        transaction
            .try_sign(&signers.to_vec(), blockhash)
            .map_err(|e| RpcError::Submission(e.to_string()))?;

        let signature = self.rpc.send_transaction(&transaction).await?;
        tracing::debug!(%signature, instructions = instructions.len(),
            "operation group acknowledged");
        Ok(signature)
    }

    async fn set_stage(&self, stage: Stage) {
        tracing::debug!(%stage, "issuance stage");
        *self.stage.write().await = stage;
    }
}
