//! # Launchpad SDK
//!
//! A Rust SDK for issuing Token-2022 mints on Solana devnet with
//! IPFS-pinned image and metadata.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Domain value objects, shared newtypes, pure scaling math
//! 2. **Program** — Instruction builders for the issuance operation groups
//! 3. **Pinning** — `AssetStore` trait + `PinataClient` multipart uploader
//! 4. **RPC** — `LedgerRpc` trait + `SolanaRpc` JSON-RPC implementation
//! 5. **Client** — `Launchpad`, the issuance orchestrator
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use launchpad_sdk::prelude::*;
//!
//! let config = PinningConfig::from_env()?;
//! let mut launchpad = Launchpad::devnet(config);
//!
//! let request = IssuanceRequest::new(
//!     "Demo", "DMO", "test token", image_bytes, ImageFormat::Png, 6, 1000,
//! )?;
//! let result = launchpad.issue(request, &payer).await?;
//! println!("mint: {}", result.mint);
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes and pure scaling math.
pub mod shared;

/// Domain value objects: request, metadata document, result.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

/// Pinning-backend configuration.
pub mod config;

// ── Layer 2: Program ─────────────────────────────────────────────────────────

/// On-chain program interaction: operation groups, sizing, derivation.
pub mod program;

// ── Layer 3: Pinning ─────────────────────────────────────────────────────────

/// Asset storage: `AssetStore` trait and the Pinata client.
pub mod pin;

// ── Layer 4: RPC ─────────────────────────────────────────────────────────────

/// Ledger RPC: `LedgerRpc` trait and the Solana client.
pub mod rpc;

// ── Layer 5: High-Level Client ───────────────────────────────────────────────

/// `Launchpad` — the issuance orchestrator.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes + scaling
    pub use crate::shared::{raw_mint_amount, AmountError, ContentAddress};

    // Domain types
    pub use crate::domain::{ImageFormat, IssuanceRequest, IssuanceResult, MetadataDocument};

    // Errors
    pub use crate::error::{ConfigError, LaunchError, RpcError, UploadError, ValidationError};

    // Config + network
    pub use crate::config::PinningConfig;
    pub use crate::network::{DEFAULT_GATEWAY_URL, DEFAULT_PIN_API_URL, DEVNET_RPC_URL};

    // Pinning + RPC seams
    pub use crate::pin::{AssetStore, PinataClient};
    pub use crate::rpc::{LedgerRpc, SolanaRpc};

    // Orchestrator
    pub use crate::client::{IssuanceFailure, Launchpad, Progress, Stage};
}
