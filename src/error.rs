//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("upload error: {0}")]
    Upload(#[from] UploadError),

    #[error("rpc error: {0}")]
    Rpc(#[from] RpcError),

    #[error("amount error: {0}")]
    Amount(#[from] crate::shared::scaling::AmountError),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("token program interaction failed: {0}")]
    Program(String),
}

/// A field constraint on an issuance request was not met.
///
/// Raised before any network call is made.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("name must be at least {min} characters, got {len}")]
    NameTooShort { len: usize, min: usize },

    #[error("symbol must be 1-{max} characters, got {len}")]
    SymbolLength { len: usize, max: usize },

    #[error("description must be at least {min} characters, got {len}")]
    DescriptionTooShort { len: usize, min: usize },

    #[error("image payload is empty")]
    EmptyImage,

    #[error("decimals must be 0-{max}, got {decimals}")]
    DecimalsOutOfRange { decimals: u8, max: u8 },
}

/// Pinning-backend errors. Not retried — the first failure propagates.
#[derive(Error, Debug)]
pub enum UploadError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("pinning backend rejected upload with status {status}: {body}")]
    Backend { status: u16, body: String },
}

/// Ledger RPC errors, one variant per read/write the issuance flow performs.
#[derive(Error, Debug)]
pub enum RpcError {
    #[error("rent-exemption query failed: {0}")]
    RentQuery(String),

    #[error("blockhash fetch failed: {0}")]
    Blockhash(String),

    #[error("account query failed: {0}")]
    AccountQuery(String),

    #[error("transaction rejected: {0}")]
    Submission(String),
}

/// Configuration errors raised while reading the process environment.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing environment variable {0}")]
    MissingVar(&'static str),
}
