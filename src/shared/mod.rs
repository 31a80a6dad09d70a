//! Shared newtypes and pure utilities used across the crate.

pub mod scaling;

pub use scaling::{raw_mint_amount, AmountError};

use serde::{Deserialize, Serialize};

// ─── ContentAddress ──────────────────────────────────────────────────────────

/// Identifier under which a blob is retrievable from the pinning backend.
///
/// Either a gateway-prefixed URL or a raw content identifier, depending on
/// deployment config. Opaque to the rest of the crate; serializes as a plain
/// JSON string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentAddress(String);

impl ContentAddress {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for ContentAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ContentAddress {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ContentAddress {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
