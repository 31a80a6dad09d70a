//! Network URL constants for the launchpad SDK.

/// Default Solana JSON-RPC endpoint (devnet).
pub const DEVNET_RPC_URL: &str = "https://api.devnet.solana.com";

/// Default pinning API endpoint.
pub const DEFAULT_PIN_API_URL: &str = "https://api.pinata.cloud/pinning/pinFileToIPFS";

/// Default public gateway prefix for dereferencing pinned content.
pub const DEFAULT_GATEWAY_URL: &str = "https://gateway.pinata.cloud/ipfs";
