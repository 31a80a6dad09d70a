//! Program IDs used by the issuance flow.

use solana_pubkey::Pubkey;

/// Token-2022 Program ID (mints carry the metadata-pointer extension).
pub const TOKEN_2022_PROGRAM_ID: Pubkey = spl_token_2022::ID;

/// Associated Token Account Program ID.
pub const ASSOCIATED_TOKEN_PROGRAM_ID: Pubkey = spl_associated_token_account::ID;

/// System Program ID.
pub const SYSTEM_PROGRAM_ID: Pubkey = solana_sdk_ids::system_program::ID;
