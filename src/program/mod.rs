//! On-chain program interaction: operation groups, account sizing,
//! holding-account derivation.

pub mod constants;
pub mod instructions;

pub use instructions::{
    build_create_mint_group, build_deposit_group, build_holding_account_group,
    holding_account_address, metadata_record_space, mint_account_space, CreateMintParams,
};
