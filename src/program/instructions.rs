//! Instruction builders for the three issuance operation groups.
//!
//! Group 1 creates and configures the mint, group 2 creates the payer's
//! holding account (skipped when it already exists), group 3 deposits the
//! initial supply. Each group is one signed transaction from the network's
//! perspective.

use solana_instruction::Instruction;
use solana_pubkey::Pubkey;
use spl_token_2022::extension::{metadata_pointer, ExtensionType};
use spl_token_2022::state::Mint;
use spl_token_metadata_interface::state::TokenMetadata;

use crate::error::LaunchError;
use crate::program::constants::TOKEN_2022_PROGRAM_ID;

// ============================================================================
// Account sizing
// ============================================================================

/// Space the mint account is created with: base mint plus the
/// metadata-pointer extension.
pub fn mint_account_space() -> Result<usize, LaunchError> {
    ExtensionType::try_calculate_account_len::<Mint>(&[ExtensionType::MetadataPointer])
        .map_err(|e| LaunchError::Program(format!("mint account sizing: {e}")))
}

/// Byte length of the packed metadata record: TLV type + length prefix +
/// the exact serialized metadata.
///
/// The account is not created with this space — Token-2022 grows it when the
/// record is written — but rent must be funded for it upfront.
pub fn metadata_record_space(name: &str, symbol: &str, uri: &str) -> Result<usize, LaunchError> {
    let record = TokenMetadata {
        name: name.to_string(),
        symbol: symbol.to_string(),
        uri: uri.to_string(),
        ..Default::default()
    };
    record
        .tlv_size_of()
        .map_err(|e| LaunchError::Program(format!("metadata record sizing: {e}")))
}

// ============================================================================
// Derivation
// ============================================================================

/// The payer's associated token account for the mint, under Token-2022.
pub fn holding_account_address(owner: &Pubkey, mint: &Pubkey) -> Pubkey {
    spl_associated_token_account::get_associated_token_address_with_program_id(
        owner,
        mint,
        &TOKEN_2022_PROGRAM_ID,
    )
}

// ============================================================================
// Operation groups
// ============================================================================

/// Parameters for the mint-creation group.
pub struct CreateMintParams<'a> {
    pub payer: &'a Pubkey,
    pub mint: &'a Pubkey,
    pub decimals: u8,
    pub name: &'a str,
    pub symbol: &'a str,
    /// Content address of the pinned metadata document.
    pub uri: &'a str,
    /// Rent-exempt balance for mint space + metadata record space.
    pub rent_lamports: u64,
    /// Mint account space (see [`mint_account_space`]).
    pub mint_space: usize,
}

/// Build group 1: create-account, metadata-pointer init, mint init,
/// metadata write.
///
/// Order is load-bearing — each instruction depends on state established by
/// the previous one. The metadata pointer targets the mint account itself,
/// the payer is mint and update authority, and there is no freeze authority.
pub fn build_create_mint_group(params: &CreateMintParams) -> Result<Vec<Instruction>, LaunchError> {
    let create_account = solana_system_interface::instruction::create_account(
        params.payer,
        params.mint,
        params.rent_lamports,
        params.mint_space as u64,
        &TOKEN_2022_PROGRAM_ID,
    );

    let init_pointer = metadata_pointer::instruction::initialize(
        &TOKEN_2022_PROGRAM_ID,
        params.mint,
        Some(*params.payer),
        Some(*params.mint),
    )
    .map_err(|e| LaunchError::Program(format!("metadata pointer init: {e}")))?;

    let init_mint = spl_token_2022::instruction::initialize_mint2(
        &TOKEN_2022_PROGRAM_ID,
        params.mint,
        params.payer,
        None,
        params.decimals,
    )
    .map_err(|e| LaunchError::Program(format!("mint init: {e}")))?;

    let write_metadata = spl_token_metadata_interface::instruction::initialize(
        &TOKEN_2022_PROGRAM_ID,
        params.mint,
        params.payer,
        params.mint,
        params.payer,
        params.name.to_string(),
        params.symbol.to_string(),
        params.uri.to_string(),
    );

    Ok(vec![create_account, init_pointer, init_mint, write_metadata])
}

/// Build group 2: create the payer's associated token account for the mint.
pub fn build_holding_account_group(payer: &Pubkey, owner: &Pubkey, mint: &Pubkey) -> Vec<Instruction> {
    vec![
        spl_associated_token_account::instruction::create_associated_token_account(
            payer,
            owner,
            mint,
            &TOKEN_2022_PROGRAM_ID,
        ),
    ]
}

/// Build group 3: deposit the initial supply into the holding account.
///
/// `amount` is in base units (`initial_supply * 10^decimals`).
pub fn build_deposit_group(
    mint: &Pubkey,
    holding_account: &Pubkey,
    mint_authority: &Pubkey,
    amount: u64,
) -> Result<Vec<Instruction>, LaunchError> {
    let mint_to = spl_token_2022::instruction::mint_to(
        &TOKEN_2022_PROGRAM_ID,
        mint,
        holding_account,
        mint_authority,
        &[],
        amount,
    )
    .map_err(|e| LaunchError::Program(format!("mint_to: {e}")))?;

    Ok(vec![mint_to])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::program::constants::{ASSOCIATED_TOKEN_PROGRAM_ID, SYSTEM_PROGRAM_ID};

    fn params<'a>(payer: &'a Pubkey, mint: &'a Pubkey) -> CreateMintParams<'a> {
        CreateMintParams {
            payer,
            mint,
            decimals: 6,
            name: "Demo",
            symbol: "DMO",
            uri: "https://gateway.example/ipfs/QmMeta",
            rent_lamports: 3_000_000,
            mint_space: mint_account_space().unwrap(),
        }
    }

    #[test]
    fn test_create_mint_group_order() {
        let payer = Pubkey::new_unique();
        let mint = Pubkey::new_unique();

        let group = build_create_mint_group(&params(&payer, &mint)).unwrap();

        assert_eq!(group.len(), 4);
        // create-account first, then three Token-2022 instructions
        assert_eq!(group[0].program_id, SYSTEM_PROGRAM_ID);
        for ix in &group[1..] {
            assert_eq!(ix.program_id, TOKEN_2022_PROGRAM_ID);
        }
        // The mint account signs its own creation.
        assert!(group[0]
            .accounts
            .iter()
            .any(|meta| meta.pubkey == mint && meta.is_signer));
    }

    #[test]
    fn test_holding_account_group() {
        let payer = Pubkey::new_unique();
        let mint = Pubkey::new_unique();

        let group = build_holding_account_group(&payer, &payer, &mint);

        assert_eq!(group.len(), 1);
        assert_eq!(group[0].program_id, ASSOCIATED_TOKEN_PROGRAM_ID);
    }

    #[test]
    fn test_deposit_group() {
        let payer = Pubkey::new_unique();
        let mint = Pubkey::new_unique();
        let holding = holding_account_address(&payer, &mint);

        let group = build_deposit_group(&mint, &holding, &payer, 500).unwrap();

        assert_eq!(group.len(), 1);
        assert_eq!(group[0].program_id, TOKEN_2022_PROGRAM_ID);
    }

    #[test]
    fn test_mint_space_exceeds_base_mint() {
        // Base Mint packs to 82 bytes; the metadata-pointer extension adds
        // the account-type tag, a TLV header, and two pubkeys on top.
        assert!(mint_account_space().unwrap() > 82);
    }

    #[test]
    fn test_metadata_space_monotone_in_length() {
        let short = metadata_record_space("Demo", "DMO", "ipfs://QmMeta").unwrap();
        let long = metadata_record_space("Demo", "DMO", "ipfs://QmMetaipfs://QmMeta").unwrap();
        assert!(long >= short);

        let doubled =
            metadata_record_space("DemoDemo", "DMODMO", "ipfs://QmMetaipfs://QmMeta").unwrap();
        assert!(doubled > short);
    }

    #[test]
    fn test_holding_account_derivation_is_stable() {
        let owner = Pubkey::new_unique();
        let mint = Pubkey::new_unique();
        assert_eq!(
            holding_account_address(&owner, &mint),
            holding_account_address(&owner, &mint)
        );
    }
}
