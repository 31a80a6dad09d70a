//! Pure conversion from whole-token supply to raw base-unit amounts.
//!
//! No async, no network calls. All math is checked 128-bit integer
//! arithmetic so a realistic supply at 9 decimals never wraps or rounds.

use thiserror::Error;

/// Errors that can occur while scaling a supply to base units.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AmountError {
    #[error("supply {supply} at {decimals} decimals does not fit in u64")]
    Overflow { supply: u64, decimals: u8 },
}

/// Convert a whole-token initial supply into base units.
///
/// ```text
/// raw = initial_supply * 10^decimals
/// ```
///
/// The intermediate product is computed in `u128` and must fit in `u64`,
/// matching the ledger's token amount width.
pub fn raw_mint_amount(initial_supply: u64, decimals: u8) -> Result<u64, AmountError> {
    let overflow = || AmountError::Overflow {
        supply: initial_supply,
        decimals,
    };

    let multiplier = 10u128.checked_pow(decimals as u32).ok_or_else(overflow)?;
    let raw = (initial_supply as u128)
        .checked_mul(multiplier)
        .ok_or_else(overflow)?;

    u64::try_from(raw).map_err(|_| overflow())
}
