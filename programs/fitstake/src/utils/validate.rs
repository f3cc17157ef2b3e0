use anchor_lang::prelude::Pubkey;

use crate::error::FitStakeError;

/// Stake preconditions, checked in order: non-zero, enough for the vault
/// to be rent-exempt, covered by the owner's balance.
pub fn require_stake(
    stake_amount: u64,
    owner_lamports: u64,
    rent_minimum: u64,
) -> Result<(), FitStakeError> {
    if stake_amount == 0 {
        return Err(FitStakeError::StakingZeroLamports);
    }
    if stake_amount < rent_minimum {
        return Err(FitStakeError::StakeBelowRentMinimum);
    }
    if owner_lamports < stake_amount {
        return Err(FitStakeError::InsufficientFunds);
    }
    Ok(())
}

/// Byte length, as Borsh stores it.
pub fn require_max_len(value: &str, max: usize) -> Result<(), FitStakeError> {
    if value.len() > max {
        return Err(FitStakeError::FieldTooLong);
    }
    Ok(())
}

/// `program_data` must be the program's own ProgramData account and `signer`
/// its upgrade authority. A program made immutable has no authority left.
pub fn require_upgrade_authority(
    programdata_address: Option<Pubkey>,
    program_data: Pubkey,
    upgrade_authority: Option<Pubkey>,
    signer: Pubkey,
) -> Result<(), FitStakeError> {
    if programdata_address != Some(program_data) {
        return Err(FitStakeError::AddressConstraintViolated);
    }
    if upgrade_authority != Some(signer) {
        return Err(FitStakeError::Unauthorized);
    }
    Ok(())
}
