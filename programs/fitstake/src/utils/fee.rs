//! Forfeiture split between the program fee vault and the charity.
//! fee = floor(stake * FEE_NUMERATOR / FEE_DENOMINATOR), charity = stake - fee.

use crate::constants::{FEE_DENOMINATOR, FEE_NUMERATOR};
use crate::error::FitStakeError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StakeSplit {
    /// Lamports owed to the program vault.
    pub fee: u64,
    /// Lamports owed to the charity vault.
    pub charity: u64,
}

pub fn split_stake(stake: u64) -> Result<StakeSplit, FitStakeError> {
    let fee = (stake as u128)
        .checked_mul(FEE_NUMERATOR as u128)
        .ok_or(FitStakeError::ArithmeticError)?
        .checked_div(FEE_DENOMINATOR as u128)
        .ok_or(FitStakeError::ArithmeticError)?;
    let fee = u64::try_from(fee).map_err(|_| FitStakeError::ArithmeticError)?;
    let charity = stake
        .checked_sub(fee)
        .ok_or(FitStakeError::ArithmeticError)?;
    Ok(StakeSplit { fee, charity })
}

/// Lamports leaving a forfeited goal's vault.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ForfeitPayout {
    pub to_program: u64,
    pub to_charity: u64,
}

/// The fee comes from the recorded stake only; everything else in the vault
/// goes to the charity, so the payout always drains the vault.
pub fn forfeit_payout(
    split: StakeSplit,
    stake: u64,
    vault_balance: u64,
) -> Result<ForfeitPayout, FitStakeError> {
    if vault_balance < stake {
        return Err(FitStakeError::InsufficientVaultBalance);
    }
    let to_charity = vault_balance
        .checked_sub(split.fee)
        .ok_or(FitStakeError::ArithmeticError)?;
    Ok(ForfeitPayout {
        to_program: split.fee,
        to_charity,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thirty_seventy_split() {
        let split = split_stake(10_000_000).unwrap();
        assert_eq!(split.fee, 3_000_000);
        assert_eq!(split.charity, 7_000_000);
    }

    #[test]
    fn truncation_favours_charity() {
        // 1_000_001 * 0.3 = 300_000.3
        let split = split_stake(1_000_001).unwrap();
        assert_eq!(split.fee, 300_000);
        assert_eq!(split.charity, 700_001);

        let split = split_stake(3).unwrap();
        assert_eq!(split.fee, 0);
        assert_eq!(split.charity, 3);
    }

    #[test]
    fn split_conserves_stake() {
        for stake in [0, 1, 7, 999, 1_000, 890_880, 1_000_000_007, u64::MAX / 3, u64::MAX] {
            let split = split_stake(stake).unwrap();
            assert_eq!(split.fee as u128 + split.charity as u128, stake as u128);
            assert!(split.fee <= split.charity);
        }
    }

    #[test]
    fn payout_drains_exact_stake() {
        let stake = 10_000_000;
        let payout = forfeit_payout(split_stake(stake).unwrap(), stake, stake).unwrap();
        assert_eq!(
            payout,
            ForfeitPayout {
                to_program: 3_000_000,
                to_charity: 7_000_000
            }
        );
    }

    #[test]
    fn payout_sends_extra_lamports_to_charity() {
        let stake = 10_000_000;
        let payout = forfeit_payout(split_stake(stake).unwrap(), stake, stake + 5_000).unwrap();
        assert_eq!(payout.to_program, 3_000_000);
        assert_eq!(payout.to_charity, 7_005_000);
        assert_eq!(payout.to_program + payout.to_charity, stake + 5_000);
    }

    #[test]
    fn payout_needs_full_stake_in_vault() {
        let stake = 10_000_000;
        assert!(matches!(
            forfeit_payout(split_stake(stake).unwrap(), stake, stake - 1),
            Err(FitStakeError::InsufficientVaultBalance)
        ));
    }
}
