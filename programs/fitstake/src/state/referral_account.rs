use anchor_lang::prelude::*;

use crate::error::FitStakeError;

#[account]
#[derive(InitSpace)]
pub struct ReferralAccount {
    /// Referrer display name.
    #[max_len(30)]
    pub name: String,
    /// Users registered with this code. Only ever incremented.
    pub referral_count: u64,
    #[max_len(8)]
    pub referral_code: String,
    pub bump: u8,
}

impl ReferralAccount {
    /// Credit one referring registration.
    pub fn record_referral(&mut self) -> core::result::Result<(), FitStakeError> {
        self.referral_count = self
            .referral_count
            .checked_add(1)
            .ok_or(FitStakeError::ArithmeticError)?;
        Ok(())
    }
}
