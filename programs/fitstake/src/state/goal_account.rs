use anchor_lang::prelude::*;

use crate::error::FitStakeError;
use crate::utils::fee::{split_stake, StakeSplit};

/// A staked commitment. Address `[b"goal", user, seed_le]`; its lamports sit in
/// the data-less vault `[b"vault", goal]` until the goal resolves.
#[account]
#[derive(InitSpace)]
pub struct GoalAccount {
    /// Owner and sole claimant.
    pub user: Pubkey,
    /// Caller-chosen id, unique per owner.
    pub seed: u64,
    /// Lamports moved into the vault at creation.
    pub stake_amount: u64,
    /// Unix seconds. Completion requires `now < deadline`, forfeiture `now >= deadline`.
    pub deadline: i64,
    pub status: GoalStatus,
    /// Beneficiary `CharityAccount` address.
    pub charity: Pubkey,
    #[max_len(200)]
    pub details: String,
    pub bump: u8,
    pub vault_bump: u8,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, InitSpace, PartialEq, Eq)]
#[repr(u8)]
pub enum GoalStatus {
    Incomplete = 0,
    Complete = 1,
    Forfeited = 2,
}

impl GoalAccount {
    /// Both outcomes are terminal.
    pub fn ensure_incomplete(&self) -> core::result::Result<(), FitStakeError> {
        match self.status {
            GoalStatus::Incomplete => Ok(()),
            GoalStatus::Complete => Err(FitStakeError::GoalAlreadyCompleted),
            GoalStatus::Forfeited => Err(FitStakeError::GoalForfeited),
        }
    }

    /// Incomplete -> Complete. Leaves the goal untouched on error.
    pub fn complete(&mut self, now: i64) -> core::result::Result<(), FitStakeError> {
        self.ensure_incomplete()?;
        if now >= self.deadline {
            return Err(FitStakeError::GoalDeadlinePassed);
        }
        self.status = GoalStatus::Complete;
        Ok(())
    }

    /// Incomplete -> Forfeited, returning how the stake is divided.
    /// Leaves the goal untouched on error.
    pub fn forfeit(&mut self, now: i64) -> core::result::Result<StakeSplit, FitStakeError> {
        self.ensure_incomplete()?;
        if now < self.deadline {
            return Err(FitStakeError::GoalDeadlineNotPassed);
        }
        let split = split_stake(self.stake_amount)?;
        self.status = GoalStatus::Forfeited;
        Ok(split)
    }
}
