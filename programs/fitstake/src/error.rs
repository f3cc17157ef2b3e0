use anchor_lang::prelude::*;

/// Custom error codes for the goal staking program.
///
/// Seed mismatches, missing accounts and re-initialization are reported by
/// Anchor's own account validation (`ConstraintSeeds`, `AccountNotInitialized`,
/// system program "already in use") and have no variant here.
#[error_code]
pub enum FitStakeError {
    #[msg("Unauthorized: protocol authority signature required")]
    Unauthorized,

    #[msg("Supplied account does not match the recorded address")]
    AddressConstraintViolated,

    #[msg("Invalid public key")]
    InvalidPubkey,

    #[msg("String field exceeds its maximum length")]
    FieldTooLong,

    #[msg("Insufficient funds to create goal")]
    InsufficientFunds,

    #[msg("Staking zero lamports not allowed")]
    StakingZeroLamports,

    #[msg("Stake is below the rent-exempt minimum of a vault")]
    StakeBelowRentMinimum,

    #[msg("Goal deadline not yet passed")]
    GoalDeadlineNotPassed,

    #[msg("Deadline for goal has passed")]
    GoalDeadlinePassed,

    #[msg("Goal already completed")]
    GoalAlreadyCompleted,

    #[msg("Goal is already forfeited")]
    GoalForfeited,

    #[msg("Goal vault holds less than the recorded stake")]
    InsufficientVaultBalance,

    #[msg("Arithmetic error occurred")]
    ArithmeticError,
}
