//! Program-wide constants: PDA seeds, fee ratio and stored field limits.

/// Seed of the protocol config PDA.
pub const CONFIG_SEED: &[u8] = b"config";

/// Seed of user account PDAs: `[USER_SEED, wallet]`.
pub const USER_SEED: &[u8] = b"user";

/// Seed of referral account PDAs: `[REFERRAL_SEED, code]`.
pub const REFERRAL_SEED: &[u8] = b"referral";

/// Seed of charity PDAs: `[CHARITY_SEED, name]` and `[CHARITY_SEED, VAULT_SEED, name]`.
pub const CHARITY_SEED: &[u8] = b"charity";

/// Seed of goal PDAs: `[GOAL_SEED, user, seed_le]`.
pub const GOAL_SEED: &[u8] = b"goal";

/// Seed shared by every lamport vault PDA.
pub const VAULT_SEED: &[u8] = b"vault";

/// Program vault PDA: `[FITSTAKE_SEED, PROGRAM_SEED, VAULT_SEED]`.
pub const FITSTAKE_SEED: &[u8] = b"fitstake";
pub const PROGRAM_SEED: &[u8] = b"program";

/// Protocol share of a forfeited stake, as a fraction (30%).
pub const FEE_NUMERATOR: u64 = 300;
pub const FEE_DENOMINATOR: u64 = 1_000;

// Must match the `#[max_len]` attributes on the state structs.
pub const MAX_USER_NAME_LEN: usize = 32;
pub const MAX_REFERRAL_NAME_LEN: usize = 30;
pub const MAX_REFERRAL_CODE_LEN: usize = 8;
pub const MAX_CHARITY_NAME_LEN: usize = 30;
pub const MAX_CHARITY_DESCRIPTION_LEN: usize = 200;
pub const MAX_CHARITY_LOGO_LEN: usize = 30;
pub const MAX_GOAL_DETAILS_LEN: usize = 200;
