//! PDA derivation for every record the program owns. Account constraints use
//! the same seed constants; these helpers serve handler-side checks and clients.

use anchor_lang::prelude::*;

use crate::constants::{
    CHARITY_SEED, CONFIG_SEED, FITSTAKE_SEED, GOAL_SEED, PROGRAM_SEED, REFERRAL_SEED, USER_SEED,
    VAULT_SEED,
};

pub fn config_address() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[CONFIG_SEED], &crate::ID)
}

pub fn user_address(wallet: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[USER_SEED, wallet.as_ref()], &crate::ID)
}

pub fn referral_address(code: &str) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[REFERRAL_SEED, code.as_bytes()], &crate::ID)
}

pub fn charity_address(name: &str) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[CHARITY_SEED, name.as_bytes()], &crate::ID)
}

pub fn charity_vault_address(name: &str) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[CHARITY_SEED, VAULT_SEED, name.as_bytes()], &crate::ID)
}

pub fn goal_address(user: &Pubkey, seed: u64) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[GOAL_SEED, user.as_ref(), seed.to_le_bytes().as_ref()],
        &crate::ID,
    )
}

pub fn goal_vault_address(goal: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[VAULT_SEED, goal.as_ref()], &crate::ID)
}

pub fn program_vault_address() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[FITSTAKE_SEED, PROGRAM_SEED, VAULT_SEED], &crate::ID)
}
