use anchor_lang::prelude::*;

/// Registered charity. Its lamports live in the data-less vault PDA
/// `[b"charity", b"vault", name]`, not in this account.
#[account]
#[derive(InitSpace)]
pub struct CharityAccount {
    #[max_len(30)]
    pub name: String,
    #[max_len(200)]
    pub description: String,
    #[max_len(30)]
    pub logo: String,
    pub bump: u8,
    pub vault_bump: u8,
}
