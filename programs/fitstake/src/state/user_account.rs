use anchor_lang::prelude::*;

#[account]
#[derive(InitSpace)]
pub struct UserAccount {
    #[max_len(32)]
    pub first_name: String,
    #[max_len(32)]
    pub last_name: String,
    /// Owner key; also the PDA seed.
    pub wallet: Pubkey,
    /// Unix seconds.
    pub date_of_birth: i64,
    /// Referral account credited at registration, if any.
    pub referral: Option<Pubkey>,
    pub bump: u8,
}
