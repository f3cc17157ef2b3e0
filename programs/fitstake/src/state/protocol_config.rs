use anchor_lang::prelude::*;

/// Singleton config PDA holding the protocol authority. Written once by the
/// program's upgrade authority.
#[account]
#[derive(InitSpace)]
pub struct ProtocolConfig {
    /// Signer allowed to register users, referrals and charities and to forfeit goals.
    pub authority: Pubkey,
    pub bump: u8,
    /// Bump of the program fee vault `[b"fitstake", b"program", b"vault"]`.
    pub program_vault_bump: u8,
}
