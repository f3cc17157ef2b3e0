use anchor_lang::prelude::*;

use crate::constants::{CONFIG_SEED, FITSTAKE_SEED, PROGRAM_SEED, VAULT_SEED};
use crate::error::FitStakeError;
use crate::state::ProtocolConfig;
use crate::utils::transfer::top_up_to_rent_minimum;
use crate::utils::validate::require_upgrade_authority;

pub fn initialize_config(ctx: Context<InitializeConfig>, authority: Pubkey) -> Result<()> {
    // Only the deployer can pick the protocol authority.
    require_upgrade_authority(
        ctx.accounts.program.programdata_address()?,
        ctx.accounts.program_data.key(),
        ctx.accounts.program_data.upgrade_authority_address,
        ctx.accounts.payer.key(),
    )?;
    require!(authority != Pubkey::default(), FitStakeError::InvalidPubkey);
    require!(authority != crate::ID, FitStakeError::InvalidPubkey);

    // Fee transfers into an unfunded vault would fail the rent check.
    top_up_to_rent_minimum(
        ctx.accounts.payer.to_account_info(),
        ctx.accounts.program_vault.to_account_info(),
        ctx.accounts.system_program.to_account_info(),
    )?;

    ctx.accounts.config.set_inner(ProtocolConfig {
        authority,
        bump: ctx.bumps.config,
        program_vault_bump: ctx.bumps.program_vault,
    });

    emit!(ConfigInitialized {
        authority,
        program_vault: ctx.accounts.program_vault.key(),
    });

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeConfig<'info> {
    #[account(
        init,
        payer = payer,
        space = 8 + ProtocolConfig::INIT_SPACE,
        seeds = [CONFIG_SEED],
        bump
    )]
    pub config: Account<'info, ProtocolConfig>,

    #[account(
        mut,
        seeds = [FITSTAKE_SEED, PROGRAM_SEED, VAULT_SEED],
        bump
    )]
    pub program_vault: SystemAccount<'info>,

    /// Upgrade authority of this program.
    #[account(mut)]
    pub payer: Signer<'info>,

    pub program: Program<'info, crate::program::Fitstake>,

    pub program_data: Account<'info, ProgramData>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct ConfigInitialized {
    pub authority: Pubkey,
    pub program_vault: Pubkey,
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::error::ErrorCode;

    use crate::test_utils::*;
    use crate::utils::seeds;

    #[test]
    fn program_account_must_be_this_program() {
        let payer = Pubkey::new_unique();
        let mut impostor = system_program();
        impostor.key = Box::leak(Box::new(Pubkey::new_unique()));
        let accounts = [
            system_account(seeds::config_address().0, 0),
            system_account(seeds::program_vault_address().0, 0),
            signer(payer, 1_000_000_000),
            impostor,
            system_account(Pubkey::new_unique(), 0),
            system_program(),
        ];
        let code = error_code(validate::<InitializeConfig>(&accounts, &[]));
        assert_eq!(code, u32::from(ErrorCode::InvalidProgramId));
    }
}
