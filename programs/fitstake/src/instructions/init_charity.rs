use anchor_lang::prelude::*;

use crate::constants::{
    CHARITY_SEED, CONFIG_SEED, MAX_CHARITY_DESCRIPTION_LEN, MAX_CHARITY_LOGO_LEN,
    MAX_CHARITY_NAME_LEN, VAULT_SEED,
};
use crate::error::FitStakeError;
use crate::state::{CharityAccount, ProtocolConfig};
use crate::utils::transfer::top_up_to_rent_minimum;
use crate::utils::validate::require_max_len;

pub fn init_charity(
    ctx: Context<InitCharity>,
    name: String,
    description: String,
    logo: String,
) -> Result<()> {
    require_max_len(&name, MAX_CHARITY_NAME_LEN)?;
    require_max_len(&description, MAX_CHARITY_DESCRIPTION_LEN)?;
    require_max_len(&logo, MAX_CHARITY_LOGO_LEN)?;

    // Allocate the vault at the rent floor; donations are tracked above it.
    top_up_to_rent_minimum(
        ctx.accounts.authority.to_account_info(),
        ctx.accounts.charity_vault.to_account_info(),
        ctx.accounts.system_program.to_account_info(),
    )?;

    ctx.accounts.charity.set_inner(CharityAccount {
        name,
        description,
        logo,
        bump: ctx.bumps.charity,
        vault_bump: ctx.bumps.charity_vault,
    });

    let charity = &ctx.accounts.charity;
    emit!(CharityCreated {
        charity: charity.key(),
        vault: ctx.accounts.charity_vault.key(),
        name: charity.name.clone(),
        description: charity.description.clone(),
        logo: charity.logo.clone(),
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(name: String)]
pub struct InitCharity<'info> {
    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump,
        has_one = authority @ FitStakeError::Unauthorized,
    )]
    pub config: Account<'info, ProtocolConfig>,

    #[account(
        init,
        payer = authority,
        space = 8 + CharityAccount::INIT_SPACE,
        seeds = [CHARITY_SEED, name.as_bytes()],
        bump
    )]
    pub charity: Account<'info, CharityAccount>,

    #[account(
        mut,
        seeds = [CHARITY_SEED, VAULT_SEED, name.as_bytes()],
        bump
    )]
    pub charity_vault: SystemAccount<'info>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct CharityCreated {
    pub charity: Pubkey,
    pub vault: Pubkey,
    pub name: String,
    pub description: String,
    pub logo: String,
}
