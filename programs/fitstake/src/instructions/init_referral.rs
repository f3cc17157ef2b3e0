use anchor_lang::prelude::*;

use crate::constants::{CONFIG_SEED, MAX_REFERRAL_CODE_LEN, MAX_REFERRAL_NAME_LEN, REFERRAL_SEED};
use crate::error::FitStakeError;
use crate::state::{ProtocolConfig, ReferralAccount};
use crate::utils::validate::require_max_len;

pub fn init_referral(ctx: Context<InitReferral>, name: String, referral_code: String) -> Result<()> {
    require_max_len(&name, MAX_REFERRAL_NAME_LEN)?;
    require_max_len(&referral_code, MAX_REFERRAL_CODE_LEN)?;

    ctx.accounts.referral.set_inner(ReferralAccount {
        name,
        referral_count: 0,
        referral_code,
        bump: ctx.bumps.referral,
    });

    emit!(ReferralCreated {
        referral: ctx.accounts.referral.key(),
        name: ctx.accounts.referral.name.clone(),
        referral_code: ctx.accounts.referral.referral_code.clone(),
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(name: String, referral_code: String)]
pub struct InitReferral<'info> {
    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump,
        has_one = authority @ FitStakeError::Unauthorized,
    )]
    pub config: Account<'info, ProtocolConfig>,

    #[account(
        init,
        payer = authority,
        space = 8 + ReferralAccount::INIT_SPACE,
        seeds = [REFERRAL_SEED, referral_code.as_bytes()],
        bump
    )]
    pub referral: Account<'info, ReferralAccount>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct ReferralCreated {
    pub referral: Pubkey,
    pub name: String,
    pub referral_code: String,
}
