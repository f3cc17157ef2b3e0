use anchor_lang::error::ErrorCode;
use anchor_lang::prelude::*;

use crate::constants::{CONFIG_SEED, MAX_REFERRAL_CODE_LEN, MAX_USER_NAME_LEN, USER_SEED};
use crate::error::FitStakeError;
use crate::state::{ProtocolConfig, ReferralAccount, UserAccount};
use crate::utils::seeds;
use crate::utils::validate::require_max_len;

pub fn init_user(
    ctx: Context<InitUser>,
    first_name: String,
    last_name: String,
    wallet: Pubkey,
    date_of_birth: i64,
    referral_code: Option<String>,
) -> Result<()> {
    require!(wallet != Pubkey::default(), FitStakeError::InvalidPubkey);
    require_max_len(&first_name, MAX_USER_NAME_LEN)?;
    require_max_len(&last_name, MAX_USER_NAME_LEN)?;

    let referral = credit_referral(
        referral_code.as_deref(),
        ctx.accounts.referral.as_mut().map(|r| (r.key(), &mut **r)),
    )?;

    ctx.accounts.user_account.set_inner(UserAccount {
        first_name,
        last_name,
        wallet,
        date_of_birth,
        referral,
        bump: ctx.bumps.user_account,
    });

    emit!(UserCreated { wallet, referral });

    Ok(())
}

/// Credits the referral named by `code` and returns its address for the user
/// record. A referral account passed without a code is ignored.
pub fn credit_referral(
    code: Option<&str>,
    referral: Option<(Pubkey, &mut ReferralAccount)>,
) -> Result<Option<Pubkey>> {
    let code = match code {
        Some(code) => code,
        None => return Ok(None),
    };
    let (key, referral) = referral.ok_or(ErrorCode::AccountNotInitialized)?;
    require_max_len(code, MAX_REFERRAL_CODE_LEN)?;
    let (expected, _) = seeds::referral_address(code);
    require_keys_eq!(key, expected, ErrorCode::ConstraintSeeds);

    referral.record_referral()?;
    msg!("Referral {} count: {}", code, referral.referral_count);
    Ok(Some(key))
}

#[derive(Accounts)]
#[instruction(first_name: String, last_name: String, wallet: Pubkey)]
pub struct InitUser<'info> {
    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump,
        has_one = authority @ FitStakeError::Unauthorized,
    )]
    pub config: Account<'info, ProtocolConfig>,

    #[account(
        init,
        payer = authority,
        space = 8 + UserAccount::INIT_SPACE,
        seeds = [USER_SEED, wallet.as_ref()],
        bump
    )]
    pub user_account: Account<'info, UserAccount>,

    /// Required when a referral code is given; must be the code's PDA.
    #[account(mut)]
    pub referral: Option<Account<'info, ReferralAccount>>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct UserCreated {
    pub wallet: Pubkey,
    pub referral: Option<Pubkey>,
}
