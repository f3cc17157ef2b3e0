use anchor_lang::prelude::*;

use crate::constants::{CHARITY_SEED, GOAL_SEED, MAX_GOAL_DETAILS_LEN, USER_SEED, VAULT_SEED};
use crate::error::FitStakeError;
use crate::state::{CharityAccount, GoalAccount, GoalStatus, UserAccount};
use crate::utils::transfer::transfer_sol;
use crate::utils::validate::{require_max_len, require_stake};

pub fn init_goal(
    ctx: Context<InitGoal>,
    seed: u64,
    stake_amount: u64,
    deadline: i64,
    charity: Pubkey,
    details: String,
) -> Result<()> {
    // Goal rent has already been taken from the owner at this point.
    let rent_minimum = Rent::get()?.minimum_balance(0);
    require_stake(stake_amount, ctx.accounts.user.lamports(), rent_minimum)?;
    require_keys_eq!(
        ctx.accounts.charity.key(),
        charity,
        FitStakeError::AddressConstraintViolated
    );
    require_max_len(&details, MAX_GOAL_DETAILS_LEN)?;

    let user = ctx.accounts.user.key();
    let goal = ctx.accounts.goal_account.key();

    ctx.accounts.goal_account.set_inner(GoalAccount {
        user,
        seed,
        stake_amount,
        deadline,
        status: GoalStatus::Incomplete,
        charity,
        details,
        bump: ctx.bumps.goal_account,
        vault_bump: ctx.bumps.vault,
    });

    emit!(GoalCreated {
        user,
        goal,
        seed,
        stake_amount,
        deadline,
        charity,
    });

    transfer_sol(
        ctx.accounts.user.to_account_info(),
        ctx.accounts.vault.to_account_info(),
        ctx.accounts.system_program.to_account_info(),
        stake_amount,
    )?;

    emit!(StakeDeposited {
        user,
        goal,
        amount: stake_amount,
        vault_balance: ctx.accounts.vault.lamports(),
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(seed: u64)]
pub struct InitGoal<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        seeds = [USER_SEED, user.key().as_ref()],
        bump = user_account.bump
    )]
    pub user_account: Account<'info, UserAccount>,

    #[account(
        seeds = [CHARITY_SEED, charity.name.as_bytes()],
        bump = charity.bump
    )]
    pub charity: Account<'info, CharityAccount>,

    #[account(
        init,
        payer = user,
        space = 8 + GoalAccount::INIT_SPACE,
        seeds = [GOAL_SEED, user.key().as_ref(), seed.to_le_bytes().as_ref()],
        bump
    )]
    pub goal_account: Account<'info, GoalAccount>,

    #[account(
        mut,
        seeds = [VAULT_SEED, goal_account.key().as_ref()],
        bump
    )]
    pub vault: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct GoalCreated {
    pub user: Pubkey,
    pub goal: Pubkey,
    pub seed: u64,
    pub stake_amount: u64,
    pub deadline: i64,
    pub charity: Pubkey,
}

#[event]
pub struct StakeDeposited {
    pub user: Pubkey,
    pub goal: Pubkey,
    pub amount: u64,
    pub vault_balance: u64,
}
