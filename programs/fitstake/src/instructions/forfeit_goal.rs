use anchor_lang::prelude::*;

use crate::constants::{CONFIG_SEED, FITSTAKE_SEED, GOAL_SEED, PROGRAM_SEED, VAULT_SEED};
use crate::error::FitStakeError;
use crate::state::{CharityAccount, GoalAccount, ProtocolConfig};
use crate::utils::fee::forfeit_payout;
use crate::utils::seeds::charity_vault_address;
use crate::utils::transfer::transfer_sol_signed;

pub fn forfeit_goal(ctx: Context<ForfeitGoal>) -> Result<()> {
    let goal_key = ctx.accounts.goal_account.key();
    let vault_ai = ctx.accounts.vault.to_account_info();
    let vault_balance = vault_ai.lamports();

    let now = Clock::get()?.unix_timestamp;
    let goal = &mut ctx.accounts.goal_account;
    let split = goal.forfeit(now)?;
    let payout = forfeit_payout(split, goal.stake_amount, vault_balance)?;

    let signer_seeds: &[&[&[u8]]] = &[&[VAULT_SEED, goal_key.as_ref(), &[goal.vault_bump]]];
    transfer_sol_signed(
        vault_ai.clone(),
        ctx.accounts.program_vault.to_account_info(),
        ctx.accounts.system_program.to_account_info(),
        payout.to_program,
        signer_seeds,
    )?;
    transfer_sol_signed(
        vault_ai,
        ctx.accounts.charity_vault.to_account_info(),
        ctx.accounts.system_program.to_account_info(),
        payout.to_charity,
        signer_seeds,
    )?;

    msg!(
        "Goal {} forfeited: fee {}, charity {}",
        goal_key,
        payout.to_program,
        payout.to_charity
    );
    emit!(StakeForfeited {
        user: goal.user,
        goal: goal_key,
        now,
        deadline: goal.deadline,
        stake: goal.stake_amount,
        fee: payout.to_program,
        amount: payout.to_charity,
        charity: goal.charity,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct ForfeitGoal<'info> {
    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump,
        has_one = authority @ FitStakeError::Unauthorized,
    )]
    pub config: Account<'info, ProtocolConfig>,

    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [GOAL_SEED, goal_account.user.as_ref(), goal_account.seed.to_le_bytes().as_ref()],
        bump = goal_account.bump,
    )]
    pub goal_account: Account<'info, GoalAccount>,

    #[account(
        mut,
        seeds = [VAULT_SEED, goal_account.key().as_ref()],
        bump = goal_account.vault_bump
    )]
    pub vault: SystemAccount<'info>,

    #[account(address = goal_account.charity @ FitStakeError::AddressConstraintViolated)]
    pub charity: Account<'info, CharityAccount>,

    #[account(
        mut,
        address = charity_vault_address(&charity.name).0 @ FitStakeError::AddressConstraintViolated
    )]
    pub charity_vault: SystemAccount<'info>,

    #[account(
        mut,
        seeds = [FITSTAKE_SEED, PROGRAM_SEED, VAULT_SEED],
        bump = config.program_vault_bump
    )]
    pub program_vault: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct StakeForfeited {
    pub user: Pubkey,
    pub goal: Pubkey,
    pub now: i64,
    pub deadline: i64,
    pub stake: u64,
    pub fee: u64,
    /// Lamports sent to the charity vault.
    pub amount: u64,
    pub charity: Pubkey,
}
