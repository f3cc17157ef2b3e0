use anchor_lang::prelude::*;

use crate::constants::{GOAL_SEED, VAULT_SEED};
use crate::state::GoalAccount;
use crate::utils::transfer::transfer_sol_signed;

pub fn complete_goal(ctx: Context<CompleteGoal>) -> Result<()> {
    // Capture keys/infos before taking the mutable borrow on the goal.
    let goal_key = ctx.accounts.goal_account.key();
    let vault_ai = ctx.accounts.vault.to_account_info();
    let amount = vault_ai.lamports();

    let now = Clock::get()?.unix_timestamp;
    let goal = &mut ctx.accounts.goal_account;
    goal.complete(now)?;

    // Whole balance back to the owner, which closes the vault.
    let signer_seeds: &[&[&[u8]]] = &[&[VAULT_SEED, goal_key.as_ref(), &[goal.vault_bump]]];
    transfer_sol_signed(
        vault_ai,
        ctx.accounts.user.to_account_info(),
        ctx.accounts.system_program.to_account_info(),
        amount,
        signer_seeds,
    )?;

    msg!("Goal {} completed, {} lamports returned", goal_key, amount);
    emit!(StakeClaimed {
        user: goal.user,
        goal: goal_key,
        amount,
        now,
        deadline: goal.deadline,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct CompleteGoal<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        mut,
        seeds = [GOAL_SEED, user.key().as_ref(), goal_account.seed.to_le_bytes().as_ref()],
        bump = goal_account.bump,
    )]
    pub goal_account: Account<'info, GoalAccount>,

    #[account(
        mut,
        seeds = [VAULT_SEED, goal_account.key().as_ref()],
        bump = goal_account.vault_bump
    )]
    pub vault: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct StakeClaimed {
    pub user: Pubkey,
    pub goal: Pubkey,
    pub amount: u64,
    pub now: i64,
    pub deadline: i64,
}
