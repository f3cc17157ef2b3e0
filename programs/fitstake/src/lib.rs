use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

#[cfg(test)]
mod test_utils;

use instructions::*;

declare_id!("EEi741VXbkmZ7i6Yd79aaJSE4K3qUFUCJthLrdqNFmZ2");

#[program]
pub mod fitstake {
    use super::*;

    // ===== CONFIG =====

    /// Create the config PDA holding the protocol authority and fund the fee vault.
    /// Signed by the program's upgrade authority.
    pub fn initialize_config(ctx: Context<InitializeConfig>, authority: Pubkey) -> Result<()> {
        instructions::initialize_config::initialize_config(ctx, authority)
    }

    // ===== REGISTRATION (authority) =====

    pub fn init_user(
        ctx: Context<InitUser>,
        first_name: String,
        last_name: String,
        wallet: Pubkey,
        date_of_birth: i64,
        referral_code: Option<String>,
    ) -> Result<()> {
        instructions::init_user::init_user(
            ctx,
            first_name,
            last_name,
            wallet,
            date_of_birth,
            referral_code,
        )
    }

    pub fn init_referral(ctx: Context<InitReferral>, name: String, referral_code: String) -> Result<()> {
        instructions::init_referral::init_referral(ctx, name, referral_code)
    }

    pub fn init_charity(
        ctx: Context<InitCharity>,
        name: String,
        description: String,
        logo: String,
    ) -> Result<()> {
        instructions::init_charity::init_charity(ctx, name, description, logo)
    }

    // ===== GOALS =====

    /// Create a goal and move the stake into its vault. Signed by the owner.
    pub fn init_goal(
        ctx: Context<InitGoal>,
        seed: u64,
        stake_amount: u64,
        deadline: i64,
        charity: Pubkey,
        details: String,
    ) -> Result<()> {
        instructions::init_goal::init_goal(ctx, seed, stake_amount, deadline, charity, details)
    }

    /// Reclaim the full stake before the deadline. Signed by the owner.
    pub fn complete_goal(ctx: Context<CompleteGoal>) -> Result<()> {
        instructions::complete_goal::complete_goal(ctx)
    }

    /// Split an expired stake between the program vault and the charity. Signed by the authority.
    pub fn forfeit_goal(ctx: Context<ForfeitGoal>) -> Result<()> {
        instructions::forfeit_goal::forfeit_goal(ctx)
    }
}
