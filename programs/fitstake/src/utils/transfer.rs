use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};

/// Move lamports out of a signing wallet.
pub fn transfer_sol<'info>(
    from: AccountInfo<'info>,
    to: AccountInfo<'info>,
    system_program: AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    let cpi_ctx = CpiContext::new(system_program, Transfer { from, to });
    system_program::transfer(cpi_ctx, amount)
}

/// Move lamports out of a data-less vault PDA, signed with its seeds.
/// Draining the vault to zero closes it.
pub fn transfer_sol_signed<'info>(
    from: AccountInfo<'info>,
    to: AccountInfo<'info>,
    system_program: AccountInfo<'info>,
    amount: u64,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    let cpi_ctx = CpiContext::new_with_signer(system_program, Transfer { from, to }, signer_seeds);
    system_program::transfer(cpi_ctx, amount)
}

/// Fund a system-owned PDA up to the rent-exempt floor so it exists on-chain.
/// No-op if it already holds at least that much.
pub fn top_up_to_rent_minimum<'info>(
    payer: AccountInfo<'info>,
    vault: AccountInfo<'info>,
    system_program: AccountInfo<'info>,
) -> Result<u64> {
    let floor = Rent::get()?.minimum_balance(0);
    let missing = floor.saturating_sub(vault.lamports());
    if missing > 0 {
        transfer_sol(payer, vault, system_program, missing)?;
    }
    Ok(missing)
}
