//! Off-chain account fixtures. Account validation runs on the host through
//! `Accounts::try_accounts`; handlers that CPI do not.

use std::collections::BTreeSet;

use anchor_lang::prelude::*;
use anchor_lang::Bumps;

use crate::state::{CharityAccount, GoalAccount, GoalStatus, ProtocolConfig};
use crate::utils::seeds;

pub const STAKE: u64 = 10_000_000;
pub const DEADLINE: i64 = 1_760_000_000;

fn account_info(
    key: Pubkey,
    is_signer: bool,
    lamports: u64,
    data: Vec<u8>,
    owner: Pubkey,
    executable: bool,
) -> AccountInfo<'static> {
    AccountInfo::new(
        Box::leak(Box::new(key)),
        is_signer,
        true,
        Box::leak(Box::new(lamports)),
        Box::leak(data.into_boxed_slice()),
        Box::leak(Box::new(owner)),
        executable,
        0,
    )
}

/// Program-owned record holding `value`.
pub fn program_account<T: AccountSerialize>(key: Pubkey, value: &T) -> AccountInfo<'static> {
    let mut data = Vec::new();
    value.try_serialize(&mut data).unwrap();
    account_info(key, false, 1_000_000, data, crate::ID, false)
}

/// Data-less system account; a vault or an uninitialized address.
pub fn system_account(key: Pubkey, lamports: u64) -> AccountInfo<'static> {
    account_info(key, false, lamports, Vec::new(), anchor_lang::system_program::ID, false)
}

pub fn signer(key: Pubkey, lamports: u64) -> AccountInfo<'static> {
    account_info(key, true, lamports, Vec::new(), anchor_lang::system_program::ID, false)
}

pub fn system_program() -> AccountInfo<'static> {
    account_info(
        anchor_lang::system_program::ID,
        false,
        1,
        Vec::new(),
        Pubkey::default(),
        true,
    )
}

pub fn config(authority: Pubkey) -> AccountInfo<'static> {
    let (key, bump) = seeds::config_address();
    program_account(
        key,
        &ProtocolConfig {
            authority,
            bump,
            program_vault_bump: seeds::program_vault_address().1,
        },
    )
}

pub fn charity(name: &str) -> (Pubkey, CharityAccount) {
    let (key, bump) = seeds::charity_address(name);
    let record = CharityAccount {
        name: name.to_string(),
        description: "Clean water for schools".to_string(),
        logo: "logo.png".to_string(),
        bump,
        vault_bump: seeds::charity_vault_address(name).1,
    };
    (key, record)
}

pub fn goal(user: Pubkey, seed: u64, charity: Pubkey) -> (Pubkey, GoalAccount) {
    let (key, bump) = seeds::goal_address(&user, seed);
    let record = GoalAccount {
        user,
        seed,
        stake_amount: STAKE,
        deadline: DEADLINE,
        status: GoalStatus::Incomplete,
        charity,
        details: "Run 5km every day".to_string(),
        bump,
        vault_bump: seeds::goal_vault_address(&key).1,
    };
    (key, record)
}

/// Host stand-in for the rent sysvar, which `init` constraints read before
/// their seeds checks.
struct RentStub;

impl solana_sysvar::program_stubs::SyscallStubs for RentStub {
    fn sol_get_rent_sysvar(&self, var_addr: *mut u8) -> u64 {
        unsafe { *(var_addr as *mut Rent) = Rent::default() };
        0
    }
}

/// Runs account deserialization and constraint checks for `T`.
pub fn validate<T>(accounts: &[AccountInfo<'static>], ix_data: &[u8]) -> Result<T>
where
    T: Accounts<'static, <T as Bumps>::Bumps> + Bumps,
    <T as Bumps>::Bumps: Default,
{
    solana_sysvar::program_stubs::set_syscall_stubs(Box::new(RentStub));
    let mut infos: &'static [AccountInfo<'static>] =
        Box::leak(accounts.to_vec().into_boxed_slice());
    T::try_accounts(
        &crate::ID,
        &mut infos,
        ix_data,
        &mut Default::default(),
        &mut BTreeSet::new(),
    )
}

/// Error code a rejected validation maps to on-chain.
pub fn error_code<T>(result: Result<T>) -> u32 {
    match result {
        Ok(_) => panic!("accounts were accepted"),
        Err(err) => match ProgramError::from(err) {
            ProgramError::Custom(code) => code,
            other => panic!("unexpected program error: {other:?}"),
        },
    }
}
