// payroll/lib.rs - top-level program file

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

use anchor_lang::prelude::*;

use instructions::*;

#[cfg(not(feature = "no-entrypoint"))]
use solana_security_txt::security_txt;

declare_id!("A9fnM3skS5kbECt2isFV2EGvS4D7hnsMjnqi2YBwaeed");

#[cfg(not(feature = "no-entrypoint"))]
security_txt! {
    name: "Payroll",
    project_url: "https://github.com/payroll-program/payroll",
    contacts: "email:security@payroll-program.dev",
    policy: "https://github.com/payroll-program/payroll/blob/main/SECURITY.md"
}

#[program]
pub mod payroll {
    use super::*;

    // Organization instructions

    pub fn create_organization(ctx: Context<CreateOrganization>, name: String) -> Result<()> {
        instructions::organization::create_organization::handler(ctx, name)
    }

    pub fn fund_treasury(ctx: Context<FundTreasury>, amount: u64) -> Result<()> {
        instructions::organization::fund_treasury::handler(ctx, amount)
    }

    pub fn withdraw_from_treasury(ctx: Context<WithdrawFromTreasury>, amount: u64) -> Result<()> {
        instructions::organization::withdraw_from_treasury::handler(ctx, amount)
    }

    // Payroll instructions

    pub fn add_worker(ctx: Context<AddWorker>, salary: u64) -> Result<()> {
        instructions::payroll::add_worker::handler(ctx, salary)
    }

    pub fn process_payroll<'info>(
        ctx: Context<'_, '_, 'info, 'info, ProcessPayroll<'info>>,
        cycle_timestamp: u64,
    ) -> Result<()> {
        instructions::payroll::process_payroll::handler(ctx, cycle_timestamp)
    }
}
