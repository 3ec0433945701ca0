// payroll/instructions/organization/withdraw_from_treasury.rs

// external dependencies
use anchor_lang::prelude::*;

// local dependencies
use crate::{
    errors::PayrollError,
    events::TreasuryWithdrawn,
    state::{Organization, ORGANIZATION_SEED},
    utils::lamports::transfer_from_program_account,
};

#[derive(Accounts)]
pub struct WithdrawFromTreasury<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        mut,
        has_one = authority @ PayrollError::Unauthorized,
        seeds = [ORGANIZATION_SEED, org.authority.as_ref(), org.name.as_bytes()],
        bump = org.bump,
    )]
    pub org: Account<'info, Organization>,
}

pub fn handler(ctx: Context<WithdrawFromTreasury>, amount: u64) -> Result<()> {
    require!(amount > 0, PayrollError::InvalidAmount);
    require!(
        amount <= ctx.accounts.org.treasury,
        PayrollError::InsufficientFunds
    );

    transfer_from_program_account(
        &ctx.accounts.org.to_account_info(),
        &ctx.accounts.authority.to_account_info(),
        amount,
    )?;

    let treasury = ctx.accounts.org.debit_treasury(amount)?;

    msg!("Withdrawn {} lamports from treasury, balance {}", amount, treasury);

    emit!(TreasuryWithdrawn {
        org: ctx.accounts.org.key(),
        amount,
        treasury,
    });

    Ok(())
}
