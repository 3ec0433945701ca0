// payroll/instructions/organization/fund_treasury.rs

// external dependencies
use anchor_lang::{
    prelude::*,
    system_program::{self, Transfer},
};

// local dependencies
use crate::{
    errors::PayrollError,
    events::TreasuryFunded,
    state::{Organization, ORGANIZATION_SEED},
};

#[derive(Accounts)]
pub struct FundTreasury<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        mut,
        has_one = authority @ PayrollError::Unauthorized,
        seeds = [ORGANIZATION_SEED, org.authority.as_ref(), org.name.as_bytes()],
        bump = org.bump,
    )]
    pub org: Account<'info, Organization>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<FundTreasury>, amount: u64) -> Result<()> {
    require!(amount > 0, PayrollError::InvalidAmount);

    // The authority pays from its own balance, so the runtime rejects the
    // transfer when that balance is too low
    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            Transfer {
                from: ctx.accounts.authority.to_account_info(),
                to: ctx.accounts.org.to_account_info(),
            },
        ),
        amount,
    )?;

    let treasury = ctx.accounts.org.credit_treasury(amount)?;

    msg!("Funded treasury with {} lamports, balance {}", amount, treasury);

    emit!(TreasuryFunded {
        org: ctx.accounts.org.key(),
        amount,
        treasury,
    });

    Ok(())
}
