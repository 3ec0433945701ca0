// payroll/instructions/payroll/add_worker.rs

// external dependencies
use anchor_lang::prelude::*;

// local dependencies
use crate::{
    constants::ANCHOR_DISCRIMINATOR_SIZE,
    errors::PayrollError,
    events::WorkerAdded,
    state::{Organization, Worker, ORGANIZATION_SEED, WORKER_SEED},
};

#[derive(Accounts)]
pub struct AddWorker<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        mut,
        has_one = authority @ PayrollError::Unauthorized,
        seeds = [ORGANIZATION_SEED, org.authority.as_ref(), org.name.as_bytes()],
        bump = org.bump,
    )]
    pub org: Account<'info, Organization>,

    #[account(
        init,
        payer = authority,
        space = ANCHOR_DISCRIMINATOR_SIZE + Worker::INIT_SPACE,
        seeds = [WORKER_SEED, org.key().as_ref(), worker_pubkey.key().as_ref()],
        bump
    )]
    pub worker: Account<'info, Worker>,

    /// CHECK: payee identity only, it never signs and holds no program data.
    /// Paying the organization back to itself would leave the treasury field
    /// out of step with the account balance, so that key is refused.
    #[account(
        constraint = worker_pubkey.key() != org.key() @ PayrollError::InvalidWorkerWallet,
    )]
    pub worker_pubkey: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<AddWorker>, salary: u64) -> Result<()> {
    require!(salary > 0, PayrollError::InvalidSalary);

    let workers_count = ctx.accounts.org.register_worker()?;

    ctx.accounts.worker.set_inner(Worker {
        org: ctx.accounts.org.key(),
        worker_pubkey: ctx.accounts.worker_pubkey.key(),
        salary,
        last_paid_cycle: 0,
        created_at: Clock::get()?.unix_timestamp,
        bump: ctx.bumps.worker,
    });

    msg!(
        "Worker {} added to '{}' with salary {} lamports",
        ctx.accounts.worker_pubkey.key(),
        ctx.accounts.org.name,
        salary
    );

    emit!(WorkerAdded {
        org: ctx.accounts.org.key(),
        worker: ctx.accounts.worker.key(),
        worker_pubkey: ctx.accounts.worker_pubkey.key(),
        salary,
        workers_count,
    });

    Ok(())
}
