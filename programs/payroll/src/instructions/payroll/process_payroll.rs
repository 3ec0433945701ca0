// payroll/instructions/payroll/process_payroll.rs

// external dependencies
use anchor_lang::prelude::*;
use std::collections::BTreeSet;

// local dependencies
use crate::{
    errors::PayrollError,
    events::PayrollProcessed,
    state::{Organization, Worker, ORGANIZATION_SEED},
    utils::{lamports::transfer_from_program_account, payroll::plan_payroll},
};

#[derive(Accounts)]
pub struct ProcessPayroll<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        mut,
        has_one = authority @ PayrollError::Unauthorized,
        seeds = [ORGANIZATION_SEED, org.authority.as_ref(), org.name.as_bytes()],
        bump = org.bump,
    )]
    pub org: Account<'info, Organization>,
    // remaining accounts come in pairs: [worker, payee, worker, payee, ...]
}

struct StagedPayment<'a, 'info> {
    worker_info: &'a AccountInfo<'info>,
    payee_info: &'a AccountInfo<'info>,
    worker: Worker,
}

pub fn handler<'info>(
    ctx: Context<'_, '_, 'info, 'info, ProcessPayroll<'info>>,
    cycle_timestamp: u64,
) -> Result<()> {
    let remaining_accounts = ctx.remaining_accounts;

    require!(
        !remaining_accounts.is_empty() && remaining_accounts.len() % 2 == 0,
        PayrollError::MissingWorkerAccount
    );

    let org_key = ctx.accounts.org.key();

    // Stage: validate every pair before any account is written
    let mut seen = BTreeSet::new();
    let mut staged = Vec::with_capacity(remaining_accounts.len() / 2);

    for pair in remaining_accounts.chunks_exact(2) {
        let (worker_info, payee_info) = (&pair[0], &pair[1]);

        let worker = load_worker(worker_info, &org_key)?;

        require_keys_eq!(
            payee_info.key(),
            worker.worker_pubkey,
            PayrollError::InvalidWorkerWallet
        );
        require!(
            seen.insert(worker_info.key()),
            PayrollError::DuplicateWorkerAccount
        );
        require!(
            worker_info.is_writable && payee_info.is_writable,
            ErrorCode::ConstraintMut
        );

        staged.push(StagedPayment {
            worker_info,
            payee_info,
            worker,
        });
    }

    let plan = plan_payroll(
        ctx.accounts.org.treasury,
        staged.iter().map(|payment| payment.worker.salary),
    )?;

    // Commit: the whole batch is covered, pay everyone in the supplied order
    let org_info = ctx.accounts.org.to_account_info();

    for payment in staged.iter_mut() {
        payment.worker.last_paid_cycle = cycle_timestamp;

        {
            let mut data = payment.worker_info.try_borrow_mut_data()?;
            payment.worker.try_serialize(&mut &mut data[..])?;
        }

        transfer_from_program_account(&org_info, payment.payee_info, payment.worker.salary)?;
        ctx.accounts.org.debit_treasury(payment.worker.salary)?;
    }

    msg!(
        "Payroll processed for org '{}': {} lamports paid to {} workers",
        ctx.accounts.org.name,
        plan.total_due,
        plan.workers
    );

    emit!(PayrollProcessed {
        org: org_key,
        cycle_timestamp,
        workers_paid: plan.workers,
        total_paid: plan.total_due,
        treasury: ctx.accounts.org.treasury,
    });

    Ok(())
}

// A worker account is accepted only if this program owns it, it decodes as a
// Worker of this organization and its address re-derives from its own fields.
fn load_worker(worker_info: &AccountInfo, org: &Pubkey) -> Result<Worker> {
    require_keys_eq!(
        *worker_info.owner,
        crate::ID,
        PayrollError::InvalidWorkerPda
    );

    let worker = {
        let mut data: &[u8] = &worker_info.try_borrow_data()?;
        Worker::try_deserialize(&mut data).map_err(|_| error!(PayrollError::InvalidWorkerPda))?
    };

    require_keys_eq!(worker.org, *org, PayrollError::InvalidWorkerPda);
    require!(
        worker.is_address(worker_info.key),
        PayrollError::InvalidWorkerPda
    );

    Ok(worker)
}
