// payroll/utils/payroll.rs

use anchor_lang::prelude::*;

use crate::errors::PayrollError;

/// Outcome of checking one payroll batch against the treasury. Produced before
/// any account is touched so a rejected batch leaves no trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayrollPlan {
    pub workers: u64,
    pub total_due: u64,
    pub remaining_treasury: u64,
}

/// Sums the salaries of every worker in the batch and checks the total against
/// the treasury. Each worker is paid in full; deciding who is due is left to
/// the caller. A sum that overflows can never be covered and is reported as
/// insufficient funds.
pub fn plan_payroll<I>(treasury: u64, salaries: I) -> Result<PayrollPlan>
where
    I: IntoIterator<Item = u64>,
{
    let mut workers: u64 = 0;
    let mut total_due: u64 = 0;

    for salary in salaries {
        total_due = total_due
            .checked_add(salary)
            .ok_or(PayrollError::InsufficientFunds)?;
        workers += 1;
    }

    require!(workers > 0, PayrollError::MissingWorkerAccount);
    require!(total_due <= treasury, PayrollError::InsufficientFunds);

    Ok(PayrollPlan {
        workers,
        total_due,
        remaining_treasury: treasury - total_due,
    })
}
