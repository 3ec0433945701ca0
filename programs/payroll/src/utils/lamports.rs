// payroll/utils/lamports.rs

// external dependencies
use anchor_lang::prelude::*;

// local dependencies
use crate::errors::PayrollError;

// Moves lamports out of an account owned by this program. The system program
// cannot debit accounts that carry data, so the balances are edited directly.
pub fn transfer_from_program_account<'info>(
    from: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    {
        let mut from_lamports = from.try_borrow_mut_lamports()?;
        **from_lamports = (**from_lamports)
            .checked_sub(amount)
            .ok_or(PayrollError::InsufficientFunds)?;
    }

    let mut to_lamports = to.try_borrow_mut_lamports()?;
    **to_lamports = (**to_lamports)
        .checked_add(amount)
        .ok_or(PayrollError::InvalidAmount)?;

    Ok(())
}
