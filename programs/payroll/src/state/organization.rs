// payroll/state/organization.rs

use anchor_lang::prelude::*;

use crate::{constants::MAX_NAME_LEN, errors::PayrollError};

#[constant]
pub const ORGANIZATION_SEED: &[u8] = b"org";

#[account]
#[derive(InitSpace)]
pub struct Organization {
    pub authority: Pubkey, // only signer allowed to mutate the org or its workers
    #[max_len(32)]
    pub name: String,
    pub treasury: u64,      // spendable lamports, mirrors the account balance above rent
    pub workers_count: u64, // incremented on every add_worker, never decremented
    pub created_at: i64,
    pub bump: u8,
}

impl Organization {
    pub fn derive_address(authority: &Pubkey, name: &str) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[ORGANIZATION_SEED, authority.as_ref(), name.as_bytes()],
            &crate::ID,
        )
    }

    /// Rejects names that are empty, blank, too long to be a seed, or that
    /// carry control characters.
    pub fn validate_name(name: &str) -> Result<()> {
        if name.is_empty() || name.len() > MAX_NAME_LEN {
            return err!(PayrollError::InvalidName);
        }

        if name.trim().is_empty() || name.chars().any(char::is_control) {
            return err!(PayrollError::InvalidName);
        }

        Ok(())
    }

    pub fn credit_treasury(&mut self, amount: u64) -> Result<u64> {
        self.treasury = self
            .treasury
            .checked_add(amount)
            .ok_or(PayrollError::InvalidAmount)?;
        Ok(self.treasury)
    }

    pub fn debit_treasury(&mut self, amount: u64) -> Result<u64> {
        self.treasury = self
            .treasury
            .checked_sub(amount)
            .ok_or(PayrollError::InsufficientFunds)?;
        Ok(self.treasury)
    }

    pub fn register_worker(&mut self) -> Result<u64> {
        self.workers_count = self
            .workers_count
            .checked_add(1)
            .ok_or(PayrollError::InvalidAmount)?;
        Ok(self.workers_count)
    }
}
