// payroll/state/worker.rs

use anchor_lang::prelude::*;

#[constant]
pub const WORKER_SEED: &[u8] = b"worker";

#[account]
#[derive(InitSpace)]
pub struct Worker {
    pub org: Pubkey,           // back-reference to the owning organization
    pub worker_pubkey: Pubkey, // payee of every payroll cycle
    pub salary: u64,           // lamports per cycle
    pub last_paid_cycle: u64,  // 0 until the first payroll
    pub created_at: i64,
    pub bump: u8,
}

impl Worker {
    pub fn derive_address(org: &Pubkey, worker_pubkey: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[WORKER_SEED, org.as_ref(), worker_pubkey.as_ref()],
            &crate::ID,
        )
    }

    /// Recomputes the address from the stored fields and bump. Returns false
    /// when the bump does not produce a valid off-curve address.
    pub fn is_address(&self, address: &Pubkey) -> bool {
        match Pubkey::create_program_address(
            &[
                WORKER_SEED,
                self.org.as_ref(),
                self.worker_pubkey.as_ref(),
                &[self.bump],
            ],
            &crate::ID,
        ) {
            Ok(computed) => computed == *address,
            Err(_) => false,
        }
    }
}
