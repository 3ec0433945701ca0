// payroll_indexer/config.rs

use anchor_lang::prelude::Pubkey;
use payroll_client::schedule::PayCycle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexerConfig {
    /// Accounts owned by any other program are ignored.
    pub program_id: Pubkey,
    /// Cycle used by due checks when the caller does not pick one.
    pub pay_cycle: PayCycle,
}

impl Default for IndexerConfig {
    fn default() -> Self {
        Self {
            program_id: payroll::ID,
            pay_cycle: PayCycle::default(),
        }
    }
}
