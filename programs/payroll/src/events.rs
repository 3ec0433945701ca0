// payroll/events.rs

use anchor_lang::prelude::*;

#[event]
pub struct OrganizationCreated {
    pub org: Pubkey,
    pub authority: Pubkey,
    pub name: String,
    pub ts: i64,
}

#[event]
pub struct WorkerAdded {
    pub org: Pubkey,
    pub worker: Pubkey,
    pub worker_pubkey: Pubkey,
    pub salary: u64,
    pub workers_count: u64,
}

#[event]
pub struct TreasuryFunded {
    pub org: Pubkey,
    pub amount: u64,
    pub treasury: u64,
}

#[event]
pub struct TreasuryWithdrawn {
    pub org: Pubkey,
    pub amount: u64,
    pub treasury: u64,
}

#[event]
pub struct PayrollProcessed {
    pub org: Pubkey,
    pub cycle_timestamp: u64,
    pub workers_paid: u64,
    pub total_paid: u64,
    pub treasury: u64,
}
