// payroll_indexer/summary.rs

use anchor_lang::prelude::Pubkey;
use payroll_client::units::lamports_to_sol;

use crate::{error::IndexerError, store::PayrollIndex};

/// Display view of a worker. Amounts in SOL.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkerSummary {
    pub address: Pubkey,
    pub worker_pubkey: Pubkey,
    pub salary_sol: f64,
    pub last_paid_cycle: u64,
    pub created_at: i64,
    pub next_payroll: u64,
    pub due: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrganizationSummary {
    pub address: Pubkey,
    pub authority: Pubkey,
    pub name: String,
    pub treasury_sol: f64,
    pub workers_count: u64,
    pub created_at: i64,
    pub total_payroll_sol: f64,
    pub workers: Vec<WorkerSummary>,
}

impl PayrollIndex {
    pub fn summary(&self, org: &Pubkey, now: u64) -> Result<OrganizationSummary, IndexerError> {
        let organization = self.organization(org)?;
        let cycle = self.config().pay_cycle;

        let workers = self
            .workers_by_org(org)
            .into_iter()
            .map(|(address, worker)| WorkerSummary {
                address,
                worker_pubkey: worker.worker_pubkey,
                salary_sol: lamports_to_sol(worker.salary),
                last_paid_cycle: worker.last_paid_cycle,
                created_at: worker.created_at,
                next_payroll: cycle.next_payroll(worker.last_paid_cycle),
                due: cycle.is_due(worker.last_paid_cycle, now),
            })
            .collect();

        Ok(OrganizationSummary {
            address: *org,
            authority: organization.authority,
            name: organization.name.clone(),
            treasury_sol: lamports_to_sol(organization.treasury),
            workers_count: organization.workers_count,
            created_at: organization.created_at,
            total_payroll_sol: lamports_to_sol(self.total_payroll_cost(org)?),
            workers,
        })
    }
}
