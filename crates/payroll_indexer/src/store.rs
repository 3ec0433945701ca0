// payroll_indexer/store.rs

use std::collections::{BTreeMap, BTreeSet};

use anchor_lang::{prelude::Pubkey, AccountDeserialize, Discriminator};
use log::{debug, warn};
use payroll::state::{Organization, Worker};
use payroll_client::schedule::PayCycle;

use crate::{config::IndexerConfig, error::IndexerError};

const DISCRIMINATOR_SIZE: usize = 8;

pub enum ProgramAccount {
    Organization(Organization),
    Worker(Worker),
}

/// Dispatches on the account discriminator. Anything that is neither an
/// Organization nor a Worker is a decode error.
pub fn decode_account(address: &Pubkey, data: &[u8]) -> Result<ProgramAccount, IndexerError> {
    let decode_error = |reason: String| IndexerError::Decode {
        address: *address,
        reason,
    };

    if data.len() < DISCRIMINATOR_SIZE {
        return Err(decode_error(format!("{} bytes of data", data.len())));
    }

    let discriminator = &data[..DISCRIMINATOR_SIZE];
    let mut buffer = data;

    if discriminator == Organization::DISCRIMINATOR {
        return Organization::try_deserialize(&mut buffer)
            .map(ProgramAccount::Organization)
            .map_err(|e| decode_error(e.to_string()));
    }
    if discriminator == Worker::DISCRIMINATOR {
        return Worker::try_deserialize(&mut buffer)
            .map(ProgramAccount::Worker)
            .map_err(|e| decode_error(e.to_string()));
    }

    Err(decode_error("unknown discriminator".to_string()))
}

/// Workers of one organization that are due under a pay cycle.
pub struct PayrollDue<'a> {
    pub due: bool,
    pub workers: Vec<(Pubkey, &'a Worker)>,
}

/// Organizations and workers keyed by address, with secondary indexes for
/// the lookups callers make: by authority, by organization, by payee.
#[derive(Default)]
pub struct PayrollIndex {
    config: IndexerConfig,
    organizations: BTreeMap<Pubkey, Organization>,
    workers: BTreeMap<Pubkey, Worker>,
    organizations_by_authority: BTreeMap<Pubkey, BTreeSet<Pubkey>>,
    workers_by_org: BTreeMap<Pubkey, BTreeSet<Pubkey>>,
    workers_by_wallet: BTreeMap<Pubkey, BTreeSet<Pubkey>>,
}

impl PayrollIndex {
    pub fn new(config: IndexerConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &IndexerConfig {
        &self.config
    }

    /// Feeds one account snapshot into the index. Returns `Ok(false)` for
    /// accounts owned by another program. A later snapshot of the same address
    /// replaces the earlier one.
    pub fn ingest(
        &mut self,
        address: Pubkey,
        owner: &Pubkey,
        data: &[u8],
    ) -> Result<bool, IndexerError> {
        if *owner != self.config.program_id {
            debug!("skipping {address}: owned by {owner}");
            return Ok(false);
        }

        match decode_account(&address, data) {
            Ok(ProgramAccount::Organization(org)) => self.upsert_organization(address, org),
            Ok(ProgramAccount::Worker(worker)) => self.upsert_worker(address, worker),
            Err(e) => {
                warn!("{e}");
                return Err(e);
            }
        }

        Ok(true)
    }

    pub fn upsert_organization(&mut self, address: Pubkey, org: Organization) {
        if let Some(previous) = self.organizations.get(&address) {
            remove_from(&mut self.organizations_by_authority, &previous.authority, &address);
        }

        self.organizations_by_authority
            .entry(org.authority)
            .or_default()
            .insert(address);
        self.organizations.insert(address, org);
    }

    pub fn upsert_worker(&mut self, address: Pubkey, worker: Worker) {
        if let Some(previous) = self.workers.get(&address) {
            remove_from(&mut self.workers_by_org, &previous.org, &address);
            remove_from(&mut self.workers_by_wallet, &previous.worker_pubkey, &address);
        }

        self.workers_by_org.entry(worker.org).or_default().insert(address);
        self.workers_by_wallet
            .entry(worker.worker_pubkey)
            .or_default()
            .insert(address);
        self.workers.insert(address, worker);
    }

    // Point lookups

    pub fn organization(&self, address: &Pubkey) -> Result<&Organization, IndexerError> {
        self.organizations.get(address).ok_or(IndexerError::NotFound {
            kind: "organization",
            address: *address,
        })
    }

    pub fn worker(&self, address: &Pubkey) -> Result<&Worker, IndexerError> {
        self.workers.get(address).ok_or(IndexerError::NotFound {
            kind: "worker",
            address: *address,
        })
    }

    // Listings, ordered by address

    pub fn organizations(&self) -> Vec<(Pubkey, &Organization)> {
        self.organizations.iter().map(|(k, v)| (*k, v)).collect()
    }

    pub fn organizations_by_authority(&self, authority: &Pubkey) -> Vec<(Pubkey, &Organization)> {
        lookup(&self.organizations_by_authority, authority, &self.organizations)
    }

    pub fn workers(&self) -> Vec<(Pubkey, &Worker)> {
        self.workers.iter().map(|(k, v)| (*k, v)).collect()
    }

    pub fn workers_by_org(&self, org: &Pubkey) -> Vec<(Pubkey, &Worker)> {
        lookup(&self.workers_by_org, org, &self.workers)
    }

    pub fn workers_by_wallet(&self, wallet: &Pubkey) -> Vec<(Pubkey, &Worker)> {
        lookup(&self.workers_by_wallet, wallet, &self.workers)
    }

    // Derived reads

    pub fn treasury_balance(&self, org: &Pubkey) -> Result<u64, IndexerError> {
        Ok(self.organization(org)?.treasury)
    }

    /// Sum of all salaries, i.e. what one payroll run over the whole roster costs.
    pub fn total_payroll_cost(&self, org: &Pubkey) -> Result<u64, IndexerError> {
        self.organization(org)?;

        self.workers_by_org(org)
            .iter()
            .try_fold(0u64, |total, (_, worker)| total.checked_add(worker.salary))
            .ok_or(IndexerError::Overflow { org: *org })
    }

    pub fn payroll_due(&self, org: &Pubkey, now: u64) -> Result<PayrollDue<'_>, IndexerError> {
        self.payroll_due_with(org, now, self.config.pay_cycle)
    }

    /// Advisory only: the program pays whoever is included in a batch.
    pub fn payroll_due_with(
        &self,
        org: &Pubkey,
        now: u64,
        cycle: PayCycle,
    ) -> Result<PayrollDue<'_>, IndexerError> {
        self.organization(org)?;

        let workers: Vec<_> = self
            .workers_by_org(org)
            .into_iter()
            .filter(|(_, worker)| cycle.is_due(worker.last_paid_cycle, now))
            .collect();

        Ok(PayrollDue {
            due: !workers.is_empty(),
            workers,
        })
    }

    pub fn next_payroll(&self, worker: &Pubkey) -> Result<u64, IndexerError> {
        Ok(self.config.pay_cycle.next_payroll(self.worker(worker)?.last_paid_cycle))
    }

    /// `(worker account, payee)` pairs for a process_payroll instruction,
    /// either the whole roster or only the workers due at `now`.
    pub fn payroll_batch(
        &self,
        org: &Pubkey,
        now: u64,
        due_only: bool,
    ) -> Result<Vec<(Pubkey, Pubkey)>, IndexerError> {
        let workers = if due_only {
            self.payroll_due(org, now)?.workers
        } else {
            self.organization(org)?;
            self.workers_by_org(org)
        };

        Ok(workers
            .into_iter()
            .map(|(address, worker)| (address, worker.worker_pubkey))
            .collect())
    }
}

fn lookup<'a, T>(
    index: &BTreeMap<Pubkey, BTreeSet<Pubkey>>,
    key: &Pubkey,
    records: &'a BTreeMap<Pubkey, T>,
) -> Vec<(Pubkey, &'a T)> {
    index
        .get(key)
        .into_iter()
        .flatten()
        .filter_map(|address| records.get(address).map(|record| (*address, record)))
        .collect()
}

fn remove_from(index: &mut BTreeMap<Pubkey, BTreeSet<Pubkey>>, key: &Pubkey, address: &Pubkey) {
    if let Some(addresses) = index.get_mut(key) {
        addresses.remove(address);
        if addresses.is_empty() {
            index.remove(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::AccountSerialize;

    const NOW: u64 = 1_760_000_000;
    const DAY: u64 = 86_400;

    fn org_account(authority: Pubkey, name: &str, treasury: u64) -> (Pubkey, Vec<u8>) {
        let (address, bump) = Organization::derive_address(&authority, name);
        let org = Organization {
            authority,
            name: name.to_string(),
            treasury,
            workers_count: 0,
            created_at: NOW as i64,
            bump,
        };
        let mut data = Vec::new();
        org.try_serialize(&mut data).unwrap();
        (address, data)
    }

    fn worker_account(
        org: Pubkey,
        wallet: Pubkey,
        salary: u64,
        last_paid_cycle: u64,
    ) -> (Pubkey, Vec<u8>) {
        let (address, bump) = Worker::derive_address(&org, &wallet);
        let worker = Worker {
            org,
            worker_pubkey: wallet,
            salary,
            last_paid_cycle,
            created_at: NOW as i64,
            bump,
        };
        let mut data = Vec::new();
        worker.try_serialize(&mut data).unwrap();
        (address, data)
    }

    fn ingest(index: &mut PayrollIndex, (address, data): (Pubkey, Vec<u8>)) -> Pubkey {
        assert!(index.ingest(address, &payroll::ID, &data).unwrap());
        address
    }

    #[test]
    fn lists_every_organization_once() {
        let mut index = PayrollIndex::default();
        let authorities = [Pubkey::new_unique(), Pubkey::new_unique(), Pubkey::new_unique()];

        for (i, authority) in authorities.iter().enumerate() {
            ingest(&mut index, org_account(*authority, "Acme", i as u64));
        }
        // the same snapshot seen twice
        ingest(&mut index, org_account(authorities[0], "Acme", 0));

        let all = index.organizations();
        assert_eq!(all.len(), 3);
        let unique: BTreeSet<_> = all.iter().map(|(address, _)| *address).collect();
        assert_eq!(unique.len(), 3);
    }

    #[test]
    fn filters_organizations_by_authority() {
        let mut index = PayrollIndex::default();
        let (alice, bob) = (Pubkey::new_unique(), Pubkey::new_unique());
        ingest(&mut index, org_account(alice, "Acme", 0));
        ingest(&mut index, org_account(alice, "Globex", 0));
        ingest(&mut index, org_account(bob, "Initech", 0));

        let names: BTreeSet<_> = index
            .organizations_by_authority(&alice)
            .into_iter()
            .map(|(_, org)| org.name.clone())
            .collect();
        assert_eq!(names, BTreeSet::from(["Acme".to_string(), "Globex".to_string()]));
        assert!(index.organizations_by_authority(&Pubkey::new_unique()).is_empty());
    }

    #[test]
    fn filters_workers_by_org_and_wallet() {
        let mut index = PayrollIndex::default();
        let org_a = ingest(&mut index, org_account(Pubkey::new_unique(), "Acme", 0));
        let org_b = ingest(&mut index, org_account(Pubkey::new_unique(), "Globex", 0));
        let wallet = Pubkey::new_unique();

        ingest(&mut index, worker_account(org_a, wallet, 1, 0));
        ingest(&mut index, worker_account(org_b, wallet, 2, 0));
        ingest(&mut index, worker_account(org_a, Pubkey::new_unique(), 3, 0));

        assert_eq!(index.workers().len(), 3);
        assert_eq!(index.workers_by_org(&org_a).len(), 2);
        assert_eq!(index.workers_by_org(&org_b).len(), 1);

        let mine = index.workers_by_wallet(&wallet);
        assert_eq!(mine.len(), 2);
        assert!(mine.iter().all(|(_, worker)| worker.worker_pubkey == wallet));
    }

    #[test]
    fn point_lookups_report_missing_accounts() {
        let mut index = PayrollIndex::default();
        let org = ingest(&mut index, org_account(Pubkey::new_unique(), "Acme", 7));
        let missing = Pubkey::new_unique();

        assert_eq!(index.organization(&org).unwrap().treasury, 7);
        assert_eq!(
            index.organization(&missing).err(),
            Some(IndexerError::NotFound {
                kind: "organization",
                address: missing
            })
        );
        assert!(index.worker(&org).is_err());
    }

    #[test]
    fn ignores_accounts_of_other_programs() {
        let mut index = PayrollIndex::default();
        let (address, data) = org_account(Pubkey::new_unique(), "Acme", 0);

        assert!(!index.ingest(address, &Pubkey::new_unique(), &data).unwrap());
        assert!(index.organizations().is_empty());
    }

    #[test]
    fn rejects_data_without_a_known_discriminator() {
        let mut index = PayrollIndex::default();
        let address = Pubkey::new_unique();

        assert!(index.ingest(address, &payroll::ID, &[1, 2, 3]).is_err());
        assert!(index.ingest(address, &payroll::ID, &[0u8; 64]).is_err());
        assert!(index.workers().is_empty());
    }

    #[test]
    fn newer_snapshot_replaces_the_older_one() {
        let mut index = PayrollIndex::default();
        let org = ingest(&mut index, org_account(Pubkey::new_unique(), "Acme", 0));
        let wallet = Pubkey::new_unique();

        let worker = ingest(&mut index, worker_account(org, wallet, 5, 0));
        ingest(&mut index, worker_account(org, wallet, 5, NOW));

        assert_eq!(index.worker(&worker).unwrap().last_paid_cycle, NOW);
        assert_eq!(index.workers_by_org(&org).len(), 1);
    }

    #[test]
    fn derived_reads() {
        let mut index = PayrollIndex::default();
        let org = ingest(&mut index, org_account(Pubkey::new_unique(), "Acme", 10_000_000_000));
        ingest(&mut index, worker_account(org, Pubkey::new_unique(), 1_000_000_000, 0));
        ingest(&mut index, worker_account(org, Pubkey::new_unique(), 1_500_000_000, 0));

        assert_eq!(index.treasury_balance(&org), Ok(10_000_000_000));
        assert_eq!(index.total_payroll_cost(&org), Ok(2_500_000_000));
        assert!(index.total_payroll_cost(&Pubkey::new_unique()).is_err());
    }

    #[test]
    fn payroll_cost_overflow_is_reported() {
        let mut index = PayrollIndex::default();
        let org = ingest(&mut index, org_account(Pubkey::new_unique(), "Acme", 0));
        ingest(&mut index, worker_account(org, Pubkey::new_unique(), u64::MAX, 0));
        ingest(&mut index, worker_account(org, Pubkey::new_unique(), 1, 0));

        assert_eq!(index.total_payroll_cost(&org), Err(IndexerError::Overflow { org }));
    }

    #[test]
    fn due_check_follows_the_pay_cycle() {
        let mut index = PayrollIndex::new(IndexerConfig {
            pay_cycle: PayCycle::Weekly,
            ..IndexerConfig::default()
        });
        let org = ingest(&mut index, org_account(Pubkey::new_unique(), "Acme", 0));
        let never_paid = ingest(&mut index, worker_account(org, Pubkey::new_unique(), 1, 0));
        let paid_last_week = worker_account(org, Pubkey::new_unique(), 1, NOW - 8 * DAY);
        let paid_last_week = ingest(&mut index, paid_last_week);
        let paid_yesterday = worker_account(org, Pubkey::new_unique(), 1, NOW - DAY);
        let paid_yesterday = ingest(&mut index, paid_yesterday);

        let due: BTreeSet<_> = index
            .payroll_due(&org, NOW)
            .unwrap()
            .workers
            .into_iter()
            .map(|(address, _)| address)
            .collect();
        assert_eq!(due, BTreeSet::from([never_paid, paid_last_week]));

        let monthly = index.payroll_due_with(&org, NOW, PayCycle::Monthly).unwrap();
        assert_eq!(monthly.workers.len(), 1);

        assert_eq!(index.next_payroll(&paid_yesterday), Ok(NOW - DAY + 7 * DAY));
    }

    #[test]
    fn nobody_due_right_after_payroll() {
        let mut index = PayrollIndex::default();
        let org = ingest(&mut index, org_account(Pubkey::new_unique(), "Acme", 0));
        ingest(&mut index, worker_account(org, Pubkey::new_unique(), 1, NOW));

        let due = index.payroll_due(&org, NOW + 60).unwrap();
        assert!(!due.due);
        assert!(due.workers.is_empty());
    }

    #[test]
    fn batch_pairs_worker_accounts_with_payees() {
        let mut index = PayrollIndex::default();
        let org = ingest(&mut index, org_account(Pubkey::new_unique(), "Acme", 0));
        let due_wallet = Pubkey::new_unique();
        let due_worker = ingest(&mut index, worker_account(org, due_wallet, 1, 0));
        ingest(&mut index, worker_account(org, Pubkey::new_unique(), 1, NOW));

        assert_eq!(index.payroll_batch(&org, NOW, false).unwrap().len(), 2);
        assert_eq!(
            index.payroll_batch(&org, NOW, true).unwrap(),
            vec![(due_worker, due_wallet)]
        );
    }
}
