// payroll_client/instructions.rs
//
// One builder per program instruction. Addresses are derived here the same way
// the program re-derives them, so a built instruction always targets the
// canonical accounts.

// external dependencies
use anchor_lang::{prelude::Pubkey, InstructionData, ToAccountMetas};
use solana_program::{
    instruction::{AccountMeta, Instruction},
    system_program,
};

// local dependencies
use crate::{error::ClientError, find_organization_address, find_worker_address};

pub fn create_organization(authority: &Pubkey, name: &str) -> Result<Instruction, ClientError> {
    let (org, _) = find_organization_address(authority, name)?;

    Ok(Instruction {
        program_id: payroll::ID,
        accounts: payroll::accounts::CreateOrganization {
            authority: *authority,
            org,
            system_program: system_program::ID,
        }
        .to_account_metas(None),
        data: payroll::instruction::CreateOrganization {
            name: name.to_string(),
        }
        .data(),
    })
}

pub fn add_worker(
    authority: &Pubkey,
    org: &Pubkey,
    worker_pubkey: &Pubkey,
    salary: u64,
) -> Instruction {
    let (worker, _) = find_worker_address(org, worker_pubkey);

    Instruction {
        program_id: payroll::ID,
        accounts: payroll::accounts::AddWorker {
            authority: *authority,
            org: *org,
            worker,
            worker_pubkey: *worker_pubkey,
            system_program: system_program::ID,
        }
        .to_account_metas(None),
        data: payroll::instruction::AddWorker { salary }.data(),
    }
}

pub fn fund_treasury(authority: &Pubkey, org: &Pubkey, amount: u64) -> Instruction {
    Instruction {
        program_id: payroll::ID,
        accounts: payroll::accounts::FundTreasury {
            authority: *authority,
            org: *org,
            system_program: system_program::ID,
        }
        .to_account_metas(None),
        data: payroll::instruction::FundTreasury { amount }.data(),
    }
}

pub fn withdraw_from_treasury(authority: &Pubkey, org: &Pubkey, amount: u64) -> Instruction {
    Instruction {
        program_id: payroll::ID,
        accounts: payroll::accounts::WithdrawFromTreasury {
            authority: *authority,
            org: *org,
        }
        .to_account_metas(None),
        data: payroll::instruction::WithdrawFromTreasury { amount }.data(),
    }
}

/// Pays every `(worker account, payee)` pair in full. Use
/// [`payroll_accounts`] to build the pairs from payee wallets.
pub fn process_payroll(
    authority: &Pubkey,
    org: &Pubkey,
    cycle_timestamp: u64,
    workers: &[(Pubkey, Pubkey)],
) -> Instruction {
    let mut accounts = payroll::accounts::ProcessPayroll {
        authority: *authority,
        org: *org,
    }
    .to_account_metas(None);

    accounts.extend(workers.iter().flat_map(|(worker, payee)| {
        [
            AccountMeta::new(*worker, false),
            AccountMeta::new(*payee, false),
        ]
    }));

    Instruction {
        program_id: payroll::ID,
        accounts,
        data: payroll::instruction::ProcessPayroll { cycle_timestamp }.data(),
    }
}

pub fn payroll_accounts(org: &Pubkey, worker_pubkeys: &[Pubkey]) -> Vec<(Pubkey, Pubkey)> {
    worker_pubkeys
        .iter()
        .map(|payee| (find_worker_address(org, payee).0, *payee))
        .collect()
}
