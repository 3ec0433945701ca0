// payroll_client/lib.rs - helpers for programs and services that call the payroll program

pub mod error;
pub mod instructions;
pub mod schedule;
pub mod units;

use anchor_lang::prelude::Pubkey;

pub use error::ClientError;
pub use payroll::{
    errors::PayrollError,
    state::{Organization, Worker},
    ID as PROGRAM_ID,
};

/// Organization PDA for `(authority, name)`. The name is checked against the
/// program's policy first since an over-long seed has no address at all.
pub fn find_organization_address(
    authority: &Pubkey,
    name: &str,
) -> Result<(Pubkey, u8), ClientError> {
    Organization::validate_name(name).map_err(|_| ClientError::InvalidName(name.to_string()))?;
    Ok(Organization::derive_address(authority, name))
}

pub fn find_worker_address(org: &Pubkey, worker_pubkey: &Pubkey) -> (Pubkey, u8) {
    Worker::derive_address(org, worker_pubkey)
}
