// payroll_indexer/error.rs

use anchor_lang::prelude::Pubkey;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndexerError {
    #[error("{kind} {address} not found")]
    NotFound { kind: &'static str, address: Pubkey },
    #[error("account {address} is not a payroll account: {reason}")]
    Decode { address: Pubkey, reason: String },
    #[error("payroll total for {org} overflows u64")]
    Overflow { org: Pubkey },
}
