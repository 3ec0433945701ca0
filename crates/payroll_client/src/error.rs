// payroll_client/error.rs

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClientError {
    #[error("organization name {0:?} is empty, too long or contains control characters")]
    InvalidName(String),
    #[error("{0} is not a valid SOL amount")]
    InvalidSolAmount(f64),
    #[error("unknown pay cycle {0:?}, expected weekly, bi-weekly or monthly")]
    UnknownPayCycle(String),
}
