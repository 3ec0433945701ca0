// payroll/errors.rs

use anchor_lang::prelude::*;

// Variant order is part of the program interface: custom codes start at 6000.
#[error_code]
pub enum PayrollError {
    #[msg("Unauthorized access")]
    Unauthorized,
    #[msg("Invalid organization name")]
    InvalidName,
    #[msg("Invalid salary amount")]
    InvalidSalary,
    #[msg("Invalid amount")]
    InvalidAmount,
    #[msg("Insufficient funds in treasury")]
    InsufficientFunds,
    #[msg("Missing worker account in remaining accounts")]
    MissingWorkerAccount,
    #[msg("Invalid worker PDA")]
    InvalidWorkerPda,
    #[msg("Invalid worker wallet pubkey")]
    InvalidWorkerWallet,
    #[msg("Worker account supplied more than once")]
    DuplicateWorkerAccount,
}
