// payroll/utils/mod.rs

pub mod accounts;
pub mod lamports;
pub mod payroll;
