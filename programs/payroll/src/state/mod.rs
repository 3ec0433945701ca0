// payroll/state/mod.rs

pub mod organization;
pub mod worker;

pub use organization::*;
pub use worker::*;
