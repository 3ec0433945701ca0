// payroll/instructions/mod.rs

pub mod organization;
pub mod payroll;

pub use organization::*;
pub use payroll::*;
