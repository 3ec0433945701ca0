// payroll/instructions/payroll/mod.rs

pub mod add_worker;
pub mod process_payroll;

pub use add_worker::AddWorker;
pub(crate) use add_worker::__client_accounts_add_worker;
pub use process_payroll::ProcessPayroll;
pub(crate) use process_payroll::__client_accounts_process_payroll;

cfg_if::cfg_if! {
    if #[cfg(feature = "cpi")] {
        pub(crate) use add_worker::__cpi_client_accounts_add_worker;
        pub(crate) use process_payroll::__cpi_client_accounts_process_payroll;
    }
}
