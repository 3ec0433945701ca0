// payroll/instructions/organization/mod.rs

pub mod create_organization;
pub mod fund_treasury;
pub mod withdraw_from_treasury;

pub use create_organization::CreateOrganization;
pub(crate) use create_organization::__client_accounts_create_organization;
pub use fund_treasury::FundTreasury;
pub(crate) use fund_treasury::__client_accounts_fund_treasury;
pub use withdraw_from_treasury::WithdrawFromTreasury;
pub(crate) use withdraw_from_treasury::__client_accounts_withdraw_from_treasury;

cfg_if::cfg_if! {
    if #[cfg(feature = "cpi")] {
        pub(crate) use create_organization::__cpi_client_accounts_create_organization;
        pub(crate) use fund_treasury::__cpi_client_accounts_fund_treasury;
        pub(crate) use withdraw_from_treasury::__cpi_client_accounts_withdraw_from_treasury;
    }
}
