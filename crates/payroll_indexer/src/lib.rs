//! Answers the read side of the payroll program. The chain only guarantees
//! point lookups by derived address; listing "all organizations" or "my
//! worker records" is served from this index, fed with program-owned accounts
//! from whatever source the caller has (RPC scans, geyser, snapshots).

pub mod config;
pub mod error;
pub mod events;
pub mod store;
pub mod summary;

pub use config::IndexerConfig;
pub use error::IndexerError;
pub use store::{decode_account, PayrollDue, PayrollIndex, ProgramAccount};
pub use summary::{OrganizationSummary, WorkerSummary};
