pub mod calculations;
pub mod db;
pub mod ledger;
pub mod models;
pub mod tables;

pub use calculations::{annualize, estimate, estimate_federal, estimate_state, marginal_tax};
pub use db::repository::{LedgerRepository, RepositoryError};
pub use ledger::{LedgerError, NetIncomeLedger};
pub use models::*;
