//! Tax calculation modules.
//!
//! The marginal calculator is the only piece with real logic; the federal
//! and state estimators wrap it with table selection and deductions, and
//! [`estimate`] composes both into one result.

mod annualize;
pub mod common;
mod estimate;
mod federal;
mod marginal;
mod state;

pub use annualize::annualize;
pub use estimate::estimate;
pub use federal::{estimate_federal, estimate_federal_for};
pub use marginal::{marginal_tax, top_rate};
pub use state::estimate_state;
