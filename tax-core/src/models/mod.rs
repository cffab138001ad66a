mod filing_status;
mod ledger_document;
mod net_income_entry;
mod pay_frequency;
mod state_code;
mod tax_bracket;
mod tax_estimate;

pub use filing_status::FilingStatus;
pub use ledger_document::{
    ActivityEntry, LedgerDocument, MAX_ACTIVITY_ENTRIES, MAX_NET_INCOME_ENTRIES,
};
pub use net_income_entry::{NetIncomeEntry, NetIncomeUpdate, NewNetIncomeEntry};
pub use pay_frequency::PayFrequency;
pub use state_code::{StateCode, supported_states};
pub use tax_bracket::Bracket;
pub use tax_estimate::{FederalTaxDetail, StateTaxDetail, TaxEstimate};
