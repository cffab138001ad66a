use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::FilingStatus;

/// Federal side of an estimate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FederalTaxDetail {
    pub standard_deduction: Decimal,
    pub taxable_income: Decimal,
    pub federal_tax: Decimal,
}

/// State side of an estimate. No state deduction is modelled, so taxable
/// income is the clamped gross.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateTaxDetail {
    pub state_taxable_income: Decimal,
    pub state_tax: Decimal,
}

/// Combined federal and state estimate. Derived on demand, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxEstimate {
    pub gross_annual: Decimal,
    pub filing_status: FilingStatus,
    /// Upper-cased state code as requested, including unmodelled ones.
    pub state: String,
    pub federal: FederalTaxDetail,
    pub state_detail: StateTaxDetail,
    pub total_tax: Decimal,
    pub net_annual: Decimal,
}
