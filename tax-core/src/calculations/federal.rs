use rust_decimal::Decimal;
use tracing::debug;

use crate::calculations::common::non_negative;
use crate::calculations::marginal_tax;
use crate::models::{FederalTaxDetail, FilingStatus};
use crate::tables::{federal_brackets, standard_deduction};

/// Federal income tax after the standard deduction.
///
/// `filing_status` is matched case-insensitively against `single`, `mfj` and
/// `hoh`; anything else is taxed as single.
pub fn estimate_federal(
    gross_annual: Decimal,
    filing_status: &str,
) -> FederalTaxDetail {
    estimate_federal_for(gross_annual, FilingStatus::parse_or_default(filing_status))
}

/// [`estimate_federal`] for an already-resolved filing status.
pub fn estimate_federal_for(
    gross_annual: Decimal,
    status: FilingStatus,
) -> FederalTaxDetail {
    let standard_deduction = standard_deduction(status);
    let taxable_income = non_negative(gross_annual.saturating_sub(standard_deduction));
    let federal_tax = marginal_tax(taxable_income, federal_brackets(status));

    debug!(%status, %taxable_income, %federal_tax, "federal estimate");

    FederalTaxDetail {
        standard_deduction,
        taxable_income,
        federal_tax,
    }
}
