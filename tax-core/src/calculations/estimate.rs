use rust_decimal::Decimal;

use crate::calculations::common::non_negative;
use crate::calculations::{estimate_federal_for, estimate_state};
use crate::models::{FilingStatus, TaxEstimate};

/// Federal plus state estimate for one taxpayer.
///
/// The two jurisdictions are computed independently: state tax paid does
/// not reduce federal taxable income. Pure; touches no stored state.
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::estimate;
///
/// let result = estimate(dec!(60000), "single", "WA");
/// assert_eq!(result.total_tax, dec!(5161.50));
/// assert_eq!(result.net_annual, dec!(54838.50));
/// ```
pub fn estimate(
    gross_annual: Decimal,
    filing_status: &str,
    state_code: &str,
) -> TaxEstimate {
    let status = FilingStatus::parse_or_default(filing_status);
    let federal = estimate_federal_for(gross_annual, status);
    let state_detail = estimate_state(gross_annual, state_code);

    let total_tax = federal
        .federal_tax
        .saturating_add(state_detail.state_tax);
    let net_annual = non_negative(gross_annual.saturating_sub(total_tax));

    TaxEstimate {
        gross_annual,
        filing_status: status,
        state: state_code.trim().to_ascii_uppercase(),
        federal,
        state_detail,
        total_tax,
        net_annual,
    }
}
