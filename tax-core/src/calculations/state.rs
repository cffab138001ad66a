use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::calculations::common::non_negative;
use crate::calculations::marginal_tax;
use crate::models::{Bracket, StateCode, StateTaxDetail};
use crate::tables::{NO_INCOME_TAX, state_brackets};

/// State income tax on gross income using the single-filer schedule.
///
/// No state deduction is modelled. Codes without a schedule are treated as
/// having no income tax.
pub fn estimate_state(
    gross_annual: Decimal,
    state_code: &str,
) -> StateTaxDetail {
    let state_taxable_income = non_negative(gross_annual);
    let state_tax = marginal_tax(state_taxable_income, brackets_for(state_code));

    debug!(state = %state_code, %state_taxable_income, %state_tax, "state estimate");

    StateTaxDetail {
        state_taxable_income,
        state_tax,
    }
}

fn brackets_for(state_code: &str) -> &'static [Bracket] {
    match StateCode::parse(state_code) {
        Some(code) => state_brackets(code),
        None => {
            warn!(state = %state_code, "no schedule for state, assuming no income tax");
            NO_INCOME_TAX
        }
    }
}
