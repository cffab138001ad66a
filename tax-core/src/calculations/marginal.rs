//! Progressive marginal-bracket taxation.
//!
//! Only the slice of income that falls inside a band is taxed at that band's
//! rate. Given the 2025 single federal table and taxable income of 45,000:
//!
//! | Band              | Width  | Rate | Tax      |
//! |-------------------|--------|------|----------|
//! | 0 – 11,925        | 11,925 | 10%  | 1,192.50 |
//! | 11,925 – 48,475   | 33,075 | 12%  | 3,969.00 |
//! | total             |        |      | 5,161.50 |
//!
//! ```
//! use rust_decimal_macros::dec;
//! use tax_core::calculations::marginal_tax;
//! use tax_core::models::FilingStatus;
//! use tax_core::tables::federal_brackets;
//!
//! let tax = marginal_tax(dec!(45000), federal_brackets(FilingStatus::Single));
//! assert_eq!(tax, dec!(5161.50));
//! ```

use rust_decimal::Decimal;

use crate::calculations::common::non_negative;
use crate::models::Bracket;

/// Tax owed on `taxable_income` under `brackets`.
///
/// Negative income is clamped to zero and arithmetic saturates at
/// [`Decimal::MAX`], so every input yields a result. `brackets` is expected to satisfy
/// [`crate::tables::validate_brackets`]; the result is unrounded.
pub fn marginal_tax(
    taxable_income: Decimal,
    brackets: &[Bracket],
) -> Decimal {
    let mut remaining = non_negative(taxable_income);
    let mut lower = Decimal::ZERO;
    let mut tax = Decimal::ZERO;

    for bracket in brackets {
        if remaining <= Decimal::ZERO {
            break;
        }

        let band = match bracket.upper_bound {
            Some(upper) => remaining.min(upper.saturating_sub(lower)),
            None => remaining,
        };

        if band > Decimal::ZERO {
            tax = tax.saturating_add(band.saturating_mul(bracket.rate));
            remaining -= band;
        }

        if let Some(upper) = bracket.upper_bound {
            lower = upper;
        }
    }

    tax
}

/// Highest rate in the table, zero for an empty table.
pub fn top_rate(brackets: &[Bracket]) -> Decimal {
    brackets
        .iter()
        .map(|b| b.rate)
        .max()
        .unwrap_or(Decimal::ZERO)
}
