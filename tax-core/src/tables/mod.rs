//! Static 2025 bracket tables and the invariant every table must satisfy.
//!
//! A table is an ordered slice of [`Bracket`]s with strictly increasing
//! upper bounds, ending in a single unbounded bracket. The calculator relies
//! on this shape: a gap or overlap between bands would silently mis-tax the
//! income inside it.

mod federal;
mod state;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::Bracket;

pub use federal::{federal_brackets, standard_deduction};
pub use state::{NO_INCOME_TAX, state_brackets};

/// Ways a bracket table can violate the table invariant.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BracketTableError {
    #[error("bracket table is empty")]
    Empty,

    #[error("bracket {index} bound {bound} does not exceed the previous bound {previous}")]
    NotIncreasing {
        index: usize,
        bound: Decimal,
        previous: Decimal,
    },

    #[error("bracket {0} is unbounded but is not the last bracket")]
    UnboundedBeforeEnd(usize),

    #[error("last bracket must be unbounded")]
    MissingTopBracket,

    #[error("bracket {index} rate {rate} is outside [0, 1)")]
    RateOutOfRange { index: usize, rate: Decimal },
}

/// Checks that `brackets` forms a well-ordered, gap-free table.
pub fn validate_brackets(brackets: &[Bracket]) -> Result<(), BracketTableError> {
    if brackets.is_empty() {
        return Err(BracketTableError::Empty);
    }

    let last = brackets.len() - 1;
    let mut previous = Decimal::ZERO;

    for (index, bracket) in brackets.iter().enumerate() {
        if bracket.rate < Decimal::ZERO || bracket.rate >= Decimal::ONE {
            return Err(BracketTableError::RateOutOfRange {
                index,
                rate: bracket.rate,
            });
        }

        match bracket.upper_bound {
            Some(bound) if bound <= previous => {
                return Err(BracketTableError::NotIncreasing {
                    index,
                    bound,
                    previous,
                });
            }
            Some(_) if index == last => return Err(BracketTableError::MissingTopBracket),
            Some(bound) => previous = bound,
            None if index != last => return Err(BracketTableError::UnboundedBeforeEnd(index)),
            None => {}
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::models::{FilingStatus, StateCode, supported_states};

    #[test]
    fn every_federal_table_is_valid() {
        for status in FilingStatus::all() {
            assert_eq!(
                validate_brackets(federal_brackets(*status)),
                Ok(()),
                "federal table for {status}"
            );
        }
    }

    #[test]
    fn every_state_table_is_valid() {
        for (code, _) in supported_states() {
            assert_eq!(
                validate_brackets(state_brackets(*code)),
                Ok(()),
                "state table for {code}"
            );
        }
        assert_eq!(validate_brackets(NO_INCOME_TAX), Ok(()));
    }

    #[test]
    fn no_income_tax_states_share_the_zero_table() {
        assert_eq!(state_brackets(StateCode::Wa), NO_INCOME_TAX);
        assert_eq!(state_brackets(StateCode::Fl), NO_INCOME_TAX);
    }

    #[test]
    fn standard_deductions_match_2025_amounts() {
        assert_eq!(standard_deduction(FilingStatus::Single), dec!(15000));
        assert_eq!(standard_deduction(FilingStatus::MarriedFilingJointly), dec!(30000));
        assert_eq!(standard_deduction(FilingStatus::HeadOfHousehold), dec!(22500));
    }

    #[test]
    fn validate_rejects_empty_table() {
        assert_eq!(validate_brackets(&[]), Err(BracketTableError::Empty));
    }

    #[test]
    fn validate_rejects_decreasing_bounds() {
        let brackets = [
            Bracket::up_to(dec!(100), dec!(0.1)),
            Bracket::up_to(dec!(50), dec!(0.2)),
            Bracket::unbounded(dec!(0.3)),
        ];

        assert_eq!(
            validate_brackets(&brackets),
            Err(BracketTableError::NotIncreasing {
                index: 1,
                bound: dec!(50),
                previous: dec!(100),
            })
        );
    }

    #[test]
    fn validate_rejects_missing_top_bracket() {
        let brackets = [Bracket::up_to(dec!(100), dec!(0.1))];

        assert_eq!(
            validate_brackets(&brackets),
            Err(BracketTableError::MissingTopBracket)
        );
    }

    #[test]
    fn validate_rejects_early_unbounded_bracket() {
        let brackets = [Bracket::unbounded(dec!(0.1)), Bracket::unbounded(dec!(0.2))];

        assert_eq!(
            validate_brackets(&brackets),
            Err(BracketTableError::UnboundedBeforeEnd(0))
        );
    }

    #[test]
    fn validate_rejects_rate_of_one() {
        let brackets = [Bracket::unbounded(dec!(1))];

        assert_eq!(
            validate_brackets(&brackets),
            Err(BracketTableError::RateOutOfRange {
                index: 0,
                rate: dec!(1),
            })
        );
    }
}
