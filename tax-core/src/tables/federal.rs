//! Federal 2025 schedules (IRS Rev. Proc. 2024-40).

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::{Bracket, FilingStatus};

const SINGLE: &[Bracket] = &[
    Bracket::up_to(dec!(11925), dec!(0.10)),
    Bracket::up_to(dec!(48475), dec!(0.12)),
    Bracket::up_to(dec!(103350), dec!(0.22)),
    Bracket::up_to(dec!(197300), dec!(0.24)),
    Bracket::up_to(dec!(250525), dec!(0.32)),
    Bracket::up_to(dec!(626350), dec!(0.35)),
    Bracket::unbounded(dec!(0.37)),
];

const MARRIED_FILING_JOINTLY: &[Bracket] = &[
    Bracket::up_to(dec!(23850), dec!(0.10)),
    Bracket::up_to(dec!(96950), dec!(0.12)),
    Bracket::up_to(dec!(206700), dec!(0.22)),
    Bracket::up_to(dec!(394600), dec!(0.24)),
    Bracket::up_to(dec!(501050), dec!(0.32)),
    Bracket::up_to(dec!(751600), dec!(0.35)),
    Bracket::unbounded(dec!(0.37)),
];

const HEAD_OF_HOUSEHOLD: &[Bracket] = &[
    Bracket::up_to(dec!(17000), dec!(0.10)),
    Bracket::up_to(dec!(64850), dec!(0.12)),
    Bracket::up_to(dec!(103350), dec!(0.22)),
    Bracket::up_to(dec!(197300), dec!(0.24)),
    Bracket::up_to(dec!(250500), dec!(0.32)),
    Bracket::up_to(dec!(626350), dec!(0.35)),
    Bracket::unbounded(dec!(0.37)),
];

pub fn federal_brackets(status: FilingStatus) -> &'static [Bracket] {
    match status {
        FilingStatus::Single => SINGLE,
        FilingStatus::MarriedFilingJointly => MARRIED_FILING_JOINTLY,
        FilingStatus::HeadOfHousehold => HEAD_OF_HOUSEHOLD,
    }
}

pub fn standard_deduction(status: FilingStatus) -> Decimal {
    match status {
        FilingStatus::Single => dec!(15000),
        FilingStatus::MarriedFilingJointly => dec!(30000),
        FilingStatus::HeadOfHousehold => dec!(22500),
    }
}
