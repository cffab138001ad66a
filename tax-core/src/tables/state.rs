//! State 2025 single-filer schedules.
//!
//! CA follows the FTB 2025 rate schedule, NY the IT-201 instructions. WA and
//! FL levy no individual income tax.

use rust_decimal_macros::dec;

use crate::models::{Bracket, StateCode};

const CALIFORNIA: &[Bracket] = &[
    Bracket::up_to(dec!(10756), dec!(0.01)),
    Bracket::up_to(dec!(25500), dec!(0.02)),
    Bracket::up_to(dec!(40245), dec!(0.04)),
    Bracket::up_to(dec!(55866), dec!(0.06)),
    Bracket::up_to(dec!(70606), dec!(0.08)),
    Bracket::up_to(dec!(360659), dec!(0.093)),
    Bracket::up_to(dec!(432787), dec!(0.103)),
    Bracket::up_to(dec!(720110), dec!(0.113)),
    Bracket::unbounded(dec!(0.123)),
];

const NEW_YORK: &[Bracket] = &[
    Bracket::up_to(dec!(8500), dec!(0.04)),
    Bracket::up_to(dec!(11700), dec!(0.045)),
    Bracket::up_to(dec!(13900), dec!(0.0525)),
    Bracket::up_to(dec!(80650), dec!(0.055)),
    Bracket::up_to(dec!(215400), dec!(0.06)),
    Bracket::up_to(dec!(1077550), dec!(0.0685)),
    Bracket::up_to(dec!(5000000), dec!(0.0965)),
    Bracket::up_to(dec!(25000000), dec!(0.103)),
    Bracket::unbounded(dec!(0.109)),
];

/// Single zero-rate band used for every state without an income tax.
pub const NO_INCOME_TAX: &[Bracket] = &[Bracket::unbounded(dec!(0))];

pub fn state_brackets(code: StateCode) -> &'static [Bracket] {
    match code {
        StateCode::Ca => CALIFORNIA,
        StateCode::Ny => NEW_YORK,
        StateCode::Wa | StateCode::Fl => NO_INCOME_TAX,
    }
}
