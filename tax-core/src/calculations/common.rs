//! Common utility functions for tax calculations.
//!
//! Rounding, clamping, lenient amount parsing and money formatting shared by
//! the estimators, the ledger and the CLI.

use rust_decimal::Decimal;

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Values at exactly 0.005 are rounded away from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Clamps negative values to zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::common::non_negative;
///
/// assert_eq!(non_negative(dec!(-5)), dec!(0));
/// assert_eq!(non_negative(dec!(5)), dec!(5));
/// ```
pub fn non_negative(value: Decimal) -> Decimal {
    if value > Decimal::ZERO { value } else { Decimal::ZERO }
}

/// Parses user-entered money, coercing anything unusable to zero.
///
/// Whitespace is trimmed and commas are treated as thousands separators
/// (`"1,234.56"`). Empty or malformed input yields zero rather than an error
/// so estimates can always be produced.
pub fn parse_amount(s: &str) -> Decimal {
    let normalized = s.trim().replace(',', "");
    if normalized.is_empty() {
        return Decimal::ZERO;
    }
    normalized
        .parse::<Decimal>()
        .or_else(|_| Decimal::from_scientific(&normalized))
        .unwrap_or_else(|e| {
            tracing::warn!(input = %s, "invalid amount, using 0: {}", e);
            Decimal::ZERO
        })
}

/// Formats money with two decimals and comma thousands separators,
/// e.g. `5000` -> `"5,000.00"`.
pub fn format_money(value: Decimal) -> String {
    let rounded = format!("{:.2}", round_half_up(value));
    let (sign, unsigned) = match rounded.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rounded.as_str()),
    };
    let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{sign}{grouped}.{fraction}")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // round_half_up tests
    // =========================================================================

    #[test]
    fn round_half_up_rounds_up_at_midpoint() {
        let result = round_half_up(dec!(5161.505));

        assert_eq!(result, dec!(5161.51));
    }

    #[test]
    fn round_half_up_preserves_already_rounded_values() {
        let result = round_half_up(dec!(5161.50));

        assert_eq!(result, dec!(5161.50));
    }

    // =========================================================================
    // non_negative tests
    // =========================================================================

    #[test]
    fn non_negative_clamps_negative_to_zero() {
        assert_eq!(non_negative(dec!(-0.01)), Decimal::ZERO);
    }

    #[test]
    fn non_negative_keeps_zero_and_positive() {
        assert_eq!(non_negative(Decimal::ZERO), Decimal::ZERO);
        assert_eq!(non_negative(dec!(45000)), dec!(45000));
    }

    // =========================================================================
    // parse_amount tests
    // =========================================================================

    #[test]
    fn parse_amount_accepts_comma_thousands_separator() {
        assert_eq!(parse_amount("1,234.56"), dec!(1234.56));
        assert_eq!(parse_amount("  60000 "), dec!(60000));
    }

    #[test]
    fn parse_amount_coerces_garbage_to_zero() {
        assert_eq!(parse_amount("abc"), Decimal::ZERO);
        assert_eq!(parse_amount(""), Decimal::ZERO);
        assert_eq!(parse_amount("   "), Decimal::ZERO);
    }

    #[test]
    fn parse_amount_keeps_negative_values() {
        assert_eq!(parse_amount("-500"), dec!(-500));
    }

    #[test]
    fn parse_amount_accepts_scientific_notation() {
        assert_eq!(parse_amount("6e4"), dec!(60000));
    }

    // =========================================================================
    // format_money tests
    // =========================================================================

    #[test]
    fn format_money_groups_thousands() {
        assert_eq!(format_money(dec!(5000)), "5,000.00");
        assert_eq!(format_money(dec!(1234567.891)), "1,234,567.89");
    }

    #[test]
    fn format_money_handles_small_and_negative_values() {
        assert_eq!(format_money(dec!(0)), "0.00");
        assert_eq!(format_money(dec!(999.5)), "999.50");
        assert_eq!(format_money(dec!(-1500)), "-1,500.00");
    }
}
