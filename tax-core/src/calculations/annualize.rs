use rust_decimal::Decimal;

use crate::models::PayFrequency;

/// Annual equivalent of a periodic amount.
///
/// Unrecognised frequencies are treated as yearly (multiplier 1).
pub fn annualize(
    amount: Decimal,
    frequency: &str,
) -> Decimal {
    PayFrequency::parse(frequency)
        .unwrap_or(PayFrequency::Yearly)
        .annualize(amount)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::calculations::common::parse_amount;

    #[test]
    fn weekly_is_fifty_two_periods() {
        assert_eq!(annualize(dec!(1000), "weekly"), dec!(52000));
    }

    #[test]
    fn biweekly_spellings_are_twenty_six_periods() {
        assert_eq!(annualize(dec!(1000), "bi-weekly"), dec!(26000));
        assert_eq!(annualize(dec!(1000), "BiWeekly"), dec!(26000));
    }

    #[test]
    fn monthly_is_twelve_periods() {
        assert_eq!(annualize(dec!(5000), "Monthly"), dec!(60000));
    }

    #[test]
    fn out_of_range_parsed_amount_saturates() {
        let amount = parse_amount("1e28");

        assert_eq!(annualize(amount, "weekly"), Decimal::MAX);
        assert_eq!(annualize(amount, "yearly"), amount);
    }

    #[test]
    fn unknown_frequency_is_yearly() {
        assert_eq!(annualize(dec!(1234.56), "unknown"), dec!(1234.56));
        assert_eq!(annualize(dec!(1234.56), ""), dec!(1234.56));
    }
}
