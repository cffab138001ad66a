use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How often a net income amount is received.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayFrequency {
    Weekly,
    #[serde(rename = "bi-weekly", alias = "biweekly")]
    BiWeekly,
    Monthly,
    Yearly,
}

impl PayFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
            Self::BiWeekly => "bi-weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }

    /// Pay periods per year.
    pub fn periods_per_year(&self) -> u32 {
        match self {
            Self::Weekly => 52,
            Self::BiWeekly => 26,
            Self::Monthly => 12,
            Self::Yearly => 1,
        }
    }

    /// Case-insensitive; both `bi-weekly` and `biweekly` are accepted.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "weekly" => Some(Self::Weekly),
            "bi-weekly" | "biweekly" => Some(Self::BiWeekly),
            "monthly" => Some(Self::Monthly),
            "yearly" => Some(Self::Yearly),
            _ => None,
        }
    }

    /// Saturates at [`Decimal::MAX`] / [`Decimal::MIN`] instead of overflowing.
    pub fn annualize(
        &self,
        amount: Decimal,
    ) -> Decimal {
        amount.saturating_mul(Decimal::from(self.periods_per_year()))
    }
}

impl std::fmt::Display for PayFrequency {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn parse_accepts_both_biweekly_spellings() {
        assert_eq!(PayFrequency::parse("Bi-Weekly"), Some(PayFrequency::BiWeekly));
        assert_eq!(PayFrequency::parse("BIWEEKLY"), Some(PayFrequency::BiWeekly));
    }

    #[test]
    fn parse_rejects_unknown() {
        assert_eq!(PayFrequency::parse("daily"), None);
    }

    #[test]
    fn annualize_uses_periods_per_year() {
        assert_eq!(PayFrequency::Weekly.annualize(dec!(100)), dec!(5200));
        assert_eq!(PayFrequency::BiWeekly.annualize(dec!(100)), dec!(2600));
        assert_eq!(PayFrequency::Monthly.annualize(dec!(100)), dec!(1200));
        assert_eq!(PayFrequency::Yearly.annualize(dec!(100)), dec!(100));
    }

    #[test]
    fn annualize_saturates_instead_of_overflowing() {
        let huge = Decimal::from_scientific("1e28").unwrap();

        assert_eq!(PayFrequency::Weekly.annualize(huge), Decimal::MAX);
        assert_eq!(PayFrequency::Monthly.annualize(-huge), Decimal::MIN);
        assert_eq!(PayFrequency::Yearly.annualize(huge), huge);
    }

    #[test]
    fn deserializes_legacy_biweekly_spelling() {
        let freq: PayFrequency = serde_json::from_str("\"biweekly\"").unwrap();

        assert_eq!(freq, PayFrequency::BiWeekly);
        assert_eq!(serde_json::to_string(&freq).unwrap(), "\"bi-weekly\"");
    }
}
