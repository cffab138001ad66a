use serde::{Deserialize, Serialize};

/// Filing statuses with a federal bracket table and standard deduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilingStatus {
    #[default]
    Single,
    #[serde(rename = "mfj")]
    MarriedFilingJointly,
    #[serde(rename = "hoh")]
    HeadOfHousehold,
}

impl FilingStatus {
    pub fn all() -> &'static [FilingStatus] {
        &[
            FilingStatus::Single,
            FilingStatus::MarriedFilingJointly,
            FilingStatus::HeadOfHousehold,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::MarriedFilingJointly => "mfj",
            Self::HeadOfHousehold => "hoh",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Single => "Single",
            Self::MarriedFilingJointly => "Married Filing Jointly",
            Self::HeadOfHousehold => "Head of Household",
        }
    }

    /// Case-insensitive match against `single`, `mfj` and `hoh`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" => Some(Self::Single),
            "mfj" => Some(Self::MarriedFilingJointly),
            "hoh" => Some(Self::HeadOfHousehold),
            _ => None,
        }
    }

    /// Like [`FilingStatus::parse`], but unknown codes resolve to `Single`.
    pub fn parse_or_default(s: &str) -> Self {
        Self::parse(s).unwrap_or_else(|| {
            tracing::debug!(input = %s, "unknown filing status, using single");
            Self::default()
        })
    }
}

impl std::fmt::Display for FilingStatus {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
