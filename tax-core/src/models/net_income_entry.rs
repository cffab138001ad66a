use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::PayFrequency;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetIncomeEntry {
    /// Creation time in epoch milliseconds, unique within a ledger.
    pub id: i64,
    #[serde(rename = "ts")]
    pub created_at: DateTime<Utc>,
    pub label: String,
    pub net_amount: Decimal,
    pub frequency: PayFrequency,
    pub net_annual_equivalent: Decimal,
    #[serde(
        rename = "ts_edited",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub edited_at: Option<DateTime<Utc>>,
}

/// For recording new entries (no id or timestamps).
///
/// Fields are raw user input; normalisation happens in the ledger.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewNetIncomeEntry {
    pub label: Option<String>,
    pub net_amount: Decimal,
    pub frequency: Option<String>,
}

/// Partial edit of the latest entry. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetIncomeUpdate {
    /// When set, the edit only applies if this is still the latest entry.
    pub expected_id: Option<i64>,
    pub label: Option<String>,
    pub net_amount: Option<Decimal>,
    pub frequency: Option<String>,
}
