use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::NetIncomeEntry;

pub const MAX_NET_INCOME_ENTRIES: usize = 100;
pub const MAX_ACTIVITY_ENTRIES: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub ts: DateTime<Utc>,
    pub message: String,
}

/// Everything the ledger persists, stored as one document.
///
/// Both lists are oldest-first; the caps evict from the front.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerDocument {
    #[serde(default)]
    pub net_income_entries: Vec<NetIncomeEntry>,
    #[serde(default)]
    pub activity: Vec<ActivityEntry>,
}

impl LedgerDocument {
    pub fn latest_entry(&self) -> Option<&NetIncomeEntry> {
        self.net_income_entries.last()
    }

    pub fn latest_entry_mut(&mut self) -> Option<&mut NetIncomeEntry> {
        self.net_income_entries.last_mut()
    }

    pub fn last_activity(&self) -> Option<&ActivityEntry> {
        self.activity.last()
    }

    pub fn push_entry(
        &mut self,
        entry: NetIncomeEntry,
    ) {
        self.net_income_entries.push(entry);
        truncate_front(&mut self.net_income_entries, MAX_NET_INCOME_ENTRIES);
    }

    pub fn log_activity(
        &mut self,
        ts: DateTime<Utc>,
        message: impl Into<String>,
    ) {
        self.activity.push(ActivityEntry {
            ts,
            message: message.into(),
        });
        truncate_front(&mut self.activity, MAX_ACTIVITY_ENTRIES);
    }
}

fn truncate_front<T>(
    items: &mut Vec<T>,
    cap: usize,
) {
    if items.len() > cap {
        let excess = items.len() - cap;
        items.drain(..excess);
    }
}
