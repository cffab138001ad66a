//! Net income ledger: records what a user actually takes home.
//!
//! Every mutation loads the whole [`LedgerDocument`], changes it in memory
//! and writes it back, appending a line to the activity log. Two writers
//! working from the same snapshot race and the later `save` wins; pass
//! [`NetIncomeUpdate::expected_id`] to at least refuse edits aimed at an
//! entry that is no longer the latest.

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::info;

use crate::calculations::common::format_money;
use crate::db::{LedgerRepository, RepositoryError};
use crate::models::{
    ActivityEntry, LedgerDocument, NetIncomeEntry, NetIncomeUpdate, NewNetIncomeEntry,
    PayFrequency,
};

pub const DEFAULT_LABEL: &str = "Net income";
pub const MAX_LABEL_CHARS: usize = 60;

/// Frequency stored when the requested one is not recognised.
pub const DEFAULT_FREQUENCY: PayFrequency = PayFrequency::Monthly;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("No net income entry to edit.")]
    NoEntries,

    #[error("entry {expected} is no longer the latest entry (latest is {latest})")]
    StaleEntry { expected: i64, latest: i64 },

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

pub struct NetIncomeLedger<R> {
    repo: R,
}

impl<R: LedgerRepository> NetIncomeLedger<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Records a new entry, evicting the oldest once 100 are stored.
    pub async fn save(
        &self,
        new: NewNetIncomeEntry,
    ) -> Result<NetIncomeEntry, LedgerError> {
        let mut doc = self.repo.load().await?;
        let now = Utc::now();

        let frequency = resolve_frequency(new.frequency.as_deref(), DEFAULT_FREQUENCY);
        let entry = NetIncomeEntry {
            id: next_id(&doc, now),
            created_at: now,
            label: normalize_label(new.label.as_deref(), DEFAULT_LABEL),
            net_amount: new.net_amount,
            frequency,
            net_annual_equivalent: frequency.annualize(new.net_amount),
            edited_at: None,
        };

        doc.push_entry(entry.clone());
        doc.log_activity(
            now,
            format!(
                "Saved net income: {} ({})",
                format_money(entry.net_amount),
                entry.frequency
            ),
        );
        self.repo.save(&doc).await?;

        info!(id = entry.id, amount = %entry.net_amount, %frequency, "saved net income entry");
        Ok(entry)
    }

    /// Edits the most recent entry in place.
    ///
    /// Omitted fields keep their current values and the annual equivalent
    /// is recomputed.
    ///
    /// # Errors
    /// * [`LedgerError::NoEntries`] if nothing has been saved yet.
    /// * [`LedgerError::StaleEntry`] if `expected_id` is set and a newer
    ///   entry exists.
    pub async fn edit_latest(
        &self,
        update: NetIncomeUpdate,
    ) -> Result<NetIncomeEntry, LedgerError> {
        let mut doc = self.repo.load().await?;
        let now = Utc::now();

        let latest = doc.latest_entry_mut().ok_or(LedgerError::NoEntries)?;
        if let Some(expected) = update.expected_id {
            if expected != latest.id {
                return Err(LedgerError::StaleEntry {
                    expected,
                    latest: latest.id,
                });
            }
        }

        let label = match update.label.as_deref() {
            Some(label) => normalize_label(Some(label), &latest.label),
            None => normalize_label(Some(&latest.label), DEFAULT_LABEL),
        };
        let net_amount = update.net_amount.unwrap_or(latest.net_amount);
        let frequency = match update.frequency.as_deref() {
            Some(raw) => resolve_frequency(Some(raw), DEFAULT_FREQUENCY),
            None => latest.frequency,
        };

        latest.label = label;
        latest.net_amount = net_amount;
        latest.frequency = frequency;
        latest.net_annual_equivalent = frequency.annualize(net_amount);
        latest.edited_at = Some(now);
        let edited = latest.clone();

        doc.log_activity(
            now,
            format!(
                "Edited latest net income: {} ({})",
                format_money(net_amount),
                frequency
            ),
        );
        self.repo.save(&doc).await?;

        info!(id = edited.id, amount = %net_amount, %frequency, "edited latest net income entry");
        Ok(edited)
    }

    pub async fn latest_entry(&self) -> Result<Option<NetIncomeEntry>, LedgerError> {
        Ok(self.repo.load().await?.latest_entry().cloned())
    }

    /// All retained entries, oldest first.
    pub async fn entries(&self) -> Result<Vec<NetIncomeEntry>, LedgerError> {
        Ok(self.repo.load().await?.net_income_entries)
    }

    pub async fn last_activity(&self) -> Result<Option<ActivityEntry>, LedgerError> {
        Ok(self.repo.load().await?.last_activity().cloned())
    }

    /// Up to `limit` most recent activity entries, newest first.
    pub async fn recent_activity(
        &self,
        limit: usize,
    ) -> Result<Vec<ActivityEntry>, LedgerError> {
        let doc: LedgerDocument = self.repo.load().await?;
        Ok(doc.activity.into_iter().rev().take(limit).collect())
    }
}

/// Epoch milliseconds, kept strictly above the newest stored id.
fn next_id(
    doc: &LedgerDocument,
    now: DateTime<Utc>,
) -> i64 {
    let candidate = now.timestamp_millis();
    match doc.latest_entry() {
        Some(latest) if latest.id >= candidate => latest.id.saturating_add(1),
        _ => candidate,
    }
}

/// Trims, falls back to `fallback` when blank, and caps at 60 characters.
fn normalize_label(
    label: Option<&str>,
    fallback: &str,
) -> String {
    let trimmed = label.map(str::trim).unwrap_or_default();
    let chosen = if trimmed.is_empty() {
        fallback.trim()
    } else {
        trimmed
    };
    let chosen = if chosen.is_empty() { DEFAULT_LABEL } else { chosen };
    chosen.chars().take(MAX_LABEL_CHARS).collect()
}

fn resolve_frequency(
    raw: Option<&str>,
    fallback: PayFrequency,
) -> PayFrequency {
    raw.and_then(PayFrequency::parse).unwrap_or(fallback)
}
