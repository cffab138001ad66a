//! Command handlers. Each returns the text to print on stdout.

use anyhow::{Context, Result};
use chrono::{DateTime, Local, Utc};
use tracing::debug;

use tax_core::calculations::common::{format_money, parse_amount};
use tax_core::db::{MemoryRepositoryFactory, RepositoryRegistry, StoreConfig};
use tax_core::{
    LedgerRepository, NetIncomeEntry, NetIncomeLedger, NetIncomeUpdate, NewNetIncomeEntry,
    PayFrequency, StateCode, TaxEstimate, annualize, estimate, supported_states,
};
use tax_db_json::JsonRepositoryFactory;

use crate::cli::{AnnualizeArgs, Cli, Command, EstimateArgs, NetIncomeAction};
use crate::config::{AppConfig, DefaultsConfig};

/// Registry with every backend this binary ships.
pub fn build_registry() -> RepositoryRegistry {
    let mut registry = RepositoryRegistry::new();
    registry.register(Box::new(JsonRepositoryFactory));
    registry.register(Box::new(MemoryRepositoryFactory));
    registry
}

/// Config file values with `--backend` / `--store` applied on top.
pub fn effective_store(
    cli: &Cli,
    config: &AppConfig,
) -> StoreConfig {
    let mut store = config.store.clone();
    if let Some(backend) = &cli.backend {
        store.backend = backend.trim().to_ascii_lowercase();
    }
    if let Some(location) = &cli.store {
        store.location = location.clone();
    }
    store
}

pub async fn open_ledger(store: &StoreConfig) -> Result<NetIncomeLedger<Box<dyn LedgerRepository>>> {
    debug!(backend = %store.backend, location = %store.location, "opening store");
    let repo = build_registry().create(store).await.with_context(|| {
        format!(
            "Failed to open {} store at '{}'",
            store.backend, store.location
        )
    })?;
    Ok(NetIncomeLedger::new(repo))
}

/// Runs one parsed command and returns its output.
pub async fn run(
    cli: Cli,
    config: &AppConfig,
) -> Result<String> {
    let store = effective_store(&cli, config);
    let defaults = &config.defaults;

    match cli.command {
        Command::Estimate(args) => estimate_command(&args, defaults),
        Command::Annualize(args) => Ok(annualize_command(&args, defaults)),
        Command::States => Ok(states_command()),
        Command::NetIncome { action } => {
            let ledger = open_ledger(&store).await?;
            net_income_command(&ledger, action, defaults).await
        }
        Command::Activity { limit } => {
            let ledger = open_ledger(&store).await?;
            activity_command(&ledger, limit).await
        }
    }
}

// ─── estimate / annualize / states ───────────────────────────────────────────

pub fn estimate_command(
    args: &EstimateArgs,
    defaults: &DefaultsConfig,
) -> Result<String> {
    let gross = parse_amount(&args.gross);
    let filing_status = args
        .filing_status
        .as_deref()
        .unwrap_or(&defaults.filing_status);
    let state = args.state.as_deref().unwrap_or(&defaults.state);

    let result = estimate(gross, filing_status, state);
    if args.json {
        serde_json::to_string_pretty(&result).context("Failed to serialize estimate")
    } else {
        Ok(render_estimate(&result))
    }
}

pub fn render_estimate(result: &TaxEstimate) -> String {
    let state_name = StateCode::parse(&result.state)
        .map(|code| code.display_name())
        .unwrap_or("not modelled, no state tax");

    let rows = [
        ("Gross annual income", format_money(result.gross_annual)),
        ("Filing status", result.filing_status.label().to_string()),
        ("State", format!("{} ({state_name})", result.state)),
        ("Standard deduction", format_money(result.federal.standard_deduction)),
        ("Federal taxable income", format_money(result.federal.taxable_income)),
        ("Federal tax", format_money(result.federal.federal_tax)),
        ("State taxable income", format_money(result.state_detail.state_taxable_income)),
        ("State tax", format_money(result.state_detail.state_tax)),
        ("Total tax", format_money(result.total_tax)),
        ("Net annual income", format_money(result.net_annual)),
    ];

    rows.iter()
        .map(|(label, value)| format!("{label:<24}{value:>16}\n"))
        .collect()
}

pub fn annualize_command(
    args: &AnnualizeArgs,
    defaults: &DefaultsConfig,
) -> String {
    let amount = parse_amount(&args.amount);
    let raw = args.frequency.as_deref().unwrap_or(&defaults.frequency);
    let frequency = PayFrequency::parse(raw).unwrap_or(PayFrequency::Yearly);

    format!(
        "{} {} = {} per year\n",
        format_money(amount),
        frequency,
        format_money(annualize(amount, raw))
    )
}

pub fn states_command() -> String {
    supported_states()
        .iter()
        .map(|(code, name)| format!("{code}  {name}\n"))
        .collect()
}

// ─── net income ledger ───────────────────────────────────────────────────────

pub async fn net_income_command<R: LedgerRepository>(
    ledger: &NetIncomeLedger<R>,
    action: NetIncomeAction,
    defaults: &DefaultsConfig,
) -> Result<String> {
    match action {
        NetIncomeAction::Save {
            label,
            amount,
            frequency,
        } => {
            let entry = ledger
                .save(NewNetIncomeEntry {
                    label,
                    net_amount: parse_amount(&amount),
                    frequency: Some(frequency.unwrap_or_else(|| defaults.frequency.clone())),
                })
                .await?;
            Ok(format!("Saved entry {}\n{}", entry.id, render_entry(&entry)))
        }
        NetIncomeAction::EditLatest {
            expect_id,
            label,
            amount,
            frequency,
        } => {
            let entry = ledger
                .edit_latest(NetIncomeUpdate {
                    expected_id: expect_id,
                    label,
                    net_amount: amount.as_deref().map(parse_amount),
                    frequency,
                })
                .await?;
            Ok(format!("Edited entry {}\n{}", entry.id, render_entry(&entry)))
        }
        NetIncomeAction::Show { json } => {
            let latest = ledger.latest_entry().await?;
            let activity = ledger.last_activity().await?;

            if json {
                let value = serde_json::json!({
                    "net_income": latest,
                    "last_activity": activity,
                });
                return serde_json::to_string_pretty(&value).context("Failed to serialize entry");
            }

            let mut out = match &latest {
                Some(entry) => render_entry(entry),
                None => "No net income saved yet.\n".to_string(),
            };
            if let Some(activity) = activity {
                out.push_str(&format!(
                    "Last activity: {} ({})\n",
                    activity.message,
                    local_time(activity.ts)
                ));
            }
            Ok(out)
        }
    }
}

pub async fn activity_command<R: LedgerRepository>(
    ledger: &NetIncomeLedger<R>,
    limit: usize,
) -> Result<String> {
    let recent = ledger.recent_activity(limit).await?;
    if recent.is_empty() {
        return Ok("No activity yet.\n".to_string());
    }
    Ok(recent
        .iter()
        .map(|a| format!("{}  {}\n", local_time(a.ts), a.message))
        .collect())
}

pub fn render_entry(entry: &NetIncomeEntry) -> String {
    let mut out = format!(
        "{}: {} {} ({} per year)\n  saved {}",
        entry.label,
        format_money(entry.net_amount),
        entry.frequency,
        format_money(entry.net_annual_equivalent),
        local_time(entry.created_at),
    );
    if let Some(edited) = entry.edited_at {
        out.push_str(&format!(", edited {}", local_time(edited)));
    }
    out.push('\n');
    out
}

fn local_time(ts: DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()
}
