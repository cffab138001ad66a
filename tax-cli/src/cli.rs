use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// US federal and state income tax estimator (tax year 2025).
///
/// Estimates are computed on the fly; net income entries are kept in a
/// local store (a JSON file by default).
#[derive(Debug, Parser)]
#[command(name = "tax-estimator", version, about, long_about = None)]
pub struct Cli {
    /// TOML configuration file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Store location, overriding `[store] location`.
    #[arg(long, global = true)]
    pub store: Option<String>,

    /// Store backend (`json` or `memory`), overriding `[store] backend`.
    #[arg(long, global = true)]
    pub backend: Option<String>,

    /// Log filter directive, e.g. `debug` or `tax_core=trace`.
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Estimate federal and state tax on an annual gross income.
    Estimate(EstimateArgs),

    /// Convert a periodic amount to its annual equivalent.
    Annualize(AnnualizeArgs),

    /// List the states with modelled tax tables.
    States,

    /// Record or edit net (take-home) income.
    #[command(name = "net-income")]
    NetIncome {
        #[command(subcommand)]
        action: NetIncomeAction,
    },

    /// Show the most recent activity, newest first.
    Activity {
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },
}

#[derive(Debug, Args)]
pub struct EstimateArgs {
    /// Annual gross income. Commas are accepted; missing or invalid input
    /// counts as 0.
    #[arg(long, allow_hyphen_values = true, default_value = "0")]
    pub gross: String,

    /// `single`, `mfj` or `hoh`.
    #[arg(long)]
    pub filing_status: Option<String>,

    /// Two-letter state code.
    #[arg(long)]
    pub state: Option<String>,

    /// Print the estimate as JSON.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct AnnualizeArgs {
    #[arg(long, allow_hyphen_values = true, default_value = "0")]
    pub amount: String,

    /// `weekly`, `bi-weekly`, `monthly` or `yearly`.
    #[arg(long)]
    pub frequency: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum NetIncomeAction {
    /// Save a new net income entry.
    Save {
        #[arg(long)]
        label: Option<String>,

        #[arg(long, allow_hyphen_values = true, default_value = "0")]
        amount: String,

        #[arg(long)]
        frequency: Option<String>,
    },

    /// Edit the most recent entry; omitted fields are left unchanged.
    EditLatest {
        /// Refuse the edit unless this id is still the latest entry.
        #[arg(long)]
        expect_id: Option<i64>,

        #[arg(long)]
        label: Option<String>,

        #[arg(long, allow_hyphen_values = true)]
        amount: Option<String>,

        #[arg(long)]
        frequency: Option<String>,
    },

    /// Show the latest entry and the latest activity.
    Show {
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parses_estimate_with_globals_after_subcommand() {
        let cli = Cli::try_parse_from([
            "tax-estimator",
            "estimate",
            "--gross",
            "60,000",
            "--state",
            "ca",
            "--backend",
            "memory",
        ])
        .unwrap();

        assert_eq!(cli.backend.as_deref(), Some("memory"));
        match cli.command {
            Command::Estimate(args) => {
                assert_eq!(args.gross, "60,000");
                assert_eq!(args.state.as_deref(), Some("ca"));
                assert_eq!(args.filing_status, None);
                assert!(!args.json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn missing_amounts_default_to_zero() {
        let estimate = Cli::try_parse_from(["tax-estimator", "estimate"]).unwrap();
        let save = Cli::try_parse_from(["tax-estimator", "net-income", "save"]).unwrap();

        assert!(matches!(estimate.command, Command::Estimate(args) if args.gross == "0"));
        assert!(matches!(
            save.command,
            Command::NetIncome {
                action: NetIncomeAction::Save { amount, .. }
            } if amount == "0"
        ));
    }

    #[test]
    fn negative_amounts_are_values_not_flags() {
        let cli =
            Cli::try_parse_from(["tax-estimator", "annualize", "--amount", "-50"]).unwrap();

        match cli.command {
            Command::Annualize(args) => assert_eq!(args.amount, "-50"),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_edit_latest_partial_update() {
        let cli = Cli::try_parse_from([
            "tax-estimator",
            "net-income",
            "edit-latest",
            "--expect-id",
            "1736000000000",
            "--frequency",
            "weekly",
        ])
        .unwrap();

        match cli.command {
            Command::NetIncome {
                action:
                    NetIncomeAction::EditLatest {
                        expect_id,
                        label,
                        amount,
                        frequency,
                    },
            } => {
                assert_eq!(expect_id, Some(1736000000000));
                assert_eq!(label, None);
                assert_eq!(amount, None);
                assert_eq!(frequency.as_deref(), Some("weekly"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn activity_limit_defaults_to_ten() {
        let cli = Cli::try_parse_from(["tax-estimator", "activity"]).unwrap();

        assert!(matches!(cli.command, Command::Activity { limit: 10 }));
    }

    #[test]
    fn clap_definition_is_consistent() {
        use clap::CommandFactory;

        Cli::command().debug_assert();
    }
}
