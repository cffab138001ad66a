use anyhow::Context;
use clap::Parser;
use tracing::debug;

use tax_cli::{app, cli::Cli, config::AppConfig, logging};

// ─── entry point ─────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref())?;

    let level = cli.log_level.as_deref().unwrap_or(&config.logging.level);
    logging::init_logging(level);
    if let Some(path) = &config.logging.file {
        logging::enable_file_logging(path)
            .with_context(|| format!("Failed to enable file logging: {}", path.display()))?;
    }

    debug!(command = ?cli.command, "running");
    let output = app::run(cli, &config).await?;
    print!("{output}");

    Ok(())
}
