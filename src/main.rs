// Contents update CLI
//
// Reads a local file, asks for a token and replaces the configured
// repository file in one PUT. Exits 1 when the remote rejects the update.

use anyhow::{Context, Result};
use clap::Parser;
use kodegen_file_update::cli::Cli;
use kodegen_file_update::github::HttpTransport;
use kodegen_file_update::report;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = cli.resolve().context("Invalid configuration")?;

    let transport = Arc::new(HttpTransport::new()?);
    let outcome = kodegen_file_update::run(&config, config.credential_source(), transport).await?;

    report(&outcome, &mut std::io::stdout().lock()).context("Failed to write report")?;

    if !outcome.is_success() {
        std::process::exit(outcome.exit_code());
    }
    Ok(())
}
