//! `zwhois` entry point
//!
//! Lists every zone of an UltraDNS account, adds the SOA contact, alias zones
//! and WHOIS registrar/expiration, and writes the result as JSON or CSV.

mod cli;
mod progress;

use std::io::IsTerminal;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::{CommandFactory, Parser};
use indicatif::ProgressBar;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use zone_whois_core::services::report_writer;
use zone_whois_core::{ReportService, ToolboxWhoisResolver};
use zone_whois_provider::{ProviderCredentials, create_provider};

use cli::Cli;
use progress::{BarWriter, ZoneProgress};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let credentials = match cli.credentials() {
        Ok(credentials) => credentials,
        Err(e) => Cli::command().error(e.kind(), e).exit(),
    };

    let bar = progress::new_bar(!cli.no_progress);
    init_tracing(&cli, bar.clone());

    match run(cli, credentials, bar).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so that stdout carries only the report.
fn init_tracing(cli: &Cli, bar: ProgressBar) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter()));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(move || BarWriter(bar.clone()))
                .with_target(false)
                .with_ansi(std::io::stderr().is_terminal()),
        )
        .with(filter)
        .init();
}

async fn run(cli: Cli, credentials: ProviderCredentials, bar: ProgressBar) -> anyhow::Result<()> {
    let options = cli.provider_options();
    tracing::debug!("Using API at {}", options.base_url);

    let provider = create_provider(credentials, options).context("Failed to create UltraDNS client")?;
    let whois = Arc::new(ToolboxWhoisResolver::new(cli.whois_timeout()));
    let service = ReportService::new(provider, whois, cli.report_options());

    let outcome = service
        .build_report(&ZoneProgress::new(bar))
        .await
        .context("Failed to build zone report")?;

    report_writer::write_report(
        &outcome.rows,
        cli.format.into(),
        cli.output_file.as_deref(),
    )
    .with_context(|| match &cli.output_file {
        Some(path) => format!("Failed to write report to {}", path.display()),
        None => "Failed to write report to stdout".to_string(),
    })?;

    if !outcome.failures.is_empty() {
        tracing::warn!(
            "{} of {} zones skipped: {}",
            outcome.failures.len(),
            outcome.failures.len() + outcome.rows.len(),
            outcome
                .failures
                .iter()
                .map(|f| f.zone.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );
    }
    Ok(())
}
