use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use clap::Parser;
use monoreport_core::time::{parse_date, parse_timezone, report_window};
use monoreport_core::{Account, AccountTypeFilter, Transaction};
use monoreport_finance::report::{ReportMode, ReportOptions, RowOrder, write_report};
use monoreport_finance::{CategoryRules, select_account_in};
use monoreport_ingest::MonoClient;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod config;
mod state;

/// Fetch a Monobank statement, categorize every transaction and write a CSV
/// file or a plain-text report.
#[derive(Parser, Debug)]
#[command(name = "monoreport", version, about)]
struct Cli {
    /// Start of the window (local midnight), YYYY-MM-DD (default: 31 days before --to)
    #[arg(long, value_parser = parse_date_arg)]
    from: Option<NaiveDate>,

    /// End of the window (local midnight, exclusive), YYYY-MM-DD (default: now)
    #[arg(long, value_parser = parse_date_arg)]
    to: Option<NaiveDate>,

    /// A *.csv path writes CSV records there; anything else prints a text report to stdout
    #[arg(long, default_value = "result.csv")]
    output: PathBuf,

    /// Account type (black, white, platinum, iron, fop, yellow, eAid) or "premium"
    #[arg(long, default_value = "premium")]
    account: AccountTypeFilter,

    /// Row order relative to the fetched statement: native or reversed
    /// (default: native for CSV, reversed for the text report)
    #[arg(long)]
    order: Option<RowOrder>,

    /// IANA timezone for rendered timestamps (overrides config)
    #[arg(long)]
    timezone: Option<String>,

    /// Config file (default: ~/.monoreport/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Personal API token
    #[arg(
        long,
        env = "MONO_API_KEY",
        default_value = "",
        hide_env_values = true,
        hide_default_value = true
    )]
    token: String,
}

fn parse_date_arg(s: &str) -> Result<NaiveDate, String> {
    parse_date(s).map_err(|e| e.to_string())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so the text report on stdout stays clean.
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let cfg = match &cli.config {
        Some(p) => config::load_config_from(p)?,
        None => config::load_config()?,
    };

    let tz = parse_timezone(cli.timezone.as_deref().unwrap_or(&cfg.report.timezone))?;
    let (from, to) = report_window(cli.from, cli.to, tz, Utc::now())?;

    let client = MonoClient::new(
        &cli.token,
        &cfg.api.base_url,
        Duration::from_secs(cfg.api.timeout_secs),
    )?;

    let accounts = client.accounts().await.context("fetching accounts")?;
    let account = select_account_in(&accounts, &cli.account, &cfg.report.settlement_currency)?;
    info!(account = %account.id, kind = %account.kind, currency = account.currency_code, "selected account");

    let txns = client
        .statement(&account.id, from, to)
        .await
        .context("fetching statement")?;
    info!(%from, %to, count = txns.len(), "fetched statement");

    let mut options = ReportOptions::new(ReportMode::for_output(&cli.output), tz);
    options.order = cli.order;

    let rows = emit_report(&cli.output, &txns, account, &options)?;
    info!(rows, mode = ?options.mode, order = %options.order(), "report written");

    Ok(())
}

/// Write the report to `output` (CSV) or stdout (text), depending on `options.mode`.
fn emit_report(
    output: &Path,
    txns: &[Transaction],
    account: &Account,
    options: &ReportOptions,
) -> Result<usize> {
    let rules = CategoryRules::default();

    match options.mode {
        ReportMode::Delimited => {
            let file = File::create(output)
                .with_context(|| format!("failed creating file {}", output.display()))?;
            write_report(BufWriter::new(file), txns, account, options, &rules)
                .with_context(|| format!("failed writing {}", output.display()))
        }
        ReportMode::Narrative => {
            let stdout = io::stdout();
            write_report(stdout.lock(), txns, account, options, &rules)
                .context("failed writing report to stdout")
        }
    }
}
