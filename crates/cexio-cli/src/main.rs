/*
[INPUT]:  CLI arguments, optional YAML configuration file, CEXIO_* environment
[OUTPUT]: Raw response body of one API call on stdout
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags, subcommands, or startup flow
*/

mod commands;
mod config;

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use commands::Command;
use config::CliConfig;

#[derive(Parser, Debug)]
#[command(name = "cexio-cli", version, about = "CEX.IO REST API client")]
struct Cli {
    #[arg(long = "config", value_name = "PATH")]
    config_path: Option<PathBuf>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    log_level: String,
    #[arg(long = "dry-run")]
    dry_run: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    let config = match &args.config_path {
        Some(path) => {
            info!(config_path = %path.display(), "loading configuration");
            CliConfig::from_file(path).context("load config")?
        }
        None => CliConfig::default(),
    };
    let client = config.build_client()?;
    info!(
        credentials = client.credentials().is_some(),
        "client configured"
    );

    if args.dry_run {
        info!("dry-run requested; configuration validated");
        return Ok(());
    }

    let Some(command) = args.command else {
        bail!("no command given, see --help");
    };

    let body = command
        .execute(&client)
        .await
        .with_context(|| format!("{command:?} failed"))?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(&body).context("write response")?;
    stdout.flush().context("flush stdout")?;
    Ok(())
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cexio_adapter::Side;
    use rust_decimal::Decimal;

    #[test]
    fn test_parse_place_limit() {
        let cli = Cli::try_parse_from([
            "cexio-cli",
            "place-limit",
            "buy",
            "0.5",
            "0.041",
            "GHS/BTC",
        ])
        .expect("parse");

        assert_eq!(
            cli.command,
            Some(Command::PlaceLimit {
                side: Side::Buy,
                amount: "0.5".parse::<Decimal>().unwrap(),
                price: "0.041".parse::<Decimal>().unwrap(),
                pair: Some("GHS/BTC".to_string()),
            })
        );
    }

    #[test]
    fn test_parse_ticker_without_pair() {
        let cli = Cli::try_parse_from(["cexio-cli", "ticker"]).expect("parse");
        assert_eq!(cli.command, Some(Command::Ticker { pair: None }));
        assert_eq!(cli.log_level, "info");
    }

    #[test]
    fn test_parse_rejects_unknown_side() {
        assert!(Cli::try_parse_from(["cexio-cli", "place-market", "hold", "1"]).is_err());
    }

    #[test]
    fn test_parse_dry_run_without_command() {
        let cli = Cli::try_parse_from(["cexio-cli", "--config", "x.yaml", "--dry-run"])
            .expect("parse");
        assert!(cli.dry_run);
        assert!(cli.command.is_none());
    }
}
