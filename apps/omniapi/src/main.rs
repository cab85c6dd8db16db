use anyhow::Context;
use clap::Parser;
use omniapi_client::OmniClient;
use tracing::info;

mod cli;
mod commands;

use crate::cli::Cli;

#[tokio::main]
async fn main() {
    init_tracing();
    if let Err(err) = run().await {
        eprintln!("omniapi failed: {err:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli
        .connection
        .to_patch()?
        .into_config()
        .context("invalid client config")?;
    info!(
        base_url = %config.base_url,
        proxy = %config.proxy.as_deref().unwrap_or(""),
        request_timeout_secs = config.request_timeout_secs,
        "client configured"
    );
    let client = OmniClient::new(config).context("failed to build http client")?;

    let output = commands::run(&client, cli.command, cli.validate).await?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("omniapi=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
