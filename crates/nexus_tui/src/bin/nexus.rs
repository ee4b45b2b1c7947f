//! Nexus terminal client.
//!
//! Collects a prompt and generation parameters, POSTs them to the
//! configured completion endpoint, and renders the extracted text.

use clap::Parser;
use nexus_client::{NexusClient, NexusConfig, NexusConfigBuilder};
use nexus_core::RetryPolicy;
use nexus_error::NexusResult;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command-line arguments for the terminal client.
#[derive(Parser, Debug)]
#[command(name = "nexus")]
#[command(about = "Nexus terminal client for LLM completion endpoints")]
#[command(version)]
struct Args {
    /// Endpoint URL override
    #[arg(long)]
    api_url: Option<String>,

    /// Retry budget override
    #[arg(long)]
    max_retries: Option<u32>,
}

#[tokio::main]
async fn main() -> NexusResult<()> {
    dotenvy::dotenv().ok();

    // Log to stderr so the alternate screen stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = resolve_config(&args)?;
    info!(url = %config.api_url(), "Starting Nexus");

    let client = NexusClient::from_config(&config);
    nexus_tui::run(client).await?;

    Ok(())
}

/// Environment configuration with command-line overrides applied.
fn resolve_config(args: &Args) -> NexusResult<NexusConfig> {
    let base = NexusConfig::from_env()?;

    let retry = match args.max_retries {
        Some(max_retries) => RetryPolicy::new(max_retries, *base.retry().base_backoff()),
        None => base.retry().clone(),
    };

    let config = NexusConfigBuilder::default()
        .api_url(args.api_url.clone().unwrap_or_else(|| base.api_url().clone()))
        .api_key(base.api_key().clone())
        .retry(retry)
        .build()
        .expect("Valid NexusConfig");

    Ok(config)
}
