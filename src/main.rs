use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use rmcp::transport::stdio;
use rmcp::ServiceExt;
use tracing_subscriber::EnvFilter;

use drupal_modules_mcp::config::{FetcherConfig, DEFAULT_BASE_URL};
use drupal_modules_mcp::fetch::ProjectFetcher;
use drupal_modules_mcp::server::DrupalModulesServer;

/// MCP server that summarizes Drupal modules from their drupal.org pages
#[derive(Debug, Parser)]
#[command(name = "drupal-modules-mcp", version, about)]
struct Cli {
    /// Base URL of project pages; the module name is appended to it
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Timeout for one page fetch in seconds (0 uses the transport default)
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,
}

impl Cli {
    fn fetcher_config(&self) -> FetcherConfig {
        let timeout = (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs));
        FetcherConfig::default()
            .with_base_url(self.base_url.clone())
            .with_timeout(timeout)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // stdout carries the protocol, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let cli = Cli::parse();
    let fetcher = ProjectFetcher::new(cli.fetcher_config()).context("failed to create fetcher")?;
    let server = DrupalModulesServer::new(fetcher);

    let service = server
        .serve(stdio())
        .await
        .context("failed to start MCP server on stdio")?;
    tracing::info!("Drupal Modules MCP server running on stdio");

    let cancel = service.cancellation_token();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("interrupt received, closing transport");
            cancel.cancel();
        }
    });

    match service.waiting().await {
        Ok(reason) => tracing::info!("MCP server stopped: {:?}", reason),
        Err(e) => {
            tracing::error!("MCP server task error: {}", e);
            return Err(e.into());
        }
    }

    Ok(())
}
