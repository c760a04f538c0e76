use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use fluxpub_cli::{Cli, Config, Orchestrator};
use fluxpub_export::HttpAssetFetcher;
use fluxpub_source::MinifluxClient;

#[tokio::main]
async fn main() -> eyre::Result<ExitCode> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env(&cli)?;
    tracing::debug!("Using {:?}", config.source);

    let source = MinifluxClient::new(&config.source)?;
    let fetcher = match config.fetch_timeout {
        Some(timeout) => HttpAssetFetcher::with_timeout(timeout)?,
        None => HttpAssetFetcher::new(),
    };

    let summary = Orchestrator::new(&config, Arc::new(source), Arc::new(fetcher))
        .run()
        .await?;

    if summary.aborted {
        eprintln!("Could not list unread entries, nothing was written");
    } else if !summary.written.is_empty() || !summary.failed.is_empty() {
        println!("\nDone:");
        println!("  Written: {}", summary.written.len());
        if !summary.failed.is_empty() {
            println!("  Failed: {}", summary.failed.len());
            for (id, reason) in &summary.failed {
                println!("    {}: {}", id, reason);
            }
        }
    }

    Ok(if summary.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
