use clap::Parser;
use colored::Colorize;
use hub_runbooks::{cleanup::runner, telemetry};
use kube::Client;
use tracing::error;

/// Delete placeholder proxy CA bundles left behind on managed clusters.
#[derive(Parser)]
#[command(name = "placeholder-cleanup", version, about, long_about = None)]
struct Cli {}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _cli = Cli::parse();
    telemetry::init();
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    let client = Client::try_default().await?;
    match runner::run(client).await {
        Ok(summary) => {
            println!(
                "{} processed {} clusters: {} deleted, {} clean, {} failed",
                "[done]".green().bold(),
                summary.processed,
                summary.deleted,
                summary.clean,
                summary.failed
            );
            Ok(())
        }
        Err(e) => {
            error!("cleanup aborted: {e:#}");
            std::process::exit(1);
        }
    }
}
