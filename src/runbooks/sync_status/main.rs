use clap::Parser;
use hub_runbooks::{sync_status::report, telemetry};
use kube::Client;
use tracing::warn;

/// Report the sync state of the certificate distribution application on
/// the hub and print remediation guidance.
#[derive(Parser, Debug)]
#[command(name = "sync-status", version, about, long_about = None)]
struct Cli {}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _cli = Cli::parse();
    telemetry::init();
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    // A hub we cannot reach still gets a report, just one made of fallbacks.
    let client = match Client::try_default().await {
        Ok(client) => Some(client),
        Err(e) => {
            warn!("unable to build a cluster client, reporting fallbacks only: {e}");
            None
        }
    };

    let outcome = report::run(client).await;
    if !outcome.is_success() {
        std::process::exit(1);
    }
    Ok(())
}
