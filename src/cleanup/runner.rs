use anyhow::{anyhow, bail, Result};
use k8s_openapi::api::core::v1::Secret;
use kube::{
    api::{Api, ListParams},
    Client, ResourceExt,
};
use tracing::{error, info};

use crate::api::{constants::LOCAL_CLUSTER, v1::managed_cluster::ManagedCluster};

use super::{
    kubeconfig,
    placeholder::{self, CleanupAction},
};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CleanupSummary {
    pub processed: usize,
    pub deleted: usize,
    pub clean: usize,
    pub failed: usize,
}

/// Clusters eligible for cleanup: everything registered with the hub
/// except its own local-cluster entry.
pub fn eligible_clusters(names: Vec<String>) -> Vec<String> {
    names
        .into_iter()
        .filter(|name| name != LOCAL_CLUSTER.as_str())
        .collect()
}

pub async fn managed_cluster_names(client: Client) -> Result<Vec<String>> {
    let clusters: Api<ManagedCluster> = Api::all(client);
    let list = clusters.list(&ListParams::default()).await?;
    Ok(list.iter().map(|cluster| cluster.name_any()).collect())
}

/// Walk every managed cluster in turn. One cluster failing to yield a
/// usable kubeconfig (or failing mid-cleanup) is logged and skipped; only
/// an empty managed-cluster list aborts the run.
pub async fn run(client: Client) -> Result<CleanupSummary> {
    let names = managed_cluster_names(client.clone()).await?;
    if names.is_empty() {
        bail!("no managed clusters registered with this hub");
    }

    let mut summary = CleanupSummary::default();
    for cluster in eligible_clusters(names) {
        summary.processed += 1;
        match clean_cluster(client.clone(), &cluster).await {
            Ok(CleanupAction::Deleted) => {
                info!("{cluster}: placeholder bundle deleted");
                summary.deleted += 1;
            }
            Ok(CleanupAction::AlreadyAbsent) => {
                info!("{cluster}: proxy CA bundle already absent");
                summary.clean += 1;
            }
            Ok(CleanupAction::NoPlaceholder) => {
                info!("{cluster}: no placeholder found");
                summary.clean += 1;
            }
            Err(e) => {
                error!("{cluster}: {e:#}");
                summary.failed += 1;
            }
        }
    }
    Ok(summary)
}

async fn clean_cluster(hub: Client, cluster: &str) -> Result<CleanupAction> {
    let secrets: Api<Secret> = Api::namespaced(hub, cluster);
    let list = secrets.list(&ListParams::default()).await?;
    let secret = kubeconfig::select_kubeconfig_secret(&list.items, cluster)
        .ok_or_else(|| anyhow!("no kubeconfig secret in namespace {cluster}"))?;
    let bytes = kubeconfig::kubeconfig_bytes(secret)
        .ok_or_else(|| anyhow!("secret {} carries no kubeconfig key", secret.name_any()))?;

    let path = kubeconfig::write_kubeconfig(cluster, &bytes)?;
    info!("{cluster}: kubeconfig written to {}", path.display());

    let spoke = kubeconfig::spoke_client(&bytes).await?;
    placeholder::inspect_and_clean(spoke).await
}
