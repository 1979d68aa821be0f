use std::path::PathBuf;

use anyhow::{Context, Result};
use k8s_openapi::api::core::v1::Secret;
use kube::{
    config::{KubeConfigOptions, Kubeconfig},
    Client, Config, ResourceExt,
};

use crate::api::constants::{ADMIN_KUBECONFIG_SUFFIX, KUBECONFIG_SECRET_KEY};

/// Pick the credential secret for a cluster out of its hub namespace.
/// `<cluster>-admin-kubeconfig` wins; otherwise the first secret with
/// `kubeconfig` anywhere in its name.
pub fn select_kubeconfig_secret<'a>(secrets: &'a [Secret], cluster: &str) -> Option<&'a Secret> {
    let admin_name = format!("{cluster}-{}", ADMIN_KUBECONFIG_SUFFIX.as_str());
    secrets
        .iter()
        .find(|s| s.name_any() == admin_name)
        .or_else(|| {
            secrets
                .iter()
                .find(|s| s.name_any().contains(KUBECONFIG_SECRET_KEY.as_str()))
        })
}

/// The kubeconfig payload, already base64-decoded by the typed client.
pub fn kubeconfig_bytes(secret: &Secret) -> Option<Vec<u8>> {
    secret
        .data
        .as_ref()?
        .get(KUBECONFIG_SECRET_KEY.as_str())
        .map(|b| b.0.clone())
}

/// Predictable per-cluster handoff path. Unique per cluster name, and left
/// behind after the run so an operator can reuse it for manual follow-up.
pub fn kubeconfig_path(cluster: &str) -> PathBuf {
    std::env::temp_dir().join(format!("{cluster}-kubeconfig"))
}

pub fn write_kubeconfig(cluster: &str, bytes: &[u8]) -> Result<PathBuf> {
    let path = kubeconfig_path(cluster);
    std::fs::write(&path, bytes)
        .with_context(|| format!("writing kubeconfig for {cluster} to {}", path.display()))?;
    Ok(path)
}

/// Build a client for the spoke cluster from raw kubeconfig bytes.
pub async fn spoke_client(bytes: &[u8]) -> Result<Client> {
    let yaml = std::str::from_utf8(bytes).context("kubeconfig is not valid utf-8")?;
    let kubeconfig = Kubeconfig::from_yaml(yaml).context("parsing kubeconfig")?;
    let config = Config::from_custom_kubeconfig(kubeconfig, &KubeConfigOptions::default())
        .await
        .context("building client config from kubeconfig")?;
    Client::try_from(config).context("creating spoke client")
}
