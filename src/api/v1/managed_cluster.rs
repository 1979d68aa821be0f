use std::fmt::Debug;

use garde::Validate;
use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Partial view of the ACM ManagedCluster registration resource. The
/// cleanup runbook only needs the names, so spec and status are modeled
/// down to the fields worth printing. Cluster-scoped.
#[derive(CustomResource, Deserialize, Serialize, Clone, Debug, JsonSchema, Validate)]
#[kube(
    group = "cluster.open-cluster-management.io",
    version = "v1",
    kind = "ManagedCluster"
)]
#[serde(rename_all = "camelCase")]
pub struct ManagedClusterSpec {
    #[garde(skip)]
    pub hub_accepts_client: Option<bool>,
    #[garde(range(min = 0))]
    pub lease_duration_seconds: Option<i32>,
}
