use kube::{
    api::{Api, DynamicObject, ListParams},
    core::{ApiResource, GroupVersionKind},
    Client, ResourceExt,
};
use tracing::warn;

use crate::api::constants::{GITOPS_NAMESPACE, PLACEMENT_GROUP, POLICY_GROUP};

/// Governance kinds the report enumerates. These CRDs belong to the hub's
/// governance stack, so they are listed dynamically instead of carrying
/// typed models for resources we only print by name.
fn governance_kinds() -> Vec<GroupVersionKind> {
    vec![
        GroupVersionKind::gvk(POLICY_GROUP.as_str(), "v1", "Policy"),
        GroupVersionKind::gvk(PLACEMENT_GROUP.as_str(), "v1", "PlacementRule"),
        GroupVersionKind::gvk(POLICY_GROUP.as_str(), "v1", "PlacementBinding"),
    ]
}

/// One (kind, names) pair per governance kind. Listings degrade to empty
/// sections; a hub without the governance CRDs installed just reports
/// nothing for each kind.
pub async fn governance_resources(client: Client) -> Vec<(String, Vec<String>)> {
    let mut sections = Vec::new();
    for gvk in governance_kinds() {
        let resource = ApiResource::from_gvk(&gvk);
        let api: Api<DynamicObject> =
            Api::namespaced_with(client.clone(), GITOPS_NAMESPACE.as_str(), &resource);
        let names = match api.list(&ListParams::default()).await {
            Ok(list) => list.items.iter().map(|obj| obj.name_any()).collect(),
            Err(e) => {
                warn!("unable to list {}: {e}", gvk.kind);
                Vec::new()
            }
        };
        sections.push((gvk.kind, names));
    }
    sections
}
