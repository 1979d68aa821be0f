use k8s_openapi::api::core::v1::{LimitRange, ResourceQuota};
use kube::{
    api::{Api, ListParams},
    Client, ResourceExt,
};
use tracing::warn;

use crate::api::constants::GITOPS_NAMESPACE;

pub fn format_quota(quota: &ResourceQuota) -> String {
    let hard = quota
        .spec
        .as_ref()
        .and_then(|s| s.hard.as_ref())
        .map(|h| {
            h.iter()
                .map(|(k, v)| format!("{k}={}", v.0))
                .collect::<Vec<_>>()
                .join(", ")
        })
        .unwrap_or_else(|| "no hard limits".to_string());
    format!("{}: {}", quota.name_any(), hard)
}

pub fn format_limit_range(lr: &LimitRange) -> String {
    let types = lr
        .spec
        .as_ref()
        .map(|s| {
            s.limits
                .iter()
                .map(|item| item.type_.clone())
                .collect::<Vec<_>>()
                .join(", ")
        })
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| "no limits defined".to_string());
    format!("{}: {}", lr.name_any(), types)
}

/// List the namespace's quotas and limit ranges, formatted for the report.
/// Both listings degrade to empty sections on failure.
pub async fn namespace_budget(client: Client) -> (Vec<String>, Vec<String>) {
    let quotas: Api<ResourceQuota> = Api::namespaced(client.clone(), GITOPS_NAMESPACE.as_str());
    let limit_ranges: Api<LimitRange> = Api::namespaced(client, GITOPS_NAMESPACE.as_str());

    let quota_lines = match quotas.list(&ListParams::default()).await {
        Ok(list) => list.items.iter().map(format_quota).collect(),
        Err(e) => {
            warn!("unable to list resource quotas: {e}");
            Vec::new()
        }
    };
    let limit_lines = match limit_ranges.list(&ListParams::default()).await {
        Ok(list) => list.items.iter().map(format_limit_range).collect(),
        Err(e) => {
            warn!("unable to list limit ranges: {e}");
            Vec::new()
        }
    };
    (quota_lines, limit_lines)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn quota_with_hard_limits() {
        let quota: ResourceQuota = serde_json::from_value(json!({
            "metadata": {"name": "gitops-quota"},
            "spec": {"hard": {"cpu": "4", "memory": "8Gi"}}
        }))
        .unwrap();
        assert_eq!(format_quota(&quota), "gitops-quota: cpu=4, memory=8Gi");
    }

    #[test]
    fn quota_without_spec() {
        let quota: ResourceQuota = serde_json::from_value(json!({
            "metadata": {"name": "empty-quota"}
        }))
        .unwrap();
        assert_eq!(format_quota(&quota), "empty-quota: no hard limits");
    }

    #[test]
    fn limit_range_types_are_listed() {
        let lr: LimitRange = serde_json::from_value(json!({
            "metadata": {"name": "gitops-limits"},
            "spec": {"limits": [
                {"type": "Container", "max": {"cpu": "2"}},
                {"type": "Pod"}
            ]}
        }))
        .unwrap();
        assert_eq!(format_limit_range(&lr), "gitops-limits: Container, Pod");
    }
}
