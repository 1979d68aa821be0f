use kube::{Api, Client};
use tracing::warn;

use crate::api::{
    constants::{GITOPS_NAMESPACE, SYNC_APP_NAME},
    v1alpha1::application::Application,
};

pub const UNKNOWN: &str = "Unknown";
pub const NO_MESSAGE: &str = "No message";

/// Flattened view of the Application status fields the report prints.
/// Values are unstructured strings straight from the API server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncState {
    pub sync: String,
    pub health: String,
    pub operation_phase: String,
    pub operation_message: String,
}

impl Default for SyncState {
    fn default() -> Self {
        SyncState {
            sync: UNKNOWN.to_string(),
            health: UNKNOWN.to_string(),
            operation_phase: UNKNOWN.to_string(),
            operation_message: NO_MESSAGE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Synced,
    OutOfSync,
    Degraded,
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Synced)
    }
}

/// The one piece of decision logic in the reporter. Anything that is not
/// literally `Synced` or `OutOfSync` (including the `Unknown` fallback)
/// lands in the error branch.
pub fn classify(sync_status: &str) -> Outcome {
    match sync_status {
        "Synced" => Outcome::Synced,
        "OutOfSync" => Outcome::OutOfSync,
        _ => Outcome::Degraded,
    }
}

fn state_of(app: Application) -> SyncState {
    let status = app.status.unwrap_or_default();
    SyncState {
        sync: status
            .sync
            .and_then(|s| s.status)
            .unwrap_or_else(|| UNKNOWN.to_string()),
        health: status
            .health
            .and_then(|h| h.status)
            .unwrap_or_else(|| UNKNOWN.to_string()),
        operation_phase: status
            .operation_state
            .as_ref()
            .and_then(|o| o.phase.clone())
            .unwrap_or_else(|| UNKNOWN.to_string()),
        operation_message: status
            .operation_state
            .and_then(|o| o.message)
            .unwrap_or_else(|| NO_MESSAGE.to_string()),
    }
}

/// Fetch the Application and flatten its status. Every field falls back
/// independently; a missing resource or unreachable API server yields the
/// fallback strings rather than an error.
pub async fn fetch_sync_state(client: Client) -> SyncState {
    let apps: Api<Application> = Api::namespaced(client, GITOPS_NAMESPACE.as_str());
    match apps.get_opt(SYNC_APP_NAME.as_str()).await {
        Ok(Some(app)) => state_of(app),
        Ok(None) => {
            warn!(
                "application {}/{} not found",
                GITOPS_NAMESPACE.as_str(),
                SYNC_APP_NAME.as_str()
            );
            SyncState::default()
        }
        Err(e) => {
            warn!(
                "unable to query application {}/{}: {e}",
                GITOPS_NAMESPACE.as_str(),
                SYNC_APP_NAME.as_str()
            );
            SyncState::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[rstest]
    #[case("Synced", Outcome::Synced)]
    #[case("OutOfSync", Outcome::OutOfSync)]
    #[case("Unknown", Outcome::Degraded)]
    #[case("Progressing", Outcome::Degraded)]
    #[case("", Outcome::Degraded)]
    fn classify_routes_each_status(#[case] status: &str, #[case] expected: Outcome) {
        assert_eq!(classify(status), expected);
    }

    #[rstest]
    #[case(Outcome::Synced, true)]
    #[case(Outcome::OutOfSync, false)]
    #[case(Outcome::Degraded, false)]
    fn only_synced_is_a_success(#[case] outcome: Outcome, #[case] success: bool) {
        assert_eq!(outcome.is_success(), success);
    }

    #[test]
    fn missing_status_yields_fallbacks() {
        let app: Application = serde_json::from_value(json!({
            "apiVersion": "argoproj.io/v1alpha1",
            "kind": "Application",
            "metadata": {"name": "odf-cert-sync", "namespace": "openshift-gitops"},
            "spec": {"project": "default"}
        }))
        .unwrap();
        assert_eq!(state_of(app), SyncState::default());
    }

    #[test]
    fn populated_status_is_flattened() {
        let app: Application = serde_json::from_value(json!({
            "apiVersion": "argoproj.io/v1alpha1",
            "kind": "Application",
            "metadata": {"name": "odf-cert-sync", "namespace": "openshift-gitops"},
            "spec": {},
            "status": {
                "sync": {"status": "OutOfSync", "revision": "abc123"},
                "health": {"status": "Degraded"},
                "operationState": {"phase": "Failed", "message": "ComparisonError"}
            }
        }))
        .unwrap();
        let state = state_of(app);
        assert_eq!(state.sync, "OutOfSync");
        assert_eq!(state.health, "Degraded");
        assert_eq!(state.operation_phase, "Failed");
        assert_eq!(state.operation_message, "ComparisonError");
    }

    #[test]
    fn partial_status_falls_back_per_field() {
        let app: Application = serde_json::from_value(json!({
            "apiVersion": "argoproj.io/v1alpha1",
            "kind": "Application",
            "metadata": {"name": "odf-cert-sync", "namespace": "openshift-gitops"},
            "spec": {},
            "status": {"sync": {"status": "Synced"}}
        }))
        .unwrap();
        let state = state_of(app);
        assert_eq!(state.sync, "Synced");
        assert_eq!(state.health, UNKNOWN);
        assert_eq!(state.operation_message, NO_MESSAGE);
    }
}
