use k8s_openapi::api::core::v1::Pod;
use kube::{
    api::{Api, ListParams, LogParams},
    Client, ResourceExt,
};
use tracing::warn;

use crate::api::constants::{APP_CONTROLLER_SELECTOR, GITOPS_NAMESPACE, SYNC_APP_NAME};

const TAIL_LINES: i64 = 200;

/// Lines worth surfacing from the application controller: anything that
/// names the application, plus anything that looks like an error.
pub fn is_relevant(line: &str, app_name: &str) -> bool {
    line.contains(app_name) || line.to_lowercase().contains("error")
}

/// Best effort: controller pods may be gone or their logs unreadable, and
/// either way the report gets an empty section, never an abort.
pub async fn controller_log_lines(client: Client) -> Vec<String> {
    let pods: Api<Pod> = Api::namespaced(client, GITOPS_NAMESPACE.as_str());
    let selector = ListParams::default().labels(APP_CONTROLLER_SELECTOR.as_str());
    let pod_list = match pods.list(&selector).await {
        Ok(list) => list,
        Err(e) => {
            warn!("unable to list application controller pods: {e}");
            return Vec::new();
        }
    };

    let log_params = LogParams {
        tail_lines: Some(TAIL_LINES),
        ..LogParams::default()
    };
    let mut lines = Vec::new();
    for pod in pod_list {
        let name = pod.name_any();
        match pods.logs(&name, &log_params).await {
            Ok(text) => lines.extend(
                text.lines()
                    .filter(|l| is_relevant(l, SYNC_APP_NAME.as_str()))
                    .map(String::from),
            ),
            Err(e) => warn!("unable to read logs from {name}: {e}"),
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_naming_the_application_are_kept() {
        assert!(is_relevant(
            "level=info msg=\"refreshed app odf-cert-sync\"",
            "odf-cert-sync"
        ));
    }

    #[test]
    fn error_lines_are_kept_regardless_of_app() {
        assert!(is_relevant("level=Error msg=\"comparison failed\"", "odf-cert-sync"));
        assert!(is_relevant("rpc error: code = Unavailable", "odf-cert-sync"));
    }

    #[test]
    fn unrelated_lines_are_dropped() {
        assert!(!is_relevant(
            "level=info msg=\"refreshed app some-other-app\"",
            "odf-cert-sync"
        ));
    }
}
