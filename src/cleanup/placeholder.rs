use anyhow::Result;
use k8s_openapi::api::core::v1::ConfigMap;
use kube::{
    api::{Api, DeleteParams},
    Client,
};
use tracing::{debug, info};

use crate::api::constants::{
    CA_BUNDLE_CONFIGMAP, CA_BUNDLE_KEY, CA_BUNDLE_NAMESPACE, PLACEHOLDER_PHRASES,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanupAction {
    /// Placeholder text found, ConfigMap removed.
    Deleted,
    /// ConfigMap was already gone. Nothing to do.
    AlreadyAbsent,
    /// Real content, or no bundle key at all. Left untouched.
    NoPlaceholder,
}

/// Substring match against the known stand-in phrases. Intentionally loose:
/// the extraction job owns the real bundle format, and anything that still
/// quotes the placeholder text has not been populated.
pub fn contains_placeholder(content: &str) -> bool {
    PLACEHOLDER_PHRASES
        .iter()
        .any(|phrase| content.contains(phrase))
}

/// Whether the bundle on this ConfigMap is still the stand-in. A missing
/// data map or missing bundle key never triggers a delete.
pub fn bundle_needs_cleanup(cm: &ConfigMap) -> bool {
    cm.data
        .as_ref()
        .and_then(|d| d.get(CA_BUNDLE_KEY.as_str()))
        .map(|content| contains_placeholder(content))
        .unwrap_or(false)
}

/// Inspect the proxy CA bundle on one spoke and delete it if it still
/// carries placeholder text. Absent ConfigMaps count as done, so running
/// the cleanup twice in a row is safe.
pub async fn inspect_and_clean(spoke: Client) -> Result<CleanupAction> {
    let configmaps: Api<ConfigMap> = Api::namespaced(spoke, CA_BUNDLE_NAMESPACE.as_str());
    let cm = match configmaps.get_opt(CA_BUNDLE_CONFIGMAP.as_str()).await? {
        Some(cm) => cm,
        None => return Ok(CleanupAction::AlreadyAbsent),
    };

    if !bundle_needs_cleanup(&cm) {
        debug!(
            "{}/{} holds real content, leaving it alone",
            CA_BUNDLE_NAMESPACE.as_str(),
            CA_BUNDLE_CONFIGMAP.as_str()
        );
        return Ok(CleanupAction::NoPlaceholder);
    }

    match configmaps
        .delete(CA_BUNDLE_CONFIGMAP.as_str(), &DeleteParams::default())
        .await
    {
        Ok(_) => {
            info!(
                "deleted {}/{}",
                CA_BUNDLE_NAMESPACE.as_str(),
                CA_BUNDLE_CONFIGMAP.as_str()
            );
            Ok(CleanupAction::Deleted)
        }
        // Deleted out from under us between the read and the delete.
        Err(kube::Error::Api(ae)) if ae.code == 404 => Ok(CleanupAction::AlreadyAbsent),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[rstest]
    #[case("Placeholder for ODF SSL certificate bundle", true)]
    #[case("This will be populated by the certificate extraction job", true)]
    #[case("# header\nPlaceholder for ODF SSL certificate bundle\n", true)]
    #[case("-----BEGIN CERTIFICATE-----\nMIIB...\n-----END CERTIFICATE-----", false)]
    #[case("", false)]
    fn placeholder_phrases_match_as_substrings(#[case] content: &str, #[case] expected: bool) {
        assert_eq!(contains_placeholder(content), expected);
    }

    #[test]
    fn configmap_with_placeholder_needs_cleanup() {
        let cm: ConfigMap = serde_json::from_value(json!({
            "metadata": {"name": "cluster-proxy-ca-bundle", "namespace": "openshift-config"},
            "data": {"ca-bundle.crt": "Placeholder for ODF SSL certificate bundle"}
        }))
        .unwrap();
        assert!(bundle_needs_cleanup(&cm));
    }

    #[test]
    fn configmap_with_real_bundle_is_left_alone() {
        let cm: ConfigMap = serde_json::from_value(json!({
            "metadata": {"name": "cluster-proxy-ca-bundle", "namespace": "openshift-config"},
            "data": {"ca-bundle.crt": "-----BEGIN CERTIFICATE-----"}
        }))
        .unwrap();
        assert!(!bundle_needs_cleanup(&cm));
    }

    #[test]
    fn configmap_without_bundle_key_is_left_alone() {
        let cm: ConfigMap = serde_json::from_value(json!({
            "metadata": {"name": "cluster-proxy-ca-bundle", "namespace": "openshift-config"},
            "data": {"other-key": "whatever"}
        }))
        .unwrap();
        assert!(!bundle_needs_cleanup(&cm));

        let empty: ConfigMap = serde_json::from_value(json!({
            "metadata": {"name": "cluster-proxy-ca-bundle", "namespace": "openshift-config"}
        }))
        .unwrap();
        assert!(!bundle_needs_cleanup(&empty));
    }
}
