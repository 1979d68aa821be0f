use lazy_static::lazy_static;

lazy_static! {
    pub static ref ARGO_GROUP: String = "argoproj.io".to_string();
    pub static ref CLUSTER_GROUP: String = "cluster.open-cluster-management.io".to_string();
    pub static ref POLICY_GROUP: String = "policy.open-cluster-management.io".to_string();
    pub static ref PLACEMENT_GROUP: String = "apps.open-cluster-management.io".to_string();

    /// The Application this runbook reports on.
    pub static ref SYNC_APP_NAME: String = "odf-cert-sync".to_string();
    pub static ref GITOPS_NAMESPACE: String = "openshift-gitops".to_string();
    pub static ref APP_CONTROLLER_SELECTOR: String =
        "app.kubernetes.io/name=openshift-gitops-application-controller".to_string();

    /// Hub-local cluster registration, never processed by the cleanup.
    pub static ref LOCAL_CLUSTER: String = "local-cluster".to_string();

    pub static ref CA_BUNDLE_CONFIGMAP: String = "cluster-proxy-ca-bundle".to_string();
    pub static ref CA_BUNDLE_NAMESPACE: String = "openshift-config".to_string();
    pub static ref CA_BUNDLE_KEY: String = "ca-bundle.crt".to_string();

    pub static ref KUBECONFIG_SECRET_KEY: String = "kubeconfig".to_string();
    pub static ref ADMIN_KUBECONFIG_SUFFIX: String = "admin-kubeconfig".to_string();
}

/// Stand-in text the extraction job is expected to replace. A bundle whose
/// content still carries either phrase has not been populated yet.
pub const PLACEHOLDER_PHRASES: [&str; 2] = [
    "Placeholder for ODF SSL certificate bundle",
    "This will be populated by the certificate extraction job",
];
