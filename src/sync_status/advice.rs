use super::status::Outcome;

/// Static remediation text per branch. This is a runbook: the advice
/// deliberately mirrors what an operator would type by hand.
pub fn remediation(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Synced => SYNCED_ADVICE,
        Outcome::OutOfSync => OUT_OF_SYNC_ADVICE,
        Outcome::Degraded => DEGRADED_ADVICE,
    }
}

const SYNCED_ADVICE: &str = "\
No action required. The application is synced with its source repository.
If certificates were rotated recently, allow a few minutes for managed
clusters to pick up the refreshed bundles before re-checking.
";

const OUT_OF_SYNC_ADVICE: &str = "\
The application has drifted from its source repository. Common causes and
fixes, in order:

  1. A manual change was made to a managed resource. Inspect the diff:
       oc describe application odf-cert-sync -n openshift-gitops
  2. Trigger a manual sync:
       oc patch application odf-cert-sync -n openshift-gitops --type merge \\
         -p '{\"operation\":{\"initiatedBy\":{\"username\":\"admin\"},\"sync\":{\"revision\":\"HEAD\"}}}'
  3. If the sync hangs, check the quota and governance sections above for
     anything blocking resource creation in the namespace.
";

const DEGRADED_ADVICE: &str = "\
The sync state could not be established. Work through the basics first:

  1. Confirm the GitOps operator is running:
       oc get pods -n openshift-gitops
  2. Confirm the application exists:
       oc get application odf-cert-sync -n openshift-gitops
  3. Check the application controller log excerpts above for repository
     connectivity errors, and verify the hub can reach its Git source.
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_branch_has_distinct_advice() {
        let synced = remediation(Outcome::Synced);
        let warned = remediation(Outcome::OutOfSync);
        let failed = remediation(Outcome::Degraded);
        assert!(!synced.is_empty() && !warned.is_empty() && !failed.is_empty());
        assert_ne!(synced, warned);
        assert_ne!(warned, failed);
        assert_ne!(synced, failed);
    }

    #[test]
    fn out_of_sync_branch_offers_a_manual_sync() {
        assert!(remediation(Outcome::OutOfSync).contains("oc patch application"));
    }
}
