//! Property tests for the deployment status monitor.

use proptest::prelude::*;

use cpisync::domain::services::{DeployMonitor, PollOutcome};
use cpisync::domain::value_objects::DeploymentStatus;

fn status() -> impl Strategy<Value = DeploymentStatus> {
    prop_oneof![
        4 => Just(DeploymentStatus::NotDeployed),
        4 => Just(DeploymentStatus::Starting),
        1 => Just(DeploymentStatus::Started),
        1 => "[A-Z_]{3,10}".prop_map(|s| DeploymentStatus::parse(&s)),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a run always terminates within the check budget.
    #[test]
    fn property_terminates_within_budget(
        max_checks in 1u32..12,
        statuses in proptest::collection::vec(status(), 12),
    ) {
        let mut monitor = DeployMonitor::new(max_checks);
        let mut outcome = PollOutcome::Wait;
        for status in &statuses {
            outcome = monitor.observe(status);
            if outcome.is_terminal() {
                break;
            }
        }
        prop_assert!(outcome.is_terminal());
        prop_assert!(monitor.checks() <= max_checks);
    }

    /// PROPERTY: only pending statuses ever lead to another check.
    #[test]
    fn property_wait_only_while_pending(
        max_checks in 1u32..12,
        status in status(),
    ) {
        let mut monitor = DeployMonitor::new(max_checks);
        let outcome = monitor.observe(&status);
        if outcome == PollOutcome::Wait {
            prop_assert!(status.is_pending());
        }
        if status == DeploymentStatus::Started {
            prop_assert_eq!(outcome, PollOutcome::Succeeded);
        }
    }
}
