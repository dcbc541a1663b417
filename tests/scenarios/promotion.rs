//! Scenario: promoting designtime artifacts to runtime
//!
//! - Deployments are triggered for every id before any polling
//! - Polling stops at STARTED, an error status, or the check budget
//! - Artifacts already running their designtime version are skipped

use std::cell::RefCell;
use std::sync::Arc;
use std::time::Duration;

use cpisync::application::{DeployOptions, DeployResult, DeployUseCase};
use cpisync::domain::ports::Sleeper;
use cpisync::{CpiError, CpiResult, ErrorKind};

use crate::common::*;

#[derive(Default)]
struct CountingSleeper {
    calls: RefCell<u32>,
}

impl Sleeper for CountingSleeper {
    fn sleep(&self, _duration: Duration) {
        *self.calls.borrow_mut() += 1;
    }
}

fn deploy(tenant: &Arc<FakeTenant>, options: &DeployOptions) -> (CpiResult<DeployResult>, u32) {
    let sleeper = Arc::new(CountingSleeper::default());
    let result = DeployUseCase::new(tenant.clone(), Arc::new(JsonCodec))
        .with_sleeper(sleeper.clone())
        .execute(options);
    let sleeps = *sleeper.calls.borrow();
    (result, sleeps)
}

/// SCENARIO: flow starts on the third check
#[test]
fn scenario_deploy_until_started() {
    let tenant = Arc::new(orders_tenant().statuses(
        "Orders_Replicate",
        &["STARTING", "STARTING", "STARTED"],
    ));

    let (result, sleeps) = deploy(
        &tenant,
        &DeployOptions::new(["Orders_Replicate"]).with_max_check_limit(3),
    );

    assert_eq!(result.unwrap().deployed, vec!["Orders_Replicate"]);
    assert_eq!(sleeps, 2);
    assert_eq!(tenant.log(), vec!["deploy Orders_Replicate"]);
}

/// SCENARIO: flow never leaves STARTING
#[test]
fn scenario_deploy_times_out() {
    let tenant = Arc::new(orders_tenant().statuses("Orders_Replicate", &["STARTING"]));

    let (result, _) = deploy(
        &tenant,
        &DeployOptions::new(["Orders_Replicate"]).with_max_check_limit(3),
    );

    let err = result.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Deployment);
    assert!(err.to_string().contains("STARTING"));
}

/// SCENARIO: flow fails to start
#[test]
fn scenario_deploy_error_carries_detail() {
    let tenant = Arc::new(orders_tenant().statuses("Orders_Replicate", &["ERROR"]));

    let (result, sleeps) = deploy(&tenant, &DeployOptions::new(["Orders_Replicate"]));

    match result.unwrap_err() {
        CpiError::DeployFailed { status, detail, .. } => {
            assert_eq!(status, "ERROR");
            assert!(detail.contains("threw an exception"));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(sleeps, 1);
}

/// SCENARIO: runtime already on the designtime version
#[test]
fn scenario_deploy_skips_current_version() {
    let tenant = Arc::new(orders_tenant().running("Orders_Replicate", "1.0.4"));

    let (result, sleeps) = deploy(&tenant, &DeployOptions::new(["Orders_Replicate"]));

    assert_eq!(result.unwrap().skipped, vec!["Orders_Replicate"]);
    assert!(tenant.log().is_empty());
    assert_eq!(sleeps, 0);
}

/// SCENARIO: stale runtime version is redeployed
#[test]
fn scenario_deploy_replaces_stale_version() {
    let tenant = Arc::new(
        orders_tenant()
            .running("Orders_Replicate", "1.0.3")
            .statuses("Orders_Replicate", &["STARTED"]),
    );

    let (result, _) = deploy(&tenant, &DeployOptions::new(["Orders_Replicate"]));

    assert_eq!(result.unwrap().deployed, vec!["Orders_Replicate"]);
    assert_eq!(tenant.log(), vec!["deploy Orders_Replicate"]);
}
