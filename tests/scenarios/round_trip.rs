//! Scenario: Tenant -> Git -> Tenant
//!
//! Journey: a developer pulls a package into a fresh repository, edits it
//! and pushes it back.
//!
//! Success Criteria:
//! - Repeated pulls and pushes without edits change nothing
//! - Parameter edits reach the tenant configuration, not the artifact
//! - Content edits update exactly the edited artifact

use std::sync::Arc;

use tempfile::tempdir;

use cpisync::application::{
    GitToTenantOptions, GitToTenantUseCase, SnapshotOptions, SnapshotUseCase, TenantToGitOptions,
    TenantToGitUseCase,
};
use cpisync::domain::entities::PackageDescriptor;
use cpisync::domain::value_objects::ScriptCollectionMap;

use crate::common::*;

/// SCENARIO: pull, pull again, push back unchanged
#[test]
fn scenario_round_trip_is_idempotent() {
    let tenant = Arc::new(orders_tenant());
    let repo = tempdir().unwrap();
    let package_dir = repo.path().join("Orders");
    let pull = TenantToGitUseCase::new(tenant.clone(), Arc::new(JsonCodec));
    let push = GitToTenantUseCase::new(tenant.clone(), Arc::new(JsonCodec));

    // Step 1: first pull adds every artifact
    let first = pull
        .execute(&TenantToGitOptions::new("Orders", &package_dir))
        .unwrap();
    assert_eq!(
        first.added,
        vec!["Orders_Replicate", "Common_Scripts_DEV", "Country_Codes"]
    );
    assert_eq!(
        read(&package_dir.join("Orders_Replicate").join(FLOW_MODEL_PATH)),
        FLOW_MODEL
    );

    // Step 2: second pull writes nothing
    let second = pull
        .execute(&TenantToGitOptions::new("Orders", &package_dir))
        .unwrap();
    assert!(!second.has_changes(), "second pull changed {:?}", second);

    // Step 3: pushing the untouched tree back is a no-op
    let pushed = push
        .execute(&GitToTenantOptions::new("Orders", &package_dir))
        .unwrap();
    assert!(!pushed.has_changes(), "push changed {:?}", pushed);
    assert!(tenant.log().is_empty(), "unexpected calls: {:?}", tenant.log());
}

/// SCENARIO: a parameter edit is applied as configuration
#[test]
fn scenario_parameter_edit_reaches_configuration() {
    let tenant = Arc::new(orders_tenant());
    let repo = tempdir().unwrap();
    TenantToGitUseCase::new(tenant.clone(), Arc::new(JsonCodec))
        .execute(&TenantToGitOptions::new("Orders", repo.path()))
        .unwrap();

    write(
        &repo.path().join("Orders_Replicate").join(FLOW_PARAMETERS_PATH),
        "Receiver_Host=orders.qa.example.com\n",
    );

    let result = GitToTenantUseCase::new(tenant.clone(), Arc::new(JsonCodec))
        .execute(&GitToTenantOptions::new("Orders", repo.path()))
        .unwrap();

    assert!(result.created.is_empty() && result.updated.is_empty());
    assert_eq!(
        result.parameters_updated,
        vec![("Orders_Replicate".to_string(), "Receiver_Host".to_string())]
    );
    assert_eq!(
        tenant.log(),
        vec!["configure Orders_Replicate Receiver_Host=orders.qa.example.com"]
    );
}

/// SCENARIO: a content edit updates only that artifact
#[test]
fn scenario_content_edit_updates_one_artifact() {
    let tenant = Arc::new(orders_tenant());
    let repo = tempdir().unwrap();
    TenantToGitUseCase::new(tenant.clone(), Arc::new(JsonCodec))
        .execute(&TenantToGitOptions::new("Orders", repo.path()))
        .unwrap();

    write(
        &repo
            .path()
            .join("Common_Scripts_DEV/src/main/resources/script/util.groovy"),
        "def util() { return 42 }\n",
    );

    let result = GitToTenantUseCase::new(tenant.clone(), Arc::new(JsonCodec))
        .execute(&GitToTenantOptions::new("Orders", repo.path()))
        .unwrap();

    assert_eq!(result.updated, vec!["Common_Scripts_DEV"]);
    assert_eq!(tenant.log(), vec!["update Common_Scripts_DEV"]);
    assert_eq!(
        tenant.files_of("Common_Scripts_DEV")["src/main/resources/script/util.groovy"],
        "def util() { return 42 }\n"
    );
}

/// SCENARIO: pushing into an empty package creates only managed content
#[test]
fn scenario_push_into_empty_package() {
    let source = Arc::new(orders_tenant());
    let repo = tempdir().unwrap();
    TenantToGitUseCase::new(source, Arc::new(JsonCodec))
        .execute(&TenantToGitOptions::new("Orders", repo.path()))
        .unwrap();

    let target = Arc::new(FakeTenant::new().package(PackageDescriptor::new("Orders", "Orders")));
    let result = GitToTenantUseCase::new(target.clone(), Arc::new(JsonCodec))
        .execute(&GitToTenantOptions::new("Orders", repo.path()))
        .unwrap();

    assert_eq!(
        result.created,
        vec!["Orders_Replicate", "Common_Scripts_DEV", "Country_Codes"]
    );
    let flow = target.files_of("Orders_Replicate");
    assert!(flow.contains_key(FLOW_MODEL_PATH));
    assert!(!flow.contains_key("metainfo.prop"));
}

/// SCENARIO: script collection references follow the environment
#[test]
fn scenario_script_map_on_pull() {
    let tenant = Arc::new(orders_tenant());
    let repo = tempdir().unwrap();
    let options = TenantToGitOptions::new("Orders", repo.path()).with_script_map(
        ScriptCollectionMap::new().with_pair("Common_Scripts_DEV", "Common_Scripts_QA"),
    );
    let pull = TenantToGitUseCase::new(tenant, Arc::new(JsonCodec));

    pull.execute(&options).unwrap();
    let model = read(&repo.path().join("Orders_Replicate").join(FLOW_MODEL_PATH));
    assert!(model.contains("<value>Common_Scripts_QA</value>"));

    assert!(!pull.execute(&options).unwrap().has_changes());
}

/// SCENARIO: snapshot of the whole tenant
#[test]
fn scenario_snapshot_whole_tenant() {
    let tenant = Arc::new(orders_tenant().package(PackageDescriptor::new("Empty", "Empty")));
    let root = tempdir().unwrap();

    let result = SnapshotUseCase::new(tenant, Arc::new(JsonCodec))
        .execute(&SnapshotOptions::new(root.path()))
        .unwrap();

    assert_eq!(result.packages.len(), 2);
    assert!(root
        .path()
        .join("Orders/Country_Codes/value_mapping.xml")
        .is_file());
    assert!(result.packages[1].1.added.is_empty());
}
