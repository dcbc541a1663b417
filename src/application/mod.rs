//! Application Layer
//!
//! Use cases that orchestrate the sync flows.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `TenantToGitUseCase` - Pull one package into a directory tree
//! - `GitToTenantUseCase` - Push a directory tree into one package
//! - `DeployUseCase` - Trigger deployments and poll until started
//! - `SnapshotUseCase` - Pull every writable package on the tenant
//! - `PackageSyncUseCase` - Package metadata in both directions
//!
//! ## Services
//!
//! - `ArtifactEnumerator` - List and filter what a package holds

pub mod deploy;
pub mod enumerate;
pub mod git_to_tenant;
pub mod package_sync;
pub mod snapshot;
pub mod tenant_to_git;

pub use deploy::{DeployOptions, DeployResult, DeployUseCase};
pub use enumerate::ArtifactEnumerator;
pub use git_to_tenant::{
    discover_artifacts, GitToTenantOptions, GitToTenantResult, GitToTenantUseCase, LocalArtifact,
};
pub use package_sync::{PackagePush, PackageSyncUseCase};
pub use snapshot::{SnapshotOptions, SnapshotResult, SnapshotUseCase};
pub use tenant_to_git::{TenantToGitOptions, TenantToGitResult, TenantToGitUseCase};
