//! cpisync - reconciliation core for integration artifacts
//!
//! Keeps the designtime artifacts of a tenant package (integration flows,
//! message mappings, script collections, value mappings) consistent with a
//! version-controlled directory tree, in both directions, and promotes
//! designtime artifacts to running runtime artifacts.
//!
//! The tenant HTTP client and the zip codec are external collaborators:
//! callers supply them through the [`TenantClient`] and [`ArchiveCodec`]
//! ports.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

#[cfg(test)]
mod test_support;

// Re-exports for convenience
pub use application::{
    DeployOptions, DeployResult, DeployUseCase, GitToTenantOptions, GitToTenantResult,
    GitToTenantUseCase, SnapshotOptions, SnapshotResult, SnapshotUseCase, TenantToGitOptions,
    TenantToGitResult, TenantToGitUseCase,
};
pub use config::Config;
pub use domain::ports::{ArchiveCodec, SyncEvent, SyncEventSink, TenantClient};
pub use domain::value_objects::{ArtifactType, DraftPolicy, IdFilter, Lookup};
pub use error::{CpiError, CpiResult, ErrorKind};
pub use infrastructure::{get_adapter, JsonEventSink};
