//! Tenant Client Port
//!
//! Authenticated request/response access to the remote tenant. The wire
//! protocol, credentials and token handling live behind this trait.
//!
//! Existence queries return [`Lookup::NotFound`] for a 404-equivalent
//! response; only transport or server failures are errors.

use crate::domain::entities::{
    ArtifactSummary, ConfigParameter, PackageDescriptor, RuntimeArtifact,
};
use crate::domain::value_objects::{ArtifactType, Lookup};

/// Designtime artifact content sent on create/update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPayload {
    pub id: String,
    pub name: String,
    pub package_id: String,
    /// Encoded artifact content (archive bytes)
    pub content: Vec<u8>,
}

/// Remote tenant operations consumed by the reconciliation core
pub trait TenantClient {
    /// List all packages
    fn list_packages(&self) -> anyhow::Result<Vec<PackageDescriptor>>;

    /// Get a package by id
    fn get_package(&self, id: &str) -> anyhow::Result<Lookup<PackageDescriptor>>;

    /// Create a package
    fn create_package(&self, package: &PackageDescriptor) -> anyhow::Result<()>;

    /// Update a package's metadata
    fn update_package(&self, package: &PackageDescriptor) -> anyhow::Result<()>;

    /// List designtime artifacts of one type in a package, in tenant order
    fn list_designtime_artifacts(
        &self,
        package_id: &str,
        artifact_type: ArtifactType,
    ) -> anyhow::Result<Vec<ArtifactSummary>>;

    /// Get the version string of a designtime artifact
    fn get_designtime_artifact(
        &self,
        artifact_type: ArtifactType,
        id: &str,
        version: &str,
    ) -> anyhow::Result<Lookup<String>>;

    /// Create a designtime artifact
    fn create_designtime_artifact(
        &self,
        artifact_type: ArtifactType,
        payload: &ArtifactPayload,
    ) -> anyhow::Result<()>;

    /// Overwrite a designtime artifact
    fn update_designtime_artifact(
        &self,
        artifact_type: ArtifactType,
        payload: &ArtifactPayload,
    ) -> anyhow::Result<()>;

    /// Delete a designtime artifact
    fn delete_designtime_artifact(&self, artifact_type: ArtifactType, id: &str)
        -> anyhow::Result<()>;

    /// Download designtime artifact content
    fn download_designtime_artifact(
        &self,
        artifact_type: ArtifactType,
        id: &str,
        version: &str,
    ) -> anyhow::Result<Vec<u8>>;

    /// Queue a designtime artifact for deployment
    fn deploy_designtime_artifact(&self, artifact_type: ArtifactType, id: &str)
        -> anyhow::Result<()>;

    /// Get a runtime artifact
    fn get_runtime_artifact(&self, id: &str) -> anyhow::Result<Lookup<RuntimeArtifact>>;

    /// Undeploy a runtime artifact
    fn undeploy_runtime_artifact(&self, id: &str) -> anyhow::Result<Lookup<()>>;

    /// Error detail of a runtime artifact in an error status
    fn get_runtime_error_detail(&self, id: &str) -> anyhow::Result<String>;

    /// Externalized configuration parameters of a designtime artifact
    fn get_configurations(&self, id: &str, version: &str) -> anyhow::Result<Vec<ConfigParameter>>;

    /// Set one configuration parameter
    fn update_configuration(
        &self,
        id: &str,
        version: &str,
        key: &str,
        value: &str,
    ) -> anyhow::Result<()>;
}
