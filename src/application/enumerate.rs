//! Package/Artifact Enumerator
//!
//! Lists what a package holds on the tenant, grouped by artifact type in
//! `ArtifactType::ALL` order and in tenant listing order within a type.

use std::sync::Arc;

use tracing::debug;

use crate::domain::entities::{ArtifactDescriptor, PackageDescriptor};
use crate::domain::ports::TenantClient;
use crate::domain::services::apply_filter;
use crate::domain::value_objects::{ArtifactType, IdFilter, Lookup};
use crate::error::{CpiError, CpiResult};

pub struct ArtifactEnumerator {
    client: Arc<dyn TenantClient>,
}

impl ArtifactEnumerator {
    pub fn new(client: Arc<dyn TenantClient>) -> Self {
        Self { client }
    }

    /// Every package on the tenant
    pub fn list_packages(&self) -> CpiResult<Vec<PackageDescriptor>> {
        Ok(self.client.list_packages()?)
    }

    /// The package record, or `PackageNotFound`
    pub fn fetch_package(&self, package_id: &str) -> CpiResult<PackageDescriptor> {
        match self.client.get_package(package_id)? {
            Lookup::Found(package) => Ok(package),
            Lookup::NotFound => Err(CpiError::PackageNotFound {
                id: package_id.to_string(),
            }),
        }
    }

    /// All designtime artifacts of every type in `package_id`
    pub fn list_artifacts(&self, package_id: &str) -> CpiResult<Vec<ArtifactDescriptor>> {
        let mut artifacts = Vec::new();
        for artifact_type in ArtifactType::ALL {
            let listed = self
                .client
                .list_designtime_artifacts(package_id, artifact_type)?;
            debug!("{}: {} {} artifact(s)", package_id, listed.len(), artifact_type);
            artifacts.extend(
                listed
                    .into_iter()
                    .map(|summary| ArtifactDescriptor::from_summary(summary, artifact_type)),
            );
        }
        Ok(artifacts)
    }

    /// Listed artifacts narrowed by `filter`
    pub fn select(&self, package_id: &str, filter: &IdFilter) -> CpiResult<Vec<ArtifactDescriptor>> {
        let all = self.list_artifacts(package_id)?;
        apply_filter(all, filter, package_id)
    }
}
