//! Shared adapter plumbing
//!
//! Every adapter talks to the same tenant client and archive codec; only the
//! artifact type and content layout change. Type-specific behaviour stays in
//! the individual adapters.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::ports::{ArchiveCodec, ArtifactPayload, TenantClient};
use crate::domain::value_objects::{ArtifactType, Lookup, ScriptCollectionMap, SyncDirection};
use crate::error::{CpiError, CpiResult};

use super::layout::ContentLayout;

/// Designtime version selector for the current content
pub const ACTIVE_VERSION: &str = "active";

pub(crate) struct AdapterCore {
    client: Arc<dyn TenantClient>,
    codec: Arc<dyn ArchiveCodec>,
    artifact_type: ArtifactType,
    layout: ContentLayout,
}

impl AdapterCore {
    pub(crate) fn new(
        client: Arc<dyn TenantClient>,
        codec: Arc<dyn ArchiveCodec>,
        artifact_type: ArtifactType,
        layout: ContentLayout,
    ) -> Self {
        Self {
            client,
            codec,
            artifact_type,
            layout,
        }
    }

    pub(crate) fn artifact_type(&self) -> ArtifactType {
        self.artifact_type
    }

    pub(crate) fn client(&self) -> &dyn TenantClient {
        self.client.as_ref()
    }

    fn payload(
        &self,
        id: &str,
        name: &str,
        package_id: &str,
        content_dir: &Path,
    ) -> CpiResult<ArtifactPayload> {
        let content = self
            .codec
            .pack(content_dir)
            .map_err(|source| CpiError::Archive {
                path: content_dir.to_path_buf(),
                source,
            })?;
        Ok(ArtifactPayload {
            id: id.to_string(),
            name: name.to_string(),
            package_id: package_id.to_string(),
            content,
        })
    }

    pub(crate) fn create(
        &self,
        id: &str,
        name: &str,
        package_id: &str,
        content_dir: &Path,
    ) -> CpiResult<()> {
        let payload = self.payload(id, name, package_id, content_dir)?;
        self.client
            .create_designtime_artifact(self.artifact_type, &payload)?;
        info!("{} {} created in package {}", self.artifact_type, id, package_id);
        Ok(())
    }

    pub(crate) fn update(
        &self,
        id: &str,
        name: &str,
        package_id: &str,
        content_dir: &Path,
    ) -> CpiResult<()> {
        let payload = self.payload(id, name, package_id, content_dir)?;
        self.client
            .update_designtime_artifact(self.artifact_type, &payload)?;
        info!("{} {} updated in package {}", self.artifact_type, id, package_id);
        Ok(())
    }

    pub(crate) fn delete(&self, id: &str) -> CpiResult<()> {
        self.client
            .delete_designtime_artifact(self.artifact_type, id)?;
        debug!("{} {} deleted", self.artifact_type, id);
        Ok(())
    }

    pub(crate) fn deploy(&self, id: &str) -> CpiResult<()> {
        self.client
            .deploy_designtime_artifact(self.artifact_type, id)?;
        info!("{} {} queued for deployment", self.artifact_type, id);
        Ok(())
    }

    pub(crate) fn get(&self, id: &str, version: &str) -> CpiResult<Lookup<String>> {
        Ok(self
            .client
            .get_designtime_artifact(self.artifact_type, id, version)?)
    }

    pub(crate) fn download(&self, target_file: &Path, id: &str) -> CpiResult<()> {
        let content =
            self.client
                .download_designtime_artifact(self.artifact_type, id, ACTIVE_VERSION)?;
        if let Some(parent) = target_file.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(target_file, content)?;
        debug!("{} {} downloaded to {}", self.artifact_type, id, target_file.display());
        Ok(())
    }

    pub(crate) fn copy_content(&self, src_dir: &Path, tgt_dir: &Path) -> CpiResult<()> {
        self.layout.copy(src_dir, tgt_dir)
    }

    pub(crate) fn compare_content(
        &self,
        src_dir: &Path,
        tgt_dir: &Path,
        script_map: &ScriptCollectionMap,
        direction: SyncDirection,
    ) -> CpiResult<bool> {
        self.layout.differs(src_dir, tgt_dir, script_map, direction)
    }
}
