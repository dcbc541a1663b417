//! Script Collection Adapter
//!
//! Content layout: `META-INF/MANIFEST.MF` + `src/main/resources/**`.
//! Integration flows reference collections by id; see `ScriptCollectionMap`
//! for how those references are renamed between environments.

use std::path::Path;
use std::sync::Arc;

use crate::domain::ports::{ArchiveCodec, ArtifactAdapter, TenantClient};
use crate::domain::value_objects::{ArtifactType, Lookup, ScriptCollectionMap, SyncDirection};
use crate::error::CpiResult;

use super::core::AdapterCore;
use super::layout::ContentLayout;

/// Script collection adapter
pub struct ScriptCollectionAdapter {
    core: AdapterCore,
}

impl ScriptCollectionAdapter {
    pub fn new(client: Arc<dyn TenantClient>, codec: Arc<dyn ArchiveCodec>) -> Self {
        Self {
            core: AdapterCore::new(client, codec, ArtifactType::ScriptCollection, ContentLayout::BUNDLE),
        }
    }
}

impl ArtifactAdapter for ScriptCollectionAdapter {
    fn artifact_type(&self) -> ArtifactType {
        self.core.artifact_type()
    }

    fn create(&self, id: &str, name: &str, package_id: &str, content_dir: &Path) -> CpiResult<()> {
        self.core.create(id, name, package_id, content_dir)
    }

    fn update(&self, id: &str, name: &str, package_id: &str, content_dir: &Path) -> CpiResult<()> {
        self.core.update(id, name, package_id, content_dir)
    }

    fn deploy(&self, id: &str) -> CpiResult<()> {
        self.core.deploy(id)
    }

    fn get(&self, id: &str, version: &str) -> CpiResult<Lookup<String>> {
        self.core.get(id, version)
    }

    fn download(&self, target_file: &Path, id: &str) -> CpiResult<()> {
        self.core.download(target_file, id)
    }

    fn copy_content(&self, src_dir: &Path, tgt_dir: &Path) -> CpiResult<()> {
        self.core.copy_content(src_dir, tgt_dir)
    }

    fn compare_content(
        &self,
        src_dir: &Path,
        tgt_dir: &Path,
        script_map: &ScriptCollectionMap,
        direction: SyncDirection,
    ) -> CpiResult<bool> {
        self.core
            .compare_content(src_dir, tgt_dir, script_map, direction)
    }
}
