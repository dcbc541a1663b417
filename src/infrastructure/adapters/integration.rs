//! Integration Flow Adapter
//!
//! Content layout: `META-INF/MANIFEST.MF` + `src/main/resources/**`.
//! Parameter values in `src/main/resources/parameters.prop` are not uploaded
//! with the content; they are pushed to the tenant configuration one key at
//! a time by [`ArtifactAdapter::reconcile_parameters`].

use std::fs;
use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use crate::domain::ports::{ArchiveCodec, ArtifactAdapter, TenantClient};
use crate::domain::services::{parse_properties, property};
use crate::domain::value_objects::{ArtifactType, Lookup, ScriptCollectionMap, SyncDirection};
use crate::error::CpiResult;

use super::core::{AdapterCore, ACTIVE_VERSION};
use super::layout::{ContentLayout, PARAMETERS_PATH};

/// Integration flow adapter
pub struct IntegrationAdapter {
    core: AdapterCore,
}

impl IntegrationAdapter {
    pub fn new(client: Arc<dyn TenantClient>, codec: Arc<dyn ArchiveCodec>) -> Self {
        Self {
            core: AdapterCore::new(client, codec, ArtifactType::Integration, ContentLayout::BUNDLE),
        }
    }
}

impl ArtifactAdapter for IntegrationAdapter {
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

    fn reconcile_parameters(&self, id: &str, content_dir: &Path) -> CpiResult<Vec<String>> {
        let path = content_dir.join(PARAMETERS_PATH);
        if !path.is_file() {
            debug!("{} has no {}, nothing to reconcile", id, PARAMETERS_PATH);
            return Ok(Vec::new());
        }
        let local = parse_properties(&fs::read_to_string(&path)?);

        let client = self.core.client();
        let mut updated = Vec::new();
        for parameter in client.get_configurations(id, ACTIVE_VERSION)? {
            match property(&local, &parameter.key) {
                Some(value) if value != parameter.value => {
                    client.update_configuration(id, ACTIVE_VERSION, &parameter.key, value)?;
                    debug!("{}: parameter {} updated", id, parameter.key);
                    updated.push(parameter.key);
                }
                Some(_) => {}
                None => debug!("{}: no local value for parameter {}", id, parameter.key),
            }
        }
        Ok(updated)
    }
}
