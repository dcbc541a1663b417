//! Tenant -> Git Use Case
//!
//! Per artifact, in enumeration order:
//! 1. Apply the draft policy
//! 2. Download and unpack into staging
//! 3. Existing directory: compare, copy managed paths only if different
//! 4. New directory: remap script references, move staging into place
//!
//! Staging is removed when the pass ends, whether it succeeded or not.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::enumerate::ArtifactEnumerator;
use crate::application::package_sync::store_package;
use crate::domain::entities::ArtifactDescriptor;
use crate::domain::ports::{
    ArchiveCodec, ArtifactAdapter, NoopEventSink, SyncEvent, SyncEventSink, TenantClient,
};
use crate::domain::value_objects::{DraftPolicy, SyncDirection};
use crate::error::{CpiError, CpiResult};
use crate::infrastructure::adapters::{get_adapter, remap_script_references, MANIFEST_PATH};
use crate::infrastructure::fs::{local, Materializer};

use super::options::TenantToGitOptions;
use super::result::TenantToGitResult;

/// What happened to one artifact directory
enum Outcome {
    Added,
    Updated,
    Unchanged,
}

/// Tenant -> Git use case
pub struct TenantToGitUseCase {
    client: Arc<dyn TenantClient>,
    codec: Arc<dyn ArchiveCodec>,
}

impl TenantToGitUseCase {
    pub fn new(client: Arc<dyn TenantClient>, codec: Arc<dyn ArchiveCodec>) -> Self {
        Self { client, codec }
    }

    /// Execute the use case
    pub fn execute(&self, options: &TenantToGitOptions) -> CpiResult<TenantToGitResult> {
        self.execute_with_events(options, Arc::new(NoopEventSink))
    }

    /// Execute the use case with event reporting
    pub fn execute_with_events(
        &self,
        options: &TenantToGitOptions,
        event_sink: Arc<dyn SyncEventSink>,
    ) -> CpiResult<TenantToGitResult> {
        let enumerator = ArtifactEnumerator::new(self.client.clone());
        let package = enumerator.fetch_package(&options.package_id)?;
        if package.is_read_only() {
            return Err(CpiError::ReadOnlyPackage { id: package.id });
        }

        let artifacts = enumerator.select(&options.package_id, &options.filter)?;
        event_sink.on_event(SyncEvent::Started {
            operation: "tenant_to_git",
            scope: options.package_id.clone(),
            artifact_count: artifacts.len(),
        });

        let mut result = TenantToGitResult::new();
        if options.sync_package_details {
            result.package_updated = store_package(&package, &options.target_dir)?;
        }

        let staging = local::staging_dir(options.work_dir.as_deref())?;
        let materializer = Materializer::new(self.codec.clone(), options.dir_naming);

        for (index, artifact) in artifacts.iter().enumerate() {
            let id = artifact.id().to_string();
            if event_sink.wants_detailed_events() {
                event_sink.on_event(SyncEvent::ArtifactStarted {
                    index,
                    id: id.clone(),
                });
            }

            if artifact.is_draft() {
                match options.draft_policy {
                    DraftPolicy::Skip => {
                        info!("{} {} is a draft, skipping", artifact.artifact_type(), id);
                        event_sink.on_event(SyncEvent::ArtifactSkipped {
                            index,
                            id: id.clone(),
                            reason: "draft".to_string(),
                        });
                        result.skipped.push(id);
                        continue;
                    }
                    DraftPolicy::Error => {
                        return Err(CpiError::DraftArtifact {
                            id,
                            package_id: options.package_id.clone(),
                        });
                    }
                    DraftPolicy::Add => {
                        warn!("{} {} is a draft, syncing anyway", artifact.artifact_type(), id);
                    }
                }
            }

            let target = materializer.directory_for(&options.target_dir, artifact);
            match self.sync_artifact(artifact, &materializer, staging.path(), &target, options)? {
                Outcome::Unchanged => {
                    event_sink.on_event(SyncEvent::ArtifactUnchanged { index, id: id.clone() });
                    result.unchanged.push(id);
                }
                outcome => {
                    event_sink.on_event(SyncEvent::ArtifactWritten {
                        index,
                        id: id.clone(),
                        target: target.display().to_string(),
                    });
                    match outcome {
                        Outcome::Added => result.added.push(id),
                        _ => result.updated.push(id),
                    }
                }
            }
        }

        event_sink.on_event(SyncEvent::Completed {
            written_count: result.written_count(),
            unchanged_count: result.unchanged.len(),
            skipped_count: result.skipped.len(),
        });
        Ok(result)
    }

    fn sync_artifact(
        &self,
        artifact: &ArtifactDescriptor,
        materializer: &Materializer,
        staging_root: &Path,
        target: &Path,
        options: &TenantToGitOptions,
    ) -> CpiResult<Outcome> {
        let adapter: Box<dyn ArtifactAdapter> =
            get_adapter(artifact.artifact_type(), self.client.clone(), self.codec.clone());
        let archive = staging_root
            .join("download")
            .join(format!("{}.zip", artifact.id()));
        let staged = staging_root
            .join("content")
            .join(materializer.directory_name(artifact));

        adapter.download(&archive, artifact.id())?;
        materializer.unpack(&archive, &staged)?;
        local::remove_path(&archive)?;

        if target.join(MANIFEST_PATH).is_file() {
            let differs = adapter.compare_content(
                &staged,
                target,
                &options.script_map,
                SyncDirection::TenantToGit,
            )?;
            if !differs {
                debug!("{} unchanged", artifact.id());
                return Ok(Outcome::Unchanged);
            }
            remap_script_references(&staged, &options.script_map)?;
            adapter.copy_content(&staged, target)?;
            info!("{} updated in {}", artifact.id(), target.display());
            Ok(Outcome::Updated)
        } else {
            remap_script_references(&staged, &options.script_map)?;
            materializer.replace(&staged, target)?;
            info!("{} added in {}", artifact.id(), target.display());
            Ok(Outcome::Added)
        }
    }
}
