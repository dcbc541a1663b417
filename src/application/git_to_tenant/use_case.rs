//! Git -> Tenant Use Case
//!
//! Per discovered artifact:
//! 1. Stage the managed paths and remap script references
//! 2. Absent on the tenant: create
//! 3. Present: download, compare (parameters excluded), update if different
//! 4. Push changed parameter values to the tenant configuration

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info};

use crate::application::package_sync::{PackagePush, PackageSyncUseCase};
use crate::domain::entities::ArtifactDescriptor;
use crate::domain::ports::{
    ArchiveCodec, ArtifactAdapter, NoopEventSink, SyncEvent, SyncEventSink, TenantClient,
};
use crate::domain::services::apply_filter;
use crate::domain::value_objects::{DirectoryNaming, Lookup, ScriptCollectionMap, SyncDirection};
use crate::error::{CpiError, CpiResult};
use crate::infrastructure::adapters::{get_adapter, remap_script_references, ACTIVE_VERSION};
use crate::infrastructure::fs::{local, Materializer};

use super::discover::{discover_artifacts, LocalArtifact};
use super::options::GitToTenantOptions;
use super::result::GitToTenantResult;

enum Outcome {
    Created,
    Updated,
    Unchanged,
}

/// Git -> Tenant use case
pub struct GitToTenantUseCase {
    client: Arc<dyn TenantClient>,
    codec: Arc<dyn ArchiveCodec>,
}

impl GitToTenantUseCase {
    pub fn new(client: Arc<dyn TenantClient>, codec: Arc<dyn ArchiveCodec>) -> Self {
        Self { client, codec }
    }

    /// Execute the use case
    pub fn execute(&self, options: &GitToTenantOptions) -> CpiResult<GitToTenantResult> {
        self.execute_with_events(options, Arc::new(NoopEventSink))
    }

    /// Execute the use case with event reporting
    pub fn execute_with_events(
        &self,
        options: &GitToTenantOptions,
        event_sink: Arc<dyn SyncEventSink>,
    ) -> CpiResult<GitToTenantResult> {
        let artifacts = self.select(options)?;

        let mut result = GitToTenantResult::new();
        if options.sync_package_details {
            let push = PackageSyncUseCase::new(self.client.clone())
                .push(&options.package_id, &options.source_dir)?;
            if push == PackagePush::NoLocalCopy {
                self.check_package(&options.package_id)?;
            }
            result.package = Some(push);
        } else {
            self.check_package(&options.package_id)?;
        }

        event_sink.on_event(SyncEvent::Started {
            operation: "git_to_tenant",
            scope: options.package_id.clone(),
            artifact_count: artifacts.len(),
        });

        let staging = local::staging_dir(options.work_dir.as_deref())?;
        let materializer = Materializer::new(self.codec.clone(), DirectoryNaming::ById);

        for (index, artifact) in artifacts.iter().enumerate() {
            if event_sink.wants_detailed_events() {
                event_sink.on_event(SyncEvent::ArtifactStarted {
                    index,
                    id: artifact.id.clone(),
                });
            }
            let adapter: Box<dyn ArtifactAdapter> =
                get_adapter(artifact.artifact_type, self.client.clone(), self.codec.clone());

            let staged = staging.path().join("local").join(&artifact.id);
            match self.push_artifact(
                adapter.as_ref(),
                artifact,
                &materializer,
                staging.path(),
                &staged,
                options,
            )? {
                Outcome::Unchanged => {
                    event_sink.on_event(SyncEvent::ArtifactUnchanged {
                        index,
                        id: artifact.id.clone(),
                    });
                    result.unchanged.push(artifact.id.clone());
                }
                outcome => {
                    event_sink.on_event(SyncEvent::ArtifactWritten {
                        index,
                        id: artifact.id.clone(),
                        target: options.package_id.clone(),
                    });
                    match outcome {
                        Outcome::Created => result.created.push(artifact.id.clone()),
                        _ => result.updated.push(artifact.id.clone()),
                    }
                }
            }

            for key in adapter.reconcile_parameters(&artifact.id, &staged)? {
                event_sink.on_event(SyncEvent::ParameterUpdated {
                    id: artifact.id.clone(),
                    key: key.clone(),
                });
                result.parameters_updated.push((artifact.id.clone(), key));
            }
        }

        event_sink.on_event(SyncEvent::Completed {
            written_count: result.created.len() + result.updated.len(),
            unchanged_count: result.unchanged.len(),
            skipped_count: 0,
        });
        Ok(result)
    }

    /// Discovered artifacts narrowed by the id filter
    fn select(&self, options: &GitToTenantOptions) -> CpiResult<Vec<LocalArtifact>> {
        let discovered = discover_artifacts(&options.source_dir)?;
        let descriptors: Vec<ArtifactDescriptor> =
            discovered.iter().map(LocalArtifact::descriptor).collect();
        let selected = apply_filter(descriptors, &options.filter, &options.package_id)?;

        let mut by_id: HashMap<String, LocalArtifact> = discovered
            .into_iter()
            .map(|artifact| (artifact.id.clone(), artifact))
            .collect();
        Ok(selected
            .iter()
            .filter_map(|descriptor| by_id.remove(descriptor.id()))
            .collect())
    }

    fn check_package(&self, package_id: &str) -> CpiResult<()> {
        match self.client.get_package(package_id)? {
            Lookup::NotFound => Err(CpiError::PackageNotFound {
                id: package_id.to_string(),
            }),
            Lookup::Found(package) if package.is_read_only() => {
                Err(CpiError::ReadOnlyPackage { id: package.id })
            }
            Lookup::Found(_) => Ok(()),
        }
    }

    fn push_artifact(
        &self,
        adapter: &dyn ArtifactAdapter,
        artifact: &LocalArtifact,
        materializer: &Materializer,
        staging_root: &Path,
        staged: &Path,
        options: &GitToTenantOptions,
    ) -> CpiResult<Outcome> {
        local::remove_path(staged)?;
        adapter.copy_content(&artifact.dir, staged)?;
        remap_script_references(staged, &options.script_map)?;

        match adapter.get(&artifact.id, ACTIVE_VERSION)? {
            Lookup::NotFound => {
                adapter.create(&artifact.id, &artifact.name, &options.package_id, staged)?;
                Ok(Outcome::Created)
            }
            Lookup::Found(version) => {
                let archive = staging_root
                    .join("download")
                    .join(format!("{}.zip", artifact.id));
                let remote = staging_root.join("tenant").join(&artifact.id);
                adapter.download(&archive, &artifact.id)?;
                materializer.unpack(&archive, &remote)?;

                let differs = adapter.compare_content(
                    staged,
                    &remote,
                    &ScriptCollectionMap::new(),
                    SyncDirection::GitToTenant,
                )?;
                if !differs {
                    debug!("{} matches tenant version {}", artifact.id, version);
                    return Ok(Outcome::Unchanged);
                }
                adapter.update(&artifact.id, &artifact.name, &options.package_id, staged)?;
                info!("{} updated from {}", artifact.id, artifact.dir.display());
                Ok(Outcome::Updated)
            }
        }
    }
}
