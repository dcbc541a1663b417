//! Snapshot Use Case
//!
//! Pulls every package on the tenant into `<root>/<package_id>/`. Read-only
//! packages are skipped and reported; everything else goes through
//! [`TenantToGitUseCase`] with the configured sync policies.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;

use crate::application::enumerate::ArtifactEnumerator;
use crate::application::tenant_to_git::{
    TenantToGitOptions, TenantToGitResult, TenantToGitUseCase,
};
use crate::config::SyncConfig;
use crate::domain::ports::{ArchiveCodec, NoopEventSink, SyncEvent, SyncEventSink, TenantClient};
use crate::error::CpiResult;

/// Options for a whole-tenant snapshot
#[derive(Debug, Clone)]
pub struct SnapshotOptions {
    /// Parent of the package directories
    pub root: PathBuf,
    pub sync: SyncConfig,
}

impl SnapshotOptions {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            sync: SyncConfig::default(),
        }
    }

    pub fn with_sync_config(mut self, sync: SyncConfig) -> Self {
        self.sync = sync;
        self
    }
}

/// Per-package results of a snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnapshotResult {
    /// Synced packages in tenant listing order
    pub packages: Vec<(String, TenantToGitResult)>,
    /// Read-only packages that were not touched
    pub skipped_packages: Vec<String>,
}

impl SnapshotResult {
    pub fn has_changes(&self) -> bool {
        self.packages.iter().any(|(_, result)| result.has_changes())
    }
}

pub struct SnapshotUseCase {
    client: Arc<dyn TenantClient>,
    codec: Arc<dyn ArchiveCodec>,
}

impl SnapshotUseCase {
    pub fn new(client: Arc<dyn TenantClient>, codec: Arc<dyn ArchiveCodec>) -> Self {
        Self { client, codec }
    }

    pub fn execute(&self, options: &SnapshotOptions) -> CpiResult<SnapshotResult> {
        self.execute_with_events(options, Arc::new(NoopEventSink))
    }

    pub fn execute_with_events(
        &self,
        options: &SnapshotOptions,
        event_sink: Arc<dyn SyncEventSink>,
    ) -> CpiResult<SnapshotResult> {
        let packages = ArtifactEnumerator::new(self.client.clone()).list_packages()?;
        let pull = TenantToGitUseCase::new(self.client.clone(), self.codec.clone());

        let mut result = SnapshotResult::default();
        for package in packages {
            if package.is_read_only() {
                info!("package {} is read-only, skipping", package.id);
                event_sink.on_event(SyncEvent::PackageSkipped {
                    id: package.id.clone(),
                    reason: "read-only".to_string(),
                });
                result.skipped_packages.push(package.id);
                continue;
            }

            let pull_options = TenantToGitOptions::new(&package.id, options.root.join(&package.id))
                .with_sync_config(&options.sync);
            let synced = pull.execute_with_events(&pull_options, event_sink.clone())?;
            result.packages.push((package.id, synced));
        }
        Ok(result)
    }
}
