//! Deploy Use Case
//!
//! Two phases over the requested ids:
//! 1. Trigger: resolve the designtime version, skip ids whose runtime
//!    already runs it (when comparing versions), queue the rest
//! 2. Poll: check each triggered id until STARTED, an error status or the
//!    check budget runs out
//!
//! Triggering everything first lets the tenant start artifacts in parallel
//! while polling stays sequential.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::entities::DRAFT_VERSION;
use crate::domain::ports::{
    ArchiveCodec, ArtifactAdapter, NoopEventSink, Sleeper, SyncEvent, SyncEventSink,
    TenantClient, ThreadSleeper,
};
use crate::domain::services::{DeployMonitor, PollOutcome};
use crate::domain::value_objects::{DeploymentStatus, Lookup};
use crate::error::{CpiError, CpiResult};
use crate::infrastructure::adapters::{get_adapter, ACTIVE_VERSION};

use super::options::DeployOptions;
use super::result::DeployResult;

/// Deploy use case
pub struct DeployUseCase {
    client: Arc<dyn TenantClient>,
    codec: Arc<dyn ArchiveCodec>,
    sleeper: Arc<dyn Sleeper>,
}

impl DeployUseCase {
    pub fn new(client: Arc<dyn TenantClient>, codec: Arc<dyn ArchiveCodec>) -> Self {
        Self {
            client,
            codec,
            sleeper: Arc::new(ThreadSleeper),
        }
    }

    /// Replace the sleeper used between status checks
    pub fn with_sleeper(mut self, sleeper: Arc<dyn Sleeper>) -> Self {
        self.sleeper = sleeper;
        self
    }

    /// Execute the use case
    pub fn execute(&self, options: &DeployOptions) -> CpiResult<DeployResult> {
        self.execute_with_events(options, Arc::new(NoopEventSink))
    }

    /// Execute the use case with event reporting
    pub fn execute_with_events(
        &self,
        options: &DeployOptions,
        event_sink: Arc<dyn SyncEventSink>,
    ) -> CpiResult<DeployResult> {
        let adapter = get_adapter(options.artifact_type, self.client.clone(), self.codec.clone());
        event_sink.on_event(SyncEvent::Started {
            operation: "deploy",
            scope: options.artifact_type.to_string(),
            artifact_count: options.ids.len(),
        });

        let mut result = DeployResult::new();
        let mut triggered = Vec::new();
        for id in &options.ids {
            if self.trigger(adapter.as_ref(), id, options, event_sink.as_ref())? {
                triggered.push(id.clone());
            } else {
                result.skipped.push(id.clone());
            }
        }

        for id in triggered {
            self.wait_until_started(&id, options, event_sink.as_ref())?;
            result.deployed.push(id);
        }

        event_sink.on_event(SyncEvent::Completed {
            written_count: result.deployed.len(),
            unchanged_count: result.skipped.len(),
            skipped_count: 0,
        });
        Ok(result)
    }

    /// Queue deployment of `id`; `false` when it is already current
    fn trigger(
        &self,
        adapter: &dyn ArtifactAdapter,
        id: &str,
        options: &DeployOptions,
        event_sink: &dyn SyncEventSink,
    ) -> CpiResult<bool> {
        let version = match adapter.get(id, ACTIVE_VERSION)? {
            Lookup::Found(version) => version,
            Lookup::NotFound => return Err(CpiError::NoActiveVersion { id: id.to_string() }),
        };
        // a draft has no saved version to deploy
        if version.eq_ignore_ascii_case(DRAFT_VERSION) {
            return Err(CpiError::NoActiveVersion { id: id.to_string() });
        }

        if options.compare_versions {
            if let Lookup::Found(runtime) = self.client.get_runtime_artifact(id)? {
                if runtime.version == version {
                    info!("{} already runs version {}, skipping deployment", id, version);
                    event_sink.on_event(SyncEvent::DeploySkipped {
                        id: id.to_string(),
                        version,
                    });
                    return Ok(false);
                }
                debug!("{}: runtime {} differs from designtime {}", id, runtime.version, version);
            }
        }

        adapter.deploy(id)?;
        event_sink.on_event(SyncEvent::DeployTriggered { id: id.to_string() });
        Ok(true)
    }

    fn wait_until_started(
        &self,
        id: &str,
        options: &DeployOptions,
        event_sink: &dyn SyncEventSink,
    ) -> CpiResult<()> {
        let mut monitor = DeployMonitor::new(options.max_check_limit);
        loop {
            let status = self.runtime_status(id)?;
            let outcome = monitor.observe(&status);
            event_sink.on_event(SyncEvent::DeployStatus {
                id: id.to_string(),
                check: monitor.checks(),
                status: status.to_string(),
            });
            match outcome {
                PollOutcome::Wait => self.sleeper.sleep(options.delay),
                PollOutcome::Succeeded => {
                    info!("{} started after {} check(s)", id, monitor.checks());
                    return Ok(());
                }
                PollOutcome::Failed(status) => {
                    warn!("{} reported status {}", id, status);
                    // error detail can lag behind the status
                    self.sleeper.sleep(options.delay);
                    let detail = self.client.get_runtime_error_detail(id)?;
                    return Err(CpiError::DeployFailed {
                        id: id.to_string(),
                        status,
                        detail,
                    });
                }
                PollOutcome::TimedOut(status) => {
                    return Err(CpiError::DeployTimedOut {
                        id: id.to_string(),
                        status,
                        checks: monitor.checks(),
                    });
                }
            }
        }
    }

    /// Runtime status; an unregistered runtime artifact is not deployed yet
    fn runtime_status(&self, id: &str) -> CpiResult<DeploymentStatus> {
        Ok(self
            .client
            .get_runtime_artifact(id)?
            .found()
            .map(|runtime| runtime.status)
            .unwrap_or(DeploymentStatus::NotDeployed))
    }
}
