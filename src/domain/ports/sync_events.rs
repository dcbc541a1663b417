//! Sync Event Port
//!
//! Provides an observable interface for sync and deploy operations.
//! Enables progress reporting, JSON event streams, and debugging.

/// Event emitted during sync, snapshot and deploy operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncEvent {
    /// Operation started
    Started {
        operation: &'static str,
        scope: String,
        artifact_count: usize,
    },

    /// Artifact processing started
    ArtifactStarted { index: usize, id: String },

    /// Artifact content was written to its target (directory or tenant)
    ArtifactWritten {
        index: usize,
        id: String,
        target: String,
    },

    /// Artifact content matched; nothing written
    ArtifactUnchanged { index: usize, id: String },

    /// Artifact was not processed
    ArtifactSkipped {
        index: usize,
        id: String,
        reason: String,
    },

    /// A tenant configuration parameter was updated
    ParameterUpdated { id: String, key: String },

    /// A whole package was not processed
    PackageSkipped { id: String, reason: String },

    /// Deployment was queued on the tenant
    DeployTriggered { id: String },

    /// Runtime already runs the designtime version
    DeploySkipped { id: String, version: String },

    /// A deployment status check returned
    DeployStatus {
        id: String,
        check: u32,
        status: String,
    },

    /// Operation completed
    Completed {
        written_count: usize,
        unchanged_count: usize,
        skipped_count: usize,
    },
}

/// Trait for receiving sync events
///
/// Implementations can be:
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: Silent operation
pub trait SyncEventSink {
    /// Handle a sync event
    fn on_event(&self, event: SyncEvent);

    /// Check if this sink wants per-artifact events
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl SyncEventSink for NoopEventSink {
    fn on_event(&self, _event: SyncEvent) {}

    fn wants_detailed_events(&self) -> bool {
        false
    }
}
