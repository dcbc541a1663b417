//! JSON Event Sink
//!
//! Writes sync events as NDJSON, one object per line, each stamped with an
//! RFC 3339 UTC timestamp.

use std::io::{self, Write};
use std::sync::Mutex;

use chrono::{SecondsFormat, Utc};
use serde_json::{json, Value};

use crate::domain::ports::{SyncEvent, SyncEventSink};

/// Event sink that outputs NDJSON events
pub struct JsonEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Create a JSON event sink writing to any writer (a log file, a buffer)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, mut event: Value) {
        if let Value::Object(map) = &mut event {
            map.insert(
                "ts".to_string(),
                Value::String(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)),
            );
        }
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

fn to_json(event: SyncEvent) -> Value {
    match event {
        SyncEvent::Started {
            operation,
            scope,
            artifact_count,
        } => json!({
            "event": "start",
            "operation": operation,
            "scope": scope,
            "artifact_count": artifact_count,
        }),

        SyncEvent::ArtifactStarted { index, id } => json!({
            "event": "artifact_start",
            "index": index,
            "id": id,
        }),

        SyncEvent::ArtifactWritten { index, id, target } => json!({
            "event": "artifact_written",
            "index": index,
            "id": id,
            "target": target,
        }),

        SyncEvent::ArtifactUnchanged { index, id } => json!({
            "event": "artifact_unchanged",
            "index": index,
            "id": id,
        }),

        SyncEvent::ArtifactSkipped { index, id, reason } => json!({
            "event": "artifact_skipped",
            "index": index,
            "id": id,
            "reason": reason,
        }),

        SyncEvent::ParameterUpdated { id, key } => json!({
            "event": "parameter_updated",
            "id": id,
            "key": key,
        }),

        SyncEvent::PackageSkipped { id, reason } => json!({
            "event": "package_skipped",
            "id": id,
            "reason": reason,
        }),

        SyncEvent::DeployTriggered { id } => json!({
            "event": "deploy_triggered",
            "id": id,
        }),

        SyncEvent::DeploySkipped { id, version } => json!({
            "event": "deploy_skipped",
            "id": id,
            "version": version,
        }),

        SyncEvent::DeployStatus { id, check, status } => json!({
            "event": "deploy_status",
            "id": id,
            "check": check,
            "status": status,
        }),

        SyncEvent::Completed {
            written_count,
            unchanged_count,
            skipped_count,
        } => json!({
            "event": "complete",
            "written": written_count,
            "unchanged": unchanged_count,
            "skipped": skipped_count,
        }),
    }
}

impl SyncEventSink for JsonEventSink {
    fn on_event(&self, event: SyncEvent) {
        self.write_event(to_json(event));
    }
}
