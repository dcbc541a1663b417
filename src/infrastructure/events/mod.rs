//! Event Sink Implementations
//!
//! Provides concrete implementations of SyncEventSink:
//! - JsonEventSink: NDJSON output for pipelines and audit logs

mod json;

pub use json::JsonEventSink;
