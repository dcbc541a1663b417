//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local directory helpers and artifact materialization
//! - `adapters/` - Artifact adapters (Integration, MessageMapping, ScriptCollection, ValueMapping)
//! - `events/` - Sync event sinks

pub mod adapters;
pub mod events;
pub mod fs;

// Re-export for convenience
pub use adapters::get_adapter;
pub use events::JsonEventSink;
pub use fs::Materializer;
