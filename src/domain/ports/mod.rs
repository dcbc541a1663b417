//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer (or the embedding application) provides concrete
//! implementations.

pub mod archive_codec;
pub mod artifact_adapter;
pub mod sleeper;
pub mod sync_events;
pub mod tenant_client;

pub use archive_codec::ArchiveCodec;
pub use artifact_adapter::ArtifactAdapter;
pub use sleeper::{Sleeper, ThreadSleeper};
pub use sync_events::{NoopEventSink, SyncEvent, SyncEventSink};
pub use tenant_client::{ArtifactPayload, TenantClient};
