//! Infrastructure Adapters
//!
//! These adapters implement the ArtifactAdapter port from the domain layer,
//! one per artifact type. They pack directories through the archive codec
//! and talk to the tenant through the tenant client.

mod core;
pub mod integration;
pub mod layout;
pub mod message_mapping;
pub mod script_collection;
pub mod value_mapping;

pub use self::core::ACTIVE_VERSION;
pub use integration::IntegrationAdapter;
pub use layout::{remap_script_references, ContentLayout, MANIFEST_PATH, PARAMETERS_PATH};
pub use message_mapping::MessageMappingAdapter;
pub use script_collection::ScriptCollectionAdapter;
pub use value_mapping::ValueMappingAdapter;

use std::sync::Arc;

use crate::domain::ports::{ArchiveCodec, ArtifactAdapter, TenantClient};
use crate::domain::value_objects::ArtifactType;

/// Get the adapter for an artifact type
pub fn get_adapter(
    artifact_type: ArtifactType,
    client: Arc<dyn TenantClient>,
    codec: Arc<dyn ArchiveCodec>,
) -> Box<dyn ArtifactAdapter> {
    match artifact_type {
        ArtifactType::Integration => Box::new(IntegrationAdapter::new(client, codec)),
        ArtifactType::MessageMapping => Box::new(MessageMappingAdapter::new(client, codec)),
        ArtifactType::ScriptCollection => Box::new(ScriptCollectionAdapter::new(client, codec)),
        ArtifactType::ValueMapping => Box::new(ValueMappingAdapter::new(client, codec)),
    }
}
