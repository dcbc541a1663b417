//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod artifact_type;
mod deployment_status;
mod id_filter;
mod lookup;
mod policies;
mod script_map;

pub use artifact_type::ArtifactType;
pub use deployment_status::DeploymentStatus;
pub use id_filter::IdFilter;
pub use lookup::Lookup;
pub use policies::{DirectoryNaming, DraftPolicy, SyncDirection};
pub use script_map::ScriptCollectionMap;
