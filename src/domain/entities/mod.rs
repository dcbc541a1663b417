//! Domain Entities
//!
//! - `ArtifactDescriptor` - A designtime artifact selected for a sync pass
//! - `PackageDescriptor` - A package record
//! - `RuntimeArtifact` / `ConfigParameter` - Runtime state and configuration

mod artifact;
mod package;
mod runtime;

pub use artifact::{ArtifactDescriptor, ArtifactSummary, DRAFT_VERSION};
pub use package::{PackageDescriptor, READ_ONLY_MODE};
pub use runtime::{ConfigParameter, RuntimeArtifact};
