//! Artifact entities
//!
//! `ArtifactDescriptor` is what the enumerator produces for every designtime
//! artifact in a package. `ArtifactSummary` is the raw tenant listing entry it
//! is built from.

use crate::domain::value_objects::{ArtifactType, DirectoryNaming};

/// Version string the tenant reports for an unsaved (draft) artifact
pub const DRAFT_VERSION: &str = "Active";

/// One designtime artifact as listed by the tenant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactSummary {
    pub id: String,
    pub name: String,
    pub version: String,
}

impl ArtifactSummary {
    pub fn new(id: impl Into<String>, name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            version: version.into(),
        }
    }
}

/// A designtime artifact selected for a sync pass
///
/// Read-only for the duration of the pass. Decisions about it (skip, copy,
/// update) live in the use cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactDescriptor {
    id: String,
    display_name: String,
    artifact_type: ArtifactType,
    is_draft: bool,
}

impl ArtifactDescriptor {
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        artifact_type: ArtifactType,
        is_draft: bool,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            artifact_type,
            is_draft,
        }
    }

    /// Build from a tenant listing entry
    pub fn from_summary(summary: ArtifactSummary, artifact_type: ArtifactType) -> Self {
        let is_draft = summary.version.eq_ignore_ascii_case(DRAFT_VERSION);
        Self::new(summary.id, summary.name, artifact_type, is_draft)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn artifact_type(&self) -> ArtifactType {
        self.artifact_type
    }

    pub fn is_draft(&self) -> bool {
        self.is_draft
    }

    /// Folder name for this artifact in the Git tree
    ///
    /// Must be stable across syncs so that repeated runs land in the same
    /// directory. Path separators in display names become `_`.
    pub fn directory_name(&self, naming: DirectoryNaming) -> String {
        match naming {
            DirectoryNaming::ById => self.id.clone(),
            DirectoryNaming::ByName => self
                .display_name
                .chars()
                .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
                .collect(),
        }
    }
}
