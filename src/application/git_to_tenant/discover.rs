//! Artifact directory discovery
//!
//! Every immediate subdirectory holding `META-INF/MANIFEST.MF` is an
//! artifact; its manifest supplies id, name and type. Other directories are
//! ignored.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::entities::ArtifactDescriptor;
use crate::domain::services::BundleManifest;
use crate::domain::value_objects::ArtifactType;
use crate::error::{CpiError, CpiResult};
use crate::infrastructure::adapters::MANIFEST_PATH;

/// An artifact directory in the Git tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalArtifact {
    pub id: String,
    pub name: String,
    pub artifact_type: ArtifactType,
    pub dir: PathBuf,
}

impl LocalArtifact {
    /// Read the manifest of `dir`
    pub fn from_dir(dir: &Path) -> CpiResult<Self> {
        let invalid = |reason: String| CpiError::InvalidArtifactDirectory {
            path: dir.to_path_buf(),
            reason,
        };
        let manifest = BundleManifest::parse(&fs::read_to_string(dir.join(MANIFEST_PATH))?);

        let id = manifest
            .symbolic_name
            .clone()
            .filter(|id| !id.is_empty())
            .ok_or_else(|| invalid("manifest has no Bundle-SymbolicName".to_string()))?;
        let artifact_type = manifest.artifact_type().ok_or_else(|| {
            invalid(format!(
                "unknown SAP-BundleType '{}'",
                manifest.bundle_type.as_deref().unwrap_or_default()
            ))
        })?;
        let name = manifest.name.filter(|n| !n.is_empty()).unwrap_or_else(|| id.clone());

        Ok(Self {
            id,
            name,
            artifact_type,
            dir: dir.to_path_buf(),
        })
    }

    pub fn descriptor(&self) -> ArtifactDescriptor {
        ArtifactDescriptor::new(&self.id, &self.name, self.artifact_type, false)
    }
}

/// Artifact directories directly below `root`
///
/// Grouped by type in `ArtifactType::ALL` order, by directory name within a
/// type. Two directories declaring the same id are rejected.
pub fn discover_artifacts(root: &Path) -> CpiResult<Vec<LocalArtifact>> {
    let mut dirs = Vec::new();
    for entry in fs::read_dir(root)? {
        let path = entry?.path();
        if path.is_dir() {
            dirs.push(path);
        }
    }
    dirs.sort();

    let mut artifacts: Vec<LocalArtifact> = Vec::new();
    for dir in dirs {
        if !dir.join(MANIFEST_PATH).is_file() {
            debug!("{} has no manifest, ignoring", dir.display());
            continue;
        }
        let artifact = LocalArtifact::from_dir(&dir)?;
        if let Some(first) = artifacts.iter().find(|a| a.id == artifact.id) {
            return Err(CpiError::InvalidArtifactDirectory {
                path: artifact.dir,
                reason: format!(
                    "Bundle-SymbolicName '{}' is also declared by {}",
                    first.id,
                    first.dir.display()
                ),
            });
        }
        artifacts.push(artifact);
    }
    artifacts.sort_by_key(|a| {
        ArtifactType::ALL
            .iter()
            .position(|t| *t == a.artifact_type)
            .unwrap_or(usize::MAX)
    });
    Ok(artifacts)
}
