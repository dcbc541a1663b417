//! Directory Materializer
//!
//! Turns downloaded artifact content into directories: unpacks archives into
//! staging, replaces target directories wholesale and decides folder names.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::domain::entities::ArtifactDescriptor;
use crate::domain::ports::ArchiveCodec;
use crate::domain::value_objects::DirectoryNaming;
use crate::error::{CpiError, CpiResult};

use super::local;

/// Unpacks and places artifact directories
pub struct Materializer {
    codec: Arc<dyn ArchiveCodec>,
    naming: DirectoryNaming,
}

impl Materializer {
    pub fn new(codec: Arc<dyn ArchiveCodec>, naming: DirectoryNaming) -> Self {
        Self { codec, naming }
    }

    /// Folder name for `artifact` under the configured naming
    pub fn directory_name(&self, artifact: &ArtifactDescriptor) -> String {
        artifact.directory_name(self.naming)
    }

    /// `root/<directory name>` for `artifact`
    pub fn directory_for(&self, root: &Path, artifact: &ArtifactDescriptor) -> PathBuf {
        root.join(self.directory_name(artifact))
    }

    /// Unpack `archive_file` into a fresh `staging_dir`
    pub fn unpack(&self, archive_file: &Path, staging_dir: &Path) -> CpiResult<()> {
        local::remove_path(staging_dir)?;
        fs::create_dir_all(staging_dir)?;
        let content = fs::read(archive_file)?;
        self.codec
            .unpack(&content, staging_dir)
            .map_err(|source| CpiError::Archive {
                path: archive_file.to_path_buf(),
                source,
            })
    }

    /// Replace `target_dir` with the contents of `source_dir`
    pub fn replace(&self, source_dir: &Path, target_dir: &Path) -> CpiResult<()> {
        local::replace_dir(source_dir, target_dir)?;
        Ok(())
    }
}
