//! Artifact Adapter Port
//!
//! One contract, one implementation per artifact type. Implementations live
//! in `infrastructure::adapters` and are chosen by `get_adapter`.

use std::path::Path;

use crate::domain::value_objects::{ArtifactType, Lookup, ScriptCollectionMap, SyncDirection};
use crate::error::CpiResult;

/// Per-type designtime artifact operations
///
/// Every call is stateless; retrying a failed create/update is safe.
pub trait ArtifactAdapter {
    /// Artifact type handled by this adapter
    fn artifact_type(&self) -> ArtifactType;

    /// Encode `content_dir` and create the artifact
    ///
    /// Fails (via the tenant) if the id already exists.
    fn create(&self, id: &str, name: &str, package_id: &str, content_dir: &Path) -> CpiResult<()>;

    /// Encode `content_dir` and overwrite the artifact
    fn update(&self, id: &str, name: &str, package_id: &str, content_dir: &Path) -> CpiResult<()>;

    /// Queue deployment; success means accepted, not running
    fn deploy(&self, id: &str) -> CpiResult<()>;

    /// Version of the artifact, or `NotFound`
    fn get(&self, id: &str, version: &str) -> CpiResult<Lookup<String>>;

    /// Download the active content to `target_file`
    fn download(&self, target_file: &Path, id: &str) -> CpiResult<()>;

    /// Copy this type's managed paths from `src_dir` to `tgt_dir`
    fn copy_content(&self, src_dir: &Path, tgt_dir: &Path) -> CpiResult<()>;

    /// Whether `src_dir` and `tgt_dir` differ in this type's managed paths
    fn compare_content(
        &self,
        src_dir: &Path,
        tgt_dir: &Path,
        script_map: &ScriptCollectionMap,
        direction: SyncDirection,
    ) -> CpiResult<bool>;

    /// Push local parameter values to the tenant configuration
    ///
    /// Returns the keys that were updated. Types without externalized
    /// parameters do nothing.
    fn reconcile_parameters(&self, _id: &str, _content_dir: &Path) -> CpiResult<Vec<String>> {
        Ok(Vec::new())
    }
}
