//! Git -> Tenant Options

use std::path::PathBuf;

use crate::config::SyncConfig;
use crate::domain::value_objects::{IdFilter, ScriptCollectionMap};

/// Options for the git -> tenant use case
#[derive(Debug, Clone)]
pub struct GitToTenantOptions {
    /// Package the artifacts belong to
    pub package_id: String,
    /// Package directory holding the artifact folders
    pub source_dir: PathBuf,
    /// Artifact id include/exclude list, applied to discovered ids
    pub filter: IdFilter,
    pub script_map: ScriptCollectionMap,
    /// Parent of the staging directory
    pub work_dir: Option<PathBuf>,
    /// Create/update the tenant package from `<package_id>.json` first
    pub sync_package_details: bool,
}

impl GitToTenantOptions {
    pub fn new(package_id: impl Into<String>, source_dir: impl Into<PathBuf>) -> Self {
        Self {
            package_id: package_id.into(),
            source_dir: source_dir.into(),
            filter: IdFilter::default(),
            script_map: ScriptCollectionMap::default(),
            work_dir: None,
            sync_package_details: false,
        }
    }

    /// Take policies from the `[sync]` config section
    pub fn with_sync_config(mut self, config: &SyncConfig) -> Self {
        self.script_map = config.script_collection_map.clone();
        self.work_dir = config.work_dir.clone();
        self.sync_package_details = config.sync_package_details;
        self
    }

    pub fn with_filter(mut self, filter: IdFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_script_map(mut self, script_map: ScriptCollectionMap) -> Self {
        self.script_map = script_map;
        self
    }

    pub fn with_work_dir(mut self, work_dir: impl Into<PathBuf>) -> Self {
        self.work_dir = Some(work_dir.into());
        self
    }

    pub fn with_package_details(mut self, enabled: bool) -> Self {
        self.sync_package_details = enabled;
        self
    }
}
