//! Tenant -> Git Options

use std::path::PathBuf;

use crate::config::SyncConfig;
use crate::domain::value_objects::{DirectoryNaming, DraftPolicy, IdFilter, ScriptCollectionMap};

/// Options for the tenant -> git use case
#[derive(Debug, Clone)]
pub struct TenantToGitOptions {
    /// Package to pull
    pub package_id: String,
    /// Package directory; artifact folders are created directly below it
    pub target_dir: PathBuf,
    /// Artifact id include/exclude list
    pub filter: IdFilter,
    pub draft_policy: DraftPolicy,
    pub dir_naming: DirectoryNaming,
    pub script_map: ScriptCollectionMap,
    /// Parent of the staging directory
    pub work_dir: Option<PathBuf>,
    /// Also refresh `<package_id>.json`
    pub sync_package_details: bool,
}

impl TenantToGitOptions {
    pub fn new(package_id: impl Into<String>, target_dir: impl Into<PathBuf>) -> Self {
        Self {
            package_id: package_id.into(),
            target_dir: target_dir.into(),
            filter: IdFilter::default(),
            draft_policy: DraftPolicy::default(),
            dir_naming: DirectoryNaming::default(),
            script_map: ScriptCollectionMap::default(),
            work_dir: None,
            sync_package_details: false,
        }
    }

    /// Take policies from the `[sync]` config section
    pub fn with_sync_config(mut self, config: &SyncConfig) -> Self {
        self.draft_policy = config.draft_handling;
        self.dir_naming = config.dir_naming;
        self.script_map = config.script_collection_map.clone();
        self.work_dir = config.work_dir.clone();
        self.sync_package_details = config.sync_package_details;
        self
    }

    pub fn with_filter(mut self, filter: IdFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_draft_policy(mut self, policy: DraftPolicy) -> Self {
        self.draft_policy = policy;
        self
    }

    pub fn with_dir_naming(mut self, naming: DirectoryNaming) -> Self {
        self.dir_naming = naming;
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
