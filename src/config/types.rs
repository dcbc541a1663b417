//! Configuration type definitions

use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Deserializer};
use tracing::warn;

use crate::domain::value_objects::{DirectoryNaming, DraftPolicy, ScriptCollectionMap};
use crate::error::CpiResult;

use super::loader;

/// Sync configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct SyncConfig {
    /// What to do with draft artifacts (`SKIP`, `ADD`, `ERROR`)
    #[serde(default, deserialize_with = "from_str_value")]
    pub draft_handling: DraftPolicy,

    /// Artifact folder naming (`ID`, `NAME`)
    #[serde(default, deserialize_with = "from_str_value")]
    pub dir_naming: DirectoryNaming,

    /// Script collection id remapping, `"A=B,C=D"`
    #[serde(default, deserialize_with = "from_str_value")]
    pub script_collection_map: ScriptCollectionMap,

    /// Also sync package metadata (`<package_id>.json`)
    #[serde(default)]
    pub sync_package_details: bool,

    /// Parent directory for staging; system temp dir when unset
    #[serde(default)]
    pub work_dir: Option<PathBuf>,
}

/// Deploy configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DeployConfig {
    /// Seconds between status checks
    #[serde(default = "default_delay_length")]
    pub delay_length: u64,

    /// Status checks before giving up
    #[serde(default = "default_max_check_limit")]
    pub max_check_limit: u32,

    /// Skip deployment when runtime already runs the designtime version
    #[serde(default = "default_true")]
    pub compare_versions: bool,
}

impl DeployConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_secs(self.delay_length)
    }
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            delay_length: default_delay_length(),
            max_check_limit: default_max_check_limit(),
            compare_versions: true,
        }
    }
}

fn default_delay_length() -> u64 {
    30
}

fn default_max_check_limit() -> u32 {
    10
}

fn default_true() -> bool {
    true
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub sync: SyncConfig,

    #[serde(default)]
    pub deploy: DeployConfig,
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Unknown keys are logged as warnings, not rejected.
    pub fn load(path: &Path) -> CpiResult<Self> {
        let (config, warnings) = loader::load_with_warnings(path)?;
        for warning in warnings {
            match &warning.suggestion {
                Some(suggestion) => warn!(
                    "unknown config key '{}' in {} (did you mean '{}'?)",
                    warning.key,
                    warning.file.display(),
                    suggestion
                ),
                None => warn!(
                    "unknown config key '{}' in {}",
                    warning.key,
                    warning.file.display()
                ),
            }
        }
        Ok(config)
    }
}

/// Deserialize a string through the target type's `FromStr`
fn from_str_value<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let raw = String::deserialize(deserializer)?;
    raw.parse().map_err(serde::de::Error::custom)
}
