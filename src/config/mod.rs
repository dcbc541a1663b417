//! Configuration module for cpisync
//!
//! Configuration hierarchy:
//! 1. Values passed directly to a use case (highest priority)
//! 2. Environment variables (CPISYNC_*)
//! 3. Config file (explicit path or `<config_dir>/cpisync/config.toml`)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    apply_overrides, default_config_path, load_or_default, load_with_warnings,
    with_env_overrides, ConfigWarning,
};
pub use types::{Config, DeployConfig, SyncConfig};
