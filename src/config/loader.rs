//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{CpiError, CpiResult};

use super::types::Config;

/// Non-fatal configuration warning (an unknown key)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys)
pub fn load_with_warnings(path: &Path) -> CpiResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| CpiError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
                file: path.to_path_buf(),
                key,
            }
        })
        .collect();

    Ok((config, warnings))
}

/// User config location: `<config_dir>/cpisync/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("cpisync").join("config.toml"))
}

/// Load from `path`, the user config, or defaults, then apply `CPISYNC_*`
///
/// An explicit `path` must exist; the user config is optional.
pub fn load_or_default(path: Option<&Path>) -> CpiResult<Config> {
    let config = match path {
        Some(path) => Config::load(path)?,
        None => match default_config_path().filter(|p| p.is_file()) {
            Some(user_config) => {
                debug!("loading config from {}", user_config.display());
                Config::load(&user_config)?
            }
            None => Config::default(),
        },
    };
    with_env_overrides(config)
}

/// Apply environment variable overrides (CPISYNC_* prefix)
pub fn with_env_overrides(config: Config) -> CpiResult<Config> {
    apply_overrides(config, |name| std::env::var(name).ok())
}

/// Apply overrides from `lookup`, keyed by `CPISYNC_*` variable name
///
/// Invalid values are configuration errors, not silently ignored.
pub fn apply_overrides(
    mut config: Config,
    lookup: impl Fn(&str) -> Option<String>,
) -> CpiResult<Config> {
    if let Some(value) = lookup("CPISYNC_DRAFT_HANDLING") {
        config.sync.draft_handling = value.parse()?;
    }
    if let Some(value) = lookup("CPISYNC_DIR_NAMING") {
        config.sync.dir_naming = value.parse()?;
    }
    if let Some(value) = lookup("CPISYNC_SCRIPT_COLLECTION_MAP") {
        config.sync.script_collection_map = value.parse()?;
    }
    if let Some(value) = lookup("CPISYNC_SYNC_PACKAGE_DETAILS") {
        config.sync.sync_package_details = parse_bool("CPISYNC_SYNC_PACKAGE_DETAILS", &value)?;
    }
    if let Some(value) = lookup("CPISYNC_WORK_DIR") {
        config.sync.work_dir = Some(PathBuf::from(value));
    }
    if let Some(value) = lookup("CPISYNC_DELAY_LENGTH") {
        config.deploy.delay_length = value.trim().parse().map_err(|_| {
            CpiError::invalid_value("CPISYNC_DELAY_LENGTH", &value, "a number of seconds")
        })?;
    }
    if let Some(value) = lookup("CPISYNC_MAX_CHECK_LIMIT") {
        config.deploy.max_check_limit = value.trim().parse().map_err(|_| {
            CpiError::invalid_value("CPISYNC_MAX_CHECK_LIMIT", &value, "a positive integer")
        })?;
    }
    if let Some(value) = lookup("CPISYNC_COMPARE_VERSIONS") {
        config.deploy.compare_versions = parse_bool("CPISYNC_COMPARE_VERSIONS", &value)?;
    }
    Ok(config)
}

fn parse_bool(key: &str, value: &str) -> CpiResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(CpiError::invalid_value(key, value, "true or false")),
    }
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "sync",
        "draft_handling",
        "dir_naming",
        "script_collection_map",
        "sync_package_details",
        "work_dir",
        "deploy",
        "delay_length",
        "max_check_limit",
        "compare_versions",
    ];

    CANDIDATES
        .iter()
        .map(|candidate| (*candidate, levenshtein(unknown, candidate)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
