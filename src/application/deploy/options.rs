//! Deploy Options

use std::time::Duration;

use crate::config::DeployConfig;
use crate::domain::value_objects::ArtifactType;

/// Options for the deploy use case
#[derive(Debug, Clone)]
pub struct DeployOptions {
    /// Artifacts to deploy, triggered and polled in this order
    pub ids: Vec<String>,
    pub artifact_type: ArtifactType,
    /// Pause between status checks
    pub delay: Duration,
    /// Status checks per artifact before timing out
    pub max_check_limit: u32,
    /// Skip artifacts whose runtime version equals the designtime version
    pub compare_versions: bool,
}

impl DeployOptions {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let defaults = DeployConfig::default();
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
            artifact_type: ArtifactType::Integration,
            delay: defaults.delay(),
            max_check_limit: defaults.max_check_limit,
            compare_versions: defaults.compare_versions,
        }
    }

    /// Take polling settings from the `[deploy]` config section
    pub fn with_deploy_config(mut self, config: &DeployConfig) -> Self {
        self.delay = config.delay();
        self.max_check_limit = config.max_check_limit;
        self.compare_versions = config.compare_versions;
        self
    }

    pub fn with_artifact_type(mut self, artifact_type: ArtifactType) -> Self {
        self.artifact_type = artifact_type;
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_max_check_limit(mut self, limit: u32) -> Self {
        self.max_check_limit = limit;
        self
    }

    pub fn with_compare_versions(mut self, enabled: bool) -> Self {
        self.compare_versions = enabled;
        self
    }
}
