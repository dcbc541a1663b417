//! Runtime-side entities: deployed artifacts and configuration parameters

use crate::domain::value_objects::DeploymentStatus;

/// A deployed artifact as reported by the tenant runtime
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeArtifact {
    pub version: String,
    pub status: DeploymentStatus,
}

impl RuntimeArtifact {
    pub fn new(version: impl Into<String>, status: DeploymentStatus) -> Self {
        Self {
            version: version.into(),
            status,
        }
    }
}

/// An externalized configuration parameter of a designtime artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigParameter {
    pub key: String,
    pub value: String,
}

impl ConfigParameter {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}
