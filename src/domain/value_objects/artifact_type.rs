//! ArtifactType value object - the kind of designtime artifact

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CpiError;

/// Kind of designtime artifact held in a package
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArtifactType {
    /// Integration flow
    Integration,
    /// Message mapping
    MessageMapping,
    /// Script collection
    ScriptCollection,
    /// Value mapping
    ValueMapping,
}

impl ArtifactType {
    /// All artifact types, in enumeration order
    pub const ALL: [ArtifactType; 4] = [
        ArtifactType::Integration,
        ArtifactType::MessageMapping,
        ArtifactType::ScriptCollection,
        ArtifactType::ValueMapping,
    ];

    /// Value of `SAP-BundleType` in the artifact manifest
    pub fn bundle_type(&self) -> &'static str {
        match self {
            ArtifactType::Integration => "IntegrationFlow",
            ArtifactType::MessageMapping => "MessageMapping",
            ArtifactType::ScriptCollection => "ScriptCollection",
            ArtifactType::ValueMapping => "ValueMapping",
        }
    }

    /// Resolve a manifest `SAP-BundleType` value
    pub fn from_bundle_type(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.bundle_type().eq_ignore_ascii_case(value.trim()))
    }

    /// Get a human-readable display name
    pub fn display_name(&self) -> &'static str {
        match self {
            ArtifactType::Integration => "Integration flow",
            ArtifactType::MessageMapping => "Message mapping",
            ArtifactType::ScriptCollection => "Script collection",
            ArtifactType::ValueMapping => "Value mapping",
        }
    }
}

impl FromStr for ArtifactType {
    type Err = CpiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "integration" => Ok(ArtifactType::Integration),
            "messagemapping" => Ok(ArtifactType::MessageMapping),
            "scriptcollection" => Ok(ArtifactType::ScriptCollection),
            "valuemapping" => Ok(ArtifactType::ValueMapping),
            _ => Err(CpiError::invalid_value(
                "artifact type",
                s,
                "Integration, MessageMapping, ScriptCollection or ValueMapping",
            )),
        }
    }
}

impl std::fmt::Display for ArtifactType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
