//! Bundle manifest parsing
//!
//! Artifact directories carry an OSGi-style `META-INF/MANIFEST.MF`. Long
//! header values are wrapped onto continuation lines that start with a single
//! space.

use crate::domain::value_objects::ArtifactType;

/// Headers of interest from an artifact manifest
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BundleManifest {
    /// `Bundle-SymbolicName` without directives
    pub symbolic_name: Option<String>,
    /// `Bundle-Name`
    pub name: Option<String>,
    /// `SAP-BundleType`
    pub bundle_type: Option<String>,
}

impl BundleManifest {
    /// Parse manifest text
    pub fn parse(content: &str) -> Self {
        let mut manifest = BundleManifest::default();
        for (key, value) in headers(content) {
            match key.as_str() {
                "Bundle-SymbolicName" => {
                    let id = value.split(';').next().unwrap_or_default().trim();
                    manifest.symbolic_name = Some(id.to_string());
                }
                "Bundle-Name" => manifest.name = Some(value.trim().to_string()),
                "SAP-BundleType" => manifest.bundle_type = Some(value.trim().to_string()),
                _ => {}
            }
        }
        manifest
    }

    /// Artifact type declared by `SAP-BundleType`
    pub fn artifact_type(&self) -> Option<ArtifactType> {
        self.bundle_type
            .as_deref()
            .and_then(ArtifactType::from_bundle_type)
    }
}

/// Unfold continuation lines and split `Key: value` headers
fn headers(content: &str) -> Vec<(String, String)> {
    let mut unfolded: Vec<String> = Vec::new();
    for line in content.lines() {
        let line = line.trim_end_matches('\r');
        match (line.strip_prefix(' '), unfolded.last_mut()) {
            (Some(rest), Some(previous)) => previous.push_str(rest),
            _ => unfolded.push(line.to_string()),
        }
    }

    unfolded
        .into_iter()
        .filter_map(|line| {
            line.split_once(':')
                .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
        })
        .collect()
}
