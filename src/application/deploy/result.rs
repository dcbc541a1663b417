//! Deploy Result

/// Result of a deploy operation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeployResult {
    /// Ids that were deployed and reached STARTED
    pub deployed: Vec<String>,
    /// Ids already running their designtime version
    pub skipped: Vec<String>,
}

impl DeployResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_changes(&self) -> bool {
        !self.deployed.is_empty()
    }
}
