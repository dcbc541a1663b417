//! Tenant -> Git Result

/// Result of a tenant -> git pass, artifact ids per outcome
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TenantToGitResult {
    /// New artifact directories
    pub added: Vec<String>,
    /// Existing directories overwritten with tenant content
    pub updated: Vec<String>,
    /// Directories left untouched
    pub unchanged: Vec<String>,
    /// Drafts skipped by policy
    pub skipped: Vec<String>,
    /// `<package_id>.json` was written
    pub package_updated: bool,
}

impl TenantToGitResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether anything on disk was written
    pub fn has_changes(&self) -> bool {
        !self.added.is_empty() || !self.updated.is_empty() || self.package_updated
    }

    pub fn written_count(&self) -> usize {
        self.added.len() + self.updated.len()
    }
}
