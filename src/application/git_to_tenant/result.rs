//! Git -> Tenant Result

use crate::application::package_sync::PackagePush;

/// Result of a git -> tenant pass, artifact ids per outcome
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GitToTenantResult {
    pub created: Vec<String>,
    pub updated: Vec<String>,
    pub unchanged: Vec<String>,
    /// `(artifact id, parameter key)` pairs pushed to the tenant configuration
    pub parameters_updated: Vec<(String, String)>,
    /// Package record outcome when package details are synced
    pub package: Option<PackagePush>,
}

impl GitToTenantResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether anything on the tenant was written
    pub fn has_changes(&self) -> bool {
        !self.created.is_empty()
            || !self.updated.is_empty()
            || !self.parameters_updated.is_empty()
            || matches!(
                self.package,
                Some(PackagePush::Created) | Some(PackagePush::Updated(_))
            )
    }
}
