//! DeploymentStatus value object - runtime state of a deployed artifact

/// Runtime status reported by the tenant
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeploymentStatus {
    /// No runtime artifact registered yet
    NotDeployed,
    /// Deployment in progress
    Starting,
    /// Running
    Started,
    /// Any other status the tenant reports (ERROR, FAILED, ...)
    Error(String),
}

impl DeploymentStatus {
    /// Map a tenant status string
    pub fn parse(status: &str) -> Self {
        match status.trim().to_ascii_uppercase().as_str() {
            "NOT_DEPLOYED" | "" => DeploymentStatus::NotDeployed,
            "STARTING" => DeploymentStatus::Starting,
            "STARTED" => DeploymentStatus::Started,
            _ => DeploymentStatus::Error(status.trim().to_string()),
        }
    }

    /// Status is still moving towards a terminal state
    pub fn is_pending(&self) -> bool {
        matches!(self, DeploymentStatus::NotDeployed | DeploymentStatus::Starting)
    }

    pub fn as_str(&self) -> &str {
        match self {
            DeploymentStatus::NotDeployed => "NOT_DEPLOYED",
            DeploymentStatus::Starting => "STARTING",
            DeploymentStatus::Started => "STARTED",
            DeploymentStatus::Error(status) => status,
        }
    }
}

impl std::fmt::Display for DeploymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
