//! Deployment status monitor
//!
//! Pure state machine behind the deploy poll loop:
//!
//! ```text
//! NOT_DEPLOYED -> STARTING -> STARTED        (Succeeded)
//!                          -> <other status> (Failed)
//!              (check budget exhausted)      (TimedOut)
//! ```
//!
//! The caller fetches a status, feeds it to [`DeployMonitor::observe`] and
//! acts on the returned [`PollOutcome`]. No sleeping or I/O happens here.

use crate::domain::value_objects::DeploymentStatus;

/// What the poll loop does next
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollOutcome {
    /// Sleep, then check again
    Wait,
    /// Artifact is running
    Succeeded,
    /// Terminal error status; fetch error detail
    Failed(String),
    /// Budget exhausted while still pending; carries the last status
    TimedOut(String),
}

impl PollOutcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, PollOutcome::Wait)
    }
}

/// Transition for the `check`-th observation (1-based) out of `max_checks`
pub fn transition(check: u32, max_checks: u32, status: &DeploymentStatus) -> PollOutcome {
    match status {
        DeploymentStatus::Started => PollOutcome::Succeeded,
        DeploymentStatus::Error(status) => PollOutcome::Failed(status.clone()),
        DeploymentStatus::NotDeployed | DeploymentStatus::Starting if check >= max_checks => {
            PollOutcome::TimedOut(status.to_string())
        }
        DeploymentStatus::NotDeployed | DeploymentStatus::Starting => PollOutcome::Wait,
    }
}

/// Counts status checks for one artifact
#[derive(Debug, Clone)]
pub struct DeployMonitor {
    max_checks: u32,
    checks: u32,
}

impl DeployMonitor {
    /// A budget of zero still allows one check
    pub fn new(max_checks: u32) -> Self {
        Self {
            max_checks: max_checks.max(1),
            checks: 0,
        }
    }

    /// Number of statuses observed so far
    pub fn checks(&self) -> u32 {
        self.checks
    }

    /// Record one observed status
    pub fn observe(&mut self, status: &DeploymentStatus) -> PollOutcome {
        self.checks += 1;
        transition(self.checks, self.max_checks, status)
    }
}
