//! Domain Services
//!
//! Pure business logic services that operate on domain entities.
//! These services have no I/O dependencies and are easily testable.

mod deploy_monitor;
mod differ;
mod filter;
mod manifest;
mod normalize;
mod properties;

pub use deploy_monitor::{transition, DeployMonitor, PollOutcome};
pub use differ::{DiffSummary, Differ};
pub use filter::{apply_filter, filter_artifacts};
pub use manifest::BundleManifest;
pub use normalize::{contents_equal, normalize, TextKind};
pub use properties::{parse_properties, property};
