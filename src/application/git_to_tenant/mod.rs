//! Git -> Tenant Module
//!
//! Pushes artifact directories of one package to the tenant.
//!
//! ## Structure
//!
//! - `discover` - Finds artifact directories by their manifest (`LocalArtifact`)
//! - `options` - Input values (`GitToTenantOptions`)
//! - `result` - Per-artifact outcome lists (`GitToTenantResult`)
//! - `use_case` - Core use case logic (`GitToTenantUseCase`)

mod discover;
mod options;
mod result;
mod use_case;

pub use discover::{discover_artifacts, LocalArtifact};
pub use options::GitToTenantOptions;
pub use result::GitToTenantResult;
pub use use_case::GitToTenantUseCase;
