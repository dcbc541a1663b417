//! Tenant -> Git Module
//!
//! Pulls the designtime artifacts of one package into a directory tree.
//!
//! ## Structure
//!
//! - `options` - Input values (`TenantToGitOptions`)
//! - `result` - Per-artifact outcome lists (`TenantToGitResult`)
//! - `use_case` - Core use case logic (`TenantToGitUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use cpisync::application::tenant_to_git::{TenantToGitOptions, TenantToGitUseCase};
//!
//! let use_case = TenantToGitUseCase::new(client, codec);
//! let result = use_case.execute(&TenantToGitOptions::new("Orders", "repo/Orders"))?;
//! ```

mod options;
mod result;
mod use_case;

pub use options::TenantToGitOptions;
pub use result::TenantToGitResult;
pub use use_case::TenantToGitUseCase;
