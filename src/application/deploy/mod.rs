//! Deploy Module
//!
//! Promotes designtime artifacts to running runtime artifacts.
//!
//! ## Structure
//!
//! - `options` - Ids and polling budget (`DeployOptions`)
//! - `result` - Deployed and skipped ids (`DeployResult`)
//! - `use_case` - Core use case logic (`DeployUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use cpisync::application::deploy::{DeployOptions, DeployUseCase};
//!
//! let use_case = DeployUseCase::new(client, codec);
//! let result = use_case.execute(&DeployOptions::new(["Flow_A", "Flow_B"]))?;
//! ```

mod options;
mod result;
mod use_case;

pub use options::DeployOptions;
pub use result::DeployResult;
pub use use_case::DeployUseCase;
