//! Sync policy value objects
//!
//! - `SyncDirection`: which side is authoritative for a pass
//! - `DraftPolicy`: what to do with draft artifacts when pulling from the tenant
//! - `DirectoryNaming`: how artifact folders are named on disk

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CpiError;

/// Authoritative side of a sync pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyncDirection {
    /// Tenant content overwrites the Git tree
    TenantToGit,
    /// Git tree content overwrites the tenant
    GitToTenant,
}

impl std::fmt::Display for SyncDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SyncDirection::TenantToGit => write!(f, "tenant -> git"),
            SyncDirection::GitToTenant => write!(f, "git -> tenant"),
        }
    }
}

/// Handling of draft artifacts during tenant -> git sync
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum DraftPolicy {
    /// Log and continue with the next artifact
    #[default]
    Skip,
    /// Sync the draft like any other artifact
    Add,
    /// Abort the whole sync
    Error,
}

impl FromStr for DraftPolicy {
    type Err = CpiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "SKIP" => Ok(DraftPolicy::Skip),
            "ADD" => Ok(DraftPolicy::Add),
            "ERROR" => Ok(DraftPolicy::Error),
            _ => Err(CpiError::invalid_value(
                "draft handling",
                s,
                "SKIP, ADD or ERROR",
            )),
        }
    }
}

/// Naming of artifact directories in the Git tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DirectoryNaming {
    /// Use the artifact id
    #[default]
    #[serde(rename = "ID")]
    ById,
    /// Use the artifact display name
    #[serde(rename = "NAME")]
    ByName,
}

impl FromStr for DirectoryNaming {
    type Err = CpiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ID" => Ok(DirectoryNaming::ById),
            "NAME" => Ok(DirectoryNaming::ByName),
            _ => Err(CpiError::invalid_value(
                "directory naming",
                s,
                "ID or NAME",
            )),
        }
    }
}
