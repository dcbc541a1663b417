//! Package metadata sync
//!
//! The Git copy of a package record is `<package_id>.json` inside the
//! package directory. Pulling writes it only when a field changed; pushing
//! creates or updates the tenant package from it.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::entities::PackageDescriptor;
use crate::domain::ports::TenantClient;
use crate::domain::value_objects::Lookup;
use crate::error::{CpiError, CpiResult};

/// Outcome of pushing a package record to the tenant
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackagePush {
    /// No `<package_id>.json` in the package directory
    NoLocalCopy,
    Created,
    /// Fields that differed
    Updated(Vec<&'static str>),
    Unchanged,
}

/// Location of the Git copy of a package record
pub fn package_file(package_dir: &Path, package_id: &str) -> PathBuf {
    package_dir.join(format!("{}.json", package_id))
}

/// Read the Git copy, if any
pub fn load_package(package_dir: &Path, package_id: &str) -> CpiResult<Option<PackageDescriptor>> {
    let path = package_file(package_dir, package_id);
    if !path.is_file() {
        return Ok(None);
    }
    let content = fs::read_to_string(&path)?;
    Ok(Some(serde_json::from_str(&content)?))
}

/// Write `package` to its Git copy unless every field already matches
///
/// Returns whether the file was written.
pub fn store_package(package: &PackageDescriptor, package_dir: &Path) -> CpiResult<bool> {
    if let Some(existing) = load_package(package_dir, &package.id)? {
        let changed = existing.changed_fields(package);
        if changed.is_empty() {
            debug!("package {} metadata unchanged", package.id);
            return Ok(false);
        }
        debug!("package {} metadata changed: {}", package.id, changed.join(", "));
    }
    fs::create_dir_all(package_dir)?;
    let mut content = serde_json::to_string_pretty(package)?;
    content.push('\n');
    fs::write(package_file(package_dir, &package.id), content)?;
    info!("package {} metadata written", package.id);
    Ok(true)
}

pub struct PackageSyncUseCase {
    client: Arc<dyn TenantClient>,
}

impl PackageSyncUseCase {
    pub fn new(client: Arc<dyn TenantClient>) -> Self {
        Self { client }
    }

    /// Tenant -> Git: refresh `<package_id>.json` from the tenant record
    pub fn pull(&self, package_id: &str, package_dir: &Path) -> CpiResult<bool> {
        let package = match self.client.get_package(package_id)? {
            Lookup::Found(package) => package,
            Lookup::NotFound => {
                return Err(CpiError::PackageNotFound {
                    id: package_id.to_string(),
                })
            }
        };
        if package.is_read_only() {
            return Err(CpiError::ReadOnlyPackage { id: package.id });
        }
        store_package(&package, package_dir)
    }

    /// Git -> Tenant: create or update the tenant package from its Git copy
    pub fn push(&self, package_id: &str, package_dir: &Path) -> CpiResult<PackagePush> {
        let Some(local) = load_package(package_dir, package_id)? else {
            debug!("no local record for package {}", package_id);
            return Ok(PackagePush::NoLocalCopy);
        };

        match self.client.get_package(package_id)? {
            Lookup::NotFound => {
                self.client.create_package(&local)?;
                info!("package {} created", package_id);
                Ok(PackagePush::Created)
            }
            Lookup::Found(remote) if remote.is_read_only() => Err(CpiError::ReadOnlyPackage {
                id: package_id.to_string(),
            }),
            Lookup::Found(remote) => {
                let changed = remote.changed_fields(&local);
                if changed.is_empty() {
                    return Ok(PackagePush::Unchanged);
                }
                self.client.update_package(&local)?;
                info!("package {} updated ({})", package_id, changed.join(", "));
                Ok(PackagePush::Updated(changed))
            }
        }
    }
}
