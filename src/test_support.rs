//! In-memory doubles for unit tests

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{anyhow, bail};

use crate::domain::entities::{
    ArtifactSummary, ConfigParameter, PackageDescriptor, RuntimeArtifact,
};
use crate::domain::ports::{ArchiveCodec, ArtifactPayload, Sleeper, TenantClient};
use crate::domain::value_objects::{ArtifactType, DeploymentStatus, Lookup};
use crate::infrastructure::fs::local;

/// Archive codec that stores a directory as a JSON map of path to text
pub(crate) struct MockCodec;

impl MockCodec {
    pub(crate) fn archive(files: &[(&str, &str)]) -> Vec<u8> {
        let map: BTreeMap<&str, &str> = files.iter().copied().collect();
        serde_json::to_vec(&map).unwrap()
    }
}

impl ArchiveCodec for MockCodec {
    fn pack(&self, dir: &Path) -> anyhow::Result<Vec<u8>> {
        let mut map = BTreeMap::new();
        for relative in local::list_files(dir)? {
            let content = fs::read(dir.join(&relative))?;
            map.insert(
                relative.to_string_lossy().replace('\\', "/"),
                String::from_utf8_lossy(&content).into_owned(),
            );
        }
        Ok(serde_json::to_vec(&map)?)
    }

    fn unpack(&self, content: &[u8], dir: &Path) -> anyhow::Result<()> {
        let map: BTreeMap<String, String> = serde_json::from_slice(content)?;
        for (relative, text) in map {
            let path = dir.join(relative);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, text)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub(crate) struct StoredArtifact {
    pub artifact_type: ArtifactType,
    pub id: String,
    pub name: String,
    pub package_id: String,
    pub version: String,
    pub content: Vec<u8>,
}

/// Tenant held in memory; mutating calls are recorded in order
#[derive(Default)]
pub(crate) struct MockTenant {
    pub packages: RefCell<Vec<PackageDescriptor>>,
    pub artifacts: RefCell<Vec<StoredArtifact>>,
    pub runtime: RefCell<HashMap<String, RuntimeArtifact>>,
    pub status_script: RefCell<HashMap<String, VecDeque<String>>>,
    pub configurations: RefCell<HashMap<String, Vec<ConfigParameter>>>,
    pub calls: RefCell<Vec<String>>,
}

impl MockTenant {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_package(self, package: PackageDescriptor) -> Self {
        self.packages.borrow_mut().push(package);
        self
    }

    pub(crate) fn with_artifact(
        self,
        artifact_type: ArtifactType,
        package_id: &str,
        id: &str,
        version: &str,
        files: &[(&str, &str)],
    ) -> Self {
        self.artifacts.borrow_mut().push(StoredArtifact {
            artifact_type,
            id: id.to_string(),
            name: format!("{} name", id),
            package_id: package_id.to_string(),
            version: version.to_string(),
            content: MockCodec::archive(files),
        });
        self
    }

    pub(crate) fn with_runtime(self, id: &str, version: &str, status: &str) -> Self {
        self.runtime.borrow_mut().insert(
            id.to_string(),
            RuntimeArtifact::new(version, DeploymentStatus::parse(status)),
        );
        self
    }

    /// Statuses reported by successive runtime lookups; the last one sticks
    pub(crate) fn with_status_sequence(self, id: &str, statuses: &[&str]) -> Self {
        self.status_script.borrow_mut().insert(
            id.to_string(),
            statuses.iter().map(|s| s.to_string()).collect(),
        );
        self
    }

    pub(crate) fn with_configuration(self, id: &str, key: &str, value: &str) -> Self {
        self.configurations
            .borrow_mut()
            .entry(id.to_string())
            .or_default()
            .push(ConfigParameter::new(key, value));
        self
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub(crate) fn content_of(&self, id: &str) -> Option<BTreeMap<String, String>> {
        self.artifacts
            .borrow()
            .iter()
            .find(|a| a.id == id)
            .map(|a| serde_json::from_slice(&a.content).unwrap())
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }

    fn position(&self, artifact_type: ArtifactType, id: &str) -> Option<usize> {
        self.artifacts
            .borrow()
            .iter()
            .position(|a| a.artifact_type == artifact_type && a.id == id)
    }
}

impl TenantClient for MockTenant {
    fn list_packages(&self) -> anyhow::Result<Vec<PackageDescriptor>> {
        Ok(self.packages.borrow().clone())
    }

    fn get_package(&self, id: &str) -> anyhow::Result<Lookup<PackageDescriptor>> {
        Ok(self
            .packages
            .borrow()
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .into())
    }

    fn create_package(&self, package: &PackageDescriptor) -> anyhow::Result<()> {
        self.record(format!("create_package {}", package.id));
        self.packages.borrow_mut().push(package.clone());
        Ok(())
    }

    fn update_package(&self, package: &PackageDescriptor) -> anyhow::Result<()> {
        self.record(format!("update_package {}", package.id));
        let mut packages = self.packages.borrow_mut();
        let existing = packages
            .iter_mut()
            .find(|p| p.id == package.id)
            .ok_or_else(|| anyhow!("package {} not found", package.id))?;
        *existing = package.clone();
        Ok(())
    }

    fn list_designtime_artifacts(
        &self,
        package_id: &str,
        artifact_type: ArtifactType,
    ) -> anyhow::Result<Vec<ArtifactSummary>> {
        Ok(self
            .artifacts
            .borrow()
            .iter()
            .filter(|a| a.package_id == package_id && a.artifact_type == artifact_type)
            .map(|a| ArtifactSummary::new(a.id.clone(), a.name.clone(), a.version.clone()))
            .collect())
    }

    fn get_designtime_artifact(
        &self,
        artifact_type: ArtifactType,
        id: &str,
        _version: &str,
    ) -> anyhow::Result<Lookup<String>> {
        Ok(self
            .position(artifact_type, id)
            .map(|i| self.artifacts.borrow()[i].version.clone())
            .into())
    }

    fn create_designtime_artifact(
        &self,
        artifact_type: ArtifactType,
        payload: &ArtifactPayload,
    ) -> anyhow::Result<()> {
        self.record(format!("create {:?} {}", artifact_type, payload.id));
        if self.position(artifact_type, &payload.id).is_some() {
            bail!("{} already exists", payload.id);
        }
        self.artifacts.borrow_mut().push(StoredArtifact {
            artifact_type,
            id: payload.id.clone(),
            name: payload.name.clone(),
            package_id: payload.package_id.clone(),
            version: "1.0.0".to_string(),
            content: payload.content.clone(),
        });
        Ok(())
    }

    fn update_designtime_artifact(
        &self,
        artifact_type: ArtifactType,
        payload: &ArtifactPayload,
    ) -> anyhow::Result<()> {
        self.record(format!("update {:?} {}", artifact_type, payload.id));
        let index = self
            .position(artifact_type, &payload.id)
            .ok_or_else(|| anyhow!("{} not found", payload.id))?;
        self.artifacts.borrow_mut()[index].content = payload.content.clone();
        Ok(())
    }

    fn delete_designtime_artifact(
        &self,
        artifact_type: ArtifactType,
        id: &str,
    ) -> anyhow::Result<()> {
        self.record(format!("delete {:?} {}", artifact_type, id));
        let index = self
            .position(artifact_type, id)
            .ok_or_else(|| anyhow!("{} not found", id))?;
        self.artifacts.borrow_mut().remove(index);
        Ok(())
    }

    fn download_designtime_artifact(
        &self,
        artifact_type: ArtifactType,
        id: &str,
        _version: &str,
    ) -> anyhow::Result<Vec<u8>> {
        let index = self
            .position(artifact_type, id)
            .ok_or_else(|| anyhow!("{} not found", id))?;
        Ok(self.artifacts.borrow()[index].content.clone())
    }

    fn deploy_designtime_artifact(
        &self,
        artifact_type: ArtifactType,
        id: &str,
    ) -> anyhow::Result<()> {
        self.record(format!("deploy {:?} {}", artifact_type, id));
        let version = self
            .position(artifact_type, id)
            .map(|i| self.artifacts.borrow()[i].version.clone())
            .ok_or_else(|| anyhow!("{} not found", id))?;
        self.runtime.borrow_mut().insert(
            id.to_string(),
            RuntimeArtifact::new(version, DeploymentStatus::Starting),
        );
        Ok(())
    }

    fn get_runtime_artifact(&self, id: &str) -> anyhow::Result<Lookup<RuntimeArtifact>> {
        if !self.runtime.borrow().contains_key(id) {
            return Ok(Lookup::NotFound);
        }
        let next = self
            .status_script
            .borrow_mut()
            .get_mut(id)
            .and_then(|queue| {
                if queue.len() > 1 {
                    queue.pop_front()
                } else {
                    queue.front().cloned()
                }
            });
        let mut runtime = self.runtime.borrow_mut();
        if let (Some(status), Some(artifact)) = (next, runtime.get_mut(id)) {
            artifact.status = DeploymentStatus::parse(&status);
        }
        Ok(runtime.get(id).cloned().into())
    }

    fn undeploy_runtime_artifact(&self, id: &str) -> anyhow::Result<Lookup<()>> {
        self.record(format!("undeploy {}", id));
        Ok(self.runtime.borrow_mut().remove(id).map(|_| ()).into())
    }

    fn get_runtime_error_detail(&self, id: &str) -> anyhow::Result<String> {
        Ok(format!("{} failed to start", id))
    }

    fn get_configurations(&self, id: &str, _version: &str) -> anyhow::Result<Vec<ConfigParameter>> {
        Ok(self
            .configurations
            .borrow()
            .get(id)
            .cloned()
            .unwrap_or_default())
    }

    fn update_configuration(
        &self,
        id: &str,
        _version: &str,
        key: &str,
        value: &str,
    ) -> anyhow::Result<()> {
        self.record(format!("update_configuration {} {}={}", id, key, value));
        let mut configurations = self.configurations.borrow_mut();
        let parameter = configurations
            .get_mut(id)
            .and_then(|params| params.iter_mut().find(|p| p.key == key))
            .ok_or_else(|| anyhow!("{} has no parameter {}", id, key))?;
        parameter.value = value.to_string();
        Ok(())
    }
}

/// Sleeper that records requested delays without blocking
#[derive(Default)]
pub(crate) struct RecordingSleeper {
    pub delays: RefCell<Vec<Duration>>,
}

impl Sleeper for RecordingSleeper {
    fn sleep(&self, duration: Duration) {
        self.delays.borrow_mut().push(duration);
    }
}
