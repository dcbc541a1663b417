//! Content Layout
//!
//! Describes which paths of an artifact directory belong to the artifact and
//! implements selective copy and comparison over them. Anything else in the
//! directory (per-stage folders, editor files) is never copied or compared.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, trace, warn};

use crate::domain::services::{contents_equal, normalize, Differ, TextKind};
use crate::domain::value_objects::{ScriptCollectionMap, SyncDirection};
use crate::error::{CpiError, CpiResult};
use crate::infrastructure::fs::local;

/// Manifest location shared by every artifact type
pub const MANIFEST_PATH: &str = "META-INF/MANIFEST.MF";
const RESOURCES_PATH: &str = "src/main/resources";
pub const PARAMETERS_PATH: &str = "src/main/resources/parameters.prop";
const PROCESS_MODEL_DIR: &str = "src/main/resources/scenarioflows/integrationflow";
const PROCESS_MODEL_EXT: &str = "iflw";

/// Paths managed for one artifact type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentLayout {
    /// Resource subtree, compared file by file
    pub resources: Option<&'static str>,
    /// Extra top-level files
    pub files: &'static [&'static str],
    /// Externalized parameter values
    pub parameters: Option<&'static str>,
}

impl ContentLayout {
    /// Manifest plus `src/main/resources` (flows, mappings, scripts)
    pub const BUNDLE: ContentLayout = ContentLayout {
        resources: Some(RESOURCES_PATH),
        files: &[],
        parameters: Some(PARAMETERS_PATH),
    };

    /// Manifest plus `value_mapping.xml`
    pub const VALUE_MAPPING: ContentLayout = ContentLayout {
        resources: None,
        files: &["value_mapping.xml"],
        parameters: None,
    };

    /// Copy the managed paths of `src` into `tgt`
    ///
    /// Managed paths missing from `src` are removed from `tgt`.
    pub fn copy(&self, src: &Path, tgt: &Path) -> CpiResult<()> {
        let manifest = src.join(MANIFEST_PATH);
        if !manifest.is_file() {
            return Err(CpiError::InvalidArtifactDirectory {
                path: src.to_path_buf(),
                reason: format!("missing {}", MANIFEST_PATH),
            });
        }
        local::copy_file(&manifest, &tgt.join(MANIFEST_PATH))?;

        if let Some(resources) = self.resources {
            let target = tgt.join(resources);
            local::remove_path(&target)?;
            let source = src.join(resources);
            if source.is_dir() {
                local::copy_dir_all(&source, &target)?;
            }
        }

        for file in self.files {
            let source = src.join(file);
            let target = tgt.join(file);
            if source.is_file() {
                local::copy_file(&source, &target)?;
            } else {
                local::remove_path(&target)?;
            }
        }
        Ok(())
    }

    /// Whether the managed content of `src` and `tgt` differs
    ///
    /// `script_map` is applied to the process models of `src` before they are
    /// compared. The parameters file only counts when the tenant is the
    /// authoritative side.
    pub fn differs(
        &self,
        src: &Path,
        tgt: &Path,
        script_map: &ScriptCollectionMap,
        direction: SyncDirection,
    ) -> CpiResult<bool> {
        let mut differs = false;

        differs |= optional_file_differs(src, tgt, MANIFEST_PATH, TextKind::Manifest)?;

        if let Some(resources) = self.resources {
            differs |= self.resources_differ(src, tgt, resources, script_map)?;
        }

        for file in self.files {
            differs |= optional_file_differs(src, tgt, file, TextKind::Plain)?;
        }

        if let (Some(parameters), SyncDirection::TenantToGit) = (self.parameters, direction) {
            differs |= optional_file_differs(src, tgt, parameters, TextKind::Parameters)?;
        }

        Ok(differs)
    }

    fn resources_differ(
        &self,
        src: &Path,
        tgt: &Path,
        resources: &str,
        script_map: &ScriptCollectionMap,
    ) -> CpiResult<bool> {
        let src_root = src.join(resources);
        let tgt_root = tgt.join(resources);
        match (src_root.is_dir(), tgt_root.is_dir()) {
            (false, false) => {
                warn!(
                    "{} missing in both {} and {}, skipping comparison",
                    resources,
                    src.display(),
                    tgt.display()
                );
                return Ok(false);
            }
            (true, false) | (false, true) => {
                debug!("{} present on one side only", resources);
                return Ok(true);
            }
            (true, true) => {}
        }

        let excluded = self
            .parameters
            .and_then(|p| Path::new(p).strip_prefix(resources).ok())
            .map(Path::to_path_buf);
        let listing = |root: &Path| -> CpiResult<BTreeSet<PathBuf>> {
            Ok(local::list_files(root)?
                .into_iter()
                .filter(|p| Some(p) != excluded.as_ref())
                .collect())
        };
        let src_files = listing(&src_root)?;
        let tgt_files = listing(&tgt_root)?;

        let mut differs = false;
        for only in src_files.symmetric_difference(&tgt_files) {
            debug!("{} exists on one side only", only.display());
            differs = true;
        }

        for relative in src_files.intersection(&tgt_files) {
            let mut src_content = fs::read(src_root.join(relative))?;
            if is_in_process_models(resources, relative) && !script_map.is_empty() {
                if let Ok(text) = String::from_utf8(src_content.clone()) {
                    src_content = script_map.apply(&text).into_bytes();
                }
            }
            let tgt_content = fs::read(tgt_root.join(relative))?;
            differs |= content_differs(relative, &src_content, &tgt_content, TextKind::Plain);
        }
        Ok(differs)
    }
}

/// Compare a file that may be absent on either side
///
/// Absent on both sides is equal; absent on one side differs.
fn optional_file_differs(src: &Path, tgt: &Path, relative: &str, kind: TextKind) -> CpiResult<bool> {
    let src_path = src.join(relative);
    let tgt_path = tgt.join(relative);
    match (src_path.is_file(), tgt_path.is_file()) {
        (false, false) => Ok(false),
        (true, true) => {
            let a = fs::read(&src_path)?;
            let b = fs::read(&tgt_path)?;
            Ok(content_differs(Path::new(relative), &a, &b, kind))
        }
        _ => {
            debug!("{} exists on one side only", relative);
            Ok(true)
        }
    }
}

fn content_differs(relative: &Path, src: &[u8], tgt: &[u8], kind: TextKind) -> bool {
    if contents_equal(src, tgt, kind) {
        return false;
    }
    let label = relative.display().to_string();
    match (std::str::from_utf8(src), std::str::from_utf8(tgt)) {
        (Ok(a), Ok(b)) => {
            let a = normalize(a, kind);
            let b = normalize(b, kind);
            let differ = Differ::new();
            debug!("{} differs ({})", label, differ.summarize(&b, &a).summary());
            trace!(
                "{}",
                differ.unified(&b, &a, &format!("target/{}", label), &format!("source/{}", label))
            );
        }
        _ => debug!("{} differs (binary)", label),
    }
    true
}

/// Rewrite script collection references in the process models under `dir`
///
/// Only integration flows carry process models; other layouts are untouched.
pub fn remap_script_references(dir: &Path, script_map: &ScriptCollectionMap) -> CpiResult<()> {
    if script_map.is_empty() {
        return Ok(());
    }
    let models = dir.join(PROCESS_MODEL_DIR);
    if !models.is_dir() {
        return Ok(());
    }
    for relative in local::list_files(&models)? {
        if !is_process_model(&relative) {
            continue;
        }
        let path = models.join(&relative);
        let content = fs::read_to_string(&path)?;
        let remapped = script_map.apply(&content);
        if remapped != content {
            fs::write(&path, remapped)?;
        }
    }
    Ok(())
}

fn is_process_model(relative: &Path) -> bool {
    relative
        .extension()
        .is_some_and(|ext| ext == PROCESS_MODEL_EXT)
}

fn is_in_process_models(resources: &str, relative: &Path) -> bool {
    Path::new(resources)
        .join(relative)
        .starts_with(PROCESS_MODEL_DIR)
        && is_process_model(relative)
}
