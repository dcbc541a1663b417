//! Local file system helpers
//!
//! Directory-level operations used by the materializer and the content
//! layouts: recursive copy, whole-directory replacement and file listing.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Relative paths of all files below `root`, sorted
///
/// Hidden files are included and ignore files are not honoured: artifact
/// content is compared exactly as it sits on disk.
pub fn list_files(root: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let walker = ignore::WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .build();

    for entry in walker {
        let entry = entry.map_err(|e| io::Error::other(e.to_string()))?;
        if entry.file_type().is_some_and(|t| t.is_file()) {
            let relative = entry
                .path()
                .strip_prefix(root)
                .map_err(|e| io::Error::other(e.to_string()))?;
            files.push(relative.to_path_buf());
        }
    }
    files.sort();
    Ok(files)
}

/// Copy the directory tree `src` into `dst`, creating `dst` if needed
pub fn copy_dir_all(src: &Path, dst: &Path) -> io::Result<()> {
    fs::create_dir_all(dst)?;
    for relative in list_files(src)? {
        let target = dst.join(&relative);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(src.join(&relative), target)?;
    }
    Ok(())
}

/// Copy one file, creating parent directories
pub fn copy_file(src: &Path, dst: &Path) -> io::Result<()> {
    if let Some(parent) = dst.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::copy(src, dst)?;
    Ok(())
}

/// Remove a file or directory tree if it exists
pub fn remove_path(path: &Path) -> io::Result<()> {
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.is_dir() => fs::remove_dir_all(path),
        Ok(_) => fs::remove_file(path),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e),
    }
}

/// Replace `dst` wholesale with the contents of `src`
///
/// The new tree is assembled in a holding directory next to `dst`. The old
/// `dst` is moved into the holding directory before the new tree is renamed
/// into place and moved back if that rename fails, so a failure at any step
/// leaves the previous `dst` in place. The holding directory is removed when
/// its guard drops.
pub fn replace_dir(src: &Path, dst: &Path) -> io::Result<()> {
    let parent = dst
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent)?;

    let holding = tempfile::Builder::new()
        .prefix(".cpisync-incoming-")
        .tempdir_in(parent)?;
    let incoming = holding.path().join("incoming");
    copy_dir_all(src, &incoming)?;

    let previous = holding.path().join("previous");
    let had_previous = match fs::symlink_metadata(dst) {
        Ok(_) => {
            fs::rename(dst, &previous)?;
            true
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => false,
        Err(e) => return Err(e),
    };

    if let Err(e) = fs::rename(&incoming, dst) {
        if had_previous {
            fs::rename(&previous, dst)?;
        }
        return Err(e);
    }
    Ok(())
}

/// Fresh staging directory, removed when the guard drops
///
/// Created under `work_dir` when given, otherwise in the system temp dir.
pub fn staging_dir(work_dir: Option<&Path>) -> io::Result<tempfile::TempDir> {
    let mut builder = tempfile::Builder::new();
    builder.prefix("cpisync-staging-");
    match work_dir {
        Some(dir) => {
            fs::create_dir_all(dir)?;
            builder.tempdir_in(dir)
        }
        None => builder.tempdir(),
    }
}
