//! # Artifact Copier
//!
//! Force-copies everything under the source checkout's `dist` directory into
//! the destination working tree, creating directories as needed and
//! overwriting existing files without conflict detection. There is no dry
//! run. After the copy, `git status` is run inside the destination so the
//! operator sees what changed before the publish menu.

use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::defaults::DIST_DIR;
use crate::error::{Error, Result};
use crate::git;

/// Recursively copy the contents of `dist_path` into `dest_repo_path`.
///
/// Separated from [`copy_and_report`] so the filesystem behavior can be
/// tested without a git checkout.
pub fn copy_dist(dist_path: &Path, dest_repo_path: &Path) -> Result<()> {
    for entry in WalkDir::new(dist_path) {
        let entry = entry.map_err(|e| Error::ArtifactCopy {
            src: dist_path.display().to_string(),
            dst: dest_repo_path.display().to_string(),
            message: e.to_string(),
        })?;

        let relative = entry
            .path()
            .strip_prefix(dist_path)
            .map_err(|e| Error::ArtifactCopy {
                src: entry.path().display().to_string(),
                dst: dest_repo_path.display().to_string(),
                message: e.to_string(),
            })?;
        if relative.as_os_str().is_empty() {
            continue;
        }

        let target = dest_repo_path.join(relative);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &target).map_err(|e| Error::ArtifactCopy {
                src: entry.path().display().to_string(),
                dst: target.display().to_string(),
                message: e.to_string(),
            })?;
        }
    }

    Ok(())
}

/// Copy build output into the destination working tree, then report its
/// `git status` to the operator.
pub fn copy_and_report(src_repo_path: &Path, dest_repo_path: &Path) -> Result<()> {
    let dist_path = src_repo_path.join(DIST_DIR);
    log::info!(
        "copying {} -> {}",
        dist_path.display(),
        dest_repo_path.display()
    );

    copy_dist(&dist_path, dest_repo_path)?;
    git::status_plan(dest_repo_path).run()
}
