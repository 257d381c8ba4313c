// outbase: Build Output Relocation Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Recursive, idempotent deletion of resolved output directories.
//!
//! ```text
//! clean_targets(targets, project_dir, options, cancel)
//!   per target:
//!     cancelled?        --> abort with error
//!     guard             --> never the fs root, the project dir,
//!                           or an ancestor of the project dir
//!     missing?          --> skip (idempotent)
//!     VCS metadata?     --> refuse unless --force
//!     disk_usage        --> parallel walk, hidden files counted
//!     dry?              --> report only
//!     remove_dir_all    --> NotFound tolerated
//! ```

use bon::Builder;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::error::{FsError, Result};
use crate::utility::fs::walk::{WalkOptions, parallel_walk, parallel_walk_with_callback};


/// Directory names that mark a version-controlled tree.
const VCS_DIRS: &[&str] = &[".git", ".hg", ".svn"];

/// A directory scheduled for deletion.
#[derive(Debug, Clone)]
pub struct CleanTarget {
    /// Display name (module name, or the project name for the build root).
    pub name: String,
    /// Directory to delete.
    pub path: PathBuf,
}

impl CleanTarget {
    /// Creates a new target.
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

/// Options controlling the clean run.
#[derive(Debug, Clone, Copy, Builder)]
pub struct CleanOptions {
    /// Report what would be deleted without touching the filesystem.
    #[builder(setters(name = with_dry), default = false)]
    dry: bool,
    /// Delete targets even when they contain VCS metadata.
    #[builder(setters(name = with_force), default = false)]
    force: bool,
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl CleanOptions {
    /// Returns whether this is a dry run.
    #[must_use]
    pub const fn dry(&self) -> bool {
        self.dry
    }

    /// Returns whether VCS-controlled targets may be deleted.
    #[must_use]
    pub const fn force(&self) -> bool {
        self.force
    }
}

/// File count and byte total of a directory tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiskUsage {
    files: u64,
    bytes: u64,
}

impl DiskUsage {
    /// Returns the number of files.
    #[must_use]
    pub const fn files(&self) -> u64 {
        self.files
    }

    /// Returns the byte total.
    #[must_use]
    pub const fn bytes(&self) -> u64 {
        self.bytes
    }
}

/// Outcome of a clean run.
#[derive(Debug, Clone, Copy, Default)]
pub struct CleanReport {
    files: u64,
    bytes: u64,
    removed: usize,
    skipped: usize,
}

impl CleanReport {
    /// Files deleted (or counted, on a dry run).
    #[must_use]
    pub const fn files(&self) -> u64 {
        self.files
    }

    /// Bytes deleted (or counted, on a dry run).
    #[must_use]
    pub const fn bytes(&self) -> u64 {
        self.bytes
    }

    /// Targets actually removed.
    #[must_use]
    pub const fn removed(&self) -> usize {
        self.removed
    }

    /// Targets that were already absent.
    #[must_use]
    pub const fn skipped(&self) -> usize {
        self.skipped
    }
}

/// Computes the disk usage of a directory tree.
///
/// Uses a parallel walk that counts hidden files and ignores gitignore
/// rules, since build trees are routinely gitignored.
///
/// # Errors
///
/// Returns an error if the directory does not exist.
pub fn disk_usage(path: &Path) -> Result<DiskUsage> {
    let files = AtomicU64::new(0);
    let bytes = AtomicU64::new(0);

    parallel_walk_with_callback(path, &WalkOptions::for_output_tree(), |file| {
        files.fetch_add(1, Ordering::Relaxed);
        if let Ok(meta) = file.metadata() {
            bytes.fetch_add(meta.len(), Ordering::Relaxed);
        }
    })?;

    Ok(DiskUsage {
        files: files.load(Ordering::Relaxed),
        bytes: bytes.load(Ordering::Relaxed),
    })
}

/// Checks whether a tree contains version-control metadata anywhere.
///
/// # Errors
///
/// Returns an error if the directory does not exist.
pub fn contains_vcs_metadata(path: &Path) -> Result<bool> {
    let result = parallel_walk(path, &WalkOptions::for_output_tree())?;
    Ok(result.directories().iter().any(|dir| {
        dir.file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| VCS_DIRS.contains(&n))
    }))
}

/// Rejects targets that must never be deleted: the filesystem root, the
/// project directory itself, and any ancestor of the project directory.
fn guard_target(target: &CleanTarget, project_dir: &Path) -> Result<()> {
    if target.path.parent().is_none() {
        anyhow::bail!(
            "refusing to delete filesystem root for target '{}'",
            target.name
        );
    }
    if target.path == project_dir {
        anyhow::bail!(
            "refusing to delete the project directory {}",
            target.path.display()
        );
    }
    if project_dir.starts_with(&target.path) {
        anyhow::bail!(
            "refusing to delete {}: it contains the project directory",
            target.path.display()
        );
    }
    Ok(())
}

/// Deletes the given targets and all their descendants.
///
/// Idempotent: an already-absent target is skipped, not an error.
/// Cancellation is checked between targets; a cancelled run aborts with
/// an error after finishing the in-flight deletion.
///
/// # Errors
///
/// Returns an error for a guarded target, a VCS-controlled target without
/// `force`, a cancelled run, or a failed deletion.
pub async fn clean_targets(
    targets: &[CleanTarget],
    project_dir: &Path,
    options: &CleanOptions,
    cancel: &CancellationToken,
) -> Result<CleanReport> {
    let mut report = CleanReport::default();

    for target in targets {
        if cancel.is_cancelled() {
            anyhow::bail!("clean interrupted");
        }

        guard_target(target, project_dir)?;

        if !target.path.exists() {
            debug!(target = %target.name, path = %target.path.display(), "already absent");
            report.skipped += 1;
            continue;
        }

        if contains_vcs_metadata(&target.path)? {
            if options.force() {
                warn!(
                    target = %target.name,
                    "target contains VCS metadata, deleting anyway (--force)"
                );
            } else {
                anyhow::bail!(
                    "{} contains version-control metadata; pass --force to delete it",
                    target.path.display()
                );
            }
        }

        let usage = disk_usage(&target.path)?;
        report.files += usage.files();
        report.bytes += usage.bytes();

        if options.dry() {
            info!(
                target = %target.name,
                path = %target.path.display(),
                files = usage.files(),
                bytes = usage.bytes(),
                "dry run, would delete"
            );
            continue;
        }

        remove_tree(&target.path).await?;
        report.removed += 1;
        info!(
            target = %target.name,
            path = %target.path.display(),
            files = usage.files(),
            bytes = usage.bytes(),
            "deleted"
        );
    }

    Ok(report)
}

/// Removes a directory tree, tolerating a concurrent disappearance.
async fn remove_tree(path: &Path) -> Result<()> {
    match tokio::fs::remove_dir_all(path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
            Err(FsError::PermissionDenied(path.display().to_string()).into())
        }
        Err(e) => Err(FsError::IoError {
            path: path.display().to_string(),
            source: e,
        }
        .into()),
    }
}
