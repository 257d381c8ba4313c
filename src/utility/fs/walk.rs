// outbase: Build Output Relocation Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::error::Result;
use bon::Builder;
use flume::bounded;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::warn;

/// Traversal options for the parallel walkers.
///
/// The defaults behave like a polite source-tree walk (hidden entries
/// skipped, gitignore respected); [`WalkOptions::for_output_tree`] is the
/// preset the clean path uses.
#[derive(Debug, Clone, Builder)]
pub struct WalkOptions {
    /// Depth limit, unlimited when unset.
    #[builder(setters(name = with_max_depth))]
    max_depth: Option<usize>,
    /// Follow symbolic links.
    #[builder(setters(name = with_follow_links), default = false)]
    follow_links: bool,
    /// Visit dotfiles and dot-directories.
    #[builder(setters(name = with_include_hidden), default = false)]
    include_hidden: bool,
    /// Honor .gitignore / global excludes.
    #[builder(setters(name = with_respect_gitignore), default = true)]
    respect_gitignore: bool,
    /// Walker thread count, auto-detected when unset.
    #[builder(setters(name = with_threads))]
    threads: Option<usize>,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl WalkOptions {
    /// Preset for scanning a relocated build tree.
    ///
    /// Build trees are routinely gitignored and full of dotfiles, so the
    /// scan counts hidden entries and ignores gitignore rules.
    #[must_use]
    pub fn for_output_tree() -> Self {
        Self::builder()
            .with_include_hidden(true)
            .with_respect_gitignore(false)
            .build()
    }

    fn to_walker(&self, root: &Path) -> WalkBuilder {
        let mut builder = WalkBuilder::new(root);

        builder.max_depth(self.max_depth);
        builder.follow_links(self.follow_links);
        builder.hidden(!self.include_hidden);
        builder.git_ignore(self.respect_gitignore);
        builder.git_global(self.respect_gitignore);
        builder.git_exclude(self.respect_gitignore);
        if let Some(threads) = self.threads {
            builder.threads(threads);
        }

        builder
    }
}

/// Everything a [`parallel_walk`] found.
#[derive(Debug)]
pub struct WalkResult {
    files: Vec<PathBuf>,
    directories: Vec<PathBuf>,
    error_count: usize,
}

impl WalkResult {
    /// Files found during traversal.
    #[must_use]
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Directories found during traversal, the root included.
    #[must_use]
    pub fn directories(&self) -> &[PathBuf] {
        &self.directories
    }

    /// Entries that could not be read.
    #[must_use]
    pub const fn error_count(&self) -> usize {
        self.error_count
    }
}

/// Walks `root` on multiple threads and collects every file and
/// directory path.
///
/// Entries stream through bounded flume channels so a huge tree never
/// materializes twice in memory; dedicated collector threads drain the
/// channels while the walk runs.
///
/// # Errors
///
/// Returns an error if `root` does not exist.
pub fn parallel_walk<P: AsRef<Path>>(root: P, options: &WalkOptions) -> Result<WalkResult> {
    let root = root.as_ref();

    if !root.exists() {
        anyhow::bail!("root directory does not exist: {}", root.display());
    }

    // Bounded channels cap memory on huge trees; the receivers must be
    // drained while the walk runs or the walker threads stall once a
    // channel fills up.
    let (file_tx, file_rx) = bounded::<PathBuf>(1000);
    let (dir_tx, dir_rx) = bounded::<PathBuf>(1000);
    let error_count = Arc::new(AtomicUsize::new(0));

    let parallel = options.to_walker(root).build_parallel();

    let (files, directories) =
        std::thread::scope(|scope| -> Result<(Vec<PathBuf>, Vec<PathBuf>)> {
            let file_collector = scope.spawn(move || file_rx.iter().collect::<Vec<PathBuf>>());
            let dir_collector = scope.spawn(move || dir_rx.iter().collect::<Vec<PathBuf>>());

            parallel.run(|| {
                let file_tx = file_tx.clone();
                let dir_tx = dir_tx.clone();
                let error_count = Arc::clone(&error_count);

                Box::new(move |entry_result| {
                    match entry_result {
                        Ok(entry) => {
                            let path = entry.path();

                            if entry.file_type().is_some_and(|ft| ft.is_dir()) {
                                let _ = dir_tx.send(path.to_path_buf());
                            } else if entry.file_type().is_some_and(|ft| ft.is_file()) {
                                let _ = file_tx.send(path.to_path_buf());
                            }
                        }
                        Err(e) => {
                            warn!(error = %e, "walk error");
                            error_count.fetch_add(1, Ordering::Relaxed);
                        }
                    }
                    ignore::WalkState::Continue
                })
            });

            // Closing the senders lets the collectors finish
            drop(file_tx);
            drop(dir_tx);

            let files = file_collector
                .join()
                .map_err(|_| anyhow::anyhow!("file collector thread panicked"))?;
            let directories = dir_collector
                .join()
                .map_err(|_| anyhow::anyhow!("directory collector thread panicked"))?;
            Ok((files, directories))
        })?;

    Ok(WalkResult {
        files,
        directories,
        error_count: error_count.load(Ordering::Relaxed),
    })
}

/// Walks `root` on multiple threads, invoking `callback` for every file
/// as it is discovered. Nothing is collected; the aggregation lives in
/// the callback (disk usage uses atomics).
///
/// Returns the number of files visited.
///
/// # Errors
///
/// Returns an error if `root` does not exist.
pub fn parallel_walk_with_callback<P, F>(
    root: P,
    options: &WalkOptions,
    callback: F,
) -> Result<usize>
where
    P: AsRef<Path>,
    F: Fn(&Path) + Send + Sync,
{
    let root = root.as_ref();

    if !root.exists() {
        anyhow::bail!("root directory does not exist: {}", root.display());
    }

    let callback = Arc::new(callback);
    let count = Arc::new(AtomicUsize::new(0));

    let parallel = options.to_walker(root).build_parallel();
    parallel.run(|| {
        let callback = Arc::clone(&callback);
        let count = Arc::clone(&count);

        Box::new(move |entry_result| {
            if let Ok(entry) = entry_result
                && entry.file_type().is_some_and(|ft| ft.is_file())
            {
                callback(entry.path());
                count.fetch_add(1, Ordering::Relaxed);
            }
            ignore::WalkState::Continue
        })
    });

    Ok(count.load(Ordering::Relaxed))
}
