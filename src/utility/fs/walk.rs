// envprinter: project environment reporter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Glob resolution under a single search root.
//!
//! ```text
//! GlobSearch::for_pattern("application*.yml")   depth 1
//! GlobSearch::for_pattern("config/app*.yml")    depth 2
//! GlobSearch::for_pattern("**/app*.yml")        unbounded
//!        |
//!        v
//! find_files(root) --> WalkParallel --> wax match on root-relative path
//!                                 --> flume --> sorted Vec<PathBuf>
//! ```

use crate::error::{EnvPrinterResult, ScanError};
use bon::Builder;
use flume::unbounded;
use ignore::{WalkBuilder, WalkState};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{debug, trace};
use wax::{Glob, Program};

/// Directories never descended into.
pub const PRUNED_DIRS: [&str; 4] = ["node_modules", ".git", ".hg", ".svn"];

/// How one glob is searched below a root.
///
/// Directories named in [`PRUNED_DIRS`] are never entered. Ignore files
/// are not consulted: build output such as `target/classes` is usually
/// ignored by VCS yet holds the packaged resources.
#[derive(Debug, Clone, Builder)]
pub struct GlobSearch {
    /// Path components below the root (None = unlimited).
    #[builder(setters(name = with_max_depth))]
    max_depth: Option<usize>,
    #[builder(setters(name = with_follow_links), default = false)]
    follow_links: bool,
}

impl Default for GlobSearch {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl GlobSearch {
    /// Bounds the search by the shape of `pattern`.
    ///
    /// `**` descends without limit, otherwise the depth equals the number of
    /// path components.
    #[must_use]
    pub fn for_pattern(pattern: &str, follow_links: bool) -> Self {
        let max_depth =
            (!pattern.contains("**")).then(|| pattern.split('/').filter(|c| !c.is_empty()).count());

        Self::builder()
            .maybe_with_max_depth(max_depth)
            .with_follow_links(follow_links)
            .build()
    }

    #[must_use]
    pub const fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    #[must_use]
    pub const fn follow_links(&self) -> bool {
        self.follow_links
    }

    fn walker(&self, root: &Path) -> WalkBuilder {
        let mut builder = WalkBuilder::new(root);
        builder
            .standard_filters(false)
            .hidden(true)
            .max_depth(self.max_depth)
            .follow_links(self.follow_links);

        builder.filter_entry(|entry| {
            let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
            !(is_dir
                && entry
                    .file_name()
                    .to_str()
                    .is_some_and(|name| PRUNED_DIRS.contains(&name)))
        });

        builder
    }
}

/// Finds files under `root` whose root-relative path matches `pattern`.
///
/// Unreadable entries are skipped. The result is sorted so callers see a
/// stable resource order.
///
/// # Errors
///
/// Returns an error if:
/// - The root directory does not exist.
/// - The glob pattern is invalid.
///
/// # Example
/// ```no_run
/// use envprinter::utility::fs::walk::{find_files, GlobSearch};
///
/// let pattern = "application*.yml";
/// let files = find_files("config", pattern, &GlobSearch::for_pattern(pattern, false))?;
/// for file in files {
///     println!("{}", file.display());
/// }
/// # Ok::<(), envprinter::error::EnvPrinterError>(())
/// ```
pub fn find_files<P: AsRef<Path>>(
    root: P,
    pattern: &str,
    search: &GlobSearch,
) -> EnvPrinterResult<Vec<PathBuf>> {
    let root = root.as_ref();

    if !root.is_dir() {
        return Err(ScanError::RootNotFound(root.display().to_string()).into());
    }

    let glob = Glob::new(pattern).map_err(|e| ScanError::InvalidGlob {
        pattern: pattern.to_string(),
        message: e.to_string(),
    })?;
    let glob = Arc::new(glob);

    let (tx, rx) = unbounded::<PathBuf>();
    let skipped = Arc::new(AtomicUsize::new(0));

    search.walker(root).build_parallel().run(|| {
        let tx = tx.clone();
        let glob = Arc::clone(&glob);
        let skipped = Arc::clone(&skipped);

        Box::new(move |entry| {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    trace!(error = %e, "skipping unreadable entry");
                    skipped.fetch_add(1, Ordering::Relaxed);
                    return WalkState::Continue;
                }
            };

            let is_file = entry.file_type().is_some_and(|ft| ft.is_file());
            if is_file
                && let Ok(relative) = entry.path().strip_prefix(root)
                && glob.is_match(relative)
            {
                let _ = tx.send(entry.into_path());
            }
            WalkState::Continue
        })
    });

    drop(tx);
    let mut files: Vec<PathBuf> = rx.into_iter().collect();
    files.sort();

    debug!(
        root = %root.display(),
        pattern,
        matched = files.len(),
        skipped = skipped.load(Ordering::Relaxed),
        "resolved glob"
    );

    Ok(files)
}
