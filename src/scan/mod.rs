// envprinter: project environment reporter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Usage detection: which environment variables does the project reference?
//!
//! # Pipeline
//!
//! ```text
//! UsageScanner::scan()
//!   for glob in patterns
//!     ResourceWalker::resolve(glob) --> [Resource]
//!       for line in Resource::lines()
//!         PatternScanner::scan_line() --> normalize() --> shape check
//!           --> BTreeSet<String>  (union, order independent)
//! ```
//!
//! # Failure policy
//!
//! ```text
//! unreadable resource  -> skipped (debug)
//! read error mid-file  -> rest of that file skipped (warn)
//! unresolvable glob    -> that glob skipped, the rest still scanned (warn)
//! nothing found        -> empty set, a valid answer
//! ```
//!
//! Compiled units (class files, object code) are never scanned: the source
//! text cannot be recovered from them.

pub mod normalize;
pub mod pattern;
pub mod resource;


use std::collections::BTreeSet;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info, trace, warn};

use crate::config::types::ScanConfig;
use crate::error::EnvPrinterResult;
use pattern::{PatternScanner, PatternSet};
use resource::{FsResourceWalker, ResourceWalker, for_each_line, walk};

/// Resource globs scanned when none are configured.
pub const DEFAULT_RESOURCE_GLOBS: [&str; 3] = [
    "application*.properties",
    "application*.yml",
    "application*.yaml",
];

/// Computes the set of environment variable names referenced by resources.
#[derive(Clone)]
pub struct UsageScanner {
    walker: Arc<dyn ResourceWalker>,
    globs: Vec<String>,
    patterns: PatternSet,
}

impl std::fmt::Debug for UsageScanner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UsageScanner")
            .field("globs", &self.globs)
            .field("patterns", &self.patterns)
            .finish_non_exhaustive()
    }
}

impl UsageScanner {
    /// Creates a scanner over `globs` resolved by `walker`.
    #[must_use]
    pub fn new(walker: Arc<dyn ResourceWalker>, globs: Vec<String>) -> Self {
        Self {
            walker,
            globs,
            patterns: PatternSet::default(),
        }
    }

    /// Creates a filesystem-backed scanner from configuration.
    #[must_use]
    pub fn from_config(config: &ScanConfig) -> Self {
        let roots: Vec<PathBuf> = config.roots.clone();
        let walker =
            FsResourceWalker::new(roots, config.follow_links).with_encoding(config.encoding);
        Self::new(Arc::new(walker), config.patterns.clone())
            .with_patterns(config.references.iter().copied().collect())
    }

    /// Restricts the reference patterns applied to each line.
    #[must_use]
    pub const fn with_patterns(mut self, patterns: PatternSet) -> Self {
        self.patterns = patterns;
        self
    }

    #[must_use]
    pub fn globs(&self) -> &[String] {
        &self.globs
    }

    #[must_use]
    pub const fn patterns(&self) -> PatternSet {
        self.patterns
    }

    /// Scans every resource and returns the referenced variable names.
    ///
    /// Never fails: unresolvable globs and unreadable resources are logged
    /// and skipped, and any other error returns what was collected so far.
    #[must_use]
    pub fn scan(&self) -> BTreeSet<String> {
        let mut used = BTreeSet::new();

        if let Err(e) = self.scan_into(&mut used) {
            warn!(
                error = %e,
                found = used.len(),
                "error scanning project for environment variable usage"
            );
        }

        info!(count = used.len(), "environment variables referenced by the project");
        used
    }

    fn scan_into(&self, used: &mut BTreeSet<String>) -> EnvPrinterResult<()> {
        let scanner = PatternScanner::new(self.patterns)?;

        for resource in walk(self.walker.as_ref(), &self.globs) {
            let before = used.len();
            let lines = for_each_line(resource.as_ref(), |line| {
                for found in scanner.scan_line(line) {
                    trace!(kind = %found.kind, name = %found.name, "found reference");
                    used.insert(found.name);
                }
            });
            debug!(
                resource = resource.id(),
                lines,
                new = used.len() - before,
                "scanned resource"
            );
        }

        debug!("compiled units are not scanned");
        Ok(())
    }
}
