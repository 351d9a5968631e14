// envprinter: project environment reporter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Resource resolution and line reading.
//!
//! ```text
//! walk(walker, globs)
//!   glob --> ResourceWalker::resolve() --> [Resource]
//!                  |                         |
//!          error => warn, next glob   Resource::lines()  (re-opens on every call)
//!                                            |
//!                                   read error => stop this resource
//! ```
//!
//! Missing roots, unreadable files and unresolvable globs are skipped,
//! never fatal.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::{EnvPrinterError, EnvPrinterResult, ScanError};
use crate::utility::encoding::{Encoding, decode_line};
use crate::utility::fs::walk::{GlobSearch, find_files};

/// Line iterator over one resource.
pub type Lines<'a> = Box<dyn Iterator<Item = io::Result<String>> + 'a>;

/// A readable text resource.
pub trait Resource: Send + Sync {
    /// Identifier used in diagnostics.
    fn id(&self) -> &str;

    /// Opens a fresh line reader; calling again restarts from the first line.
    ///
    /// # Errors
    ///
    /// Returns an error if the resource cannot be opened.
    fn lines(&self) -> io::Result<Lines<'_>>;
}

/// Resolves location globs to resources.
pub trait ResourceWalker: Send + Sync {
    /// Resolves one glob against every search location.
    ///
    /// Locations that do not exist contribute nothing.
    ///
    /// # Errors
    ///
    /// Returns an error when the glob itself cannot be resolved.
    fn resolve(&self, pattern: &str) -> EnvPrinterResult<Vec<Box<dyn Resource>>>;
}

/// Resolves `globs` lazily, one glob at a time, yielding resolved resources.
///
/// A glob that cannot be resolved is logged and skipped; later globs are
/// still resolved.
pub fn walk<'a>(
    walker: &'a dyn ResourceWalker,
    globs: &'a [String],
) -> impl Iterator<Item = Box<dyn Resource>> + 'a {
    globs
        .iter()
        .flat_map(move |glob| match walker.resolve(glob) {
            Ok(resources) => resources,
            Err(e) => {
                warn!(glob = %glob, error = %e, "skipping unresolvable resource glob");
                Vec::new()
            }
        })
}

/// Reads every line of `resource`, handing each to `visit`.
///
/// Open and read failures are logged and end the resource early.
/// Returns the number of lines visited.
pub fn for_each_line(resource: &dyn Resource, mut visit: impl FnMut(&str)) -> usize {
    let lines = match resource.lines() {
        Ok(lines) => lines,
        Err(e) => {
            debug!(resource = resource.id(), error = %e, "skipping unreadable resource");
            return 0;
        }
    };

    let mut count = 0;
    for line in lines {
        match line {
            Ok(line) => {
                visit(&line);
                count += 1;
            }
            Err(e) => {
                let error = ScanError::ReadFailed {
                    resource: resource.id().to_string(),
                    source: e,
                };
                warn!(%error, lines = count, "stopped reading resource");
                break;
            }
        }
    }
    count
}

/// A file on disk.
#[derive(Debug, Clone)]
pub struct FileResource {
    path: PathBuf,
    id: String,
    encoding: Encoding,
}

impl FileResource {
    /// A file decoded with [`Encoding::Auto`].
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        let id = path.display().to_string();
        Self {
            path,
            id,
            encoding: Encoding::Auto,
        }
    }

    #[must_use]
    pub const fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Resource for FileResource {
    fn id(&self) -> &str {
        &self.id
    }

    fn lines(&self) -> io::Result<Lines<'_>> {
        let reader = BufReader::new(File::open(&self.path)?);
        let encoding = self.encoding;
        Ok(Box::new(reader.split(b'\n').map(move |raw| {
            raw.map(|bytes| decode_line(encoding, &bytes).into_owned())
        })))
    }
}

/// Resolves globs relative to each directory of a search path.
///
/// Every root is searched; a file reachable from two roots is reported once.
#[derive(Debug, Clone)]
pub struct FsResourceWalker {
    roots: Vec<PathBuf>,
    follow_links: bool,
    encoding: Encoding,
}

impl FsResourceWalker {
    #[must_use]
    pub const fn new(roots: Vec<PathBuf>, follow_links: bool) -> Self {
        Self {
            roots,
            follow_links,
            encoding: Encoding::Auto,
        }
    }

    /// Decodes every resolved file with `encoding`.
    #[must_use]
    pub const fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    #[must_use]
    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }
}

impl ResourceWalker for FsResourceWalker {
    fn resolve(&self, pattern: &str) -> EnvPrinterResult<Vec<Box<dyn Resource>>> {
        let search = GlobSearch::for_pattern(pattern, self.follow_links);
        let mut seen = BTreeSet::new();
        let mut resources: Vec<Box<dyn Resource>> = Vec::new();

        for root in &self.roots {
            let files = match find_files(root, pattern, &search) {
                Ok(files) => files,
                Err(EnvPrinterError::Scan(e)) if matches!(*e, ScanError::RootNotFound(_)) => {
                    debug!(root = %root.display(), "search root not present");
                    continue;
                }
                Err(e) => return Err(e),
            };

            for file in files {
                let key = file.canonicalize().unwrap_or_else(|_| file.clone());
                if seen.insert(key) {
                    let resource = FileResource::new(file).with_encoding(self.encoding);
                    resources.push(Box::new(resource));
                }
            }
        }

        Ok(resources)
    }
}
