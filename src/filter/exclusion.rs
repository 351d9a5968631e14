// envprinter: project environment reporter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Exclusion of OS and platform noise.
//!
//! ```text
//! ExclusionPolicy
//!   Catalog     exact names (HashSet) + prefixes (entries ending in '_')
//!   PolicyList  exclude_prefixes (deny)  +  include_patterns (allow, project-only)
//! ```

use std::collections::HashSet;

use crate::config::types::{ExclusionConfig, ExclusionStrategy};

/// Marks a catalog entry as a prefix rather than an exact name.
pub const PREFIX_MARKER: char = '_';

/// Built-in catalog of variables injected by the OS, shell or session.
///
/// Entries ending in [`PREFIX_MARKER`] match by prefix.
pub const DEFAULT_CATALOG: &[&str] = &[
    // Windows
    "ALLUSERSPROFILE",
    "APPDATA",
    "CommonProgramFiles",
    "CommonProgramFiles(x86)",
    "CommonProgramW6432",
    "COMPUTERNAME",
    "ComSpec",
    "DriverData",
    "HOMEDRIVE",
    "HOMEPATH",
    "LOCALAPPDATA",
    "LOGONSERVER",
    "NUMBER_OF_PROCESSORS",
    "OneDrive",
    "OneDriveConsumer",
    "OS",
    "Path",
    "PATHEXT",
    "PROCESSOR_",
    "ProgramData",
    "ProgramFiles",
    "ProgramFiles(x86)",
    "ProgramW6432",
    "PSModulePath",
    "PUBLIC",
    "SESSIONNAME",
    "SystemDrive",
    "SystemRoot",
    "TEMP",
    "TMP",
    "USERDOMAIN",
    "USERDOMAIN_ROAMINGPROFILE",
    "USERNAME",
    "USERPROFILE",
    "windir",
    // Unix session and shell
    "COLORTERM",
    "DBUS_SESSION_BUS_ADDRESS",
    "DESKTOP_SESSION",
    "DISPLAY",
    "EDITOR",
    "HISTCONTROL",
    "HISTSIZE",
    "HOME",
    "HOSTNAME",
    "LESSOPEN",
    "LOGNAME",
    "LS_COLORS",
    "MAIL",
    "OLDPWD",
    "PAGER",
    "PATH",
    "PWD",
    "SHELL",
    "SHLVL",
    "SSH_",
    "TERM",
    "TERM_PROGRAM",
    "TERM_PROGRAM_VERSION",
    "TMPDIR",
    "USER",
    "VISUAL",
    "WAYLAND_DISPLAY",
    "XAUTHORITY",
    "XDG_",
    "_",
    // Locale
    "LANG",
    "LANGUAGE",
    "LC_",
    "TZ",
    // macOS
    "__CF_BUNDLE_IDENTIFIER",
    "__CFBundleIdentifier",
    "Apple_PubSub_Socket_Render",
    "TERM_SESSION_ID",
];

/// Exact names plus name prefixes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionCatalog {
    exact: HashSet<String>,
    prefixes: Vec<String>,
}

impl Default for ExclusionCatalog {
    fn default() -> Self {
        Self::from_entries(DEFAULT_CATALOG.iter().copied())
    }
}

impl ExclusionCatalog {
    /// Builds a catalog; entries ending in `_` become prefixes.
    ///
    /// A lone `_` is the shell's last-argument variable and stays exact.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut exact = HashSet::new();
        let mut prefixes = Vec::new();
        for entry in entries {
            let entry = entry.into();
            if entry.len() > 1 && entry.ends_with(PREFIX_MARKER) {
                prefixes.push(entry);
            } else {
                exact.insert(entry);
            }
        }
        Self { exact, prefixes }
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.exact.contains(name) || self.prefixes.iter().any(|p| name.starts_with(p.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.exact.len() + self.prefixes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Decides which variables are noise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExclusionPolicy {
    /// Built-in or operator-supplied catalog.
    Catalog(ExclusionCatalog),
    /// Operator-supplied prefix lists.
    PolicyList {
        /// Names starting with any of these are excluded.
        exclude_prefixes: Vec<String>,
        /// In project-only mode, live names starting with any of these are
        /// reported alongside detected usage.
        include_patterns: Vec<String>,
    },
}

impl Default for ExclusionPolicy {
    fn default() -> Self {
        Self::Catalog(ExclusionCatalog::default())
    }
}

impl ExclusionPolicy {
    /// Builds the policy selected by configuration.
    #[must_use]
    pub fn from_config(config: &ExclusionConfig) -> Self {
        match config.strategy {
            ExclusionStrategy::Catalog if config.catalog.is_empty() => Self::default(),
            ExclusionStrategy::Catalog => {
                Self::Catalog(ExclusionCatalog::from_entries(config.catalog.iter().cloned()))
            }
            ExclusionStrategy::PolicyList => Self::PolicyList {
                exclude_prefixes: config.exclude_prefixes.clone(),
                include_patterns: config.include_patterns.clone(),
            },
        }
    }

    /// Whether `name` is noise under this policy.
    #[must_use]
    pub fn is_excluded(&self, name: &str) -> bool {
        match self {
            Self::Catalog(catalog) => catalog.contains(name),
            Self::PolicyList {
                exclude_prefixes, ..
            } => exclude_prefixes.iter().any(|p| name.starts_with(p.as_str())),
        }
    }

    /// Whether `name` is explicitly allow-listed for project-only mode.
    ///
    /// Always false for the catalog strategy.
    #[must_use]
    pub fn is_included(&self, name: &str) -> bool {
        match self {
            Self::Catalog(_) => false,
            Self::PolicyList {
                include_patterns, ..
            } => include_patterns.iter().any(|p| name.starts_with(p.as_str())),
        }
    }

    #[must_use]
    pub const fn strategy(&self) -> ExclusionStrategy {
        match self {
            Self::Catalog(_) => ExclusionStrategy::Catalog,
            Self::PolicyList { .. } => ExclusionStrategy::PolicyList,
        }
    }
}
