// envprinter: project environment reporter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for envprinter.
//!
//! # Config Structure
//!
//! ```text
//! Config: PrinterConfig, ScanConfig, ExclusionConfig, ServerConfig
//! ExclusionStrategy: catalog (default) | policy-list
//! ```

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::ConfigError;
use crate::scan::DEFAULT_RESOURCE_GLOBS;
use crate::scan::pattern::PatternKind;
use crate::utility::encoding::Encoding;

/// Feature switches for the printer itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PrinterConfig {
    /// Master switch: startup dump and endpoint.
    pub enabled: bool,
    /// Expose the HTTP query endpoint.
    pub endpoint_enabled: bool,
    /// Report only variables referenced by scanned resources.
    pub project_only: bool,
    /// Report values; when false only names are shown.
    ///
    /// Turning this on writes secret-bearing values to logs and responses.
    pub show_values: bool,
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoint_enabled: true,
            project_only: true,
            show_values: false,
        }
    }
}

/// Where and what to scan for variable references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScanConfig {
    /// Search path; every glob is resolved relative to each root.
    pub roots: Vec<PathBuf>,
    /// Resource location globs.
    pub patterns: Vec<String>,
    /// Follow symbolic links while resolving globs.
    pub follow_links: bool,
    /// Reference patterns applied to every line.
    pub references: Vec<PatternKind>,
    /// Line decoding; `auto` falls back to Latin-1 for invalid UTF-8.
    pub encoding: Encoding,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            roots: vec![
                PathBuf::from("."),
                PathBuf::from("config"),
                PathBuf::from("src/main/resources"),
            ],
            patterns: DEFAULT_RESOURCE_GLOBS.iter().map(|p| (*p).to_string()).collect(),
            follow_links: false,
            references: PatternKind::ALL.to_vec(),
            encoding: Encoding::Auto,
        }
    }
}

/// Exclusion strategy selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExclusionStrategy {
    /// Built-in (or replaced) catalog of OS/platform names.
    #[default]
    Catalog,
    /// Operator-supplied include/exclude prefix lists.
    PolicyList,
}

impl std::fmt::Display for ExclusionStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Catalog => write!(f, "catalog"),
            Self::PolicyList => write!(f, "policy-list"),
        }
    }
}

/// Noise exclusion settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExclusionConfig {
    pub strategy: ExclusionStrategy,
    /// Replaces the built-in catalog when non-empty (catalog strategy).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub catalog: Vec<String>,
    /// Deny-list prefixes (policy-list strategy).
    pub exclude_prefixes: Vec<String>,
    /// Allow-list prefixes for project-only mode (policy-list strategy).
    pub include_patterns: Vec<String>,
}

/// HTTP query endpoint settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// Listen address, `host:port`.
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:8080".to_string(),
        }
    }
}

impl ServerConfig {
    /// Parses the listen address.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `bind` is not a socket address.
    pub fn socket_addr(&self) -> std::result::Result<SocketAddr, ConfigError> {
        self.bind.parse().map_err(|e| ConfigError::InvalidValue {
            section: "server".to_string(),
            key: "bind".to_string(),
            message: format!("'{}' is not a socket address: {e}", self.bind),
        })
    }
}
