// envprinter: project environment reporter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for envprinter.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. envprinter.toml (cwd, optional)
//! 3. --config FILE (repeatable, required)
//! 4. ENVPRINTER_* env vars
//! 5. --set KEY=VALUE
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! ENVPRINTER_PRINTER__SHOW_VALUES=true        → printer.show_values = true
//! ENVPRINTER_SCAN__ROOTS=.,config             → scan.roots = [".", "config"]
//! ENVPRINTER_EXCLUSION__STRATEGY=policy-list  → exclusion.strategy = "policy-list"
//! ```
//!
//! # Example
//!
//! ```toml
//! [printer]
//! project_only = false
//!
//! [exclusion]
//! strategy = "policy-list"
//! exclude_prefixes = ["JAVA_", "MAVEN_"]
//! ```

pub mod loader;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{ConfigError, EnvPrinterError, Result, ScanError};

use loader::ConfigLoader;
use types::{ExclusionConfig, PrinterConfig, ScanConfig, ServerConfig};

/// Prefix for configuration environment variables.
pub const ENV_PREFIX: &str = "ENVPRINTER";

/// Default configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "envprinter.toml";

/// Keys whose values are lists when given as strings.
pub(crate) const LIST_KEYS: [&str; 6] = [
    "scan.roots",
    "scan.patterns",
    "scan.references",
    "exclusion.catalog",
    "exclusion.exclude_prefixes",
    "exclusion.include_patterns",
];

/// Complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Printer switches.
    pub printer: PrinterConfig,
    /// Usage scan settings.
    pub scan: ScanConfig,
    /// Noise exclusion settings.
    pub exclusion: ExclusionConfig,
    /// HTTP endpoint settings.
    pub server: ServerConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use envprinter::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("envprinter.toml")
    ///     .with_env_prefix("ENVPRINTER")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Validate cross-field constraints.
    ///
    /// # Errors
    ///
    /// Returns an error if the bind address does not parse, no resource
    /// globs or reference patterns are configured, or a glob is malformed.
    pub fn validate(&self) -> Result<()> {
        self.server.socket_addr().map_err(EnvPrinterError::from)?;

        if self.scan.patterns.is_empty() {
            return Err(EnvPrinterError::from(ConfigError::InvalidValue {
                section: "scan".to_string(),
                key: "patterns".to_string(),
                message: "at least one resource glob is required".to_string(),
            })
            .into());
        }

        if self.scan.references.is_empty() {
            return Err(EnvPrinterError::from(ConfigError::InvalidValue {
                section: "scan".to_string(),
                key: "references".to_string(),
                message: "at least one reference pattern is required".to_string(),
            })
            .into());
        }

        for pattern in &self.scan.patterns {
            wax::Glob::new(pattern).map_err(|e| {
                EnvPrinterError::from(ScanError::InvalidGlob {
                    pattern: pattern.clone(),
                    message: e.to_string(),
                })
            })?;
        }

        Ok(())
    }

    /// Format configuration options for display.
    ///
    /// Output is deterministically ordered using `BTreeMap`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_printer_options(&mut options);
        self.format_scan_options(&mut options);
        self.format_exclusion_options(&mut options);
        options.insert("server.bind".to_string(), self.server.bind.clone());

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_printer_options(&self, options: &mut BTreeMap<String, String>) {
        let printer = &self.printer;
        options.insert("printer.enabled".into(), printer.enabled.to_string());
        options.insert(
            "printer.endpoint_enabled".into(),
            printer.endpoint_enabled.to_string(),
        );
        options.insert("printer.project_only".into(), printer.project_only.to_string());
        options.insert("printer.show_values".into(), printer.show_values.to_string());
    }

    fn format_scan_options(&self, options: &mut BTreeMap<String, String>) {
        let roots: Vec<String> = self
            .scan
            .roots
            .iter()
            .map(|p| p.display().to_string())
            .collect();
        options.insert("scan.roots".into(), roots.join(", "));
        options.insert("scan.patterns".into(), self.scan.patterns.join(", "));
        options.insert("scan.follow_links".into(), self.scan.follow_links.to_string());
        let references: Vec<String> = self
            .scan
            .references
            .iter()
            .map(ToString::to_string)
            .collect();
        options.insert("scan.references".into(), references.join(", "));
        options.insert("scan.encoding".into(), self.scan.encoding.to_string());
    }

    fn format_exclusion_options(&self, options: &mut BTreeMap<String, String>) {
        let exclusion = &self.exclusion;
        options.insert("exclusion.strategy".into(), exclusion.strategy.to_string());
        let catalog = if exclusion.catalog.is_empty() {
            "[built-in]".to_string()
        } else {
            exclusion.catalog.join(", ")
        };
        options.insert("exclusion.catalog".into(), catalog);
        options.insert(
            "exclusion.exclude_prefixes".into(),
            exclusion.exclude_prefixes.join(", "),
        );
        options.insert(
            "exclusion.include_patterns".into(),
            exclusion.include_patterns.join(", "),
        );
    }
}
