// envprinter: project environment reporter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The filtering engine.
//!
//! ```text
//! filtered_environment()
//!   EnvironmentSnapshot::capture()
//!        |
//!        +-- project_only = false --> snapshot - excluded
//!        |
//!        +-- project_only = true  --> usage (OnceLock, scanned once)
//!        |                             + include-listed live names
//!        |                             - excluded
//!        |                             value | Unset
//!        v
//!   show_values = false --> every value Hidden
//!        |
//!        v
//!   FilteredResult (BTreeMap, byte order)
//! ```

use serde::{Serialize, Serializer};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::OnceLock;
use tracing::{debug, info};

use super::exclusion::ExclusionPolicy;
use crate::config::types::PrinterConfig;
use crate::scan::UsageScanner;

/// Placeholder reported for a detected variable that is not set.
pub const UNSET_MARKER: &str = "<not set>";

/// An immutable copy of the process environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvironmentSnapshot {
    vars: BTreeMap<String, String>,
}

impl EnvironmentSnapshot {
    /// Captures the current process environment.
    ///
    /// Names or values that are not valid Unicode are converted lossily.
    #[must_use]
    pub fn capture() -> Self {
        let vars = std::env::vars_os()
            .map(|(k, v)| {
                (
                    k.to_string_lossy().into_owned(),
                    v.to_string_lossy().into_owned(),
                )
            })
            .collect();
        Self { vars }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for EnvironmentSnapshot {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// The value reported for one variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportedValue {
    /// The live value.
    Value(String),
    /// Referenced by the project but not present in the environment.
    Unset,
    /// Values are not shown.
    Hidden,
}

impl ReportedValue {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Value(value) => value,
            Self::Unset => UNSET_MARKER,
            Self::Hidden => "",
        }
    }
}

impl fmt::Display for ReportedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ReportedValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// Name-ordered variables reported to consumers.
pub type FilteredResult = BTreeMap<String, ReportedValue>;

/// Per-engine filtering switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSettings {
    /// Report only variables the project references.
    pub project_only: bool,
    /// Report values instead of empty placeholders.
    pub show_values: bool,
}

impl Default for FilterSettings {
    fn default() -> Self {
        Self {
            project_only: true,
            show_values: false,
        }
    }
}

impl From<&PrinterConfig> for FilterSettings {
    fn from(config: &PrinterConfig) -> Self {
        Self {
            project_only: config.project_only,
            show_values: config.show_values,
        }
    }
}

/// Combines detected usage, the live environment and an exclusion policy.
///
/// Share one engine (behind an `Arc`) between the startup dump and the
/// query endpoint: the usage set is scanned once per engine and reused.
#[derive(Debug)]
pub struct FilterEngine {
    settings: FilterSettings,
    exclusion: ExclusionPolicy,
    scanner: UsageScanner,
    usage: OnceLock<BTreeSet<String>>,
}

impl FilterEngine {
    #[must_use]
    pub const fn new(
        settings: FilterSettings,
        exclusion: ExclusionPolicy,
        scanner: UsageScanner,
    ) -> Self {
        Self {
            settings,
            exclusion,
            scanner,
            usage: OnceLock::new(),
        }
    }

    #[must_use]
    pub const fn settings(&self) -> FilterSettings {
        self.settings
    }

    #[must_use]
    pub const fn exclusion(&self) -> &ExclusionPolicy {
        &self.exclusion
    }

    /// The detected usage set, scanning on first access.
    ///
    /// Concurrent first callers block until the single scan publishes.
    /// The first scan logs a summary; with `show_values` on, that summary
    /// includes the live value of every detected variable.
    pub fn usage(&self) -> &BTreeSet<String> {
        self.usage.get_or_init(|| {
            let used = self.scanner.scan();
            if self.settings.show_values {
                let snapshot = EnvironmentSnapshot::capture();
                for name in &used {
                    let value = snapshot.get(name).unwrap_or(UNSET_MARKER);
                    info!(name, value, "detected variable");
                }
            } else {
                info!(names = ?used, "detected variables");
            }
            used
        })
    }

    /// Filters a fresh snapshot of the process environment.
    #[must_use]
    pub fn filtered_environment(&self) -> FilteredResult {
        self.filter(&EnvironmentSnapshot::capture())
    }

    /// Filters the given snapshot.
    #[must_use]
    pub fn filter(&self, snapshot: &EnvironmentSnapshot) -> FilteredResult {
        let mut result = if self.settings.project_only {
            self.project_variables(snapshot)
        } else {
            self.non_excluded_variables(snapshot)
        };

        if !self.settings.show_values {
            for value in result.values_mut() {
                *value = ReportedValue::Hidden;
            }
        }

        result
    }

    fn non_excluded_variables(&self, snapshot: &EnvironmentSnapshot) -> FilteredResult {
        snapshot
            .iter()
            .filter(|(name, _)| !self.exclusion.is_excluded(name))
            .map(|(name, value)| (name.to_string(), ReportedValue::Value(value.to_string())))
            .collect()
    }

    fn project_variables(&self, snapshot: &EnvironmentSnapshot) -> FilteredResult {
        let usage = self.usage();

        let included = snapshot
            .iter()
            .map(|(name, _)| name)
            .filter(|name| self.exclusion.is_included(name));

        let result: FilteredResult = usage
            .iter()
            .map(String::as_str)
            .chain(included)
            .filter(|name| !self.exclusion.is_excluded(name))
            .map(|name| {
                let value = snapshot
                    .get(name)
                    .map_or(ReportedValue::Unset, |v| ReportedValue::Value(v.to_string()));
                (name.to_string(), value)
            })
            .collect();

        debug!(
            detected = usage.len(),
            reported = result.len(),
            unset = result
                .values()
                .filter(|v| matches!(v, ReportedValue::Unset))
                .count(),
            "project environment resolved"
        );

        result
    }
}
