// envprinter: project environment reporter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Textual reference patterns applied to one line at a time.
//!
//! ```text
//! ${NAME} / ${NAME:default}        Placeholder     normalized + shape-checked
//! System.getenv("NAME")            DirectAccess    normalized, always accepted
//! @Value("${NAME:default}")        InjectedValue   normalized + shape-checked
//! ```
//!
//! A placeholder spanning several lines is not recognized.

use bitflags::bitflags;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::normalize::normalize;
use crate::error::{EnvPrinterResult, ScanError};

const PLACEHOLDER: &str = r"\$\{([^}:]+)(?::[^}]*)?\}";
const DIRECT_ACCESS: &str = r#"System\.getenv\(["']([^"']+)["']\)"#;
const INJECTED_VALUE: &str = r#"@Value\(["']\$\{([^}:]+)(?::[^}]*)?\}["']\)"#;

bitflags! {
    /// Which reference patterns a [`PatternScanner`] applies.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PatternSet: u8 {
        /// `${NAME}` and `${NAME:default}`.
        const PLACEHOLDER = 0x01;
        /// `System.getenv("NAME")`.
        const DIRECT_ACCESS = 0x02;
        /// `@Value("${NAME}")`.
        const INJECTED_VALUE = 0x04;
    }
}

impl Default for PatternSet {
    fn default() -> Self {
        Self::all()
    }
}

impl FromIterator<PatternKind> for PatternSet {
    fn from_iter<T: IntoIterator<Item = PatternKind>>(iter: T) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |set, kind| set | kind.flag())
    }
}

/// The pattern that produced a match.
///
/// Also names the patterns in `scan.references`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum PatternKind {
    Placeholder,
    DirectAccess,
    InjectedValue,
}

impl PatternKind {
    /// Every kind, in configuration order.
    pub const ALL: [Self; 3] = [Self::Placeholder, Self::DirectAccess, Self::InjectedValue];

    #[must_use]
    pub const fn flag(self) -> PatternSet {
        match self {
            Self::Placeholder => PatternSet::PLACEHOLDER,
            Self::DirectAccess => PatternSet::DIRECT_ACCESS,
            Self::InjectedValue => PatternSet::INJECTED_VALUE,
        }
    }

    /// Whether names found by this pattern must pass [`is_likely_env_var`].
    #[must_use]
    pub const fn requires_shape_check(self) -> bool {
        !matches!(self, Self::DirectAccess)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Placeholder => "placeholder",
            Self::DirectAccess => "direct-access",
            Self::InjectedValue => "injected-value",
        }
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An accepted variable reference found in a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageMatch {
    pub kind: PatternKind,
    pub name: String,
}

/// Checks whether a name looks like an environment variable.
///
/// Accepts `^[A-Z][A-Z0-9_]*$`, or anything containing an underscore.
///
/// ```
/// use envprinter::scan::pattern::is_likely_env_var;
///
/// assert!(is_likely_env_var("DB_HOST"));
/// assert!(is_likely_env_var("spring_profile"));
/// assert!(!is_likely_env_var("server.port"));
/// ```
#[must_use]
pub fn is_likely_env_var(name: &str) -> bool {
    if name.contains('_') {
        return true;
    }
    let mut chars = name.chars();
    chars.next().is_some_and(|c| c.is_ascii_uppercase())
        && chars.all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
}

/// Applies the enabled reference patterns to single lines of text.
#[derive(Debug, Clone)]
pub struct PatternScanner {
    patterns: Vec<(PatternKind, Regex)>,
}

impl PatternScanner {
    /// Compiles the patterns selected by `set`.
    ///
    /// # Errors
    ///
    /// Returns `ScanError::InvalidPattern` if a pattern fails to compile.
    pub fn new(set: PatternSet) -> EnvPrinterResult<Self> {
        let table = [
            (PatternSet::PLACEHOLDER, PatternKind::Placeholder, PLACEHOLDER),
            (PatternSet::INJECTED_VALUE, PatternKind::InjectedValue, INJECTED_VALUE),
            (PatternSet::DIRECT_ACCESS, PatternKind::DirectAccess, DIRECT_ACCESS),
        ];

        let mut patterns = Vec::with_capacity(table.len());
        for (flag, kind, source) in table {
            if !set.contains(flag) {
                continue;
            }
            let regex = Regex::new(source).map_err(|e| ScanError::InvalidPattern {
                pattern: source.to_string(),
                message: e.to_string(),
            })?;
            patterns.push((kind, regex));
        }

        Ok(Self { patterns })
    }

    /// Returns every accepted reference in `line`, grouped by pattern.
    ///
    /// Each pattern yields its non-overlapping matches left to right.
    /// Candidates rejected by the shape check are dropped silently.
    #[must_use]
    pub fn scan_line(&self, line: &str) -> Vec<UsageMatch> {
        let mut found = Vec::new();
        for (kind, regex) in &self.patterns {
            for captures in regex.captures_iter(line) {
                let Some(raw) = captures.get(1) else {
                    continue;
                };
                let name = normalize(raw.as_str().trim());
                if name.is_empty() {
                    continue;
                }
                if kind.requires_shape_check() && !is_likely_env_var(name) {
                    continue;
                }
                found.push(UsageMatch {
                    kind: *kind,
                    name: name.to_string(),
                });
            }
        }
        found
    }
}
