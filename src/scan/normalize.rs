// envprinter: project environment reporter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Access-prefix stripping for matched names.

/// Namespace prefixes that route a placeholder to the environment, in match order.
pub const ACCESS_PREFIXES: [&str; 4] = ["env.", "environment.", "sys.", "system."];

/// Strips the first matching access prefix from `raw`.
///
/// At most one prefix is removed, so `env.system.FOO` becomes `system.FOO`.
///
/// ```
/// use envprinter::scan::normalize::normalize;
///
/// assert_eq!(normalize("env.DB_HOST"), "DB_HOST");
/// assert_eq!(normalize("DB_HOST"), "DB_HOST");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> &str {
    ACCESS_PREFIXES
        .iter()
        .find_map(|prefix| raw.strip_prefix(prefix))
        .unwrap_or(raw)
}
