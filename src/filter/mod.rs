// envprinter: project environment reporter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment filtering.
//!
//! # Composition
//!
//! ```text
//! FilterEngine::new(settings, ExclusionPolicy, UsageScanner)
//!                    |            |                  |
//!          PrinterConfig   ExclusionConfig       ScanConfig
//! ```
//!
//! The engine owns its collaborators. Build it once and share it behind an
//! `Arc` between the startup dump and the HTTP endpoint.

pub mod engine;
pub mod exclusion;

#[cfg(test)]
mod tests;

use crate::config::Config;
use crate::scan::UsageScanner;
use engine::{FilterEngine, FilterSettings};
use exclusion::ExclusionPolicy;

/// Builds a filesystem-backed engine from configuration.
#[must_use]
pub fn engine_from_config(config: &Config) -> FilterEngine {
    FilterEngine::new(
        FilterSettings::from(&config.printer),
        ExclusionPolicy::from_config(&config.exclusion),
        UsageScanner::from_config(&config.scan),
    )
}
