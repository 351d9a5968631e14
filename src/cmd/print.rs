// envprinter: project environment reporter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Print command and the startup banner.
//!
//! ```text
//! ===============================
//! 🌍 Environment Variables
//! ===============================
//! DB_HOST = db.internal
//! DB_PORT = <not set>
//! ===============================
//! ```

use tracing::info;

use crate::cli::PrintArgs;
use crate::config::Config;
use crate::error::Result;
use crate::filter::engine::FilteredResult;
use crate::filter::engine_from_config;

/// Separator line framing the banner.
pub const BANNER_RULE: &str = "===============================";

/// Banner title.
pub const BANNER_TITLE: &str = "🌍 Environment Variables";

/// Renders the banner, one entry per line in name order.
#[must_use]
pub fn banner_lines(result: &FilteredResult) -> Vec<String> {
    let mut lines = Vec::with_capacity(result.len() + 4);
    lines.push(BANNER_RULE.to_string());
    lines.push(BANNER_TITLE.to_string());
    lines.push(BANNER_RULE.to_string());
    lines.extend(result.iter().map(|(name, value)| format!("{name} = {value}")));
    lines.push(BANNER_RULE.to_string());
    lines
}

/// Logs the banner at info level.
pub fn log_banner(result: &FilteredResult) {
    for line in banner_lines(result) {
        info!("{line}");
    }
}

/// Main handler for print command.
///
/// # Errors
///
/// Returns an error if the JSON output cannot be serialized.
pub fn run_print_command(args: &PrintArgs, config: &Config) -> Result<()> {
    if !config.printer.enabled {
        info!("environment printer disabled (printer.enabled = false)");
        return Ok(());
    }

    let result = engine_from_config(config).filtered_environment();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        log_banner(&result);
    }
    Ok(())
}
