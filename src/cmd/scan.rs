// envprinter: project environment reporter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Scan command: lists the variable names the project references.

use crate::config::Config;
use crate::scan::UsageScanner;

/// Scans the configured resources and prints one name per line.
pub fn run_scan_command(config: &Config) {
    let used = UsageScanner::from_config(&config.scan).scan();
    if used.is_empty() {
        println!("No environment variable references found");
    } else {
        for name in &used {
            println!("{name}");
        }
    }
}
