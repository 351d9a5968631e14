// envprinter: project environment reporter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! # Option Precedence
//!
//! ```text
//! --config FILE       ← Additional config files (can repeat)
//! --set KEY=VAL       ← Direct config override (can repeat)
//! --show-values       ← printer.show_values = true
//! --all               ← printer.project_only = false
//! --log-level N       ← Console verbosity (0-6)
//! --file-log-level N  ← File verbosity (defaults to --log-level)
//! --log-file FILE     ← Also log to FILE
//! --log-json          ← JSON console output
//!
//! Precedence: CLI flags > --set > env > --config > envprinter.toml > defaults
//! ```

use clap::Args;
use std::path::PathBuf;

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Path to additional TOML configuration file(s).
    /// Can be specified multiple times; later files win.
    #[arg(short = 'c', long = "config", value_name = "FILE", action = clap::ArgAction::Append, global = true)]
    pub configs: Vec<PathBuf>,

    /// Sets an option, such as 'printer.show_values=true' or
    /// 'exclusion/exclude_prefixes=JAVA_,MAVEN_'.
    /// Can be specified multiple times.
    #[arg(short = 's', long = "set", value_name = "OPTION", action = clap::ArgAction::Append, global = true)]
    pub options: Vec<String>,

    /// Reports values instead of names only.
    /// Values may contain secrets and are written to logs.
    #[arg(long = "show-values", global = true)]
    pub show_values: bool,

    /// Reports every non-excluded variable, not just the ones the project uses.
    #[arg(short = 'a', long = "all", global = true)]
    pub all: bool,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace, 6=dump).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6), global = true)]
    pub log_level: Option<u8>,

    /// File log level, overrides --log-level for the log file.
    #[arg(long = "file-log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6), global = true)]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE", global = true)]
    pub log_file: Option<PathBuf>,

    /// Emits console logs as JSON lines.
    #[arg(long = "log-json", global = true)]
    pub log_json: bool,
}

impl GlobalOptions {
    /// Converts command-line flags to configuration overrides.
    ///
    /// Flags come after `--set` so they win.
    #[must_use]
    pub fn to_config_overrides(&self) -> Vec<String> {
        let mut overrides = self.options.clone();

        if self.show_values {
            overrides.push("printer.show_values=true".to_string());
        }

        if self.all {
            overrides.push("printer.project_only=false".to_string());
        }

        overrides
    }
}
