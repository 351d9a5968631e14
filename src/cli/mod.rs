// envprinter: project environment reporter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for envprinter using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! envprinter [global options] <command>
//! version
//! options
//! configs
//! print [--json]
//! scan
//! serve [--bind ADDR] [--no-startup-dump]
//! ```

pub mod global;


use crate::cli::global::GlobalOptions;
use clap::{Args, Parser, Subcommand};

/// Project environment reporter.
///
/// Reports the environment variables a project actually references.
#[derive(Debug, Parser)]
#[command(
    name = "envprinter",
    author,
    version,
    about = "Project environment reporter",
    long_about = "envprinter Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Scans application*.properties/yml/yaml resources for environment\n\
                  variable references and reports the matching part of the process\n\
                  environment, without OS and shell noise.",
    after_help = "CONFIGURATION:\n\n\
                  envprinter reads `envprinter.toml` from the current directory if\n\
                  present, then every --config file in order, then ENVPRINTER_*\n\
                  environment variables (ENVPRINTER_PRINTER__SHOW_VALUES=true), then\n\
                  --set overrides. Later sources win."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their effective values.
    Options,

    /// Lists the configuration files in load order.
    Configs,

    /// Prints the filtered environment once.
    Print(PrintArgs),

    /// Lists the variable names referenced by the project.
    Scan,

    /// Prints the filtered environment, then serves it over HTTP.
    Serve(ServeArgs),
}

/// Arguments for `print`.
#[derive(Debug, Clone, Default, Args)]
pub struct PrintArgs {
    /// Writes a JSON object to stdout instead of the log banner.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `serve`.
#[derive(Debug, Clone, Default, Args)]
pub struct ServeArgs {
    /// Listen address, overrides server.bind.
    #[arg(short = 'b', long = "bind", value_name = "ADDR")]
    pub bind: Option<String>,

    /// Skips the startup banner.
    #[arg(long = "no-startup-dump")]
    pub no_startup_dump: bool,
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
