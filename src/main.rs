// envprinter: project environment reporter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Logging --> Config --> Command Dispatch
//!   Options | Configs | Print | Scan | Serve
//! ```

use anyhow::Context;
use std::process::ExitCode;

use envprinter::cli::global::GlobalOptions;
use envprinter::cli::{self, Command};
use envprinter::cmd::config::{run_configs_command, run_options_command};
use envprinter::cmd::print::run_print_command;
use envprinter::cmd::scan::run_scan_command;
use envprinter::cmd::serve::run_serve_command;
use envprinter::config::loader::ConfigLoader;
use envprinter::config::{Config, DEFAULT_CONFIG_FILE, ENV_PREFIX};
use envprinter::logging::init_logging;
use envprinter::logging::{LogConfig, LogFormat, LogLevel};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::parse();

    let log_config = build_log_config(&cli.global);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli).await
}

fn build_log_config(global: &GlobalOptions) -> LogConfig {
    let console_level = global
        .log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(LogLevel::INFO);

    let file_level = global
        .file_log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(console_level);

    let format = if global.log_json {
        LogFormat::Json
    } else {
        LogFormat::Text
    };

    LogConfig::builder()
        .with_console_level(console_level)
        .with_file_level(file_level)
        .with_format(format)
        .maybe_with_log_file(global.log_file.as_ref().map(|p| p.display().to_string()))
        .build()
}

async fn dispatch_command(cli: &cli::Cli) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        Some(Command::Options) => {
            load_config(&cli.global).map(|config| run_options_command(&config))
        }
        Some(Command::Configs) => {
            let loader = build_config_loader(&cli.global);
            run_configs_command(&loader.format_loaded_files());
            Ok(())
        }
        Some(Command::Print(args)) => {
            load_config(&cli.global).and_then(|config| run_print_command(args, &config))
        }
        Some(Command::Scan) => load_config(&cli.global).map(|config| run_scan_command(&config)),
        Some(Command::Serve(args)) => match load_config(&cli.global) {
            Ok(config) => run_serve_command(args, &config).await,
            Err(e) => Err(e),
        },
        None => Err(anyhow::anyhow!(
            "no command specified, use --help for usage information"
        )),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn build_config_loader(global: &GlobalOptions) -> ConfigLoader {
    let mut loader = ConfigLoader::new().add_toml_file_optional(DEFAULT_CONFIG_FILE);
    for config_path in &global.configs {
        loader = loader.add_toml_file(config_path);
    }
    loader.with_env_prefix(ENV_PREFIX)
}

fn load_config(global: &GlobalOptions) -> envprinter::error::Result<Config> {
    let mut loader = build_config_loader(global);
    for option in global.to_config_overrides() {
        loader = loader.set_option(&option)?;
    }
    loader.build().context("failed to load config")
}
