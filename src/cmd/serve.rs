// envprinter: project environment reporter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Serve command: startup dump, then the HTTP endpoint until Ctrl+C.
//!
//! ```text
//! printer.enabled = false          --> return
//! startup dump (unless skipped)    --> log_banner
//! printer.endpoint_enabled = false --> return
//! bind --> serve(shutdown_signal)
//! ```
//!
//! The dump and the endpoint share one engine, so the project is scanned
//! once for both.

use std::sync::Arc;
use tracing::info;

use super::print::log_banner;
use crate::cli::ServeArgs;
use crate::config::Config;
use crate::config::types::ServerConfig;
use crate::error::Result;
use crate::filter::engine_from_config;
use crate::server;

/// Main handler for serve command.
///
/// # Errors
///
/// Returns an error if the bind address is invalid, the listener cannot be
/// bound, or the server stops abnormally.
pub async fn run_serve_command(args: &ServeArgs, config: &Config) -> Result<()> {
    if !config.printer.enabled {
        info!("environment printer disabled (printer.enabled = false)");
        return Ok(());
    }

    let engine = Arc::new(engine_from_config(config));

    if !args.no_startup_dump {
        let dump = Arc::clone(&engine);
        let result = tokio::task::spawn_blocking(move || dump.filtered_environment()).await?;
        log_banner(&result);
    }

    if !config.printer.endpoint_enabled {
        info!("query endpoint disabled (printer.endpoint_enabled = false)");
        return Ok(());
    }

    let addr = match &args.bind {
        Some(bind) => ServerConfig { bind: bind.clone() }.socket_addr()?,
        None => config.server.socket_addr()?,
    };

    let listener = server::bind(addr).await?;
    server::serve(listener, engine, server::shutdown_signal()).await?;
    Ok(())
}
