// envprinter: project environment reporter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Read-only HTTP query endpoint.
//!
//! ```text
//! GET /env/env-printer      --+
//!                              +--> spawn_blocking(FilterEngine::filtered_environment)
//! GET /actuator/envprinter  --+         |
//!                                        v
//!                               200 {"NAME": "value" | "" | "<not set>"}
//! ```
//!
//! Both routes serve the same map and take no parameters. Filtering never
//! fails, so neither does the response.

use axum::{Json, Router, extract::State, routing::get};
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::error::ServerError;
use crate::filter::engine::{FilterEngine, FilteredResult};

/// Controller-style route.
pub const CONTROLLER_ROUTE: &str = "/env/env-printer";

/// Management-style route.
pub const ENDPOINT_ROUTE: &str = "/actuator/envprinter";

/// Builds the router serving both routes from one shared engine.
pub fn router(engine: Arc<FilterEngine>) -> Router {
    Router::new()
        .route(CONTROLLER_ROUTE, get(filtered_environment))
        .route(ENDPOINT_ROUTE, get(filtered_environment))
        .with_state(engine)
}

async fn filtered_environment(State(engine): State<Arc<FilterEngine>>) -> Json<FilteredResult> {
    // The first project-only request may scan the filesystem.
    match tokio::task::spawn_blocking(move || engine.filtered_environment()).await {
        Ok(result) => Json(result),
        Err(e) => {
            warn!(error = %e, "filtering task failed, returning empty result");
            Json(FilteredResult::new())
        }
    }
}

/// Binds the listener.
///
/// # Errors
///
/// Returns `ServerError::Bind` if the address is unavailable.
pub async fn bind(addr: SocketAddr) -> Result<TcpListener, ServerError> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.to_string(),
            source,
        })
}

/// Serves requests until `shutdown` resolves.
///
/// # Errors
///
/// Returns `ServerError::Serve` if the server stops abnormally.
pub async fn serve<F>(
    listener: TcpListener,
    engine: Arc<FilterEngine>,
    shutdown: F,
) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        info!(
            %addr,
            routes = ?[CONTROLLER_ROUTE, ENDPOINT_ROUTE],
            "serving environment endpoint"
        );
    }

    axum::serve(listener, router(engine))
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(ServerError::Serve)
}

/// Resolves on Ctrl+C.
pub async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown requested"),
        Err(e) => {
            warn!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    }
}
