// envprinter: project environment reporter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for the HTTP query endpoint.
//!
//! Each test binds an ephemeral port, queries it with `reqwest`, then shuts
//! the server down gracefully.

use envprinter::config::Config;
use envprinter::filter::engine_from_config;
use envprinter::server::{self, CONTROLLER_ROUTE, ENDPOINT_ROUTE};
use serde_json::{Value, json};
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

struct RunningServer {
    addr: SocketAddr,
    shutdown: oneshot::Sender<()>,
    handle: JoinHandle<Result<(), envprinter::error::ServerError>>,
}

impl RunningServer {
    async fn start(config: &Config) -> Self {
        let engine = Arc::new(engine_from_config(config));
        let listener = server::bind("127.0.0.1:0".parse().unwrap())
            .await
            .expect("failed to bind");
        let addr = listener.local_addr().unwrap();
        let (shutdown, signal) = oneshot::channel::<()>();
        let handle = tokio::spawn(server::serve(listener, engine, async {
            let _ = signal.await;
        }));
        Self {
            addr,
            shutdown,
            handle,
        }
    }

    async fn get(&self, route: &str) -> Value {
        let response = reqwest::get(format!("http://{}{route}", self.addr))
            .await
            .expect("request failed");
        assert_eq!(response.status(), reqwest::StatusCode::OK);
        response.json().await.expect("body is not JSON")
    }

    async fn stop(self) {
        let _ = self.shutdown.send(());
        self.handle
            .await
            .expect("server task panicked")
            .expect("server stopped with error");
    }
}

fn project(properties: &str) -> TempDir {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    std::fs::write(temp.path().join("application.properties"), properties).unwrap();
    temp
}

fn config_for(root: &Path, show_values: bool) -> Config {
    let mut config = Config::default();
    config.scan.roots = vec![root.to_path_buf()];
    config.printer.show_values = show_values;
    config
}

#[tokio::test]
async fn server_serves_both_routes() {
    // SAFETY: std serializes its own environment access, and no code in
    // this test binary reads the environment through libc `getenv`.
    unsafe {
        std::env::set_var("EPSRV_BOTH_DB_URL", "jdbc:h2:mem:test");
    }
    let temp = project("db.url=${EPSRV_BOTH_DB_URL}\nport=${EPSRV_BOTH_PORT:8080}\n");
    let server = RunningServer::start(&config_for(temp.path(), true)).await;

    let expected = json!({
        "EPSRV_BOTH_DB_URL": "jdbc:h2:mem:test",
        "EPSRV_BOTH_PORT": "<not set>",
    });
    assert_eq!(server.get(CONTROLLER_ROUTE).await, expected);
    assert_eq!(server.get(ENDPOINT_ROUTE).await, expected);

    server.stop().await;
}

#[tokio::test]
async fn server_hides_values_by_default() {
    // SAFETY: std serializes its own environment access, and no code in
    // this test binary reads the environment through libc `getenv`.
    unsafe {
        std::env::set_var("EPSRV_HIDDEN_TOKEN", "s3cr3t");
    }
    let temp = project("token=${EPSRV_HIDDEN_TOKEN}\nother=${EPSRV_HIDDEN_UNSET}\n");
    let server = RunningServer::start(&config_for(temp.path(), false)).await;

    assert_eq!(
        server.get(CONTROLLER_ROUTE).await,
        json!({ "EPSRV_HIDDEN_TOKEN": "", "EPSRV_HIDDEN_UNSET": "" })
    );

    server.stop().await;
}

#[tokio::test]
async fn server_sees_live_values_per_request() {
    let temp = project("flag=${EPSRV_LIVE_FLAG}\n");
    let server = RunningServer::start(&config_for(temp.path(), true)).await;

    assert_eq!(
        server.get(ENDPOINT_ROUTE).await,
        json!({ "EPSRV_LIVE_FLAG": "<not set>" })
    );

    // SAFETY: std serializes its own environment access, and no code in
    // this test binary reads the environment through libc `getenv`.
    unsafe {
        std::env::set_var("EPSRV_LIVE_FLAG", "on");
    }
    assert_eq!(
        server.get(ENDPOINT_ROUTE).await,
        json!({ "EPSRV_LIVE_FLAG": "on" })
    );

    server.stop().await;
}

#[tokio::test]
async fn server_unknown_route_is_not_found() {
    let temp = project("");
    let server = RunningServer::start(&config_for(temp.path(), false)).await;

    let response = reqwest::get(format!("http://{}/env", server.addr))
        .await
        .expect("request failed");
    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);

    server.stop().await;
}

#[tokio::test]
async fn bind_conflict_is_reported() {
    let listener = server::bind("127.0.0.1:0".parse().unwrap())
        .await
        .expect("failed to bind");
    let addr = listener.local_addr().unwrap();

    let err = server::bind(addr).await.unwrap_err();
    assert!(err.to_string().starts_with(&format!("failed to bind {addr}")));
}
