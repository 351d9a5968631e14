// envprinter: project environment reporter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!      EnvPrinterError (16 bytes)
//!                 |
//!      +----------+----------+
//!      |          |          |
//!      v          v          v
//!   Config      Scan      Server
//!    Box         Box        Box
//!
//! Sub-errors (unboxed internally):
//!   Config  InvalidValue
//!   Scan    InvalidGlob, InvalidPattern, RootNotFound, ReadFailed
//!   Server  Bind, Serve
//! ```
//!
//! The scanning and filtering core never surfaces these to its consumers:
//! scan failures are logged and degrade to partial results. The variants
//! exist for the layers that do fail loudly (config loading, resolver
//! setup, the HTTP listener).

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`EnvPrinterError`].
pub type EnvPrinterResult<T> = std::result::Result<T, EnvPrinterError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum small on the stack.
#[derive(Debug, Error)]
pub enum EnvPrinterError {
    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Resource resolution or scanning error.
    #[error("scan error: {0}")]
    Scan(#[from] Box<ScanError>),

    /// HTTP endpoint error.
    #[error("server error: {0}")]
    Server(#[from] Box<ServerError>),
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for EnvPrinterError {
                fn from(err: $error) -> Self {
                    EnvPrinterError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ConfigError => Config,
    ScanError => Scan,
    ServerError => Server,
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

// --- Scan Errors ---

/// Errors raised while resolving or reading scanned resources.
#[derive(Debug, Error)]
pub enum ScanError {
    /// A resource location glob could not be compiled.
    #[error("invalid glob pattern '{pattern}': {message}")]
    InvalidGlob { pattern: String, message: String },

    /// A textual usage pattern could not be compiled.
    #[error("invalid usage pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// A search root does not exist.
    #[error("search root does not exist: {0}")]
    RootNotFound(String),

    /// Reading a resource failed.
    #[error("failed to read resource '{resource}': {source}")]
    ReadFailed {
        resource: String,
        #[source]
        source: std::io::Error,
    },
}

// --- Server Errors ---

/// HTTP endpoint errors.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Failed to bind the listener.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// The server stopped with an error.
    #[error("server stopped: {0}")]
    Serve(#[source] std::io::Error),
}
