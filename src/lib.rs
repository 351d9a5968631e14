// envprinter: project environment reporter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |          print / scan / serve
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |   TOML, layered settings  |
//!              '-------------+-------------'
//!                            v
//!   server (axum) ----> filter::FilterEngine
//!                        |        |        |
//!                        v        v        v
//!                  snapshot  exclusion   scan::UsageScanner
//!                                          |
//!                                  ResourceWalker --> PatternScanner
//!                                                        |
//!                                                    normalize
//!
//!   +-----------------------------------------+
//!   |  foundation   error, logging, utility   |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod error;
pub mod filter;
pub mod logging;
pub mod scan;
pub mod server;
pub mod utility;
