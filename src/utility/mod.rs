// envprinter: project environment reporter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Utility modules.
//!
//! ```text
//! encoding
//!   decode_line()   UTF-8, Windows-1252 fallback, BOM/CRLF stripping
//! fs
//!   walk:  find_files(), GlobSearch
//! ```

pub mod encoding;
pub mod fs;
