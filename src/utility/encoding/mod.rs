// envprinter: project environment reporter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Line decoding for scanned resources.
//!
//! ```text
//! raw line bytes --strip BOM/CR--> valid UTF-8? --yes--> borrowed &str
//!                                        |
//!                                        no
//!                                        v
//!                               Windows-1252 decode
//! ```
//!
//! `.properties` files are ISO-8859-1 by convention, so a line that is not
//! valid UTF-8 is decoded as Windows-1252 (a superset of Latin-1 for the
//! printable range) instead of being dropped. Uses `encoding_rs`.
//! `scan.encoding` forces one decoding for every line instead.

use encoding_rs::WINDOWS_1252;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Source encoding of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Encoding {
    /// Detect per line: UTF-8 when valid, Windows-1252 otherwise.
    #[default]
    Auto,
    /// UTF-8, invalid sequences replaced with U+FFFD.
    Utf8,
    /// Windows-1252 / ISO-8859-1.
    Latin1,
}

impl Encoding {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Utf8 => "utf8",
            Self::Latin1 => "latin1",
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Converts bytes from the given encoding to UTF-8.
///
/// # Example
/// ```
/// use envprinter::utility::encoding::{bytes_to_utf8, Encoding};
///
/// let latin1 = b"caf\xe9=${CAFE_HOST}";
/// assert_eq!(bytes_to_utf8(Encoding::Auto, latin1), "café=${CAFE_HOST}");
/// ```
#[must_use]
pub fn bytes_to_utf8(encoding: Encoding, bytes: &[u8]) -> Cow<'_, str> {
    match encoding {
        Encoding::Auto => match std::str::from_utf8(bytes) {
            Ok(text) => Cow::Borrowed(text),
            Err(_) => bytes_to_utf8(Encoding::Latin1, bytes),
        },
        Encoding::Utf8 => String::from_utf8_lossy(bytes),
        Encoding::Latin1 => {
            let (result, _had_errors) = WINDOWS_1252.decode_without_bom_handling(bytes);
            result
        }
    }
}

/// Decodes one raw line as read by a `\n`-delimited reader.
///
/// Strips a trailing `\n`/`\r\n` and a leading UTF-8 byte order mark.
#[must_use]
pub fn decode_line(encoding: Encoding, raw: &[u8]) -> Cow<'_, str> {
    let mut bytes = raw.strip_suffix(b"\n").unwrap_or(raw);
    bytes = bytes.strip_suffix(b"\r").unwrap_or(bytes);
    bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    bytes_to_utf8(encoding, bytes)
}

#[cfg(test)]
mod tests;
