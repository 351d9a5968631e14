// envprinter: project environment reporter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{Encoding, bytes_to_utf8, decode_line};
use std::borrow::Cow;

#[test]
fn test_utf8_passthrough_is_borrowed() {
    let input = "greeting=${GREETING:Hello, 世界!}";
    let result = bytes_to_utf8(Encoding::Auto, input.as_bytes());
    assert!(matches!(result, Cow::Borrowed(_)));
    assert_eq!(result, input);
}

#[test]
fn test_latin1_fallback() {
    let result = bytes_to_utf8(Encoding::Auto, b"caf\xe9");
    insta::assert_snapshot!(result, @"café");
}

#[test]
fn test_forced_utf8_is_lossy() {
    let result = bytes_to_utf8(Encoding::Utf8, b"caf\xe9");
    assert_eq!(result, "caf\u{FFFD}");
}

#[test]
fn test_decode_line_strips_terminators_and_bom() {
    let raw: [&[u8]; 3] = [
        b"\xEF\xBB\xBFdb.url=${DB_URL}\r\n",
        b"port=${PORT}\n",
        b"last=${LAST}",
    ];
    let lines: Vec<String> = raw
        .iter()
        .map(|line| decode_line(Encoding::Auto, line).into_owned())
        .collect();

    insta::assert_debug_snapshot!(lines, @r#"
    [
        "db.url=${DB_URL}",
        "port=${PORT}",
        "last=${LAST}",
    ]
    "#);
}

#[test]
fn test_encoding_names_match_serde() {
    for encoding in [Encoding::Auto, Encoding::Utf8, Encoding::Latin1] {
        let json = serde_json::to_string(&encoding).unwrap();
        assert_eq!(json, format!("\"{encoding}\""));
    }
}

#[test]
fn test_forced_latin1_never_borrows() {
    let result = bytes_to_utf8(Encoding::Latin1, "café".as_bytes());
    assert!(matches!(result, Cow::Owned(_)));
    assert_eq!(result, "cafÃ©");
}
