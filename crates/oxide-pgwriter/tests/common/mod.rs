#![allow(dead_code)]

use oxide_pgwriter::{IntRange, PgWriterError, parse_range};

/// Sample inputs covering quotes, backslashes, unicode and keywords.
pub const SAMPLES: &[&str] = &[
    "",
    "plain",
    "O'Brien",
    "''",
    r"C:\tmp\new",
    r"\'",
    "it's a \"quoted\" word",
    "'; DROP TABLE users; --",
    "héllo wörld ✓",
    "tab\tnew\nline",
    "select",
];

pub fn count(haystack: &str, needle: char) -> usize {
    haystack.chars().filter(|c| *c == needle).count()
}

pub fn parse(text: &str) -> IntRange {
    parse_range(text).unwrap_or_else(|e| panic!("Failed to parse range: {text}\nError: {e}"))
}

pub fn parse_err(text: &str) -> PgWriterError {
    parse_range(text).expect_err(&format!("Expected range error for: {text}"))
}

/// Verifies that formatting a parsed range yields text that parses back
/// to the same value.
pub fn round_trip(text: &str) {
    let range = parse(text);
    let rendered = range.to_string();
    let reparsed = parse(&rendered);
    assert_eq!(
        range, reparsed,
        "Round-trip failed.\n  Input:    {text}\n  Rendered: {rendered}"
    );
}
