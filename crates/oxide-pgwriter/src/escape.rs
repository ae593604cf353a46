//! Literal and identifier escaping.
//!
//! Literals and identifiers follow different quoting conventions, matching
//! the native PostgreSQL driver:
//!
//! - [`escape_literal`] returns the literal *content* only. Callers add the
//!   surrounding `'...'` themselves (or use [`quote_literal`]).
//! - [`escape_identifier`] returns a complete identifier, already wrapped in
//!   `"..."` unless it can be written bare.
//!
//! Both reject text containing NUL, which no SQL string or identifier can
//! carry.
//!
//! # Example
//!
//! ```rust
//! use oxide_pgwriter::escape::{escape_identifier, escape_literal};
//!
//! assert_eq!(escape_literal("O'Brien", true).unwrap(), "O''Brien");
//! assert_eq!(escape_literal(r"C:\tmp", false).unwrap(), r"C:\\tmp");
//! assert_eq!(escape_identifier("username").unwrap(), "username");
//! assert_eq!(escape_identifier("Select").unwrap(), "\"Select\"");
//! ```

use tracing::{debug, trace};

use crate::error::{PgWriterError, Result};
use crate::keyword::is_reserved_keyword;

/// Output size for `len` input bytes, with 10% slack for doubled characters.
const fn escaped_capacity(len: usize) -> usize {
    (len + 10) / 10 * 11
}

/// Escapes `value` for use inside a single-quoted string literal.
///
/// Every `'` is doubled. When `standard_conforming_strings` is off, every
/// `\` is doubled as well; doing so is also safe to send to a server that
/// has the setting on, so pass `false` when the setting is unknown.
///
/// The result does *not* include the surrounding quotes.
///
/// # Errors
///
/// Returns [`PgWriterError::IllegalInput`] if `value` contains a NUL.
pub fn escape_literal(value: &str, standard_conforming_strings: bool) -> Result<String> {
    let mut buf = String::with_capacity(escaped_capacity(value.len()));
    append_escaped_literal(&mut buf, value, standard_conforming_strings)?;
    Ok(buf)
}

/// Appends the escaped literal content of `value` to `buf`.
///
/// On failure `buf` is left exactly as it was before the call.
///
/// # Errors
///
/// Returns [`PgWriterError::IllegalInput`] if `value` contains a NUL.
pub fn append_escaped_literal(
    buf: &mut String,
    value: &str,
    standard_conforming_strings: bool,
) -> Result<()> {
    let mark = buf.len();
    for (position, ch) in value.char_indices() {
        if ch == '\0' {
            buf.truncate(mark);
            debug!(position, "rejected zero byte in string literal");
            return Err(PgWriterError::IllegalInput {
                context: "string parameters",
                position,
            });
        }
        if ch == '\'' || (ch == '\\' && !standard_conforming_strings) {
            buf.push(ch);
        }
        buf.push(ch);
    }
    Ok(())
}

/// Escapes `value` and wraps it in single quotes.
///
/// # Errors
///
/// Returns [`PgWriterError::IllegalInput`] if `value` contains a NUL.
pub fn quote_literal(value: &str, standard_conforming_strings: bool) -> Result<String> {
    let mut buf = String::with_capacity(2 + escaped_capacity(value.len()));
    buf.push('\'');
    append_escaped_literal(&mut buf, value, standard_conforming_strings)?;
    buf.push('\'');
    Ok(buf)
}

/// Appends `value` to `buf` as a double-quoted identifier.
///
/// Embedded `"` characters are doubled. On failure `buf` is left exactly
/// as it was before the call.
///
/// # Errors
///
/// Returns [`PgWriterError::IllegalInput`] if `value` contains a NUL.
pub fn append_escaped_identifier(buf: &mut String, value: &str) -> Result<()> {
    let mark = buf.len();
    buf.push('"');
    for (position, ch) in value.char_indices() {
        if ch == '\0' {
            buf.truncate(mark);
            debug!(position, "rejected zero byte in identifier");
            return Err(PgWriterError::IllegalInput {
                context: "identifiers",
                position,
            });
        }
        if ch == '"' {
            buf.push(ch);
        }
        buf.push(ch);
    }
    buf.push('"');
    Ok(())
}

/// Quotes `value` as an identifier, always adding double quotes.
///
/// # Errors
///
/// Returns [`PgWriterError::IllegalInput`] if `value` contains a NUL.
pub fn quote_identifier(value: &str) -> Result<String> {
    let mut buf = String::with_capacity(2 + escaped_capacity(value.len()));
    append_escaped_identifier(&mut buf, value)?;
    Ok(buf)
}

/// Returns true if `value` can be written as a bare identifier.
///
/// That is: non-empty, only lowercase ASCII letters, digits and `_`, not
/// starting with a digit, and not a reserved keyword.
#[must_use]
pub fn is_bare_identifier(value: &str) -> bool {
    let bytes = value.as_bytes();
    let Some(first) = bytes.first() else {
        return false;
    };
    if !(first.is_ascii_lowercase() || *first == b'_') {
        return false;
    }
    bytes
        .iter()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || *b == b'_')
        && !is_reserved_keyword(value)
}

/// Escapes `value` as an identifier.
///
/// Plain lowercase names that are not reserved words come back unchanged
/// and unquoted; anything else is quoted as by [`quote_identifier`]. Both
/// forms name the same object.
///
/// # Errors
///
/// Returns [`PgWriterError::IllegalInput`] if `value` contains a NUL.
pub fn escape_identifier(value: &str) -> Result<String> {
    if is_bare_identifier(value) {
        trace!(ident = value, "identifier written bare");
        return Ok(value.to_string());
    }
    quote_identifier(value)
}
