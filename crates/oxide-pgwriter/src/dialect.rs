//! PostgreSQL dialect settings.
//!
//! The only server setting that changes how fragments must be escaped is
//! `standard_conforming_strings`. [`PostgresDialect`] carries it so a whole
//! statement is escaped consistently.

use crate::error::Result;
use crate::escape;

/// Escaping rules for one PostgreSQL connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostgresDialect {
    standard_conforming_strings: bool,
}

impl PostgresDialect {
    /// Creates a dialect with `standard_conforming_strings = on`, the
    /// server default since PostgreSQL 9.1.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            standard_conforming_strings: true,
        }
    }

    /// Creates a dialect with `standard_conforming_strings = off`.
    ///
    /// Backslashes are doubled in literals. Use this when the server
    /// setting is unknown.
    #[must_use]
    pub const fn legacy() -> Self {
        Self {
            standard_conforming_strings: false,
        }
    }

    /// Sets `standard_conforming_strings`.
    #[must_use]
    pub const fn with_standard_conforming_strings(mut self, enabled: bool) -> Self {
        self.standard_conforming_strings = enabled;
        self
    }

    /// Returns the value of `standard_conforming_strings`.
    #[must_use]
    pub const fn standard_conforming_strings(&self) -> bool {
        self.standard_conforming_strings
    }

    /// Escapes literal content (without quotes) under this dialect.
    ///
    /// # Errors
    ///
    /// Fails if `value` contains a NUL.
    pub fn escape_literal(&self, value: &str) -> Result<String> {
        escape::escape_literal(value, self.standard_conforming_strings)
    }

    /// Escapes and single-quotes a literal under this dialect.
    ///
    /// # Errors
    ///
    /// Fails if `value` contains a NUL.
    pub fn quote_literal(&self, value: &str) -> Result<String> {
        escape::quote_literal(value, self.standard_conforming_strings)
    }

    /// Appends a single-quoted literal to `buf`.
    ///
    /// # Errors
    ///
    /// Fails if `value` contains a NUL; `buf` is then left unchanged.
    pub fn append_quoted_literal(&self, buf: &mut String, value: &str) -> Result<()> {
        let mark = buf.len();
        buf.push('\'');
        if let Err(e) = escape::append_escaped_literal(buf, value, self.standard_conforming_strings)
        {
            buf.truncate(mark);
            return Err(e);
        }
        buf.push('\'');
        Ok(())
    }
}

impl Default for PostgresDialect {
    fn default() -> Self {
        Self::new()
    }
}
