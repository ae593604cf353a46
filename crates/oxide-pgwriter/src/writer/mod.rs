//! Fragment composition.
//!
//! A [`SqlGenerator`] writes tokens into a [`SqlWriter`]. Generators are
//! small values (or plain closures) that can be nested freely; the writer
//! takes care of spacing between tokens and escapes every literal and
//! identifier through the active [`PostgresDialect`].
//!
//! ```rust
//! use oxide_pgwriter::writer::{SqlGenerator, begin, set_transaction_snapshot};
//! use oxide_pgwriter::IsolationLevel;
//!
//! assert_eq!(
//!     begin(IsolationLevel::RepeatableRead).to_sql().unwrap(),
//!     "BEGIN TRANSACTION ISOLATION LEVEL REPEATABLE READ"
//! );
//! assert_eq!(
//!     set_transaction_snapshot("xyz").to_sql().unwrap(),
//!     "SET TRANSACTION SNAPSHOT 'xyz'"
//! );
//! ```

mod ident;
mod statements;

pub use ident::Ident;
pub use statements::{
    begin, begin_read_only, begin_with, commit, deferrable, json_build_object, literal,
    range_literal, rollback, set_transaction_isolation, set_transaction_snapshot,
    start_transaction, typed_literal,
};

use tracing::trace;

use crate::dialect::PostgresDialect;
use crate::error::Result;
use crate::escape::escape_identifier;
use crate::keyword::SqlKeyword;

/// Something that can write itself as SQL tokens.
pub trait SqlGenerator {
    /// Writes this fragment into `w`.
    ///
    /// # Errors
    ///
    /// Fails if any literal or identifier cannot be escaped, or a required
    /// value is missing.
    fn write(&self, w: &mut SqlWriter) -> Result<()>;

    /// Renders this fragment with the default dialect.
    ///
    /// # Errors
    ///
    /// See [`SqlGenerator::write`].
    fn to_sql(&self) -> Result<String> {
        self.to_sql_with(PostgresDialect::new())
    }

    /// Renders this fragment with the given dialect.
    ///
    /// # Errors
    ///
    /// See [`SqlGenerator::write`].
    fn to_sql_with(&self, dialect: PostgresDialect) -> Result<String> {
        let mut w = SqlWriter::with_dialect(dialect);
        self.write(&mut w)?;
        let sql = w.finish();
        trace!(%sql, "rendered fragment");
        Ok(sql)
    }
}

impl<F> SqlGenerator for F
where
    F: Fn(&mut SqlWriter) -> Result<()>,
{
    fn write(&self, w: &mut SqlWriter) -> Result<()> {
        self(w)
    }
}

impl SqlGenerator for SqlKeyword {
    fn write(&self, w: &mut SqlWriter) -> Result<()> {
        w.write_keyword(*self);
        Ok(())
    }
}

/// Token writer that separates tokens with single spaces.
#[derive(Debug, Clone)]
pub struct SqlWriter {
    sql: String,
    dialect: PostgresDialect,
    needs_space: bool,
}

impl SqlWriter {
    /// Creates a writer using the default dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_dialect(PostgresDialect::new())
    }

    /// Creates a writer using `dialect` for every literal.
    #[must_use]
    pub const fn with_dialect(dialect: PostgresDialect) -> Self {
        Self {
            sql: String::new(),
            dialect,
            needs_space: false,
        }
    }

    /// Returns the active dialect.
    #[must_use]
    pub const fn dialect(&self) -> PostgresDialect {
        self.dialect
    }

    fn space(&mut self) {
        if self.needs_space {
            self.sql.push(' ');
        }
    }

    /// Writes `token` verbatim as one token.
    ///
    /// Nothing is escaped; only pass trusted text such as function names.
    pub fn write_raw(&mut self, token: &str) {
        self.space();
        self.sql.push_str(token);
        self.needs_space = true;
    }

    /// Writes a keyword.
    pub fn write_keyword(&mut self, keyword: SqlKeyword) {
        self.write_raw(keyword.as_str());
    }

    /// Writes a sequence of keywords.
    pub fn write_keywords(&mut self, keywords: &[SqlKeyword]) {
        for keyword in keywords {
            self.write_keyword(*keyword);
        }
    }

    /// Writes a single-quoted string literal.
    ///
    /// # Errors
    ///
    /// Fails if `value` contains a NUL; nothing is written in that case.
    pub fn write_literal(&mut self, value: &str) -> Result<()> {
        let mark = self.sql.len();
        self.space();
        if let Err(e) = self.dialect.append_quoted_literal(&mut self.sql, value) {
            self.sql.truncate(mark);
            return Err(e);
        }
        self.needs_space = true;
        Ok(())
    }

    /// Writes an identifier, bare if possible.
    ///
    /// # Errors
    ///
    /// Fails if `value` contains a NUL; nothing is written in that case.
    pub fn write_identifier(&mut self, value: &str) -> Result<()> {
        let ident = escape_identifier(value)?;
        self.write_raw(&ident);
        Ok(())
    }

    /// Appends a `::type` cast to the previous token.
    ///
    /// # Errors
    ///
    /// Fails if `type_name` contains a NUL.
    pub fn write_cast(&mut self, type_name: &str) -> Result<()> {
        let ident = escape_identifier(type_name)?;
        self.sql.push_str("::");
        self.sql.push_str(&ident);
        self.needs_space = true;
        Ok(())
    }

    /// Opens a parenthesis attached to the previous token.
    pub fn open_paren(&mut self) {
        self.sql.push('(');
        self.needs_space = false;
    }

    /// Closes a parenthesis.
    pub fn close_paren(&mut self) {
        self.sql.push(')');
        self.needs_space = true;
    }

    /// Writes a list separator.
    pub fn comma(&mut self) {
        self.sql.push(',');
        self.needs_space = true;
    }

    /// Writes another generator.
    ///
    /// # Errors
    ///
    /// Propagates the generator's error. The writer is left exactly as it
    /// was before the call.
    pub fn write<G: SqlGenerator + ?Sized>(&mut self, generator: &G) -> Result<()> {
        let mark = self.sql.len();
        let needs_space = self.needs_space;
        if let Err(e) = generator.write(self) {
            self.sql.truncate(mark);
            self.needs_space = needs_space;
            return Err(e);
        }
        Ok(())
    }

    /// Returns the SQL written so far.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.sql
    }

    /// Consumes the writer and returns the SQL.
    #[must_use]
    pub fn finish(self) -> String {
        self.sql
    }
}

impl Default for SqlWriter {
    fn default() -> Self {
        Self::new()
    }
}
