//! Qualified identifiers.

use super::{SqlGenerator, SqlWriter};
use crate::error::{PgWriterError, Result};
use crate::escape::escape_identifier;

/// A possibly qualified identifier such as `schema.table.column`.
///
/// Each part is escaped on its own and the parts are joined with `.`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ident {
    parts: Vec<String>,
}

impl Ident {
    /// Creates an unqualified identifier.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            parts: vec![name.into()],
        }
    }

    /// Creates an identifier from its parts, outermost first.
    #[must_use]
    pub fn of<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            parts: parts.into_iter().map(Into::into).collect(),
        }
    }

    /// Appends a part, e.g. a column to a table alias.
    #[must_use]
    pub fn child(mut self, part: impl Into<String>) -> Self {
        self.parts.push(part.into());
        self
    }

    /// Returns the unescaped parts.
    #[must_use]
    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    /// Renders the escaped, dot-joined identifier.
    ///
    /// # Errors
    ///
    /// Fails if there are no parts or a part contains a NUL.
    pub fn render(&self) -> Result<String> {
        if self.parts.is_empty() {
            return Err(PgWriterError::InvalidInput { what: "identifier" });
        }
        let mut rendered = String::new();
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                rendered.push('.');
            }
            rendered.push_str(&escape_identifier(part)?);
        }
        Ok(rendered)
    }
}

impl From<&str> for Ident {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl SqlGenerator for Ident {
    fn write(&self, w: &mut SqlWriter) -> Result<()> {
        let rendered = self.render()?;
        w.write_raw(&rendered);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qualified() {
        assert_eq!(Ident::of(["a", "username"]).render().unwrap(), "a.username");
        assert_eq!(
            Ident::new("public").child("Users").child("id").render().unwrap(),
            "public.\"Users\".id"
        );
    }

    #[test]
    fn test_reserved_part_is_quoted() {
        assert_eq!(Ident::of(["t", "order"]).render().unwrap(), "t.\"order\"");
    }

    #[test]
    fn test_empty_ident_is_invalid() {
        let err = Ident::of(Vec::<String>::new()).render().unwrap_err();
        assert_eq!(err, PgWriterError::InvalidInput { what: "identifier" });
    }

    #[test]
    fn test_nul_part_fails() {
        assert!(matches!(
            Ident::of(["a", "b\0"]).render(),
            Err(PgWriterError::IllegalInput { .. })
        ));
    }
}
