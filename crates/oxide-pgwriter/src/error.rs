//! Error types for escaping and range transcoding.

use thiserror::Error;

/// Errors produced while building SQL fragments.
///
/// None of these are transient. A statement whose fragment failed must be
/// discarded, never partially emitted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PgWriterError {
    /// A mandatory value was missing.
    #[error("missing required value: {what}")]
    InvalidInput {
        /// What was missing.
        what: &'static str,
    },

    /// The input contains a character that cannot be represented.
    #[error("zero bytes may not occur in {context} (at byte {position})")]
    IllegalInput {
        /// The construct being built ("string parameters", "identifiers").
        context: &'static str,
        /// Byte offset of the offending character.
        position: usize,
    },

    /// Range text does not follow the bracket/comma/integer grammar.
    #[error("malformed range literal '{input}': {reason}")]
    MalformedRange {
        /// The full text that failed to parse.
        input: String,
        /// What was wrong with it.
        reason: String,
    },
}

impl PgWriterError {
    pub(crate) fn malformed_range(input: &str, reason: impl Into<String>) -> Self {
        Self::MalformedRange {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    /// Returns the PostgreSQL SQLSTATE code this error corresponds to.
    #[must_use]
    pub const fn sqlstate(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } => "22004",
            Self::IllegalInput { .. } => "22023",
            Self::MalformedRange { .. } => "22P02",
        }
    }
}

/// Result type alias for fragment operations.
pub type Result<T> = std::result::Result<T, PgWriterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqlstate_codes() {
        assert_eq!(PgWriterError::InvalidInput { what: "x" }.sqlstate(), "22004");
        assert_eq!(
            PgWriterError::IllegalInput {
                context: "identifiers",
                position: 0
            }
            .sqlstate(),
            "22023"
        );
        assert_eq!(
            PgWriterError::malformed_range("[", "too short").sqlstate(),
            "22P02"
        );
    }

    #[test]
    fn test_display() {
        let err = PgWriterError::IllegalInput {
            context: "string parameters",
            position: 3,
        };
        assert_eq!(
            err.to_string(),
            "zero bytes may not occur in string parameters (at byte 3)"
        );

        let err = PgWriterError::malformed_range("[1;10)", "missing ','");
        assert_eq!(
            err.to_string(),
            "malformed range literal '[1;10)': missing ','"
        );
    }
}
