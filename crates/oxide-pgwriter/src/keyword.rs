//! PostgreSQL keywords.
//!
//! Two tables live here: [`SqlKeyword`], the keyword tokens the fragment
//! writer emits, and [`RESERVED_KEYWORDS`], the words that can never be
//! used as a bare identifier.

use std::fmt;

/// Keyword tokens emitted by the fragment writer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SqlKeyword {
    // Transaction control
    Begin,
    Start,
    Transaction,
    Commit,
    Rollback,

    // Transaction modes
    Isolation,
    Level,
    Serializable,
    Repeatable,
    Read,
    Committed,
    Uncommitted,
    Only,
    Write,
    Deferrable,
    Not,

    // Session
    Set,
    Snapshot,
}

impl SqlKeyword {
    /// Attempts to parse a keyword from a string (case-insensitive).
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "BEGIN" => Some(Self::Begin),
            "START" => Some(Self::Start),
            "TRANSACTION" => Some(Self::Transaction),
            "COMMIT" => Some(Self::Commit),
            "ROLLBACK" => Some(Self::Rollback),
            "ISOLATION" => Some(Self::Isolation),
            "LEVEL" => Some(Self::Level),
            "SERIALIZABLE" => Some(Self::Serializable),
            "REPEATABLE" => Some(Self::Repeatable),
            "READ" => Some(Self::Read),
            "COMMITTED" => Some(Self::Committed),
            "UNCOMMITTED" => Some(Self::Uncommitted),
            "ONLY" => Some(Self::Only),
            "WRITE" => Some(Self::Write),
            "DEFERRABLE" => Some(Self::Deferrable),
            "NOT" => Some(Self::Not),
            "SET" => Some(Self::Set),
            "SNAPSHOT" => Some(Self::Snapshot),
            _ => None,
        }
    }

    /// Returns the keyword as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Begin => "BEGIN",
            Self::Start => "START",
            Self::Transaction => "TRANSACTION",
            Self::Commit => "COMMIT",
            Self::Rollback => "ROLLBACK",
            Self::Isolation => "ISOLATION",
            Self::Level => "LEVEL",
            Self::Serializable => "SERIALIZABLE",
            Self::Repeatable => "REPEATABLE",
            Self::Read => "READ",
            Self::Committed => "COMMITTED",
            Self::Uncommitted => "UNCOMMITTED",
            Self::Only => "ONLY",
            Self::Write => "WRITE",
            Self::Deferrable => "DEFERRABLE",
            Self::Not => "NOT",
            Self::Set => "SET",
            Self::Snapshot => "SNAPSHOT",
        }
    }
}

impl fmt::Display for SqlKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// PostgreSQL reserved keywords, lowercase and sorted.
///
/// Covers the "reserved" and "reserved (can be function or type)"
/// categories of the server's keyword appendix. Kept sorted so that
/// [`is_reserved_keyword`] can binary search it.
pub const RESERVED_KEYWORDS: &[&str] = &[
    "all",
    "analyse",
    "analyze",
    "and",
    "any",
    "array",
    "as",
    "asc",
    "asymmetric",
    "authorization",
    "binary",
    "both",
    "case",
    "cast",
    "check",
    "collate",
    "collation",
    "column",
    "concurrently",
    "constraint",
    "create",
    "cross",
    "current_catalog",
    "current_date",
    "current_role",
    "current_schema",
    "current_time",
    "current_timestamp",
    "current_user",
    "default",
    "deferrable",
    "desc",
    "distinct",
    "do",
    "else",
    "end",
    "except",
    "false",
    "fetch",
    "for",
    "foreign",
    "freeze",
    "from",
    "full",
    "grant",
    "group",
    "having",
    "ilike",
    "in",
    "initially",
    "inner",
    "intersect",
    "into",
    "is",
    "isnull",
    "join",
    "lateral",
    "leading",
    "left",
    "like",
    "limit",
    "localtime",
    "localtimestamp",
    "natural",
    "not",
    "notnull",
    "null",
    "offset",
    "on",
    "only",
    "or",
    "order",
    "outer",
    "overlaps",
    "placing",
    "primary",
    "references",
    "returning",
    "right",
    "select",
    "session_user",
    "similar",
    "some",
    "symmetric",
    "system_user",
    "table",
    "tablesample",
    "then",
    "to",
    "trailing",
    "true",
    "union",
    "unique",
    "user",
    "using",
    "variadic",
    "verbose",
    "when",
    "where",
    "window",
    "with",
];

/// Returns true if `word` is a reserved keyword (case-insensitive).
#[must_use]
pub fn is_reserved_keyword(word: &str) -> bool {
    if word.bytes().any(|b| b.is_ascii_uppercase()) {
        let lower = word.to_ascii_lowercase();
        RESERVED_KEYWORDS.binary_search(&lower.as_str()).is_ok()
    } else {
        RESERVED_KEYWORDS.binary_search(&word).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_table_is_sorted() {
        for pair in RESERVED_KEYWORDS.windows(2) {
            assert!(pair[0] < pair[1], "{} must sort before {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_reserved_table_is_lowercase() {
        for word in RESERVED_KEYWORDS {
            assert_eq!(*word, word.to_ascii_lowercase());
        }
    }

    #[test]
    fn test_is_reserved_keyword() {
        assert!(is_reserved_keyword("select"));
        assert!(is_reserved_keyword("user"));
        assert!(is_reserved_keyword("current_timestamp"));
        assert!(is_reserved_keyword("SELECT"));
        assert!(is_reserved_keyword("Order"));
        assert!(!is_reserved_keyword("username"));
        assert!(!is_reserved_keyword("level"));
        assert!(!is_reserved_keyword(""));
    }

    #[test]
    fn test_keyword_round_trip() {
        let all = [
            SqlKeyword::Begin,
            SqlKeyword::Start,
            SqlKeyword::Transaction,
            SqlKeyword::Commit,
            SqlKeyword::Rollback,
            SqlKeyword::Isolation,
            SqlKeyword::Level,
            SqlKeyword::Serializable,
            SqlKeyword::Repeatable,
            SqlKeyword::Read,
            SqlKeyword::Committed,
            SqlKeyword::Uncommitted,
            SqlKeyword::Only,
            SqlKeyword::Write,
            SqlKeyword::Deferrable,
            SqlKeyword::Not,
            SqlKeyword::Set,
            SqlKeyword::Snapshot,
        ];
        for kw in all {
            assert_eq!(SqlKeyword::from_str(kw.as_str()), Some(kw));
            assert_eq!(
                SqlKeyword::from_str(&kw.as_str().to_ascii_lowercase()),
                Some(kw)
            );
        }
        assert_eq!(SqlKeyword::from_str("select"), None);
    }
}
