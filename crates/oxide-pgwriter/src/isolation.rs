//! Transaction isolation levels.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::error::Result;
use crate::keyword::SqlKeyword;
use crate::writer::{SqlGenerator, SqlWriter};

/// A transaction isolation level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IsolationLevel {
    Serializable,
    RepeatableRead,
    ReadCommitted,
    ReadUncommitted,
}

impl IsolationLevel {
    /// All levels, strictest first.
    pub const ALL: [Self; 4] = [
        Self::Serializable,
        Self::RepeatableRead,
        Self::ReadCommitted,
        Self::ReadUncommitted,
    ];

    /// Returns the keyword sequence naming this level.
    #[must_use]
    pub const fn keywords(self) -> &'static [SqlKeyword] {
        match self {
            Self::Serializable => &[SqlKeyword::Serializable],
            Self::RepeatableRead => &[SqlKeyword::Repeatable, SqlKeyword::Read],
            Self::ReadCommitted => &[SqlKeyword::Read, SqlKeyword::Committed],
            Self::ReadUncommitted => &[SqlKeyword::Read, SqlKeyword::Uncommitted],
        }
    }
}

impl SqlGenerator for IsolationLevel {
    fn write(&self, w: &mut SqlWriter) -> Result<()> {
        w.write_keywords(self.keywords());
        Ok(())
    }
}

impl fmt::Display for IsolationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, keyword) in self.keywords().iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(keyword.as_str())?;
        }
        Ok(())
    }
}

/// A transaction access mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessMode {
    ReadWrite,
    ReadOnly,
}

impl AccessMode {
    /// Returns the keyword sequence naming this mode.
    #[must_use]
    pub const fn keywords(self) -> &'static [SqlKeyword] {
        match self {
            Self::ReadWrite => &[SqlKeyword::Read, SqlKeyword::Write],
            Self::ReadOnly => &[SqlKeyword::Read, SqlKeyword::Only],
        }
    }
}

impl SqlGenerator for AccessMode {
    fn write(&self, w: &mut SqlWriter) -> Result<()> {
        w.write_keywords(self.keywords());
        Ok(())
    }
}

/// Error returned when an isolation level name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown isolation level '{0}'")]
pub struct UnknownIsolationLevel(pub String);

impl FromStr for IsolationLevel {
    type Err = UnknownIsolationLevel;

    /// Accepts `repeatable read`, `REPEATABLE_READ`, `repeatable-read`, ...
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized = s
            .split(|c: char| c.is_whitespace() || c == '-' || c == '_')
            .filter(|word| !word.is_empty())
            .map(str::to_ascii_lowercase)
            .collect::<Vec<_>>()
            .join(" ");
        match normalized.as_str() {
            "serializable" => Ok(Self::Serializable),
            "repeatable read" => Ok(Self::RepeatableRead),
            "read committed" => Ok(Self::ReadCommitted),
            "read uncommitted" => Ok(Self::ReadUncommitted),
            _ => Err(UnknownIsolationLevel(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords() {
        assert_eq!(
            IsolationLevel::ReadCommitted.to_sql().unwrap(),
            "READ COMMITTED"
        );
        assert_eq!(IsolationLevel::Serializable.to_string(), "SERIALIZABLE");
        assert_eq!(
            IsolationLevel::ReadUncommitted.to_string(),
            "READ UNCOMMITTED"
        );
    }

    #[test]
    fn test_display_matches_sql() {
        for level in IsolationLevel::ALL {
            assert_eq!(level.to_string(), level.to_sql().unwrap());
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!(
            "repeatable-read".parse::<IsolationLevel>().unwrap(),
            IsolationLevel::RepeatableRead
        );
        assert_eq!(
            "READ_COMMITTED".parse::<IsolationLevel>().unwrap(),
            IsolationLevel::ReadCommitted
        );
        assert_eq!(
            "read  uncommitted".parse::<IsolationLevel>().unwrap(),
            IsolationLevel::ReadUncommitted
        );
        for level in IsolationLevel::ALL {
            assert_eq!(level.to_string().parse::<IsolationLevel>().unwrap(), level);
        }
        assert!("snapshot".parse::<IsolationLevel>().is_err());
    }

    #[test]
    fn test_access_mode() {
        assert_eq!(AccessMode::ReadWrite.to_sql().unwrap(), "READ WRITE");
        assert_eq!(AccessMode::ReadOnly.to_sql().unwrap(), "READ ONLY");
    }
}
