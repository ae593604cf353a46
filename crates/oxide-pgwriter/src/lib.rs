//! # oxide-pgwriter
//!
//! Safe text generation for PostgreSQL SQL fragments.
//!
//! This crate provides:
//! - Literal and identifier escaping that honors `standard_conforming_strings`
//! - A codec for integer range notation (`[1,10)`, `(,5]`, `empty`)
//! - A thin composer for keyword/literal/identifier sequences
//!
//! ## Escaping
//!
//! Literal escaping returns the content *without* the surrounding quotes;
//! identifier escaping returns a complete identifier:
//!
//! ```rust
//! use oxide_pgwriter::{escape_identifier, escape_literal};
//!
//! let sql = format!(
//!     "SELECT * FROM {} WHERE name = '{}'",
//!     escape_identifier("Users").unwrap(),
//!     escape_literal("'; DROP TABLE users; --", true).unwrap(),
//! );
//! assert_eq!(
//!     sql,
//!     "SELECT * FROM \"Users\" WHERE name = '''; DROP TABLE users; --'"
//! );
//! ```
//!
//! ## Ranges
//!
//! ```rust
//! use oxide_pgwriter::{IntRange, format_range, parse_range};
//!
//! let range: IntRange = parse_range("(,5]").unwrap();
//! assert_eq!(range.lower(), None);
//! assert_eq!(format_range(Some(&range)), "(,5]");
//! ```
//!
//! ## Composing statements
//!
//! ```rust
//! use oxide_pgwriter::writer::{Ident, SqlGenerator, json_build_object, literal};
//!
//! let sql = json_build_object([(literal("id"), Ident::of(["u", "id"]))])
//!     .to_sql()
//!     .unwrap();
//! assert_eq!(sql, "pg_catalog.json_build_object('id', u.id)");
//! ```

pub mod dialect;
pub mod error;
pub mod escape;
pub mod isolation;
pub mod keyword;
pub mod range;
pub mod writer;

pub use dialect::PostgresDialect;
pub use error::{PgWriterError, Result};
pub use escape::{escape_identifier, escape_literal, quote_identifier, quote_literal};
pub use isolation::{AccessMode, IsolationLevel};
pub use keyword::{SqlKeyword, is_reserved_keyword};
pub use range::{BoundType, Endpoint, IntRange, format_range, parse_range};
pub use writer::{Ident, SqlGenerator, SqlWriter};
