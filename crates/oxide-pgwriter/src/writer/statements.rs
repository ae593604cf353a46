//! Ready-made statements and fragments.

use super::{SqlGenerator, SqlWriter};
use crate::error::{PgWriterError, Result};
use crate::isolation::{AccessMode, IsolationLevel};
use crate::keyword::SqlKeyword;
use crate::range::IntRange;

/// A single-quoted string literal.
#[must_use]
pub fn literal(value: &str) -> impl SqlGenerator + '_ {
    move |w: &mut SqlWriter| w.write_literal(value)
}

/// A literal cast to `type_name`, e.g. `'42'::int4`.
///
/// The type name is written as an identifier, quoted only when needed.
#[must_use]
pub fn typed_literal<'a>(value: &'a str, type_name: &'a str) -> impl SqlGenerator + 'a {
    move |w: &mut SqlWriter| {
        w.write_literal(value)?;
        w.write_cast(type_name)
    }
}

/// An `int4range` literal, e.g. `'[1,10)'::int4range`.
#[must_use]
pub fn range_literal(range: IntRange) -> impl SqlGenerator {
    move |w: &mut SqlWriter| {
        let text = range.to_string();
        let result = w.write(&typed_literal(&text, "int4range"));
        result
    }
}

fn transaction_start(first: SqlKeyword, level: IsolationLevel) -> impl SqlGenerator {
    move |w: &mut SqlWriter| {
        w.write_keywords(&[
            first,
            SqlKeyword::Transaction,
            SqlKeyword::Isolation,
            SqlKeyword::Level,
        ]);
        w.write(&level)
    }
}

/// `BEGIN TRANSACTION ISOLATION LEVEL <level>`
#[must_use]
pub fn begin(level: IsolationLevel) -> impl SqlGenerator {
    transaction_start(SqlKeyword::Begin, level)
}

/// `START TRANSACTION ISOLATION LEVEL <level>`
#[must_use]
pub fn start_transaction(level: IsolationLevel) -> impl SqlGenerator {
    transaction_start(SqlKeyword::Start, level)
}

/// `BEGIN TRANSACTION ISOLATION LEVEL <level> <mode>`
#[must_use]
pub fn begin_with(level: IsolationLevel, mode: AccessMode) -> impl SqlGenerator {
    move |w: &mut SqlWriter| {
        w.write(&begin(level))?;
        w.write(&mode)
    }
}

/// `BEGIN TRANSACTION ISOLATION LEVEL <level> READ ONLY`
#[must_use]
pub fn begin_read_only(level: IsolationLevel) -> impl SqlGenerator {
    begin_with(level, AccessMode::ReadOnly)
}

/// `DEFERRABLE` or `NOT DEFERRABLE`
#[must_use]
pub fn deferrable(enabled: bool) -> impl SqlGenerator {
    move |w: &mut SqlWriter| {
        if !enabled {
            w.write_keyword(SqlKeyword::Not);
        }
        w.write_keyword(SqlKeyword::Deferrable);
        Ok(())
    }
}

/// `SET TRANSACTION ISOLATION LEVEL <level>`
#[must_use]
pub fn set_transaction_isolation(level: IsolationLevel) -> impl SqlGenerator {
    move |w: &mut SqlWriter| {
        w.write_keywords(&[
            SqlKeyword::Set,
            SqlKeyword::Transaction,
            SqlKeyword::Isolation,
            SqlKeyword::Level,
        ]);
        w.write(&level)
    }
}

/// `SET TRANSACTION SNAPSHOT '<snapshot_id>'`
///
/// Fails with [`PgWriterError::InvalidInput`] when rendered with an empty id.
#[must_use]
pub fn set_transaction_snapshot(snapshot_id: &str) -> impl SqlGenerator + '_ {
    move |w: &mut SqlWriter| {
        if snapshot_id.is_empty() {
            return Err(PgWriterError::InvalidInput {
                what: "transaction snapshot id",
            });
        }
        w.write_keywords(&[
            SqlKeyword::Set,
            SqlKeyword::Transaction,
            SqlKeyword::Snapshot,
        ]);
        w.write_literal(snapshot_id)
    }
}

/// `COMMIT`
#[must_use]
pub const fn commit() -> SqlKeyword {
    SqlKeyword::Commit
}

/// `ROLLBACK`
#[must_use]
pub const fn rollback() -> SqlKeyword {
    SqlKeyword::Rollback
}

/// `pg_catalog.json_build_object(k1, v1, k2, v2, ...)`
#[must_use]
pub fn json_build_object<I, K, V>(pairs: I) -> impl SqlGenerator
where
    I: IntoIterator<Item = (K, V)>,
    K: SqlGenerator,
    V: SqlGenerator,
{
    let pairs: Vec<(K, V)> = pairs.into_iter().collect();
    move |w: &mut SqlWriter| -> Result<()> {
        w.write_raw("pg_catalog.json_build_object");
        w.open_paren();
        for (i, (key, value)) in pairs.iter().enumerate() {
            if i > 0 {
                w.comma();
            }
            w.write(key)?;
            w.comma();
            w.write(value)?;
        }
        w.close_paren();
        Ok(())
    }
}
