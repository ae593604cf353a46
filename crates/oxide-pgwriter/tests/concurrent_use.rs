//! Tests that escaping and range transcoding can run from many threads at
//! once against the shared keyword table.

use std::thread;

use oxide_pgwriter::{IntRange, escape_identifier, escape_literal, format_range, parse_range};

#[test]
fn concurrent_calls_agree_with_sequential_results() {
    let inputs: Vec<String> = (0..64).map(|i| format!("col_{i}'s")).collect();
    let expected: Vec<(String, String)> = inputs
        .iter()
        .map(|s| {
            (
                escape_literal(s, false).unwrap(),
                escape_identifier(s).unwrap(),
            )
        })
        .collect();

    thread::scope(|scope| {
        for _ in 0..8 {
            scope.spawn(|| {
                for (input, (literal, ident)) in inputs.iter().zip(&expected) {
                    assert_eq!(&escape_literal(input, false).unwrap(), literal);
                    assert_eq!(&escape_identifier(input).unwrap(), ident);
                }
            });
        }
    });
}

#[test]
fn concurrent_range_round_trips() {
    thread::scope(|scope| {
        for t in 0..8_i32 {
            scope.spawn(move || {
                for i in 0..100_i32 {
                    let range = IntRange::closed_open(t * 1000 + i, t * 1000 + i + 1);
                    let text = format_range(Some(&range));
                    assert_eq!(parse_range(&text).unwrap(), range);
                }
            });
        }
    });
}

#[test]
fn public_types_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<IntRange>();
    assert_send_sync::<oxide_pgwriter::PgWriterError>();
    assert_send_sync::<oxide_pgwriter::PostgresDialect>();
    assert_send_sync::<oxide_pgwriter::Ident>();
}
