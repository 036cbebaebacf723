//! Shared test utilities and fixtures
//!
//! Common infrastructure for integration tests.

#![allow(dead_code)]

use prefix::{CombinatorError, Record, Value};

/// `{ name: "Fritz", age: 28 }`
pub fn user() -> Record {
    Record::from_fields([("name", Value::from("Fritz")), ("age", Value::from(28))])
}

/// A counter record whose `increment(by)` method returns a copy with
/// `count` raised by `by` (default 1).
pub fn counter(start: i64) -> Record {
    let increment = Value::method(|receiver, args| {
        let record = receiver
            .as_record()
            .ok_or_else(|| CombinatorError::mismatch("increment", "a record", receiver.kind()))?;
        let count = record.get("count").and_then(Value::as_number).unwrap_or(0.0);
        let by = args.first().and_then(Value::as_number).unwrap_or(1.0);
        Ok(Value::Record(record.with("count", count + by)))
    });
    Record::from_fields([("count", Value::from(start)), ("increment", increment)])
}

pub fn record_of(value: &Value) -> &Record {
    value
        .as_record()
        .unwrap_or_else(|| panic!("expected a record, got {value:?}"))
}
