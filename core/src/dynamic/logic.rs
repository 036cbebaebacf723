//! Boolean wrappers. Operands are plain values, evaluated before the call,
//! so `or`/`and` never short-circuit.

use prefix_types::{Result, Value};

use super::{mismatch, mismatch_pair};

fn boolean(
    operation: &'static str,
    left: impl Into<Value>,
    op: fn(bool, bool) -> bool,
) -> impl Fn(Value) -> Result<Value> {
    let left = left.into();
    move |right| match (&left, &right) {
        (Value::Bool(a), Value::Bool(b)) => Ok(Value::Bool(op(*a, *b))),
        _ => Err(mismatch_pair(operation, "two bools", &left, &right)),
    }
}

pub fn or(left: impl Into<Value>) -> impl Fn(Value) -> Result<Value> {
    boolean("or", left, |a, b| a || b)
}

pub fn and(left: impl Into<Value>) -> impl Fn(Value) -> Result<Value> {
    boolean("and", left, |a, b| a && b)
}

pub fn not(value: Value) -> Result<Value> {
    match value {
        Value::Bool(b) => Ok(Value::Bool(!b)),
        other => Err(mismatch("not", "a bool", &other)),
    }
}
