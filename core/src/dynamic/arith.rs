//! Arithmetic wrappers. All arithmetic is `f64`, so a zero divisor yields
//! `±Infinity` or `NaN` rather than an error.

use prefix_types::{Result, Value};

use super::mismatch_pair;

/// `left + right` for two numbers, `left` followed by `right` for two texts.
///
/// Mixed kinds are rejected rather than converted.
pub fn add(left: impl Into<Value>) -> impl Fn(Value) -> Result<Value> {
    let left = left.into();
    move |right| match (&left, &right) {
        (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
        (Value::Text(a), Value::Text(b)) => {
            let mut joined = String::with_capacity(a.len() + b.len());
            joined.push_str(a);
            joined.push_str(b);
            Ok(Value::from(joined))
        }
        _ => Err(mismatch_pair("add", "two numbers or two texts", &left, &right)),
    }
}

fn numeric(
    operation: &'static str,
    left: impl Into<Value>,
    op: fn(f64, f64) -> f64,
) -> impl Fn(Value) -> Result<Value> {
    let left = left.into();
    move |right| match (&left, &right) {
        (Value::Number(a), Value::Number(b)) => Ok(Value::Number(op(*a, *b))),
        _ => Err(mismatch_pair(operation, "two numbers", &left, &right)),
    }
}

pub fn sub(left: impl Into<Value>) -> impl Fn(Value) -> Result<Value> {
    numeric("sub", left, |a, b| a - b)
}

pub fn mul(left: impl Into<Value>) -> impl Fn(Value) -> Result<Value> {
    numeric("mul", left, |a, b| a * b)
}

pub fn div(left: impl Into<Value>) -> impl Fn(Value) -> Result<Value> {
    numeric("div", left, |a, b| a / b)
}

/// Truncated remainder; the result takes the sign of `left`.
pub fn rem(left: impl Into<Value>) -> impl Fn(Value) -> Result<Value> {
    numeric("rem", left, |a, b| a % b)
}

/// `left` raised to the power of the input.
pub fn exp(left: impl Into<Value>) -> impl Fn(Value) -> Result<Value> {
    numeric("exp", left, f64::powf)
}
