//! Comparison wrappers.
//!
//! Ordering is defined for number/number, text/text (code point order) and
//! bool/bool (`false < true`). A number against a text compares numerically
//! after parsing the text; unparsable text is `NaN` and every ordering with
//! `NaN` is false. Any other pairing is a `TypeMismatch`.
//!
//! `eq`/`neq` use loose equality under the default [`CoercionPolicy`];
//! `eq_with`/`neq_with` take the policy explicitly. `eqq`/`neqq` never
//! convert.

use std::cmp::Ordering;

use prefix_types::{CoercionPolicy, Result, Value, parse_number, strict_eq};

use super::mismatch_pair;

fn ordering(operation: &'static str, left: &Value, right: &Value) -> Result<Option<Ordering>> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok(a.partial_cmp(b)),
        (Value::Text(a), Value::Text(b)) => Ok(Some(a.cmp(b))),
        (Value::Bool(a), Value::Bool(b)) => Ok(Some(a.cmp(b))),
        (Value::Number(a), Value::Text(b)) => Ok(a.partial_cmp(&parse_number(b))),
        (Value::Text(a), Value::Number(b)) => Ok(parse_number(a).partial_cmp(b)),
        _ => Err(mismatch_pair(
            operation,
            "two comparable values",
            left,
            right,
        )),
    }
}

fn ordered(
    operation: &'static str,
    left: impl Into<Value>,
    accept: fn(Ordering) -> bool,
) -> impl Fn(Value) -> Result<Value> {
    let left = left.into();
    move |right| {
        let holds = ordering(operation, &left, &right)?.is_some_and(accept);
        Ok(Value::Bool(holds))
    }
}

/// `left < input`.
pub fn lt(left: impl Into<Value>) -> impl Fn(Value) -> Result<Value> {
    ordered("lt", left, Ordering::is_lt)
}

/// `left <= input`.
pub fn lte(left: impl Into<Value>) -> impl Fn(Value) -> Result<Value> {
    ordered("lte", left, Ordering::is_le)
}

/// `left > input`.
pub fn gt(left: impl Into<Value>) -> impl Fn(Value) -> Result<Value> {
    ordered("gt", left, Ordering::is_gt)
}

/// `left >= input`.
pub fn gte(left: impl Into<Value>) -> impl Fn(Value) -> Result<Value> {
    ordered("gte", left, Ordering::is_ge)
}

pub fn eq(left: impl Into<Value>) -> impl Fn(Value) -> Result<Value> {
    eq_with(CoercionPolicy::default(), left)
}

pub fn neq(left: impl Into<Value>) -> impl Fn(Value) -> Result<Value> {
    neq_with(CoercionPolicy::default(), left)
}

pub fn eq_with(policy: CoercionPolicy, left: impl Into<Value>) -> impl Fn(Value) -> Result<Value> {
    let left = left.into();
    move |right| Ok(Value::Bool(policy.loose_eq(&left, &right)))
}

pub fn neq_with(
    policy: CoercionPolicy,
    left: impl Into<Value>,
) -> impl Fn(Value) -> Result<Value> {
    let left = left.into();
    move |right| Ok(Value::Bool(!policy.loose_eq(&left, &right)))
}

pub fn eqq(left: impl Into<Value>) -> impl Fn(Value) -> Result<Value> {
    let left = left.into();
    move |right| Ok(Value::Bool(strict_eq(&left, &right)))
}

pub fn neqq(left: impl Into<Value>) -> impl Fn(Value) -> Result<Value> {
    let left = left.into();
    move |right| Ok(Value::Bool(!strict_eq(&left, &right)))
}
