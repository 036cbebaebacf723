//! Combinators over [`Value`].
//!
//! Factories take plain operands (anything `Into<Value>`) and return
//! `impl Fn(Value) -> Result<Value>`. Operand kinds are checked when the
//! returned function runs; the first fault is returned to the caller as-is.
//!
//! ```
//! use prefix_core::dynamic::{add, call, get, mul};
//! use prefix_types::{Record, Value};
//!
//! let input = Value::from(Record::from_fields([("value", 23)]));
//! let output = Ok(input)
//!     .and_then(get("value"))
//!     .and_then(add(23))
//!     .and_then(mul(2))
//!     .and_then(call("toString"));
//! assert_eq!(output, Ok(Value::from("92")));
//! ```

mod arith;
mod compare;
mod logic;
mod record;

pub use arith::{add, div, exp, mul, rem, sub};
pub use compare::{eq, eq_with, eqq, gt, gte, lt, lte, neq, neq_with, neqq};
pub use logic::{and, not, or};
pub use record::{call, call_with, get, merge, modify, remove, set};

use prefix_types::{CombinatorError, Value};

/// Build a `TypeMismatch` for a rejected operand and note it at debug level.
fn mismatch(operation: &'static str, expected: &'static str, found: &Value) -> CombinatorError {
    tracing::debug!(operation, expected, found = %found.kind(), "operand rejected");
    CombinatorError::mismatch(operation, expected, found.kind())
}

/// Like [`mismatch`], for a rejected pair of operands.
fn mismatch_pair(
    operation: &'static str,
    expected: &'static str,
    left: &Value,
    right: &Value,
) -> CombinatorError {
    let found = format!("{} and {}", left.kind(), right.kind());
    tracing::debug!(operation, expected, found = %found, "operands rejected");
    CombinatorError::mismatch(operation, expected, found)
}
