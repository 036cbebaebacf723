//! prefix - curried prefix wrappers around infix operators and record access.
//!
//! Point-free building blocks for left-to-right pipelines:
//!
//! ```
//! use prefix::dynamic::{add, call, eq, get, mul};
//! use prefix::{Record, Value, try_pipe};
//!
//! let shout = try_pipe!(
//!     Record::from_fields([("value", 23)]),
//!     get("value"),
//!     add(23),
//!     mul(2),
//!     call("toString"),
//! );
//! assert_eq!(shout, Ok(Value::from("92")));
//!
//! let seen = try_pipe!("light", add("See the "), call("toUpperCase"), eq("SEE THE LIGHT"));
//! assert_eq!(seen, Ok(Value::from(true)));
//! ```
//!
//! The typed wrappers in [`ops`] compose with [`pipe!`]:
//!
//! ```
//! use prefix::ops::{add, mul};
//! use prefix::pipe;
//!
//! assert_eq!(pipe!(23_i64, add(23), mul(2), |n: i64| n.to_string()), "92");
//! ```

pub use prefix_config::{ConfigError, PrefixConfig};
pub use prefix_core::{coerce, dynamic, ops, unsafe_coerce};
pub use prefix_types::{
    CoercionPolicy, CombinatorError, Method, Record, Result, Value, ValueKind, format_number,
    parse_number, strict_eq,
};

/// Thread a value through unary functions, left to right.
///
/// `pipe!(x, f, g)` is `g(f(x))`.
#[macro_export]
macro_rules! pipe {
    ($value:expr $(,)?) => {
        $value
    };
    ($value:expr, $($f:expr),+ $(,)?) => {{
        let value = $value;
        $(
            let value = ($f)(value);
        )+
        value
    }};
}

/// Thread a value through fallible combinators, stopping at the first error.
///
/// The start value is converted with `Value::from`; the result is a
/// [`Result<Value>`](crate::Result).
#[macro_export]
macro_rules! try_pipe {
    ($value:expr $(, $f:expr)* $(,)?) => {{
        let result: $crate::Result<$crate::Value> =
            ::core::result::Result::Ok($crate::Value::from($value));
        $(
            let result = result.and_then($f);
        )*
        result
    }};
}
