//! Curried prefix wrappers around infix operators and record access.
//!
//! Two renditions live side by side:
//!
//! - [`ops`]: generic over the `std::ops` and comparison traits. Infallible,
//!   checked at compile time.
//! - [`dynamic`]: over [`prefix_types::Value`]. Every returned function has the
//!   shape `Fn(Value) -> Result<Value>` so a pipeline stops at the first fault.
//!
//! Every factory is pure. The functions it returns hold only the captured
//! operands and never mutate their input.

mod builtins;
mod coerce;
pub mod dynamic;
pub mod ops;

pub use coerce::{coerce, unsafe_coerce};
