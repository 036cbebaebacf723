//! Core value types for prefix.
//!
//! This crate contains the pure data model shared by every combinator: the
//! dynamic [`Value`], the immutable [`Record`], invocable [`Method`]s, the
//! [`CombinatorError`] taxonomy and the loose-equality [`CoercionPolicy`].
//! No IO, no async, nothing here retains state between calls.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory

mod coercion;
mod error;
mod method;
mod record;
mod value;

pub use coercion::{CoercionPolicy, format_number, parse_number, strict_eq};
pub use error::{CombinatorError, Result, ValueKind};
pub use method::Method;
pub use record::Record;
pub use value::Value;
