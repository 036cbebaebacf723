//! Error taxonomy shared by every combinator.

use std::fmt;
use std::result;

use thiserror::Error;

pub type Result<T> = result::Result<T, CombinatorError>;

/// Runtime shape of a [`Value`](crate::Value), used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Bool,
    Number,
    Text,
    Record,
    Method,
}

impl ValueKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "bool",
            ValueKind::Number => "number",
            ValueKind::Text => "text",
            ValueKind::Record => "record",
            ValueKind::Method => "method",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every fault a combinator can raise.
///
/// Nothing in this workspace catches or retries these; they propagate to the
/// immediate caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CombinatorError {
    #[error("record has no field `{field}`")]
    MissingField { field: String },

    #[error("field `{field}` is not invocable (found {found})")]
    NotInvocable { field: String, found: ValueKind },

    #[error("`{operation}` expected {expected}, found {found}")]
    TypeMismatch {
        operation: &'static str,
        expected: &'static str,
        found: String,
    },

    #[error("{what} has no counterpart in the target representation")]
    NotRepresentable { what: &'static str },
}

impl CombinatorError {
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    pub fn mismatch(
        operation: &'static str,
        expected: &'static str,
        found: impl fmt::Display,
    ) -> Self {
        Self::TypeMismatch {
            operation,
            expected,
            found: found.to_string(),
        }
    }
}
