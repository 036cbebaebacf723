//! Loose and strict equality, and the number/text conversions they rely on.
//!
//! Loose equality converts between scalar kinds before comparing. Which
//! conversions apply is spelled out by [`CoercionPolicy`] instead of being
//! implied; the default mirrors the classic `==` table for the kinds a
//! [`Value`] can hold:
//!
//! | left    | right   | rule                                          |
//! |---------|---------|-----------------------------------------------|
//! | null    | null    | equal                                         |
//! | null    | other   | unequal                                       |
//! | number  | text    | text parsed as a number (`number_text`)       |
//! | bool    | other   | bool becomes `0`/`1`, retried (`bool_to_number`) |
//! | record  | record  | identity                                      |
//! | method  | method  | identity                                      |
//! | any     | other   | unequal                                       |

use serde::{Deserialize, Serialize};

use crate::{Method, Record, Value};

/// Which cross-kind conversions loose equality may perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoercionPolicy {
    /// Compare a number with a text by parsing the text.
    pub number_text: bool,
    /// Turn a bool operand into `0`/`1` and compare again.
    pub bool_to_number: bool,
}

impl Default for CoercionPolicy {
    fn default() -> Self {
        Self {
            number_text: true,
            bool_to_number: true,
        }
    }
}

impl CoercionPolicy {
    /// No conversions at all; loose equality degrades to [`strict_eq`].
    pub const NONE: Self = Self {
        number_text: false,
        bool_to_number: false,
    };

    #[must_use]
    pub fn loose_eq(&self, left: &Value, right: &Value) -> bool {
        match (left, right) {
            (Value::Null, Value::Null) => true,
            (Value::Null, _) | (_, Value::Null) => false,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::Record(a), Value::Record(b)) => Record::ptr_eq(a, b),
            (Value::Method(a), Value::Method(b)) => Method::ptr_eq(a, b),
            (Value::Number(n), Value::Text(t)) | (Value::Text(t), Value::Number(n))
                if self.number_text =>
            {
                *n == parse_number(t)
            }
            (Value::Bool(b), other) | (other, Value::Bool(b)) if self.bool_to_number => {
                self.loose_eq(&Value::Number(f64::from(u8::from(*b))), other)
            }
            _ => false,
        }
    }
}

/// Equality without any conversion. Different kinds are never equal, `NaN`
/// is unequal to itself, records and methods compare by identity.
#[must_use]
pub fn strict_eq(left: &Value, right: &Value) -> bool {
    CoercionPolicy::NONE.loose_eq(left, right)
}

/// Parse text the way numeric coercion does.
///
/// Surrounding whitespace is ignored and empty text is `0`. Accepts decimal
/// literals with optional sign and exponent, `Infinity` with optional sign,
/// and `0x`/`0o`/`0b` integer literals. Anything else is `NaN`.
#[must_use]
pub fn parse_number(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    let prefixed = [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)];
    for (prefix, radix) in prefixed {
        if let Some(digits) = trimmed.strip_prefix(prefix) {
            // `from_str_radix` tolerates a leading sign; prefixed literals take none.
            if digits.starts_with('+') {
                return f64::NAN;
            }
            return u64::from_str_radix(digits, radix).map_or(f64::NAN, |n| n as f64);
        }
    }

    // `f64::from_str` also accepts "inf", "nan" and friends, which numeric
    // coercion does not.
    let decimal_only = trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'));
    if !decimal_only {
        return f64::NAN;
    }
    trimmed.parse().unwrap_or(f64::NAN)
}

/// Render a number the way `toString` does.
///
/// Integral values print without a fractional part, `-0` prints as `0`, and
/// the non-finite values print as `NaN`, `Infinity` and `-Infinity`.
#[must_use]
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        let label = if n > 0.0 { "Infinity" } else { "-Infinity" };
        label.to_string()
    } else if n == 0.0 {
        "0".to_string()
    } else {
        format!("{n}")
    }
}
