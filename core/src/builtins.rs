//! Methods every scalar (and every record) answers to without an own field.
//!
//! Text positions count Unicode scalar values. Unknown method names report
//! `MissingField`, the same as an absent record member.

use prefix_types::{CombinatorError, Result, Value, format_number};

/// Longest text, in bytes, a built-in method may produce.
const MAX_TEXT_LEN: usize = (1 << 29) - 24;

pub(crate) fn invoke(receiver: &Value, name: &str, args: &[Value]) -> Result<Value> {
    match receiver {
        Value::Number(n) => number_method(*n, name, args),
        Value::Text(s) => text_method(s, name, args),
        Value::Bool(b) => match name {
            "toString" => Ok(Value::from(b.to_string())),
            "valueOf" => Ok(Value::Bool(*b)),
            _ => Err(unknown(name)),
        },
        Value::Record(_) => match name {
            "toString" => Ok(Value::from(receiver.to_string())),
            "valueOf" => Ok(receiver.clone()),
            _ => Err(unknown(name)),
        },
        Value::Null | Value::Method(_) => {
            tracing::debug!(method = name, found = %receiver.kind(), "no methods on receiver");
            Err(CombinatorError::mismatch(
                "call",
                "a record, number, text or bool receiver",
                receiver.kind(),
            ))
        }
    }
}

fn unknown(name: &str) -> CombinatorError {
    tracing::debug!(method = name, "unknown method");
    CombinatorError::missing_field(name)
}

fn number_arg(args: &[Value], index: usize, operation: &'static str) -> Result<Option<f64>> {
    match args.get(index) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => Ok(Some(*n)),
        Some(other) => Err(CombinatorError::mismatch(operation, "a number argument", other.kind())),
    }
}

fn text_arg<'a>(args: &'a [Value], index: usize, operation: &'static str) -> Result<&'a str> {
    match args.get(index) {
        Some(Value::Text(s)) => Ok(&**s),
        Some(other) => Err(CombinatorError::mismatch(operation, "a text argument", other.kind())),
        None => Err(CombinatorError::mismatch(operation, "a text argument", "nothing")),
    }
}

fn number_method(n: f64, name: &str, args: &[Value]) -> Result<Value> {
    match name {
        "toString" => {
            let radix = number_arg(args, 0, "toString")?.unwrap_or(10.0);
            to_radix_string(n, radix).map(Value::from)
        }
        "toFixed" => {
            let digits = number_arg(args, 0, "toFixed")?.unwrap_or(0.0);
            to_fixed(n, digits).map(Value::from)
        }
        "valueOf" => Ok(Value::Number(n)),
        _ => Err(unknown(name)),
    }
}

fn to_radix_string(n: f64, radix: f64) -> Result<String> {
    if radix.fract() != 0.0 || !(2.0..=36.0).contains(&radix) {
        return Err(CombinatorError::mismatch(
            "toString",
            "a radix between 2 and 36",
            format_number(radix),
        ));
    }
    let radix = radix as u32;
    if radix == 10 || !n.is_finite() {
        return Ok(format_number(n));
    }
    if n.fract() != 0.0 {
        return Err(CombinatorError::mismatch(
            "toString",
            "an integral number for a non-decimal radix",
            format_number(n),
        ));
    }

    let magnitude = n.abs();
    if magnitude == 0.0 {
        return Ok("0".to_string());
    }
    let digits = integral_digits(magnitude, radix);
    Ok(if n < 0.0 { format!("-{digits}") } else { digits })
}

/// Exact digits of an integral `magnitude >= 1`, however large.
///
/// The value is rebuilt from its mantissa and exponent as 32-bit limbs and
/// divided down by `radix`.
fn integral_digits(magnitude: f64, radix: u32) -> String {
    const FRACTION_BITS: u32 = 52;
    const EXPONENT_BIAS: i32 = 1075;

    let bits = magnitude.to_bits();
    let biased = ((bits >> FRACTION_BITS) & 0x7ff) as i32;
    let mantissa = (bits & ((1_u64 << FRACTION_BITS) - 1)) | (1_u64 << FRACTION_BITS);
    let shift = biased - EXPONENT_BIAS;

    let mut limbs: Vec<u32> = if shift <= 0 {
        let value = mantissa >> shift.unsigned_abs();
        vec![value as u32, (value >> 32) as u32]
    } else {
        let shift = shift.unsigned_abs();
        let mut limbs = vec![0; (shift / 32) as usize];
        let wide = u128::from(mantissa) << (shift % 32);
        limbs.extend([wide as u32, (wide >> 32) as u32, (wide >> 64) as u32]);
        limbs
    };

    let wide_radix = u64::from(radix);
    let mut digits = Vec::new();
    while limbs.iter().any(|&limb| limb != 0) {
        let mut remainder = 0_u64;
        for limb in limbs.iter_mut().rev() {
            let current = (remainder << 32) | u64::from(*limb);
            *limb = (current / wide_radix) as u32;
            remainder = current % wide_radix;
        }
        digits.extend(char::from_digit(remainder as u32, radix));
    }
    digits.into_iter().rev().collect()
}

fn to_fixed(n: f64, digits: f64) -> Result<String> {
    if digits.fract() != 0.0 || !(0.0..=100.0).contains(&digits) {
        return Err(CombinatorError::mismatch(
            "toFixed",
            "a digit count between 0 and 100",
            format_number(digits),
        ));
    }
    if !n.is_finite() {
        return Ok(format_number(n));
    }
    let digits = digits as usize;
    // Ties round to even, not away from zero.
    // `-0` formats with its sign; `toFixed` drops it.
    let n = if n == 0.0 { 0.0 } else { n };
    Ok(format!("{n:.digits$}"))
}

/// Resolve a possibly negative position against `len`, clamped to `0..=len`.
fn relative_index(raw: f64, len: usize) -> usize {
    let raw = if raw.is_nan() { 0.0 } else { raw.trunc() };
    let len_f = len as f64;
    if raw < 0.0 {
        (len_f + raw).max(0.0) as usize
    } else {
        raw.min(len_f) as usize
    }
}

fn text_method(s: &str, name: &str, args: &[Value]) -> Result<Value> {
    let text = |value: String| Ok(Value::from(value));
    match name {
        "toString" | "valueOf" => text(s.to_string()),
        "toUpperCase" => text(s.to_uppercase()),
        "toLowerCase" => text(s.to_lowercase()),
        "trim" => text(s.trim().to_string()),
        "trimStart" => text(s.trim_start().to_string()),
        "trimEnd" => text(s.trim_end().to_string()),
        "length" => Ok(Value::from(s.chars().count())),
        "concat" => {
            let mut joined = s.to_string();
            for arg in args {
                joined.push_str(&arg.to_string());
            }
            text(joined)
        }
        "includes" => Ok(Value::Bool(s.contains(text_arg(args, 0, "includes")?))),
        "startsWith" => Ok(Value::Bool(s.starts_with(text_arg(args, 0, "startsWith")?))),
        "endsWith" => Ok(Value::Bool(s.ends_with(text_arg(args, 0, "endsWith")?))),
        "charAt" => {
            let index = number_arg(args, 0, "charAt")?.unwrap_or(0.0).trunc();
            let found = if index < 0.0 {
                None
            } else {
                s.chars().nth(index as usize)
            };
            text(found.map(String::from).unwrap_or_default())
        }
        "slice" => {
            let chars: Vec<char> = s.chars().collect();
            let start = relative_index(number_arg(args, 0, "slice")?.unwrap_or(0.0), chars.len());
            let end = number_arg(args, 1, "slice")?
                .map_or(chars.len(), |end| relative_index(end, chars.len()));
            if start >= end {
                text(String::new())
            } else {
                text(chars[start..end].iter().collect())
            }
        }
        "repeat" => {
            let count = number_arg(args, 0, "repeat")?.unwrap_or(0.0);
            if count < 0.0 || !count.is_finite() {
                return Err(CombinatorError::mismatch(
                    "repeat",
                    "a non-negative finite count",
                    format_number(count),
                ));
            }
            let count = count as usize;
            if s.len().checked_mul(count).is_none_or(|len| len > MAX_TEXT_LEN) {
                return Err(CombinatorError::mismatch(
                    "repeat",
                    "a count within the maximum text length",
                    format_number(count as f64),
                ));
            }
            text(s.repeat(count))
        }
        _ => Err(unknown(name)),
    }
}
