//! Best-effort coercion of string cells into typed values.
//!
//! Coercion never fails: the worst case for any cell is coming back as the
//! original string. Each cell is judged independently, so one row can mix
//! numbers, embedded structures, and plain strings.

use crate::options::CoerceOptions;
use serde_json::Value;

/// Coerces one cell under the given policy.
///
/// With `parse_json` on, a trimmed cell wrapped in a matching `{...}` or
/// `[...]` pair is given to the JSON parser; a parse failure falls through to
/// the later rules instead of erroring. With `parse_numbers` on, a cell that
/// is exactly an optional minus, digits, and an optional decimal part becomes
/// a number (integer without a decimal point, float with one). Anything else
/// stays a string.
///
/// # Examples
///
/// ```rust
/// use textshape::{coerce, CoerceOptions};
/// use serde_json::{json, Value};
///
/// let options = CoerceOptions::new()
///     .with_parse_numbers(true)
///     .with_parse_json(true);
///
/// assert_eq!(coerce("42", &options), json!(42));
/// assert_eq!(coerce("{\"x\":1}", &options), json!({"x": 1}));
/// assert_eq!(coerce("abc", &options), json!("abc"));
/// assert_eq!(coerce("{broken", &options), json!("{broken"));
/// ```
#[must_use]
pub fn coerce(cell: &str, options: &CoerceOptions) -> Value {
    if options.parse_json {
        let trimmed = cell.trim();
        let bracketed = (trimmed.starts_with('{') && trimmed.ends_with('}'))
            || (trimmed.starts_with('[') && trimmed.ends_with(']'));
        if bracketed {
            if let Ok(value) = serde_json::from_str::<Value>(trimmed) {
                return value;
            }
        }
    }

    if options.parse_numbers && is_plain_number(cell) {
        if !cell.contains('.') {
            if let Ok(n) = cell.parse::<i64>() {
                return Value::from(n);
            }
        }
        // decimals, and integers too large for i64
        if let Ok(f) = cell.parse::<f64>() {
            return Value::from(f);
        }
    }

    Value::String(cell.to_string())
}

/// Renders a value the way it appears in delimited output.
///
/// Strings pass through without quotes; everything else uses its compact JSON
/// text, so numbers, booleans and `null` read naturally and nested structures
/// stay one cell.
#[must_use]
pub fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Exact match for `-?digits(.digits)?` — no exponent, no partial match.
fn is_plain_number(cell: &str) -> bool {
    let unsigned = cell.strip_prefix('-').unwrap_or(cell);
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    all_digits(int_part) && frac_part.map_or(true, all_digits)
}
