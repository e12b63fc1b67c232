//! Whole-document JSON formatting and best-effort repair.
//!
//! [`format_json`] is a strict parse-then-reprint: invalid documents error
//! with line/column information and produce no partial output. [`repair_json`]
//! is deliberately not a parser — three regex passes patch the mistakes
//! hand-written JSON most often contains (trailing commas, unquoted keys,
//! single-quoted strings), and the patched text must then survive a real
//! parse before it is returned.

use crate::error::{Error, Result};
use regex::{Captures, Regex};
use serde_json::Value;
use std::sync::LazyLock;

/// `,` directly before a closing brace or bracket.
static TRAILING_COMMA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",\s*([}\]])").expect("hardcoded pattern"));

/// A bare identifier key after `{` or `,`.
static BARE_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([{,]\s*)([A-Za-z0-9_]+)\s*:").expect("hardcoded pattern"));

/// A single-quoted string, honoring backslash escapes inside it.
static SINGLE_QUOTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"'([^'\\]*(?:\\.[^'\\]*)*)'").expect("hardcoded pattern"));

/// Pretty-prints or minifies a JSON document.
///
/// Object key order is preserved from the input. Pretty output uses 2-space
/// indentation.
///
/// # Errors
///
/// Returns [`Error::Json`] when the document does not parse; nothing is
/// emitted for a partially valid document.
///
/// # Examples
///
/// ```rust
/// use textshape::format_json;
///
/// let pretty = format_json("{\"a\":1}", false).unwrap();
/// assert_eq!(pretty, "{\n  \"a\": 1\n}");
///
/// let minified = format_json(&pretty, true).unwrap();
/// assert_eq!(minified, "{\"a\":1}");
/// ```
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn format_json(input: &str, minify: bool) -> Result<String> {
    let parsed: Value = serde_json::from_str(input).map_err(|e| Error::json(&e))?;
    let serialized = if minify {
        serde_json::to_string(&parsed)
    } else {
        serde_json::to_string_pretty(&parsed)
    };
    serialized.map_err(|e| Error::json(&e))
}

/// Attempts to repair almost-JSON into valid JSON.
///
/// Three patch passes run in order: trailing commas before `}`/`]` are
/// dropped, bare `word` keys are double-quoted, and single-quoted strings
/// become double-quoted with embedded `"` escaped. The result is the patched
/// text itself — untouched formatting survives — and it is only returned if
/// it parses.
///
/// # Errors
///
/// Returns the parse error of the patched text when the patches were not
/// enough.
///
/// # Examples
///
/// ```rust
/// use textshape::repair_json;
///
/// let fixed = repair_json("{name: 'Alice', tags: ['a', 'b',],}").unwrap();
/// assert_eq!(fixed, "{\"name\": \"Alice\", \"tags\": [\"a\", \"b\"]}");
///
/// assert!(repair_json("{totally broken").is_err());
/// ```
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn repair_json(input: &str) -> Result<String> {
    let text = input.trim();
    let text = TRAILING_COMMA.replace_all(text, "$1");
    let text = BARE_KEY.replace_all(&text, "${1}\"${2}\":");
    let text = SINGLE_QUOTED.replace_all(&text, |caps: &Captures| {
        format!("\"{}\"", caps[1].replace('"', "\\\""))
    });

    match serde_json::from_str::<Value>(&text) {
        Ok(_) => Ok(text.into_owned()),
        Err(e) => Err(Error::json(&e)),
    }
}
