//! Tokenizers that turn raw pasted text into strings and rows.
//!
//! Two splitting regimes exist side by side:
//!
//! - **Line-oriented**: [`split_lines`] treats the input as a newline-separated
//!   list, trimming each line and dropping blanks.
//! - **Delimiter-oriented**: [`split_stream`] and [`split_rows`] scan
//!   character-by-character with a quote-state flag, so a delimiter inside a
//!   double-quoted segment is literal content and `""` inside a quoted field
//!   yields one literal quote character.
//!
//! The delimiter is always matched as a literal substring; multi-character
//! delimiters need no escaping. The single whitespace delimiter is
//! special-cased to split on any run of whitespace.
//!
//! ## Examples
//!
//! ```rust
//! use textshape::{split_rows, Separator};
//!
//! let rows = split_rows("a,\"b,c\",d", Separator::Comma);
//! assert_eq!(rows, vec![vec!["a", "b,c", "d"]]);
//! ```

use crate::options::{Delimiter, Separator};

/// Splits line-oriented list input.
///
/// Lines are separated by `\n` or `\r\n`; each line is trimmed and empty
/// lines are dropped.
///
/// # Examples
///
/// ```rust
/// use textshape::split_lines;
///
/// let lines = split_lines("  apple  \r\n\nbanana\n");
/// assert_eq!(lines, vec!["apple", "banana"]);
/// ```
#[must_use]
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Splits the whole input as one delimited stream.
///
/// All line breaks are first collapsed to single spaces, so a value list
/// wrapped over several lines parses the same as a single line. The scan is
/// quote-aware (see the module docs); whitespace around an unquoted delimiter
/// is trimmed from both neighboring tokens.
///
/// # Examples
///
/// ```rust
/// use textshape::{split_stream, Delimiter};
///
/// let tokens = split_stream("a , b\nc", &Delimiter::Comma);
/// assert_eq!(tokens, vec!["a", "b c"]);
///
/// let words = split_stream("one  two\tthree", &Delimiter::Whitespace);
/// assert_eq!(words, vec!["one", "two", "three"]);
/// ```
#[must_use]
pub fn split_stream(text: &str, delimiter: &Delimiter) -> Vec<String> {
    let normalized = text.replace("\r\n", " ").replace('\n', " ");
    if delimiter.is_whitespace() {
        return normalized.split_whitespace().map(str::to_string).collect();
    }
    split_quote_aware(&normalized, delimiter.as_str())
}

/// Splits CSV-style input into rows of cells.
///
/// Operates per physical line: trailing whitespace is stripped, blank lines
/// are skipped, and each remaining line goes through the quote-aware scan
/// with every resulting cell trimmed.
///
/// # Examples
///
/// ```rust
/// use textshape::{split_rows, Separator};
///
/// let rows = split_rows("name,age\n\nAlice, 30\n", Separator::Comma);
/// assert_eq!(rows, vec![vec!["name", "age"], vec!["Alice", "30"]]);
/// ```
#[must_use]
pub fn split_rows(text: &str, separator: Separator) -> Vec<Vec<String>> {
    text.lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .map(|line| split_quote_aware(line, separator.as_str()))
        .collect()
}

/// Removes one matching pair of outer quotes from a token.
///
/// The token is trimmed first; if it then starts and ends with `"` or with
/// `'`, the pair is removed and the remainder trimmed again. Anything else is
/// returned trimmed but otherwise untouched.
///
/// # Examples
///
/// ```rust
/// use textshape::strip_outer_quotes;
///
/// assert_eq!(strip_outer_quotes("  \" padded \"  "), "padded");
/// assert_eq!(strip_outer_quotes("'single'"), "single");
/// assert_eq!(strip_outer_quotes("plain"), "plain");
/// ```
#[must_use]
pub fn strip_outer_quotes(token: &str) -> String {
    let trimmed = token.trim();
    let inner = trimmed
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .or_else(|| {
            trimmed
                .strip_prefix('\'')
                .and_then(|rest| rest.strip_suffix('\''))
        });
    match inner {
        Some(inner) => inner.trim().to_string(),
        None => trimmed.to_string(),
    }
}

/// Quote-aware literal split shared by the stream and row tokenizers.
///
/// A `"` toggles quote mode unless immediately followed by another `"`, in
/// which case one literal quote is emitted and the second character skipped.
/// While quote mode is on the delimiter is ordinary content. Each emitted
/// token is trimmed.
fn split_quote_aware(input: &str, delimiter: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = input.char_indices();

    while let Some((index, ch)) = chars.next() {
        if ch == '"' {
            if in_quotes && input[index + 1..].starts_with('"') {
                current.push('"');
                chars.next();
            } else {
                in_quotes = !in_quotes;
            }
            continue;
        }
        if !in_quotes && !delimiter.is_empty() && input[index..].starts_with(delimiter) {
            // consume the rest of a multi-character delimiter
            let mut consumed = ch.len_utf8();
            while consumed < delimiter.len() {
                match chars.next() {
                    Some((_, next)) => consumed += next.len_utf8(),
                    None => break,
                }
            }
            tokens.push(current.trim().to_string());
            current.clear();
            continue;
        }
        current.push(ch);
    }

    tokens.push(current.trim().to_string());
    tokens
}
