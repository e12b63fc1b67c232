//! The column ↔ delimited-list reformatter.
//!
//! Combines the tokenizers and the token pipeline into the "delimiter
//! comma" tool: one direction turns a newline column into a single delimited
//! line, the other splits delimited text back into a column. Either way each
//! token is stripped of outer quotes on the way in and optionally re-wrapped
//! in the configured quote style on the way out.

use crate::options::{Delimiter, Direction, ReformatOptions};
use crate::process::process;
use crate::tokenize::{split_lines, split_stream, strip_outer_quotes};

/// Reformats list text between column and delimited layouts.
///
/// Pipeline: tokenize (by lines or by the active delimiter) → strip outer
/// quotes → trim / remove-empty / dedupe / sort per the options → re-quote →
/// join. The whitespace delimiter joins tokens with a single space.
///
/// # Examples
///
/// ```rust
/// use textshape::{reformat, Direction, ReformatOptions, Delimiter, QuoteStyle};
///
/// let options = ReformatOptions::new().with_delimiter(Delimiter::Comma);
/// assert_eq!(
///     reformat("apple\nbanana\ncherry", Direction::ToDelimited, &options),
///     "apple,banana,cherry"
/// );
/// assert_eq!(
///     reformat("apple, banana , cherry", Direction::ToLines, &options),
///     "apple\nbanana\ncherry"
/// );
/// ```
#[must_use]
pub fn reformat(input: &str, direction: Direction, options: &ReformatOptions) -> String {
    let delimiter = options.active_delimiter();

    let tokens = match direction {
        Direction::ToDelimited => split_lines(input),
        Direction::ToLines => split_stream(input, &delimiter),
    };
    let stripped = tokens
        .iter()
        .map(|token| strip_outer_quotes(token))
        .collect();
    let cleaned = process(stripped, &options.process_options());
    let wrapped: Vec<String> = cleaned
        .into_iter()
        .map(|token| wrap_token(token, options, &delimiter))
        .collect();

    match direction {
        Direction::ToDelimited => wrapped.join(delimiter.as_str()),
        Direction::ToLines => wrapped.join("\n"),
    }
}

/// A token needs quoting when it contains the active delimiter; for the
/// whitespace delimiter, when it contains any whitespace at all.
fn needs_quoting(token: &str, delimiter: &Delimiter) -> bool {
    if delimiter.is_whitespace() {
        token.chars().any(char::is_whitespace)
    } else {
        token.contains(delimiter.as_str())
    }
}

fn wrap_token(token: String, options: &ReformatOptions, delimiter: &Delimiter) -> String {
    let Some(quote) = options.quote_style.quote_char() else {
        return token;
    };
    if options.quote_only_if_needed && !needs_quoting(&token, delimiter) {
        return token;
    }
    format!("{quote}{token}{quote}")
}
