//! Separator auto-detection.
//!
//! A frequency heuristic, not a parser: it samples the first five lines and
//! counts how many segments a naive split on each candidate produces. Quoted
//! fields containing a separator character inflate that candidate's count,
//! which can pick the wrong separator on adversarial input; callers that know
//! the separator should pass it explicitly and skip detection entirely.

use crate::options::Separator;

/// Number of logical lines sampled from the top of the input.
const SAMPLE_LINES: usize = 5;

/// Picks the most frequent candidate separator in the input sample.
///
/// Candidates are tried in [`Separator::CANDIDATES`] order (comma first);
/// ties keep the earliest candidate, so separator-free input detects as
/// comma.
///
/// # Examples
///
/// ```rust
/// use textshape::{detect_separator, Separator};
///
/// assert_eq!(detect_separator("a,b,c\nd,e,f"), Separator::Comma);
/// assert_eq!(detect_separator("a;b;c\nd;e;f"), Separator::Semicolon);
/// assert_eq!(detect_separator("no separators here"), Separator::Comma);
/// ```
#[must_use]
pub fn detect_separator(text: &str) -> Separator {
    let sample = text
        .lines()
        .take(SAMPLE_LINES)
        .collect::<Vec<_>>()
        .join("\n");

    let mut best = Separator::Comma;
    let mut best_count = 0;
    for candidate in Separator::CANDIDATES {
        let count = sample.split(candidate.as_char()).count();
        if count > best_count {
            best = candidate;
            best_count = count;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_each_candidate() {
        assert_eq!(detect_separator("a,b\nc,d"), Separator::Comma);
        assert_eq!(detect_separator("a;b\nc;d"), Separator::Semicolon);
        assert_eq!(detect_separator("a\tb\nc\td"), Separator::Tab);
        assert_eq!(detect_separator("a|b\nc|d"), Separator::Pipe);
    }

    #[test]
    fn test_tie_resolves_to_earliest() {
        // one semicolon, one pipe: equal counts, comma-first ordering means
        // the semicolon wins over the pipe and comma loses with zero hits
        assert_eq!(detect_separator("a;b|c"), Separator::Semicolon);
    }

    #[test]
    fn test_empty_input_defaults_to_comma() {
        assert_eq!(detect_separator(""), Separator::Comma);
    }

    #[test]
    fn test_only_first_five_lines_sampled() {
        let mut text = String::from("a,b\n");
        text.push_str(&"x;y\n".repeat(4));
        // four semicolon lines inside the sample beat the single comma line
        assert_eq!(detect_separator(&text), Separator::Semicolon);

        let mut text = String::from("a,b,c\na,b,c\na,b,c\na,b,c\na,b,c\n");
        text.push_str(&"x;y;z;w;v;u\n".repeat(50));
        // the semicolon flood sits below the sample window
        assert_eq!(detect_separator(&text), Separator::Comma);
    }
}
