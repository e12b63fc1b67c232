//! Order-preserving transforms over a token sequence.
//!
//! [`process`] applies its steps in a fixed order: trim, remove-empty,
//! dedupe, sort. Survivors keep their relative order through every step
//! except the final sort. Deduplication is key-based through
//! [`normalize_key`], the same helper the list tools use, so the case policy
//! lives in exactly one place.

use crate::options::{ProcessOptions, SortOrder};
use std::collections::HashSet;

/// The deduplication/membership key for a token under a case policy.
///
/// Identity when case-sensitive, lowercase fold otherwise. Shared by token
/// deduplication, list deduplication, and list comparison.
///
/// # Examples
///
/// ```rust
/// use textshape::normalize_key;
///
/// assert_eq!(normalize_key("Apple", true), "Apple");
/// assert_eq!(normalize_key("Apple", false), "apple");
/// ```
#[must_use]
pub fn normalize_key(token: &str, case_sensitive: bool) -> String {
    if case_sensitive {
        token.to_string()
    } else {
        token.to_lowercase()
    }
}

/// Runs the token pipeline: trim, remove-empty, dedupe, sort.
///
/// Dedupe keeps the first occurrence of each key and always retains the
/// original-case form. The sort, when requested, is a stable lexicographic
/// ordering of whatever survived the earlier steps and is unaffected by the
/// dedupe case policy.
///
/// # Examples
///
/// ```rust
/// use textshape::{process, ProcessOptions};
///
/// let tokens = vec![" b ".to_string(), "".to_string(), "B".to_string(), "a".to_string()];
/// let options = ProcessOptions::new()
///     .with_trim(true)
///     .with_remove_empty(true)
///     .with_dedupe(true)
///     .with_case_sensitive(false);
/// assert_eq!(process(tokens, &options), vec!["b", "a"]);
/// ```
#[must_use]
pub fn process(tokens: Vec<String>, options: &ProcessOptions) -> Vec<String> {
    let mut next = tokens;

    if options.trim {
        next = next.into_iter().map(|t| t.trim().to_string()).collect();
    }
    if options.remove_empty {
        next.retain(|t| !t.is_empty());
    }
    if options.dedupe {
        let mut seen = HashSet::new();
        next.retain(|t| seen.insert(normalize_key(t, options.case_sensitive)));
    }
    match options.sort {
        SortOrder::None => {}
        SortOrder::Ascending => next.sort(),
        SortOrder::Descending => next.sort_by(|a, b| b.cmp(a)),
    }

    next
}
