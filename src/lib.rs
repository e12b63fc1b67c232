//! # textshape
//!
//! The pure transform core behind a set of paste-in text utilities: list
//! comparison, list deduplication, delimiter reformatting, CSV ↔ JSON
//! conversion, and JSON formatting/repair.
//!
//! ## Design
//!
//! Every operation is a stateless function of its input text and an options
//! struct: no I/O, no caching, no hidden defaults. The host (a form-based UI,
//! a CLI, a test) owns all state; calling the same function twice with the
//! same arguments returns the same result.
//!
//! - **Tokenizing** is quote-aware where it matters: a comma inside
//!   `"a,b"` is content, and `""` inside a double-quoted field is one
//!   literal quote.
//! - **Irregular input is absorbed, not fatal**: short rows pad with empty
//!   strings, long rows truncate, malformed embedded JSON stays a string.
//!   Only a whole document that fails to parse becomes an [`Error`].
//! - **Order is insertion order** everywhere — dedupe keeps the first
//!   occurrence, JSON objects keep key order, comparison output follows the
//!   source lists — unless a sort is explicitly requested.
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! textshape = "0.1"
//! ```
//!
//! ### CSV to JSON
//!
//! ```rust
//! use textshape::{csv_to_json, CsvOptions};
//!
//! let csv = "name,age\nAlice,30\nBob,25";
//! let options = CsvOptions::new().with_parse_numbers(true).with_minify(true);
//!
//! let json = csv_to_json(csv, &options).unwrap();
//! assert_eq!(json, r#"[{"name":"Alice","age":30},{"name":"Bob","age":25}]"#);
//! ```
//!
//! ### Reformatting a list
//!
//! ```rust
//! use textshape::{reformat, Direction, ReformatOptions, QuoteStyle};
//!
//! let options = ReformatOptions::new()
//!     .with_quote_style(QuoteStyle::Double)
//!     .with_quote_only_if_needed(true);
//!
//! let line = reformat("red\ngreen\nblue", Direction::ToDelimited, &options);
//! assert_eq!(line, "red,green,blue");
//! ```
//!
//! ### Comparing two lists
//!
//! ```rust
//! use textshape::compare_lines;
//!
//! let report = compare_lines("Apple\nBanana", "apple\nCherry", false);
//! assert_eq!(report.both, vec!["apple"]);
//! assert_eq!(report.only_left, vec!["banana"]);
//! assert_eq!(report.only_right, vec!["cherry"]);
//! ```
//!
//! ## Separator detection
//!
//! When [`CsvOptions::separator`] is unset, [`detect_separator`] samples the
//! first five lines and picks the most frequent of comma, semicolon, tab and
//! pipe. It is a heuristic by design — quoted fields containing separator
//! characters can mislead it — so every entry point accepts an explicit
//! separator as the override.

pub mod coerce;
pub mod detect;
pub mod error;
pub mod json;
pub mod list;
pub mod options;
pub mod process;
pub mod reformat;
pub mod table;
pub mod tokenize;

pub use coerce::{coerce, stringify};
pub use detect::detect_separator;
pub use error::{Error, Result};
pub use json::{format_json, repair_json};
pub use list::{compare, compare_lines, dedupe_lines, normalize_lines, CompareReport};
pub use options::{
    CoerceOptions, CsvOptions, Delimiter, Direction, OutputShape, ProcessOptions, QuoteStyle,
    ReformatOptions, Separator, SortOrder,
};
pub use process::{normalize_key, process};
pub use reformat::reformat;
pub use table::{
    csv_to_json, json_to_csv, rows_to_keyed_map, rows_to_records, transpose, value_to_rows,
};
pub use tokenize::{split_lines, split_rows, split_stream, strip_outer_quotes};
