//! Configuration options for the transform core.
//!
//! This module provides the types a host UI binds its toggles to:
//!
//! - [`Separator`]: cell separator for CSV-style parsing (comma, semicolon, tab, pipe)
//! - [`Delimiter`]: token delimiter for list reformatting, including the
//!   whitespace-run delimiter and arbitrary literal strings
//! - [`QuoteStyle`] / [`SortOrder`] / [`Direction`] / [`OutputShape`]: small enums
//! - [`CsvOptions`], [`ReformatOptions`], [`ProcessOptions`], [`CoerceOptions`]:
//!   per-tool option structs with builder-style `with_*` methods
//!
//! ## Examples
//!
//! ```rust
//! use textshape::{CsvOptions, Separator, OutputShape};
//!
//! // Explicit separator, coerce numbers, keyed-map output
//! let options = CsvOptions::new()
//!     .with_separator(Separator::Semicolon)
//!     .with_parse_numbers(true)
//!     .with_output(OutputShape::Keyed);
//! ```

use serde::{Deserialize, Serialize};

/// Cell separator for CSV-style row parsing.
///
/// These four characters are also the candidate set for separator
/// auto-detection, tried in declaration order.
///
/// # Examples
///
/// ```rust
/// use textshape::Separator;
///
/// assert_eq!(Separator::Comma.as_char(), ',');
/// assert_eq!(Separator::Tab.as_str(), "\t");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Separator {
    #[default]
    Comma,
    Semicolon,
    Tab,
    Pipe,
}

impl Separator {
    /// Detection candidates, earliest first. Ties in the frequency heuristic
    /// resolve to the earliest entry.
    pub const CANDIDATES: [Separator; 4] = [
        Separator::Comma,
        Separator::Semicolon,
        Separator::Tab,
        Separator::Pipe,
    ];

    /// Returns the separator character.
    #[must_use]
    pub const fn as_char(&self) -> char {
        match self {
            Separator::Comma => ',',
            Separator::Semicolon => ';',
            Separator::Tab => '\t',
            Separator::Pipe => '|',
        }
    }

    /// Returns the string representation of this separator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Separator::Comma => ",",
            Separator::Semicolon => ";",
            Separator::Tab => "\t",
            Separator::Pipe => "|",
        }
    }
}

/// Token delimiter for the list reformatter.
///
/// `Whitespace` splits on any run of whitespace rather than a literal single
/// space, and joins with a single space. `Custom` holds an arbitrary literal
/// string (multi-character allowed) that is always matched verbatim, never as
/// a pattern.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Delimiter {
    #[default]
    Comma,
    Semicolon,
    Pipe,
    Whitespace,
    Custom(String),
}

impl Delimiter {
    /// The literal text used when joining tokens with this delimiter.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Delimiter::Comma => ",",
            Delimiter::Semicolon => ";",
            Delimiter::Pipe => "|",
            Delimiter::Whitespace => " ",
            Delimiter::Custom(s) => s,
        }
    }

    /// Returns `true` for the whitespace-run delimiter.
    #[must_use]
    pub const fn is_whitespace(&self) -> bool {
        matches!(self, Delimiter::Whitespace)
    }
}

/// Quote character used when stripping tokens on parse and wrapping them on
/// serialize.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum QuoteStyle {
    #[default]
    None,
    Double,
    Single,
}

impl QuoteStyle {
    /// The wrapping character, if any.
    #[must_use]
    pub const fn quote_char(&self) -> Option<char> {
        match self {
            QuoteStyle::None => None,
            QuoteStyle::Double => Some('"'),
            QuoteStyle::Single => Some('\''),
        }
    }
}

/// Sort applied as the final token-processing step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOrder {
    #[default]
    None,
    Ascending,
    Descending,
}

/// Direction of the list reformatter.
///
/// `ToDelimited` turns a newline-separated column into one delimited line;
/// `ToLines` splits delimited text back into a column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    ToDelimited,
    ToLines,
}

/// Shape of the JSON produced from a parsed table.
///
/// `Records` emits an array with one object per data row, keyed by header.
/// `Keyed` emits a single object keyed by each row's first column, with the
/// remaining columns as a nested record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputShape {
    #[default]
    Records,
    Keyed,
}

/// Per-cell coercion policy.
///
/// Both toggles are best-effort: a cell that fails to coerce stays a string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CoerceOptions {
    pub parse_numbers: bool,
    pub parse_json: bool,
}

impl CoerceOptions {
    /// Creates the default policy: no coercion, every cell stays a string.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables numeric coercion of plain integer/decimal cells.
    #[must_use]
    pub fn with_parse_numbers(mut self, parse_numbers: bool) -> Self {
        self.parse_numbers = parse_numbers;
        self
    }

    /// Enables or disables structural parsing of `{...}`/`[...]` cells.
    #[must_use]
    pub fn with_parse_json(mut self, parse_json: bool) -> Self {
        self.parse_json = parse_json;
        self
    }
}

/// Options for the token-processing pipeline.
///
/// Steps apply in a fixed order: trim, remove-empty, dedupe, sort. Dedupe
/// keeps the first occurrence under a case policy; `case_sensitive` only
/// affects the dedupe key, never the sort.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessOptions {
    pub trim: bool,
    pub remove_empty: bool,
    pub dedupe: bool,
    pub case_sensitive: bool,
    pub sort: SortOrder,
}

impl Default for ProcessOptions {
    fn default() -> Self {
        ProcessOptions {
            trim: false,
            remove_empty: false,
            dedupe: false,
            case_sensitive: true,
            sort: SortOrder::None,
        }
    }
}

impl ProcessOptions {
    /// Creates pass-through options: no step enabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    #[must_use]
    pub fn with_remove_empty(mut self, remove_empty: bool) -> Self {
        self.remove_empty = remove_empty;
        self
    }

    #[must_use]
    pub fn with_dedupe(mut self, dedupe: bool) -> Self {
        self.dedupe = dedupe;
        self
    }

    #[must_use]
    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    #[must_use]
    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }
}

/// Options for CSV → JSON conversion.
///
/// `separator: None` means auto-detect from the input sample. Detection is a
/// frequency heuristic and may guess wrong on ambiguous input; set the
/// separator explicitly to override it.
///
/// # Examples
///
/// ```rust
/// use textshape::{CsvOptions, Separator};
///
/// let auto = CsvOptions::new();
/// assert!(auto.separator.is_none());
///
/// let fixed = CsvOptions::new().with_separator(Separator::Tab);
/// assert_eq!(fixed.separator, Some(Separator::Tab));
/// ```
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct CsvOptions {
    pub separator: Option<Separator>,
    pub parse_numbers: bool,
    pub parse_json: bool,
    pub transpose: bool,
    pub output: OutputShape,
    pub minify: bool,
}

impl CsvOptions {
    /// Creates default options: auto-detected separator, no coercion,
    /// record-array output, pretty-printed JSON.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pins the separator instead of auto-detecting it.
    #[must_use]
    pub fn with_separator(mut self, separator: Separator) -> Self {
        self.separator = Some(separator);
        self
    }

    #[must_use]
    pub fn with_parse_numbers(mut self, parse_numbers: bool) -> Self {
        self.parse_numbers = parse_numbers;
        self
    }

    #[must_use]
    pub fn with_parse_json(mut self, parse_json: bool) -> Self {
        self.parse_json = parse_json;
        self
    }

    /// Swaps rows and columns before the header row is interpreted.
    #[must_use]
    pub fn with_transpose(mut self, transpose: bool) -> Self {
        self.transpose = transpose;
        self
    }

    #[must_use]
    pub fn with_output(mut self, output: OutputShape) -> Self {
        self.output = output;
        self
    }

    /// Emits minified JSON instead of 2-space pretty printing.
    #[must_use]
    pub fn with_minify(mut self, minify: bool) -> Self {
        self.minify = minify;
        self
    }

    /// The coercion policy slice of these options.
    #[must_use]
    pub fn coerce_options(&self) -> CoerceOptions {
        CoerceOptions {
            parse_numbers: self.parse_numbers,
            parse_json: self.parse_json,
        }
    }
}

/// Options for the delimiter reformatter.
///
/// A non-empty `custom_delimiter` (trimmed) overrides `delimiter`; whitespace
/// in the custom string cannot itself become the delimiter, use
/// [`Delimiter::Whitespace`] for that.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReformatOptions {
    pub delimiter: Delimiter,
    pub custom_delimiter: Option<String>,
    pub quote_style: QuoteStyle,
    pub quote_only_if_needed: bool,
    pub trim: bool,
    pub remove_empty: bool,
    pub dedupe: bool,
    pub case_sensitive_dedupe: bool,
    pub sort: SortOrder,
}

impl Default for ReformatOptions {
    fn default() -> Self {
        ReformatOptions {
            delimiter: Delimiter::Comma,
            custom_delimiter: None,
            quote_style: QuoteStyle::None,
            quote_only_if_needed: false,
            trim: true,
            remove_empty: true,
            dedupe: false,
            case_sensitive_dedupe: true,
            sort: SortOrder::None,
        }
    }
}

impl ReformatOptions {
    /// Creates default options: comma delimiter, no quoting, trim and
    /// remove-empty enabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets a literal delimiter string that overrides `delimiter` when
    /// non-empty after trimming.
    #[must_use]
    pub fn with_custom_delimiter(mut self, custom: impl Into<String>) -> Self {
        self.custom_delimiter = Some(custom.into());
        self
    }

    #[must_use]
    pub fn with_quote_style(mut self, quote_style: QuoteStyle) -> Self {
        self.quote_style = quote_style;
        self
    }

    /// Only wraps tokens that actually contain the active delimiter.
    #[must_use]
    pub fn with_quote_only_if_needed(mut self, only_if_needed: bool) -> Self {
        self.quote_only_if_needed = only_if_needed;
        self
    }

    #[must_use]
    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    #[must_use]
    pub fn with_remove_empty(mut self, remove_empty: bool) -> Self {
        self.remove_empty = remove_empty;
        self
    }

    #[must_use]
    pub fn with_dedupe(mut self, dedupe: bool) -> Self {
        self.dedupe = dedupe;
        self
    }

    #[must_use]
    pub fn with_case_sensitive_dedupe(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive_dedupe = case_sensitive;
        self
    }

    #[must_use]
    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    /// Resolves the delimiter actually in effect: the trimmed custom literal
    /// when present and non-empty, else the configured choice.
    #[must_use]
    pub fn active_delimiter(&self) -> Delimiter {
        match self.custom_delimiter.as_deref().map(str::trim) {
            Some(custom) if !custom.is_empty() => Delimiter::Custom(custom.to_string()),
            _ => self.delimiter.clone(),
        }
    }

    /// The token-processing slice of these options.
    #[must_use]
    pub fn process_options(&self) -> ProcessOptions {
        ProcessOptions {
            trim: self.trim,
            remove_empty: self.remove_empty,
            dedupe: self.dedupe,
            case_sensitive: self.case_sensitive_dedupe,
            sort: self.sort,
        }
    }
}
