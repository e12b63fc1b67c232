//! Error types for the transform core.
//!
//! Only whole-document failures are represented here: an invalid JSON
//! document handed to the formatter, the CSV serializer, or the repair pass.
//! Everything smaller — a malformed embedded-JSON cell, a row that is shorter
//! or longer than the header row, an ambiguous separator — is absorbed by the
//! component that encounters it and never becomes an `Error`.
//!
//! ## Examples
//!
//! ```rust
//! use textshape::{format_json, Error};
//!
//! let result = format_json("{\"broken\": ", false);
//! assert!(result.is_err());
//!
//! if let Err(Error::Json { line, column, .. }) = result {
//!     assert!(line >= 1 && column >= 1);
//! }
//! ```

use std::fmt;
use thiserror::Error;

/// All errors the transform core can surface to a caller.
///
/// The type is `Clone` so a host UI can keep the last failure around while
/// the user edits their input; positions from `serde_json` are captured as
/// plain numbers rather than holding the source error.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// A full JSON document failed to parse.
    #[error("invalid JSON at line {line}, column {column}: {message}")]
    Json {
        line: usize,
        column: usize,
        message: String,
    },

    /// Custom error with a display message.
    #[error("{0}")]
    Custom(String),
}

impl Error {
    /// Creates a document-level JSON error from a `serde_json` failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use textshape::Error;
    ///
    /// let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    /// let err = Error::json(&source);
    /// assert!(err.to_string().contains("line 1"));
    /// ```
    #[must_use]
    pub fn json(err: &serde_json::Error) -> Self {
        Error::Json {
            line: err.line(),
            column: err.column(),
            message: err.to_string(),
        }
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
