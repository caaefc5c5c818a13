//! Library error types.

use thiserror::Error;

/// Errors from typed parsing operations.
///
/// Classification itself never fails: unmatched taxonomy names and content
/// types take the documented fallback labels instead of signaling an error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A label string did not name any known page context.
    #[error("unknown context label: {0}")]
    UnknownContext(String),

    /// The `show_on_front` setting held something other than "posts" or "page".
    #[error("invalid show_on_front value: {0}")]
    InvalidShowOnFront(String),
}

/// Result type alias using the library error.
pub type Result<T> = std::result::Result<T, Error>;
