//! Error types for the bibentry crate

use thiserror::Error;

/// Result type for bibentry operations
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for bibentry
///
/// Header-level failures (`EmptyInput`, `MalformedHeader` raised while parsing
/// the entry type) are fatal: no [`Record`](crate::Record) is produced. Field
/// and key failures are recoverable at the composition level and are collected
/// in [`Parsed::issues`](crate::Parsed) instead of aborting the parse.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Text was empty after trimming or normalization where content is required
    #[error("entry text is empty")]
    EmptyInput,

    /// Entry header is missing the `@` marker, or the opening brace when a
    /// body is required
    #[error("malformed entry header: {0}")]
    MalformedHeader(String),

    /// Entry body does not end with a closing brace
    #[error("entry body does not end with '}}'")]
    UnterminatedEntry,

    /// A field value is not wrapped in a matching quote or brace pair
    #[error("field value is not wrapped in matching delimiters: {0}")]
    InvalidFieldDelimiter(String),

    /// No standalone citation key found in the entry body
    #[error("no citation key found in entry body")]
    KeyNotFound,
}
