//! # bibentry
//!
//! A parser for single BibTeX entries with graceful degradation, built as the
//! parsing core of bibliography verification tooling.
//!
//! ## Features
//!
//! - Normalizes messy raw entries (comments, line breaks, stray whitespace)
//!   into a canonical single line
//! - Depth-aware field extraction: `name = {` patterns nested inside values
//!   never start a field
//! - Position-independent citation-key discovery among the comma-separated
//!   body segments
//! - Recoverable field/key failures reported alongside the partial record
//!   instead of aborting
//!
//! ## Example
//!
//! ```
//! use bibentry::Record;
//!
//! let raw = r#"
//!     % imported from the publisher
//!     @article{jurczyk2023,
//!         author = {Jurczyk, Thomas},
//!         date = {20.12.2023}
//!     }
//! "#;
//!
//! let parsed = Record::parse(raw)?;
//! assert!(parsed.issues.is_empty());
//! assert_eq!(parsed.record.entry_type(), "article");
//! assert_eq!(parsed.record.key(), "jurczyk2023");
//! assert_eq!(parsed.record.get("author"), Some("Jurczyk, Thomas"));
//! # Ok::<(), bibentry::Error>(())
//! ```
//!
//! Splitting a bibliography file into raw entry strings and aggregating the
//! parsed records are the caller's concern; this crate parses one entry per
//! call and holds no state between calls.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    missing_docs,
    missing_debug_implementations
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod error;
pub mod model;
pub mod parser;

pub use error::{Error, Result};
pub use model::{FieldMap, Record};
pub use parser::{ParseOptions, Parsed};

/// Re-export of common types
pub mod prelude {
    pub use crate::{Error, FieldMap, ParseOptions, Parsed, Record, Result};
}

/// Parse a single raw BibTeX entry with default options
pub fn parse(raw: &str) -> Result<Parsed> {
    parser::parse_entry(raw)
}
