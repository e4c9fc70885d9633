//! Data model for parsed bibliography records

use ahash::AHashMap;
use std::fmt;

/// Map from lower-cased field name to unwrapped field value
pub type FieldMap = AHashMap<String, String>;

/// One parsed bibliographic record
///
/// A `Record` is built in a single pass over one raw entry string and is
/// immutable afterwards. It owns all of its strings; nothing borrows from the
/// input once construction finishes, so records can be moved freely into a
/// file-level aggregate or across threads.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Record {
    /// Entry type token following `@` (article, book, ...), case preserved
    pub(crate) entry_type: String,
    /// Citation key; empty when key extraction failed
    pub(crate) key: String,
    /// Original unmodified input, retained for diagnostics
    pub(crate) raw_text: String,
    /// Canonical single-line form of the input
    pub(crate) normalized_text: String,
    /// Field names (lower-cased) mapped to unwrapped values
    pub(crate) fields: FieldMap,
}

impl Record {
    /// Parse a single raw entry with default options
    pub fn parse(raw: &str) -> crate::Result<crate::Parsed> {
        crate::parser::parse_entry(raw)
    }

    /// Create a parser with options
    #[must_use]
    pub fn parser() -> crate::ParseOptions {
        crate::ParseOptions::new()
    }

    /// Get the entry type (e.g. "article"), as written in the input
    #[must_use]
    pub fn entry_type(&self) -> &str {
        &self.entry_type
    }

    /// Get the citation key; empty when no key was found
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Get the original raw entry text
    #[must_use]
    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    /// Get the normalized single-line entry text
    #[must_use]
    pub fn normalized_text(&self) -> &str {
        &self.normalized_text
    }

    /// Get a field value by name (case-insensitive)
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(&name.to_lowercase()).map(String::as_str)
    }

    /// Get all fields
    #[must_use]
    pub const fn fields(&self) -> &FieldMap {
        &self.fields
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}{{{}}}", self.entry_type, self.key)
    }
}
