//! Single-entry BibTeX parsing
//!
//! The pipeline: raw text is normalized once, then the header parser, the
//! field extractor and the key extractor each run over the normalized text,
//! and their results merge into one [`Record`].
//!
//! Header failures are fatal. Field and key failures degrade gracefully: the
//! record keeps the entry type and everything extracted before the failure,
//! and the failure itself is reported in [`Parsed::issues`].

mod delimiter;
mod fields;
mod header;
mod key;
mod lexer;
mod normalize;

use crate::error::{Error, Result};
use crate::model::Record;
use log::debug;

pub use fields::parse_fields;
pub use header::parse_entry_type;
pub use key::parse_key;
pub use normalize::normalize;

/// Internal parser result type
pub(crate) type PResult<O> = winnow::PResult<O, winnow::error::ContextError>;

/// Outcome of parsing one raw entry
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed {
    /// The parsed record; always carries the entry type, may be partial
    pub record: Record,
    /// Recoverable failures hit while extracting fields and key
    pub issues: Vec<Error>,
}

/// Parser configuration with builder pattern
///
/// Construct once and reuse: parsing holds no other state, so a single
/// options value can serve any number of entries, concurrently if desired.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParseOptions {
    strict: bool,
}

impl ParseOptions {
    /// Create new parse options
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Treat recoverable field/key failures as hard errors
    #[must_use]
    pub const fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Parse a single raw entry string
    ///
    /// The input is expected to contain exactly one `@type{...}` unit, as
    /// produced by a file-level segmenter. Recoverable failures are logged at
    /// debug level and collected in [`Parsed::issues`]; with `strict` set,
    /// the first one is returned as an error instead.
    pub fn parse(&self, raw: &str) -> Result<Parsed> {
        let normalized_text = normalize(raw);
        let entry_type = parse_entry_type(&normalized_text)?.to_owned();

        let mut issues = Vec::new();
        let fields = match fields::scan_fields(&normalized_text) {
            Ok(fields) => fields,
            Err(failure) => {
                issues.push(failure.error);
                failure.fields
            }
        };
        let key = match parse_key(&normalized_text) {
            Ok(key) => key.to_owned(),
            Err(error) => {
                issues.push(error);
                String::new()
            }
        };

        if self.strict && !issues.is_empty() {
            return Err(issues.remove(0));
        }
        for issue in &issues {
            debug!("recoverable failure parsing '{entry_type}' entry: {issue}");
        }

        Ok(Parsed {
            record: Record {
                entry_type,
                key,
                raw_text: raw.to_owned(),
                normalized_text,
                fields,
            },
            issues,
        })
    }
}

/// Parse a single raw entry with default options
pub fn parse_entry(raw: &str) -> Result<Parsed> {
    ParseOptions::new().parse(raw)
}

/// Split normalized text into header and body, validating the body shell.
///
/// Everything after the first `{` is the body; it must be non-empty and end
/// with `}`, which is dropped. The field extractor and the key extractor
/// share this split and fail the same way.
pub(crate) fn entry_body(normalized: &str) -> Result<&str> {
    let Some(brace) = memchr::memchr(b'{', normalized.as_bytes()) else {
        return Err(Error::MalformedHeader(format!(
            "no '{{' in entry: {normalized}"
        )));
    };
    let body = normalized[brace + 1..].trim();
    if body.is_empty() {
        return Err(Error::EmptyInput);
    }
    body.strip_suffix('}').ok_or(Error::UnterminatedEntry)
}
