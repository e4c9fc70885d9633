//! Entry-type extraction from normalized text

use crate::error::{Error, Result};

/// Extract the entry type token from normalized entry text.
///
/// The text before the first opening brace (or the whole text when no brace
/// exists) is the header; it must start with `@`. The token is returned with
/// the `@` stripped and whitespace trimmed, case preserved as written —
/// callers needing case-insensitive comparison normalize separately.
pub fn parse_entry_type(normalized: &str) -> Result<&str> {
    let header = match memchr::memchr(b'{', normalized.as_bytes()) {
        Some(at) => &normalized[..at],
        None => normalized,
    };
    let header = header.trim();
    if header.is_empty() {
        return Err(Error::EmptyInput);
    }
    header.strip_prefix('@').map(str::trim).ok_or_else(|| {
        Error::MalformedHeader(format!("expected '@' before entry type: {header}"))
    })
}
