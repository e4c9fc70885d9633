//! Citation-key extraction
//!
//! The key may sit anywhere among the comma-separated body segments, not only
//! right after the opening brace. The body is split on top-level commas and
//! the first segment that is a single bare token is the key; `name=value`
//! segments never qualify.

use super::lexer::{self, Nesting};
use super::{delimiter, entry_body};
use crate::error::{Error, Result};

/// Extract the citation key from normalized entry text.
///
/// Fails with [`Error::KeyNotFound`] when no body segment consists of a
/// single bare token.
pub fn parse_key(normalized: &str) -> Result<&str> {
    let body = entry_body(normalized)?;
    top_level_segments(body)
        .into_iter()
        .find_map(bare_token)
        .ok_or(Error::KeyNotFound)
}

/// Split the body on commas at nesting depth zero. Commas inside braced or
/// quoted values never split.
fn top_level_segments(body: &str) -> Vec<&str> {
    let bytes = body.as_bytes();
    let mut nesting = Nesting::default();
    let mut segments = Vec::new();
    let mut segment_start = 0;
    let mut pos = 0;
    while let Some((at, byte)) = delimiter::find_segment_byte(bytes, pos) {
        if byte == b'\\' {
            // Skip escaped character
            pos = at + 2;
            continue;
        }
        if byte == b',' && nesting.at_top_level() {
            segments.push(&body[segment_start..at]);
            segment_start = at + 1;
        }
        nesting.step(byte);
        pos = at + 1;
    }
    segments.push(&body[segment_start..]);
    segments
}

/// Classify a segment: `Some(token)` when it is exactly one bare key token.
fn bare_token(segment: &str) -> Option<&str> {
    let mut input = segment.trim();
    let token = lexer::key_token(&mut input).ok()?;
    input.is_empty().then_some(token)
}
