//! Field extraction from the body of a normalized entry

use super::lexer::Nesting;
use super::{delimiter, entry_body};
use crate::error::{Error, Result};
use crate::model::FieldMap;

/// A field boundary: `name = {` or `name = "` at nesting depth zero.
struct Boundary {
    name_start: usize,
    eq_pos: usize,
    value_start: usize,
}

/// Partial scan result kept alongside the failure that stopped it.
pub(crate) struct FieldScanFailure {
    pub(crate) fields: FieldMap,
    pub(crate) error: Error,
}

/// Extract all `name = value` fields from normalized entry text.
///
/// Field names are lower-cased; values lose exactly one layer of wrapping
/// delimiters, so inner braces and quotes survive verbatim. When the same
/// name occurs more than once the last occurrence wins.
pub fn parse_fields(normalized: &str) -> Result<FieldMap> {
    scan_fields(normalized).map_err(|failure| failure.error)
}

/// Like [`parse_fields`], but a failure keeps the fields parsed before it.
pub(crate) fn scan_fields(normalized: &str) -> std::result::Result<FieldMap, FieldScanFailure> {
    let body = match entry_body(normalized) {
        Ok(body) => body,
        Err(error) => {
            return Err(FieldScanFailure {
                fields: FieldMap::new(),
                error,
            })
        }
    };

    let boundaries = find_boundaries(body);
    let mut fields = FieldMap::new();
    for (i, boundary) in boundaries.iter().enumerate() {
        let name = body[boundary.name_start..boundary.eq_pos]
            .trim()
            .to_lowercase();
        if name.is_empty() {
            continue;
        }
        let value_end = boundaries
            .get(i + 1)
            .map_or(body.len(), |next| next.name_start);
        match unwrap_value(&body[boundary.value_start..value_end]) {
            Ok(value) => {
                fields.insert(name, value.to_owned());
            }
            Err(error) => return Err(FieldScanFailure { fields, error }),
        }
    }
    Ok(fields)
}

/// Locate every top-level field boundary in the body.
///
/// The scan tracks brace depth and quote state, so a `name = {` pattern
/// inside a nested value never starts a field.
fn find_boundaries(body: &str) -> Vec<Boundary> {
    let bytes = body.as_bytes();
    let mut nesting = Nesting::default();
    let mut boundaries = Vec::new();
    let mut pos = 0;
    while let Some((at, byte)) = delimiter::find_field_byte(bytes, pos) {
        if byte == b'\\' {
            // Skip escaped character
            pos = at + 2;
            continue;
        }
        if byte == b'=' && nesting.at_top_level() {
            if let Some(boundary) = boundary_at(bytes, at) {
                boundaries.push(boundary);
            }
        }
        nesting.step(byte);
        pos = at + 1;
    }
    boundaries
}

/// Check whether the `=` at `eq_pos` is preceded by a run of letters and
/// whitespace and followed by an opening quote or brace. A whitespace-only
/// run still forms a boundary; its name cleans to empty and the field is
/// skipped by the caller.
fn boundary_at(bytes: &[u8], eq_pos: usize) -> Option<Boundary> {
    let mut name_start = eq_pos;
    while name_start > 0 && is_name_byte(bytes[name_start - 1]) {
        name_start -= 1;
    }
    if name_start == eq_pos {
        return None;
    }

    let mut value_start = eq_pos + 1;
    while value_start < bytes.len() && bytes[value_start].is_ascii_whitespace() {
        value_start += 1;
    }
    match bytes.get(value_start) {
        Some(b'{' | b'"') => Some(Boundary {
            name_start,
            eq_pos,
            value_start,
        }),
        _ => None,
    }
}

const fn is_name_byte(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte.is_ascii_whitespace()
}

/// Strip one trailing comma, then exactly one layer of wrapping delimiters.
fn unwrap_value(raw: &str) -> Result<&str> {
    let mut value = raw.trim();
    if let Some(stripped) = value.strip_suffix(',') {
        value = stripped.trim_end();
    }
    let bytes = value.as_bytes();
    let wrapped = bytes.len() >= 2
        && matches!(
            (bytes[0], bytes[bytes.len() - 1]),
            (b'"', b'"') | (b'{', b'}')
        );
    if !wrapped {
        return Err(Error::InvalidFieldDelimiter(value.to_owned()));
    }
    Ok(&value[1..value.len() - 1])
}
