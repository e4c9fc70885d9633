//! Structural-byte scanning over entry bodies using memchr

/// Find the next byte relevant to field-boundary scanning (`{`, `}`, `"`,
/// `=`, `\`) at or after `start`.
///
/// Two memchr passes, returning whichever hit comes first.
pub(crate) fn find_field_byte(haystack: &[u8], start: usize) -> Option<(usize, u8)> {
    if start >= haystack.len() {
        return None;
    }

    let search = &haystack[start..];
    let braces = memchr::memchr3(b'{', b'}', b'\\', search).map(|pos| (start + pos, search[pos]));
    let rest = memchr::memchr2(b'"', b'=', search).map(|pos| (start + pos, search[pos]));

    earliest(braces, rest)
}

/// Find the next byte relevant to top-level comma splitting (`{`, `}`, `"`,
/// `,`, `\`) at or after `start`.
pub(crate) fn find_segment_byte(haystack: &[u8], start: usize) -> Option<(usize, u8)> {
    if start >= haystack.len() {
        return None;
    }

    let search = &haystack[start..];
    let braces = memchr::memchr3(b'{', b'}', b'\\', search).map(|pos| (start + pos, search[pos]));
    let rest = memchr::memchr2(b'"', b',', search).map(|pos| (start + pos, search[pos]));

    earliest(braces, rest)
}

fn earliest(a: Option<(usize, u8)>, b: Option<(usize, u8)>) -> Option<(usize, u8)> {
    match (a, b) {
        (Some((pos_a, byte_a)), Some((pos_b, byte_b))) => {
            if pos_a <= pos_b {
                Some((pos_a, byte_a))
            } else {
                Some((pos_b, byte_b))
            }
        }
        (Some(hit), None) | (None, Some(hit)) => Some(hit),
        (None, None) => None,
    }
}
