//! Normalization of raw entry text into a canonical single line

/// Normalize a raw entry string.
///
/// Strips unescaped `%` comments through the end of their physical line (an
/// escaped `\%` is preserved literally), deletes line breaks, carriage
/// returns and tabs outright, collapses any run of two or more whitespace
/// characters to a single space, and trims the result. Always returns a
/// string; an empty result is a signal consumed by the header parser, not an
/// error raised here.
///
/// The operation is idempotent: normalizing already-normalized text returns
/// it unchanged.
#[must_use]
pub fn normalize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut in_comment = false;
    let mut escaped = false;
    // Pending whitespace: the first char of the current run, and whether the
    // run reached two or more chars. A run collapses to one space; a lone
    // whitespace char is kept as written.
    let mut pending: Option<(char, bool)> = None;

    for ch in raw.trim().chars() {
        if in_comment {
            if matches!(ch, '\n' | '\r') {
                in_comment = false;
                escaped = false;
            }
            continue;
        }
        match ch {
            '%' if !escaped => in_comment = true,
            '\n' | '\r' | '\t' => escaped = false,
            _ if ch.is_whitespace() => {
                pending = match pending.take() {
                    None => Some((ch, false)),
                    Some((first, _)) => Some((first, true)),
                };
                escaped = false;
            }
            _ => {
                if let Some((first, run)) = pending.take() {
                    // Whitespace left dangling at the start by a stripped
                    // comment is dropped, like the outer trim.
                    if !out.is_empty() {
                        out.push(if run { ' ' } else { first });
                    }
                }
                out.push(ch);
                escaped = ch == '\\';
            }
        }
    }

    out
}
