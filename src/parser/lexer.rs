//! Token recognition for normalized entry text

use super::PResult;
use winnow::prelude::*;
use winnow::token::take_while;

/// Parse a citation-key token (ASCII letters, digits, hyphen, colon,
/// underscore)
pub fn key_token<'a>(input: &mut &'a str) -> PResult<&'a str> {
    take_while(1.., |c: char| {
        c.is_ascii_alphanumeric() || matches!(c, '-' | ':' | '_')
    })
    .parse_next(input)
}

/// Brace-depth and quote-state tracker for scanning an entry body.
///
/// Braces always adjust the depth; a double quote toggles quote state only at
/// depth zero, so quotes inside braced values are plain content. "Top level"
/// means depth zero and outside quotes, which is where field boundaries,
/// segment commas, and the citation key live.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct Nesting {
    depth: u32,
    in_quote: bool,
}

impl Nesting {
    pub(crate) const fn at_top_level(self) -> bool {
        self.depth == 0 && !self.in_quote
    }

    pub(crate) fn step(&mut self, byte: u8) {
        match byte {
            b'{' => self.depth += 1,
            b'}' => self.depth = self.depth.saturating_sub(1),
            b'"' if self.depth == 0 => self.in_quote = !self.in_quote,
            _ => {}
        }
    }
}
