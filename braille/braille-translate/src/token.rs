//! Render tokens produced alongside the flat glyph string.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One render unit of a translation.
///
/// Tokens record exactly what each translation step appended to the output
/// string, one entry per glyph. Multi-glyph productions contribute one token
/// per glyph: a capitalized letter yields `Cell(CAPITAL_SIGN)` followed by
/// `Cell(letter)`. This lets a presentation layer style glyphs individually
/// without re-deriving structure from the flat string.
///
/// Concatenating the rendered tokens reproduces the `braille` string
/// exactly.
///
/// # Example
///
/// ```
/// use braille_translate::{translate, Token};
///
/// let result = translate("A");
/// assert_eq!(result.tokens.len(), 2); // indicator + cell
/// assert!(matches!(result.tokens[0], Token::Cell(_)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Token {
    /// One Braille Patterns glyph (U+2800–U+28FF), indicators included.
    Cell(char),
    /// A single space, passed through verbatim.
    Space,
    /// A tab, expanded to two spaces in the output string.
    Tab,
    /// A line break (CR, LF, and CRLF all collapse to this).
    Newline,
}

impl Token {
    /// Append this token's rendered form to a string.
    pub fn render_into(self, out: &mut String) {
        match self {
            Self::Cell(glyph) => out.push(glyph),
            Self::Space => out.push(' '),
            Self::Tab => out.push_str("  "),
            Self::Newline => out.push('\n'),
        }
    }

    /// Whether this token is whitespace rather than a Braille cell.
    #[must_use]
    pub const fn is_whitespace(self) -> bool {
        !matches!(self, Self::Cell(_))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cell(glyph) => write!(f, "{glyph}"),
            Self::Space => f.write_str(" "),
            Self::Tab => f.write_str("  "),
            Self::Newline => f.write_str("\n"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_matches_display() {
        for token in [Token::Cell('\u{2801}'), Token::Space, Token::Tab, Token::Newline] {
            let mut rendered = String::new();
            token.render_into(&mut rendered);
            assert_eq!(rendered, token.to_string());
        }
    }

    #[test]
    fn tab_renders_two_spaces() {
        assert_eq!(Token::Tab.to_string(), "  ");
    }

    #[test]
    fn whitespace_classification() {
        assert!(Token::Space.is_whitespace());
        assert!(Token::Tab.is_whitespace());
        assert!(Token::Newline.is_whitespace());
        assert!(!Token::Cell('\u{2801}').is_whitespace());
    }
}
