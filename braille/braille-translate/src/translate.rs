//! Text to Grade-1 Braille translation.

use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::tables::{digit_cell, letter_cell, punctuation_cell, CAPITAL_SIGN, NUMBER_SIGN};
use crate::token::Token;

/// Maximum number of distinct unsupported characters reported per call.
pub const MAX_UNSUPPORTED: usize = 8;

/// Result of translating one piece of text.
///
/// Constructed fresh on every [`translate`] call and never mutated after
/// return. `braille` is the flat glyph string (newline-delimited lines);
/// `tokens` records the same output one glyph at a time for per-glyph
/// rendering; `unsupported` lists the distinct input characters that were
/// skipped, in first-encountered order, capped at [`MAX_UNSUPPORTED`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Translation {
    /// Final glyph sequence.
    pub braille: String,

    /// Per-glyph render tokens; concatenating them reproduces `braille`.
    pub tokens: Vec<Token>,

    /// Distinct skipped characters, insertion-ordered, capped at 8.
    pub unsupported: Vec<char>,
}

impl Translation {
    /// Whether any input characters were skipped.
    #[must_use]
    pub fn has_unsupported(&self) -> bool {
        !self.unsupported.is_empty()
    }
}

/// Ordered set of skipped characters, capped at construction time.
///
/// The cap is enforced on insert rather than by truncating afterwards, so
/// memory stays bounded no matter how much unsupported input arrives.
#[derive(Debug, Default)]
struct UnsupportedSet {
    chars: Vec<char>,
}

impl UnsupportedSet {
    fn record(&mut self, ch: char) {
        if self.chars.len() < MAX_UNSUPPORTED && !self.chars.contains(&ch) {
            self.chars.push(ch);
        }
    }

    fn into_vec(self) -> Vec<char> {
        self.chars
    }
}

/// Scanner state: a digit run is open until the first non-digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Normal,
    InDigitRun,
}

/// Translate text to Grade-1 Braille.
///
/// Processes the input as a single left-to-right pass over Unicode scalar
/// values, with one glyph of lookahead for CRLF. Rules, first match wins:
///
/// 1. `"\r\n"`, `"\r"`, and `"\n"` each emit one newline.
/// 2. Tab emits two spaces.
/// 3. Space passes through.
/// 4. A digit run emits the number indicator once, then the letter cells
///    a–j standing for 1–9 and 0.
/// 5. An uppercase ASCII letter emits the capital indicator plus the
///    lowercase letter's cell.
/// 6. A lowercase ASCII letter emits its cell.
/// 7. Recognized punctuation emits its fixed cell.
/// 8. Anything else is skipped and recorded in the capped unsupported set.
///
/// The input is taken as given: no Unicode normalization and no case
/// folding beyond the ASCII ranges above. Translation always succeeds;
/// unsupported input degrades to partial output, never an error.
///
/// # Example
///
/// ```
/// use braille_translate::translate;
///
/// let result = translate("Abc 123");
/// assert_eq!(result.braille, "⠠⠁⠃⠉ ⠼⠁⠃⠉");
/// assert!(result.unsupported.is_empty());
/// ```
#[must_use]
pub fn translate(text: &str) -> Translation {
    let mut braille = String::with_capacity(text.len());
    let mut tokens = Vec::with_capacity(text.len());
    let mut unsupported = UnsupportedSet::default();
    let mut state = ScanState::Normal;

    fn emit(token: Token, braille: &mut String, tokens: &mut Vec<Token>) {
        token.render_into(braille);
        tokens.push(token);
    }

    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        // Line breaks first: a newline never combines with an indicator.
        if ch == '\r' || ch == '\n' {
            if ch == '\r' && chars.peek() == Some(&'\n') {
                chars.next();
            }
            state = ScanState::Normal;
            emit(Token::Newline, &mut braille, &mut tokens);
            continue;
        }

        match ch {
            '\t' => {
                state = ScanState::Normal;
                emit(Token::Tab, &mut braille, &mut tokens);
            }
            ' ' => {
                state = ScanState::Normal;
                emit(Token::Space, &mut braille, &mut tokens);
            }
            '0'..='9' => {
                if state != ScanState::InDigitRun {
                    state = ScanState::InDigitRun;
                    emit(Token::Cell(NUMBER_SIGN), &mut braille, &mut tokens);
                }
                if let Some(cell) = digit_cell(ch) {
                    emit(Token::Cell(cell), &mut braille, &mut tokens);
                }
            }
            'A'..='Z' => {
                state = ScanState::Normal;
                if let Some(cell) = letter_cell(ch.to_ascii_lowercase()) {
                    emit(Token::Cell(CAPITAL_SIGN), &mut braille, &mut tokens);
                    emit(Token::Cell(cell), &mut braille, &mut tokens);
                }
            }
            'a'..='z' => {
                state = ScanState::Normal;
                if let Some(cell) = letter_cell(ch) {
                    emit(Token::Cell(cell), &mut braille, &mut tokens);
                }
            }
            _ => {
                state = ScanState::Normal;
                if let Some(cell) = punctuation_cell(ch) {
                    emit(Token::Cell(cell), &mut braille, &mut tokens);
                } else {
                    unsupported.record(ch);
                }
            }
        }
    }

    let unsupported = unsupported.into_vec();
    if !unsupported.is_empty() {
        debug!(
            skipped = unsupported.len(),
            glyphs = tokens.len(),
            "translation skipped unsupported characters"
        );
    }

    Translation {
        braille,
        tokens,
        unsupported,
    }
}

/// Translate text and return only the glyph string.
///
/// # Example
///
/// ```
/// use braille_translate::to_braille;
///
/// assert_eq!(to_braille("hi"), "⠓⠊");
/// ```
#[must_use]
pub fn to_braille(text: &str) -> String {
    translate(text).braille
}
