//! Grade-1 Braille translation for TactileForge.
//!
//! This crate converts plain text into Braille Patterns glyphs:
//!
//! - [`translate`] - Full translation with render tokens and a skipped-
//!   character report
//! - [`to_braille`] - Glyph string only
//! - [`dot_mask`] - Decode a glyph back to its raised-dot bitmask
//!
//! # Layer 0 Crate
//!
//! No geometry, no I/O, no heavy dependencies. It can be used in:
//! - CLI tools
//! - Web applications (WASM)
//! - Servers
//! - Embedded displays
//!
//! # Translation Rules
//!
//! Grade-1 (uncontracted) Braille over ASCII: letters map to their cells,
//! an uppercase letter takes the capital indicator, a digit run takes one
//! number indicator and reuses the cells a–j, nine punctuation marks map to
//! fixed cells, tabs become two spaces, and CR/LF/CRLF each become one
//! newline. Everything else is skipped and reported, capped at eight
//! distinct characters.
//!
//! # Example
//!
//! ```
//! use braille_translate::{translate, to_braille};
//!
//! let result = translate("Call 911!");
//! assert_eq!(result.braille, to_braille("Call 911!"));
//! assert!(result.unsupported.is_empty());
//! ```
//!
//! Both entry points are pure functions: no shared state, deterministic
//! output, safe to call concurrently.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod cell;
mod tables;
mod token;
mod translate;

pub use cell::{
    dot_mask, dot_raised, raised_count, BRAILLE_BLOCK_END, BRAILLE_BLOCK_START, DOT_COUNT,
};
pub use tables::{digit_cell, letter_cell, punctuation_cell, CAPITAL_SIGN, NUMBER_SIGN};
pub use token::Token;
pub use translate::{to_braille, translate, Translation, MAX_UNSUPPORTED};
