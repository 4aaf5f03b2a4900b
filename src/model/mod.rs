//! Data model for code-to-image conversion.
//!
//! This module defines the intermediate representation that bridges
//! tokenization and markup composition: a theme, categorized tokens,
//! and the tokenized document.

mod document;
mod theme;
mod token;

pub use document::Document;
pub use theme::{parse_hex_color, Theme, ThemeOverrides};
pub use token::{Category, Line, Token, OPERATOR_CHARS, TRIM_PUNCTUATION};
