//! Word-level tokenizer.
//!
//! Splits each source line into categorized display tokens. This is a
//! best-effort heuristic highlighter, not a lexer: string literals,
//! comments, and multi-character operators get no special treatment.

use crate::model::{Category, Document, Line, Theme, Token};

use super::HighlightOptions;

/// Fixed expansion for one tab character: two non-breaking-space units
/// with ordinary-space separators, so the subsequent space split turns
/// each unit into its own token.
pub const TAB_EXPANSION: &str = "\u{a0} \u{a0} ";

/// Tokenize one line of source text.
///
/// Every character of the line (after tab expansion and trailing
/// newline removal) is covered by exactly one token, in original order.
/// Empty words between consecutive spaces become `Blank` tokens.
pub fn tokenize_line(line: &str, options: &HighlightOptions) -> Line {
    let expanded = line.replace('\t', TAB_EXPANSION);
    let stripped = expanded
        .trim_end_matches('\n')
        .trim_end_matches('\r');

    let tokens = stripped
        .split(' ')
        .map(|word| {
            if word.is_empty() {
                Token::blank()
            } else {
                Token::new(word, Category::classify(word, &options.keywords))
            }
        })
        .collect();

    Line::new(tokens)
}

/// Tokenize a full source listing into a document.
///
/// Lines keep source-file order; numbering is 1-based by position.
pub fn tokenize_source(source: &str, theme: Theme, options: &HighlightOptions) -> Document {
    let lines = source
        .lines()
        .map(|line| tokenize_line(line, options))
        .collect();
    Document::with_lines(theme, lines)
}
