//! Token-level types: display categories and categorized words.

use serde::{Deserialize, Serialize};

/// Characters stripped from both ends of a word before the keyword check.
pub const TRIM_PUNCTUATION: &[char] = &['(', ')', ':', ',', '[', ']'];

/// Characters whose presence anywhere in a word marks it as an operator.
pub const OPERATOR_CHARS: &[char] = &[
    '+', '-', '=', '*', '/', '%', '(', ')', '[', ']', ':', ',',
];

/// Highlight category assigned to a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// A reserved word of the source language.
    Keyword,
    /// A word containing at least one operator character.
    Operator,
    /// A word consisting entirely of decimal digits.
    Number,
    /// Anything else (identifiers, literals).
    Other,
    /// An empty word between consecutive spaces; renders as a single
    /// non-breaking space placeholder.
    Blank,
}

impl Category {
    /// Classify a single word against the active keyword set.
    ///
    /// Pure and deterministic: the result depends only on `word` and
    /// `keywords`. Precedence is strict: Keyword, then Operator, then
    /// Number, then Other.
    ///
    /// The keyword check uses the punctuation-trimmed form so `if:`
    /// still matches `if`. The operator check deliberately uses the
    /// untrimmed word, so a call like `foo(x)` classifies as Operator.
    /// That quirk is part of the highlighter's contract; keep it.
    pub fn classify(word: &str, keywords: &[String]) -> Self {
        if word.is_empty() {
            return Category::Blank;
        }
        let trimmed = word.trim_matches(TRIM_PUNCTUATION);
        if keywords.iter().any(|k| k == trimmed) {
            Category::Keyword
        } else if word.contains(OPERATOR_CHARS) {
            Category::Operator
        } else if word.chars().all(|c| c.is_ascii_digit()) {
            Category::Number
        } else {
            Category::Other
        }
    }
}

/// Smallest unit of display text with an assigned highlight category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The original, untrimmed word text.
    pub text: String,

    /// The resolved highlight category.
    pub category: Category,
}

impl Token {
    /// Create a token with the given text and category.
    pub fn new(text: impl Into<String>, category: Category) -> Self {
        Self {
            text: text.into(),
            category,
        }
    }

    /// Create a blank placeholder token.
    pub fn blank() -> Self {
        Self::new("", Category::Blank)
    }
}

/// Ordered sequence of tokens, left-to-right as they appear in source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    /// Tokens in source order.
    pub tokens: Vec<Token>,
}

impl Line {
    /// Create a line from tokens.
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    /// Number of tokens on the line.
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    /// Reconstruct the display text by rejoining token texts with the
    /// original single-space delimiter.
    pub fn display_text(&self) -> String {
        self.tokens
            .iter()
            .map(|t| t.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kw(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_classify_keyword_trimmed() {
        let keywords = kw(&["if", "def"]);
        assert_eq!(Category::classify("if:", &keywords), Category::Keyword);
        assert_eq!(Category::classify("def", &keywords), Category::Keyword);
    }

    #[test]
    fn test_classify_operator_untrimmed() {
        let keywords = kw(&["if"]);
        assert_eq!(Category::classify("foo(x)", &keywords), Category::Operator);
        assert_eq!(Category::classify("=", &keywords), Category::Operator);
        assert_eq!(Category::classify("foo", &keywords), Category::Other);
    }

    #[test]
    fn test_classify_number() {
        let keywords = kw(&[]);
        assert_eq!(Category::classify("42", &keywords), Category::Number);
        // Digits mixed with letters are not a Number.
        assert_eq!(Category::classify("4x2", &keywords), Category::Other);
    }

    #[test]
    fn test_classify_blank() {
        assert_eq!(Category::classify("", &[]), Category::Blank);
    }

    #[test]
    fn test_keyword_beats_operator() {
        // `if:` contains an operator character but the trimmed form is
        // a keyword, and the keyword check comes first.
        let keywords = kw(&["if"]);
        assert_eq!(Category::classify("if:", &keywords), Category::Keyword);
    }

    #[test]
    fn test_line_display_text() {
        let line = Line::new(vec![
            Token::new("x", Category::Other),
            Token::new("=", Category::Operator),
            Token::new("42", Category::Number),
        ]);
        assert_eq!(line.display_text(), "x = 42");
        assert_eq!(line.token_count(), 3);
    }
}
