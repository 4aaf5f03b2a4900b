//! Embedded keyword set.
//!
//! The highlighter ships a static copy of Python's reserved words
//! instead of sourcing them from a runtime; callers can swap in their
//! own set via [`HighlightOptions`](super::HighlightOptions).

/// Python's reserved words.
pub const PYTHON_KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class", "continue",
    "def", "del", "elif", "else", "except", "finally", "for", "from", "global", "if", "import",
    "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return", "try", "while",
    "with", "yield",
];

/// The default keyword set as owned strings.
pub fn python_keywords() -> Vec<String> {
    PYTHON_KEYWORDS.iter().map(|k| k.to_string()).collect()
}
