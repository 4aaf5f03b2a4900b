//! Tokenizing/highlighting module.

mod keywords;
mod options;
mod tokenizer;

pub use keywords::{python_keywords, PYTHON_KEYWORDS};
pub use options::HighlightOptions;
pub use tokenizer::{tokenize_line, tokenize_source, TAB_EXPANSION};
