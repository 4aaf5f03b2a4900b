//! Document-level types.

use serde::{Deserialize, Serialize};

use super::{Line, Theme};

/// A tokenized source listing plus the theme it renders with.
///
/// Lines are kept in source-file order; numbering is 1-based by
/// position. Built once from the full source file and consumed by the
/// markup composer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Tokenized lines in source order.
    pub lines: Vec<Line>,

    /// Theme used for rendering.
    pub theme: Theme,
}

impl Document {
    /// Create an empty document with the given theme.
    pub fn new(theme: Theme) -> Self {
        Self {
            lines: Vec::new(),
            theme,
        }
    }

    /// Create a document from tokenized lines.
    pub fn with_lines(theme: Theme, lines: Vec<Line>) -> Self {
        Self { lines, theme }
    }

    /// Append a line; it receives the next 1-based line number.
    pub fn add_line(&mut self, line: Line) {
        self.lines.push(line);
    }

    /// Number of lines in the document.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Check if the document has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Iterate lines with their 1-based line numbers.
    pub fn numbered_lines(&self) -> impl Iterator<Item = (usize, &Line)> {
        self.lines.iter().enumerate().map(|(i, l)| (i + 1, l))
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new(Theme::dark())
    }
}
