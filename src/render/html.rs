//! Markup composer: tokenized document to self-contained styled HTML.

use std::fmt::Write;

use crate::model::{Category, Document, Line, Theme, Token};

use super::StyledDocument;

/// Compose a document into one self-contained styled HTML string.
///
/// Every style is inline or in the embedded head block; there is no
/// external stylesheet dependency. Each logical line renders as exactly
/// one unbroken visual row (`white-space: nowrap`) so tokens never
/// reflow across the crop boundary.
pub fn compose(doc: &Document) -> StyledDocument {
    let theme = &doc.theme;
    let mut html = String::with_capacity(1024 + doc.line_count() * 128);

    let _ = write!(
        html,
        "<html><head><style>\n\
         body {{ \
         background-color: {bg}; \
         color: {text}; \
         font-family: 'Courier New', monospace; \
         font-size: {font_size}; \
         padding: 20px; \
         line-height: 1.5; \
         display: inline-block; \
         margin: 0; \
         }}\n\
         .line-num {{ \
         color: {line_num}; \
         margin-right: 15px; \
         display: inline-block; \
         width: 35px; \
         text-align: right; \
         border-right: 1px solid {line_num}; \
         padding-right: 10px; \
         user-select: none; \
         }}\n\
         div {{ white-space: nowrap; }}\n\
         </style></head><body>",
        bg = theme.bg,
        text = theme.text,
        font_size = theme.font_size,
        line_num = theme.line_num,
    );

    for (number, line) in doc.numbered_lines() {
        let _ = write!(
            html,
            "<div><span class=\"line-num\">{}</span>{}</div>",
            number,
            compose_line(line, theme)
        );
    }

    html.push_str("</body></html>");
    StyledDocument::new(html)
}

/// Render one line's tokens, rejoined with the original single-space
/// delimiter.
fn compose_line(line: &Line, theme: &Theme) -> String {
    line.tokens
        .iter()
        .map(|token| compose_token(token, theme))
        .collect::<Vec<_>>()
        .join(" ")
}

fn compose_token(token: &Token, theme: &Theme) -> String {
    let text = escape(&token.text);
    match token.category {
        Category::Blank => "&nbsp;".to_string(),
        Category::Keyword => format!(
            "<span style=\"color:{}; font-weight:bold;\">{}</span>",
            theme.keywords, text
        ),
        Category::Operator => format!("<span style=\"color:{};\">{}</span>", theme.operators, text),
        Category::Number => format!("<span style=\"color:{};\">{}</span>", theme.numbers, text),
        Category::Other => format!("<span style=\"color:{};\">{}</span>", theme.other, text),
    }
}

/// Escape markup-significant characters; non-breaking spaces from tab
/// expansion become `&nbsp;` entities.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            _ => out.push(c),
        }
    }
    out
}
