//! Theme configuration: category colors plus font size.

use image::Rgb;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A resolved set of category colors plus a font size.
///
/// All fields are always present: overrides are merged onto the defaults
/// and can never remove a key. The struct is immutable for the duration
/// of a conversion run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    /// Page background color.
    pub bg: String,

    /// Default foreground text color.
    pub text: String,

    /// Color for keyword tokens (also rendered bold).
    pub keywords: String,

    /// Color for operator tokens.
    pub operators: String,

    /// Color for numeric tokens.
    pub numbers: String,

    /// Color for everything else (identifiers, literals).
    #[serde(rename = "else")]
    pub other: String,

    /// Color for the line-number gutter and its vertical rule.
    pub line_num: String,

    /// CSS font size (e.g. `"14px"`).
    pub font_size: String,
}

/// Partial theme used to customize the defaults.
///
/// Unknown keys are rejected at deserialization instead of being
/// silently dropped or passed through.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeOverrides {
    pub bg: Option<String>,
    pub text: Option<String>,
    pub keywords: Option<String>,
    pub operators: Option<String>,
    pub numbers: Option<String>,
    #[serde(rename = "else")]
    pub other: Option<String>,
    pub line_num: Option<String>,
    pub font_size: Option<String>,
}

impl Theme {
    /// The default dark theme.
    pub fn dark() -> Self {
        Self {
            bg: "#1e1e1e".to_string(),
            text: "#d4d4d4".to_string(),
            keywords: "#569cd6".to_string(),
            operators: "#d4d4d4".to_string(),
            numbers: "#b5cea8".to_string(),
            other: "#ce9178".to_string(),
            line_num: "#858585".to_string(),
            font_size: "14px".to_string(),
        }
    }

    /// Merge overrides onto the defaults. Fields left unset keep their
    /// default value.
    pub fn with_overrides(overrides: ThemeOverrides) -> Self {
        let mut theme = Self::dark();
        theme.apply(overrides);
        theme
    }

    /// Parse overrides from a JSON object and merge them onto the
    /// defaults. Unknown keys are an error.
    pub fn from_json(json: &str) -> Result<Self> {
        let overrides: ThemeOverrides = serde_json::from_str(json)?;
        Ok(Self::with_overrides(overrides))
    }

    /// Apply overrides to this theme in place.
    pub fn apply(&mut self, overrides: ThemeOverrides) {
        if let Some(bg) = overrides.bg {
            self.bg = bg;
        }
        if let Some(text) = overrides.text {
            self.text = text;
        }
        if let Some(keywords) = overrides.keywords {
            self.keywords = keywords;
        }
        if let Some(operators) = overrides.operators {
            self.operators = operators;
        }
        if let Some(numbers) = overrides.numbers {
            self.numbers = numbers;
        }
        if let Some(other) = overrides.other {
            self.other = other;
        }
        if let Some(line_num) = overrides.line_num {
            self.line_num = line_num;
        }
        if let Some(font_size) = overrides.font_size {
            self.font_size = font_size;
        }
    }

    /// Parse the background color into an RGB pixel for padding fills.
    pub fn background_rgb(&self) -> Result<Rgb<u8>> {
        parse_hex_color(&self.bg)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

/// Parse a `#rrggbb` hex color string.
pub fn parse_hex_color(value: &str) -> Result<Rgb<u8>> {
    let hex = value.strip_prefix('#').unwrap_or(value);
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(Error::InvalidColor(value.to_string()));
    }
    let r = u8::from_str_radix(&hex[0..2], 16).map_err(|_| Error::InvalidColor(value.into()))?;
    let g = u8::from_str_radix(&hex[2..4], 16).map_err(|_| Error::InvalidColor(value.into()))?;
    let b = u8::from_str_radix(&hex[4..6], 16).map_err(|_| Error::InvalidColor(value.into()))?;
    Ok(Rgb([r, g, b]))
}
