//! # Style Resolver
//!
//! Turns a border identifier (or a custom glyph mapping) plus layout options into a
//! fully specified [`Style`]. Resolution is the only fallible step of rendering: an
//! unknown border, glyph name or justification is reported here, before any line is
//! produced.
//!
//! ## Borders
//!
//! | id            | glyphs                         |
//! |---------------|--------------------------------|
//! | `none`        | no glyphs, columns spaced out  |
//! | `ascii`       | plus, minus and pipe           |
//! | `line`        | `┌ ┬ ┐ ├ ┼ ┤ └ ┴ ┘ │ ─`          |
//! | `double_line` | `╔ ╦ ╗ ╠ ╬ ╣ ╚ ╩ ╝ ║ ═`          |
//!
//! A custom mapping overrides any subset of glyphs of a base preset (`none` unless
//! `base` is given):
//!
//! ```rust
//! use tabula::style::{Border, Style, StyleOptions};
//!
//! let options = StyleOptions::default()
//!     .with_border(Border::custom("ascii", [("vertical", "!")]));
//! let style = Style::resolve(&options).unwrap();
//! assert_eq!(style.glyphs().vertical, Some('!'));
//! assert_eq!(style.glyphs().top_left, Some('+'));
//! ```

use crate::error::{Result, TabulaError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// How text is distributed within a column's width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Justify {
    #[default]
    Left,
    Right,
    Center,
}

impl FromStr for Justify {
    type Err = TabulaError;

    fn from_str(s: &str) -> Result<Self> {
        match normalize_id(s).as_str() {
            "left" => Ok(Justify::Left),
            "right" => Ok(Justify::Right),
            "center" => Ok(Justify::Center),
            _ => Err(TabulaError::UnknownJustify(s.to_string())),
        }
    }
}

impl fmt::Display for Justify {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Justify::Left => "left",
            Justify::Right => "right",
            Justify::Center => "center",
        };
        f.write_str(name)
    }
}

/// Names accepted in a custom glyph mapping.
pub const GLYPH_NAMES: [&str; 13] = [
    "top_left",
    "top_mid",
    "top_right",
    "mid_left",
    "mid_mid",
    "mid_right",
    "bottom_left",
    "bottom_mid",
    "bottom_right",
    "left",
    "vertical",
    "right",
    "horizontal",
];

/// A complete set of border glyphs. `None` means the glyph is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Glyphs {
    pub top_left: Option<char>,
    pub top_mid: Option<char>,
    pub top_right: Option<char>,
    pub mid_left: Option<char>,
    pub mid_mid: Option<char>,
    pub mid_right: Option<char>,
    pub bottom_left: Option<char>,
    pub bottom_mid: Option<char>,
    pub bottom_right: Option<char>,
    pub left: Option<char>,
    pub vertical: Option<char>,
    pub right: Option<char>,
    pub horizontal: Option<char>,
}

impl Glyphs {
    const fn uniform(corner: char, vertical: char, horizontal: char) -> Self {
        Self::boxed(
            [corner; 3],
            [corner; 3],
            [corner; 3],
            vertical,
            horizontal,
        )
    }

    const fn boxed(
        top: [char; 3],
        mid: [char; 3],
        bottom: [char; 3],
        vertical: char,
        horizontal: char,
    ) -> Self {
        Self {
            top_left: Some(top[0]),
            top_mid: Some(top[1]),
            top_right: Some(top[2]),
            mid_left: Some(mid[0]),
            mid_mid: Some(mid[1]),
            mid_right: Some(mid[2]),
            bottom_left: Some(bottom[0]),
            bottom_mid: Some(bottom[1]),
            bottom_right: Some(bottom[2]),
            left: Some(vertical),
            vertical: Some(vertical),
            right: Some(vertical),
            horizontal: Some(horizontal),
        }
    }

    fn slot(&mut self, name: &str) -> Option<&mut Option<char>> {
        let slot = match name {
            "top_left" => &mut self.top_left,
            "top_mid" => &mut self.top_mid,
            "top_right" => &mut self.top_right,
            "mid_left" => &mut self.mid_left,
            "mid_mid" => &mut self.mid_mid,
            "mid_right" => &mut self.mid_right,
            "bottom_left" => &mut self.bottom_left,
            "bottom_mid" => &mut self.bottom_mid,
            "bottom_right" => &mut self.bottom_right,
            "left" => &mut self.left,
            "vertical" => &mut self.vertical,
            "right" => &mut self.right,
            "horizontal" => &mut self.horizontal,
            _ => return None,
        };
        Some(slot)
    }

    /// Replaces the named glyph. An empty value clears it.
    pub fn set(&mut self, name: &str, value: &str) -> Result<()> {
        let slot = self
            .slot(name)
            .ok_or_else(|| TabulaError::UnknownGlyph(name.to_string()))?;
        let mut chars = value.chars();
        *slot = match (chars.next(), chars.next()) {
            (None, _) => None,
            (Some(c), None) => Some(c),
            _ => {
                return Err(TabulaError::InvalidGlyph {
                    name: name.to_string(),
                    value: value.to_string(),
                })
            }
        };
        Ok(())
    }
}

/// The built-in border skins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderPreset {
    #[default]
    None,
    Ascii,
    Line,
    DoubleLine,
}

const ASCII: Glyphs = Glyphs::uniform('+', '|', '-');

const LINE: Glyphs = Glyphs::boxed(
    ['┌', '┬', '┐'],
    ['├', '┼', '┤'],
    ['└', '┴', '┘'],
    '│',
    '─',
);

const DOUBLE_LINE: Glyphs = Glyphs::boxed(
    ['╔', '╦', '╗'],
    ['╠', '╬', '╣'],
    ['╚', '╩', '╝'],
    '║',
    '═',
);

impl BorderPreset {
    pub fn glyphs(self) -> Glyphs {
        match self {
            BorderPreset::None => Glyphs::default(),
            BorderPreset::Ascii => ASCII,
            BorderPreset::Line => LINE,
            BorderPreset::DoubleLine => DOUBLE_LINE,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            BorderPreset::None => "none",
            BorderPreset::Ascii => "ascii",
            BorderPreset::Line => "line",
            BorderPreset::DoubleLine => "double_line",
        }
    }
}

impl FromStr for BorderPreset {
    type Err = TabulaError;

    fn from_str(s: &str) -> Result<Self> {
        match normalize_id(s).as_str() {
            "none" => Ok(BorderPreset::None),
            "ascii" => Ok(BorderPreset::Ascii),
            "line" => Ok(BorderPreset::Line),
            "double_line" => Ok(BorderPreset::DoubleLine),
            _ => Err(TabulaError::UnknownBorder(s.to_string())),
        }
    }
}

impl fmt::Display for BorderPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts `:ascii`, `Double-Line` and the like.
fn normalize_id(s: &str) -> String {
    s.trim()
        .trim_start_matches(':')
        .to_ascii_lowercase()
        .replace('-', "_")
}

/// Glyph overrides layered over a base preset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlyphOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
    #[serde(flatten)]
    pub glyphs: BTreeMap<String, String>,
}

impl GlyphOverrides {
    fn resolve(&self) -> Result<Glyphs> {
        let base = match &self.base {
            Some(id) => id.parse()?,
            None => BorderPreset::None,
        };
        let mut glyphs = base.glyphs();
        // Rules drawn over an empty base still need a fill to keep their width.
        if base == BorderPreset::None {
            glyphs.horizontal = Some(' ');
        }
        for (name, value) in &self.glyphs {
            glyphs.set(name, value)?;
        }
        Ok(glyphs)
    }
}

/// Either a named preset or a custom glyph mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Border {
    Named(String),
    Custom(GlyphOverrides),
}

impl Border {
    /// A custom mapping over the preset `base`.
    pub fn custom<I, K, V>(base: &str, glyphs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Border::Custom(GlyphOverrides {
            base: Some(base.to_string()),
            glyphs: glyphs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        })
    }
}

impl Default for Border {
    fn default() -> Self {
        Border::Named(BorderPreset::None.name().to_string())
    }
}

impl From<BorderPreset> for Border {
    fn from(preset: BorderPreset) -> Self {
        Border::Named(preset.name().to_string())
    }
}

impl From<&str> for Border {
    fn from(id: &str) -> Self {
        Border::Named(id.to_string())
    }
}

fn default_padding() -> usize {
    1
}

fn default_justify_header() -> Justify {
    Justify::Center
}

/// Unresolved table layout options, as supplied by a caller or a config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleOptions {
    #[serde(default)]
    pub border: Border,

    /// Spaces around each cell. Bordered cells get `padding` on both sides of the
    /// text. Borderless cells get it on the right only and columns are joined by one
    /// space, so the gap between borderless columns is `padding + 1` (two spaces by
    /// default, one with `padding: 0`).
    #[serde(default = "default_padding")]
    pub padding: usize,

    #[serde(default)]
    pub justify: Justify,

    #[serde(default = "default_justify_header")]
    pub justify_header: Justify,

    #[serde(default)]
    pub separate_rows: bool,
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self {
            border: Border::default(),
            padding: default_padding(),
            justify: Justify::Left,
            justify_header: default_justify_header(),
            separate_rows: false,
        }
    }
}

impl StyleOptions {
    pub fn with_border(mut self, border: impl Into<Border>) -> Self {
        self.border = border.into();
        self
    }

    /// See [`StyleOptions::padding`] for how padding spaces borderless columns.
    pub fn with_padding(mut self, padding: usize) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_justify(mut self, justify: Justify) -> Self {
        self.justify = justify;
        self
    }

    pub fn with_justify_header(mut self, justify: Justify) -> Self {
        self.justify_header = justify;
        self
    }

    pub fn with_separate_rows(mut self, separate: bool) -> Self {
        self.separate_rows = separate;
        self
    }
}

/// A fully resolved table style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Style {
    glyphs: Glyphs,
    bordered: bool,
    padding: usize,
    justify: Justify,
    justify_header: Justify,
    separate_rows: bool,
}

impl Style {
    pub fn resolve(options: &StyleOptions) -> Result<Self> {
        let (glyphs, bordered) = match &options.border {
            Border::Named(id) => {
                let preset: BorderPreset = id.parse()?;
                tracing::debug!(border = %preset, "resolved border preset");
                (preset.glyphs(), preset != BorderPreset::None)
            }
            Border::Custom(overrides) => {
                let glyphs = overrides.resolve()?;
                tracing::debug!(
                    base = overrides.base.as_deref().unwrap_or("none"),
                    overrides = overrides.glyphs.len(),
                    "resolved custom border"
                );
                (glyphs, true)
            }
        };

        Ok(Self {
            glyphs,
            bordered,
            padding: options.padding,
            justify: options.justify,
            justify_header: options.justify_header,
            separate_rows: options.separate_rows,
        })
    }

    pub fn glyphs(&self) -> &Glyphs {
        &self.glyphs
    }

    /// True for every border except `none`. Borderless tables draw no rules.
    pub fn is_bordered(&self) -> bool {
        self.bordered
    }

    pub fn padding(&self) -> usize {
        self.padding
    }

    pub fn justify(&self) -> Justify {
        self.justify
    }

    pub fn justify_header(&self) -> Justify {
        self.justify_header
    }

    pub fn separate_rows(&self) -> bool {
        self.separate_rows
    }
}
