//! # Line Renderer
//!
//! Combines a [`Grid`] and a resolved [`Style`] into the ordered text lines of a
//! table. Nothing is rendered up front: [`RenderedTable::lines`] hands out a fresh
//! iterator on every call, and each line is assembled only when it is pulled.
//!
//! ## Emission Order
//!
//! ```text
//! +------+------+      top rule           (bordered only)
//! |  A   |  B   |      header slots       (header only)
//! +------+------+      header separator   (blank line when borderless)
//! | AAAA | BBBB |      body slots
//! +------+------+      row separator      (bordered + separate_rows, between rows)
//! | CC   | DDDD |
//! +------+------+      bottom rule        (bordered only)
//! ```
//!
//! Bordered cells are `padding` spaces, the justified text, and `padding` spaces again,
//! joined by the vertical glyph between the left and right edge glyphs.
//!
//! Borderless tables have no edges: each cell is its justified text followed by
//! `padding` spaces, and columns are joined by a single space. With the default
//! padding this leaves a two-space gap between columns.

use crate::grid::{display_width, Grid, GridRow};
use crate::style::{Glyphs, Justify, Style};
use std::fmt;
use std::iter::FusedIterator;

impl Justify {
    /// Pads `text` out to `width` columns. Never truncates; for `Center` an odd
    /// leftover space goes on the right.
    pub fn apply(self, text: &str, width: usize) -> String {
        let gap = width.saturating_sub(display_width(text));
        let (left, right) = match self {
            Justify::Left => (0, gap),
            Justify::Right => (gap, 0),
            Justify::Center => (gap / 2, gap - gap / 2),
        };
        format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
    }
}

/// A table ready to be rendered line by line.
#[derive(Debug, Clone)]
pub struct RenderedTable {
    grid: Grid,
    style: Style,
    frame: Frame,
}

/// Glyphs for each structural position (left edge, junction, right edge) of every
/// kind of line. A position drawn on any line is drawn on all of them, falling back
/// to the fill (rules) or a space (rows) where the glyph itself is empty, so every
/// bordered line has the same width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Frame {
    top: [Option<char>; 3],
    mid: [Option<char>; 3],
    bottom: [Option<char>; 3],
    row: [Option<char>; 3],
    fill: char,
}

impl Frame {
    fn new(glyphs: &Glyphs) -> Self {
        let fill = glyphs.horizontal.unwrap_or(' ');
        let mut frame = Self {
            top: [glyphs.top_left, glyphs.top_mid, glyphs.top_right],
            mid: [glyphs.mid_left, glyphs.mid_mid, glyphs.mid_right],
            bottom: [glyphs.bottom_left, glyphs.bottom_mid, glyphs.bottom_right],
            row: [glyphs.left, glyphs.vertical, glyphs.right],
            fill,
        };
        for position in 0..3 {
            let drawn = [frame.top, frame.mid, frame.bottom, frame.row]
                .iter()
                .any(|line| line[position].is_some());
            if drawn {
                for rule in [&mut frame.top, &mut frame.mid, &mut frame.bottom] {
                    rule[position].get_or_insert(fill);
                }
                frame.row[position].get_or_insert(' ');
            }
        }
        frame
    }
}

impl RenderedTable {
    pub fn new(grid: Grid, style: Style) -> Self {
        let frame = Frame::new(style.glyphs());
        Self { grid, style, frame }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Starts a new pass over the table's lines.
    pub fn lines(&self) -> Lines<'_> {
        Lines {
            table: self,
            phase: Phase::Top,
        }
    }

    /// Number of lines a full pass yields.
    pub fn line_count(&self) -> usize {
        let bordered = self.style.is_bordered();
        let rules = if bordered { 2 } else { 0 };
        let header = self.grid.header().map_or(0, |h| h.height() + 1);
        let body: usize = self.grid.body().iter().map(GridRow::height).sum();
        let separators = if bordered && self.style.separate_rows() {
            self.grid.body().len().saturating_sub(1)
        } else {
            0
        };
        rules + header + body + separators
    }

    pub fn to_lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.line_count());
        lines.extend(self.lines());
        lines
    }

    fn rule(&self, [left, junction, right]: [Option<char>; 3]) -> String {
        let padding = self.style.padding();
        let mut line = String::new();
        line.extend(left);
        for (i, width) in self.grid.widths().iter().enumerate() {
            if i > 0 {
                line.extend(junction);
            }
            line.extend(std::iter::repeat(self.frame.fill).take(width + 2 * padding));
        }
        line.extend(right);
        line
    }

    fn row_line(&self, row: &GridRow, slot: usize, justify: Justify) -> String {
        let pad = " ".repeat(self.style.padding());
        let cells = self
            .grid
            .widths()
            .iter()
            .enumerate()
            .map(|(column, &width)| justify.apply(row.line(slot, column), width));

        if !self.style.is_bordered() {
            return cells
                .map(|cell| cell + &pad)
                .collect::<Vec<_>>()
                .join(" ");
        }

        let [left, vertical, right] = self.frame.row;
        let mut line = String::new();
        line.extend(left);
        for (i, cell) in cells.enumerate() {
            if i > 0 {
                line.extend(vertical);
            }
            line.push_str(&pad);
            line.push_str(&cell);
            line.push_str(&pad);
        }
        line.extend(right);
        line
    }
}

impl<'a> IntoIterator for &'a RenderedTable {
    type Item = String;
    type IntoIter = Lines<'a>;

    fn into_iter(self) -> Lines<'a> {
        self.lines()
    }
}

impl fmt::Display for RenderedTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(&line)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Top,
    Header { slot: usize },
    HeaderRule,
    Body { row: usize, slot: usize },
    RowRule { row: usize },
    Bottom,
    Done,
}

/// Lazily yields the lines of a [`RenderedTable`].
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    table: &'a RenderedTable,
    phase: Phase,
}

impl Iterator for Lines<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let table = self.table;
        let style = &table.style;
        let body = table.grid.body();

        loop {
            match self.phase {
                Phase::Top => {
                    self.phase = Phase::Header { slot: 0 };
                    if style.is_bordered() {
                        return Some(table.rule(table.frame.top));
                    }
                }
                Phase::Header { slot } => match table.grid.header() {
                    Some(header) if slot < header.height() => {
                        self.phase = Phase::Header { slot: slot + 1 };
                        return Some(table.row_line(header, slot, style.justify_header()));
                    }
                    Some(_) => self.phase = Phase::HeaderRule,
                    None => self.phase = Phase::Body { row: 0, slot: 0 },
                },
                Phase::HeaderRule => {
                    self.phase = Phase::Body { row: 0, slot: 0 };
                    return Some(if style.is_bordered() {
                        table.rule(table.frame.mid)
                    } else {
                        String::new()
                    });
                }
                Phase::Body { row, slot } => match body.get(row) {
                    Some(current) if slot < current.height() => {
                        self.phase = Phase::Body { row, slot: slot + 1 };
                        return Some(table.row_line(current, slot, style.justify()));
                    }
                    Some(_) => {
                        let separated = style.is_bordered() && style.separate_rows();
                        self.phase = if separated && row + 1 < body.len() {
                            Phase::RowRule { row }
                        } else {
                            Phase::Body {
                                row: row + 1,
                                slot: 0,
                            }
                        };
                    }
                    None => self.phase = Phase::Bottom,
                },
                Phase::RowRule { row } => {
                    self.phase = Phase::Body {
                        row: row + 1,
                        slot: 0,
                    };
                    return Some(table.rule(table.frame.mid));
                }
                Phase::Bottom => {
                    self.phase = Phase::Done;
                    if style.is_bordered() {
                        return Some(table.rule(table.frame.bottom));
                    }
                }
                Phase::Done => return None,
            }
        }
    }
}

impl FusedIterator for Lines<'_> {}
