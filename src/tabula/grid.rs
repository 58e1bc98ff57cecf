//! # Grid Builder
//!
//! Normalizes raw header and body input into a rectangular grid. Every cell is
//! converted to its display string and split into lines up front, and the column
//! widths and row heights are computed once here so the line renderer never has to
//! rescan cell contents.
//!
//! Any input is accepted. Ragged rows are right-padded with empty cells, missing
//! values become empty strings, and a cell with no text still occupies one line.
//!
//! ## Width
//!
//! A line's width is its `char` count. Text carrying ANSI escape sequences or
//! double-width characters will therefore misalign; callers that color cells should
//! do so after layout.

use serde_json::Value;

/// The display form of a single raw table value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CellValue(String);

impl CellValue {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<&String> for CellValue {
    fn from(value: &String) -> Self {
        Self(value.clone())
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

impl From<Value> for CellValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::empty(),
            Value::String(s) => Self(s),
            other => Self(other.to_string()),
        }
    }
}

macro_rules! cell_value_from_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for CellValue {
                fn from(value: $ty) -> Self {
                    Self(value.to_string())
                }
            }
        )*
    };
}

cell_value_from_display!(
    char, bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

/// Splits a cell's text into display lines. Empty text yields one empty line.
pub fn split_lines(text: &str) -> Vec<String> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect()
}

/// Number of columns a line occupies.
pub fn display_width(line: &str) -> usize {
    line.chars().count()
}

/// One normalized row: exactly `Grid::columns()` cells, each pre-split into lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridRow {
    cells: Vec<Vec<String>>,
    height: usize,
}

impl GridRow {
    fn new(cells: Vec<Vec<String>>) -> Self {
        let height = cells.iter().map(Vec::len).max().unwrap_or(1).max(1);
        Self { cells, height }
    }

    /// Number of output lines the row occupies (its tallest cell).
    pub fn height(&self) -> usize {
        self.height
    }

    /// The lines of every cell, in column order.
    pub fn cells(&self) -> &[Vec<String>] {
        &self.cells
    }

    /// Line `slot` of the cell in `column`. Cells are top-aligned, so slots past a
    /// cell's last line are empty.
    pub fn line(&self, slot: usize, column: usize) -> &str {
        self.cells
            .get(column)
            .and_then(|lines| lines.get(slot))
            .map(String::as_str)
            .unwrap_or("")
    }
}

/// A rectangular table with derived column widths and row heights.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    header: Option<GridRow>,
    body: Vec<GridRow>,
    widths: Vec<usize>,
}

impl Grid {
    /// Builds a grid from body rows and an optional header row.
    pub fn build<R, C, V>(rows: R, header: Option<C>) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator<Item = V>,
        V: Into<CellValue>,
    {
        let mut header = header.map(split_row);
        let mut body: Vec<Vec<Vec<String>>> = rows.into_iter().map(split_row).collect();

        let columns = header
            .iter()
            .chain(body.iter())
            .map(Vec::len)
            .max()
            .unwrap_or(0);

        for row in header.iter_mut().chain(body.iter_mut()) {
            row.resize_with(columns, || vec![String::new()]);
        }

        let mut widths = vec![0; columns];
        for row in header.iter().chain(body.iter()) {
            for (width, cell) in widths.iter_mut().zip(row) {
                let longest = cell.iter().map(|l| display_width(l)).max().unwrap_or(0);
                *width = (*width).max(longest);
            }
        }

        Self {
            header: header.map(GridRow::new),
            body: body.into_iter().map(GridRow::new).collect(),
            widths,
        }
    }

    pub fn columns(&self) -> usize {
        self.widths.len()
    }

    /// Widest line per column, across header and body.
    pub fn widths(&self) -> &[usize] {
        &self.widths
    }

    pub fn header(&self) -> Option<&GridRow> {
        self.header.as_ref()
    }

    pub fn body(&self) -> &[GridRow] {
        &self.body
    }

    /// True when there is neither a header nor any body row.
    pub fn is_empty(&self) -> bool {
        self.header.is_none() && self.body.is_empty()
    }
}

fn split_row<C, V>(row: C) -> Vec<Vec<String>>
where
    C: IntoIterator<Item = V>,
    V: Into<CellValue>,
{
    row.into_iter()
        .map(|value| split_lines(value.into().as_str()))
        .collect()
}
