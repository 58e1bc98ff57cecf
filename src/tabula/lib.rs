//! # Tabula Architecture
//!
//! Tabula turns rows of text into aligned, optionally bordered tables for command-line
//! output. Layout is a pure function of its input: nothing is cached between calls and
//! nothing is written anywhere until a caller hands the lines to a sink.
//!
//! ## Components
//!
//! ```text
//!   rows + header              StyleOptions
//!        │                          │
//!        ▼                          ▼
//! ┌──────────────┐          ┌───────────────┐
//! │ grid::Grid   │          │ style::Style  │   (only fallible step)
//! └──────────────┘          └───────────────┘
//!        │                          │
//!        └────────────┬─────────────┘
//!                     ▼
//!        ┌──────────────────────────┐
//!        │ render::RenderedTable    │──── lines() ───▶ printer::Printer
//!        └──────────────────────────┘
//! ```
//!
//! - [`grid`]: normalizes ragged, multi-line input and computes column widths and
//!   row heights once.
//! - [`style`]: resolves a border id or custom glyph mapping plus padding,
//!   justification and row separation into a concrete [`style::Style`].
//! - [`render`]: lazily produces every line of the table.
//! - [`printer`]: an indentation-aware writer, independent of tables.
//! - [`config`]: JSON-backed defaults for the `tabula` binary.
//! - [`error`]: error types.
//!
//! ## Example
//!
//! ```rust
//! use tabula::{render_table, StyleOptions};
//!
//! let rows = vec![vec!["AAAA", "BBBB", "CCCC"]];
//! let options = StyleOptions::default().with_border("ascii");
//! let table = render_table(rows, Some(vec!["A", "B", "C"]), &options).unwrap();
//! let lines = table.to_lines();
//! assert_eq!(lines[0], "+------+------+------+");
//! assert_eq!(lines[1], "|  A   |  B   |  C   |");
//! assert_eq!(lines[3], "| AAAA | BBBB | CCCC |");
//! ```
//!
//! ## Width
//!
//! Column widths count `char`s. Cells carrying ANSI color codes or wide glyphs are
//! measured by their raw length, so color should be applied to whole lines after
//! layout rather than to cell contents.

pub mod config;
pub mod error;
pub mod grid;
pub mod printer;
pub mod render;
pub mod style;

pub use error::{Result, TabulaError};
pub use grid::{CellValue, Grid};
pub use printer::Printer;
pub use render::{Lines, RenderedTable};
pub use style::{Border, BorderPreset, Justify, Style, StyleOptions};

/// Lays out `rows` (and an optional `header`) with `options`.
///
/// The style is resolved before the grid is built, so an invalid border or glyph
/// mapping fails here and no line is ever produced.
pub fn render_table<R, C, V>(
    rows: R,
    header: Option<C>,
    options: &StyleOptions,
) -> Result<RenderedTable>
where
    R: IntoIterator<Item = C>,
    C: IntoIterator<Item = V>,
    V: Into<CellValue>,
{
    let style = Style::resolve(options)?;
    let grid = Grid::build(rows, header);
    tracing::trace!(
        columns = grid.columns(),
        rows = grid.body().len(),
        header = grid.header().is_some(),
        "built table grid"
    );
    Ok(RenderedTable::new(grid, style))
}
