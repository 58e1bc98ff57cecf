//! Splits raw input text into table rows.
//!
//! One row per input line, cells separated by a single delimiter character. There is
//! no quoting; the two-character escape `\n` inside a cell becomes a line break.

pub fn parse_rows(input: &str, delimiter: char) -> Vec<Vec<String>> {
    input
        .lines()
        .map(|line| line.split(delimiter).map(unescape).collect())
        .collect()
}

fn unescape(cell: &str) -> String {
    cell.replace("\\n", "\n")
}

/// Splits off the first row as the header when requested.
pub fn split_header(
    mut rows: Vec<Vec<String>>,
    header: bool,
) -> (Vec<Vec<String>>, Option<Vec<String>>) {
    if header && !rows.is_empty() {
        let first = rows.remove(0);
        (rows, Some(first))
    } else {
        (rows, None)
    }
}
