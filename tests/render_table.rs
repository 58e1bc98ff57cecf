use tabula::grid::GridRow;
use tabula::{render_table, Border, Justify, StyleOptions, TabulaError};

const BORDERS: [&str; 3] = ["ascii", "line", "double_line"];

fn sample_rows() -> Vec<Vec<&'static str>> {
    vec![
        vec!["AAAA", "BBBB", "CCCC\nCC"],
        vec!["a", "", "c"],
        vec!["AAAA", "BBBB"],
        vec!["\n", "x"],
    ]
}

fn expected_count(table: &tabula::RenderedTable) -> usize {
    let grid = table.grid();
    let style = table.style();
    let bordered = style.is_bordered();
    let rules = if bordered { 2 } else { 0 };
    let header = grid.header().map_or(0, |h| h.height() + 1);
    let body: usize = grid.body().iter().map(GridRow::height).sum();
    let separators = if bordered && style.separate_rows() {
        grid.body().len() - 1
    } else {
        0
    };
    rules + header + body + separators
}

#[test]
fn test_no_header_no_border() {
    let rows = vec![vec!["AAAA", "BBBB", "CCCC"]; 3];
    let table = render_table(rows, None, &StyleOptions::default()).unwrap();
    assert_eq!(table.to_lines(), vec!["AAAA  BBBB  CCCC "; 3]);
}

#[test]
fn test_ascii_with_header() {
    let rows = vec![vec!["AAAA", "BBBB", "CCCC"]; 3];
    let options = StyleOptions::default().with_border("ascii");
    let table = render_table(rows, Some(vec!["A", "B", "C"]), &options).unwrap();
    let lines = table.to_lines();
    let rule = "+------+------+------+";
    assert_eq!(lines.len(), 7);
    assert_eq!(lines[0], rule);
    assert_eq!(lines[1], "|  A   |  B   |  C   |");
    assert_eq!(lines[2], rule);
    for line in &lines[3..6] {
        assert_eq!(line, "| AAAA | BBBB | CCCC |");
    }
    assert_eq!(lines[6], rule);
}

#[test]
fn test_ragged_row_renders_padded_column() {
    let rows = vec![vec!["AAAA", "BBBB", "CCCC"], vec!["AAAA", "BBBB"]];
    let options = StyleOptions::default().with_border("line");
    let lines = render_table(rows, None, &options).unwrap().to_lines();
    assert_eq!(
        lines,
        vec![
            "┌──────┬──────┬──────┐",
            "│ AAAA │ BBBB │ CCCC │",
            "│ AAAA │ BBBB │      │",
            "└──────┴──────┴──────┘",
        ]
    );
}

#[test]
fn test_multiline_cell_spans_lines() {
    let rows = vec![
        vec!["AAAA", "BBBB", "CCCC"],
        vec!["AAAA", "BBBB", "CCCC\nCC"],
        vec!["AAAA", "BBBB", "CCCC"],
    ];
    let lines = render_table(rows, None, &StyleOptions::default())
        .unwrap()
        .to_lines();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[1], "AAAA  BBBB  CCCC ");
    assert_eq!(lines[2], "            CC   ");
}

#[test]
fn test_unknown_border_fails_before_output() {
    let options = StyleOptions::default().with_border(":bogus");
    let err = render_table(vec![vec!["a"]], None, &options).unwrap_err();
    assert!(err.is_config());
    assert_eq!(err.to_string(), "Unknown border style: :bogus");
}

#[test]
fn test_line_count_property() {
    for border in ["none", "ascii", "line", "double_line"] {
        for separate in [false, true] {
            for header in [None, Some(vec!["h1", "h\n2"])] {
                let options = StyleOptions::default()
                    .with_border(border)
                    .with_separate_rows(separate);
                let table = render_table(sample_rows(), header, &options).unwrap();
                assert_eq!(
                    table.to_lines().len(),
                    expected_count(&table),
                    "border={border} separate={separate}"
                );
            }
        }
    }
}

#[test]
fn test_bordered_lines_have_equal_length() {
    let mut borders: Vec<Border> = BORDERS.iter().map(|b| Border::from(*b)).collect();
    borders.push(Border::custom("none", [("vertical", "|")]));
    borders.push(Border::custom("line", [("mid_mid", "")]));
    borders.push(Border::custom("double_line", [("left", ""), ("top_right", "")]));
    borders.push(Border::custom("ascii", [("horizontal", "")]));

    for border in borders {
        for padding in [0, 1, 3] {
            let options = StyleOptions::default()
                .with_border(border.clone())
                .with_padding(padding)
                .with_separate_rows(true)
                .with_justify(Justify::Center);
            let table =
                render_table(sample_rows(), Some(vec!["head", "x"]), &options).unwrap();
            let lengths: Vec<usize> = table.lines().map(|l| l.chars().count()).collect();
            assert!(
                lengths.windows(2).all(|w| w[0] == w[1]),
                "border={border:?} padding={padding}: {lengths:?}"
            );
        }
    }
}

#[test]
fn test_rendering_is_idempotent() {
    let options = StyleOptions::default()
        .with_border(Border::custom("line", [("horizontal", "~")]))
        .with_separate_rows(true);
    let first = render_table(sample_rows(), Some(vec!["a", "b", "c"]), &options)
        .unwrap()
        .to_string();
    let second = render_table(sample_rows(), Some(vec!["a", "b", "c"]), &options)
        .unwrap()
        .to_string();
    assert_eq!(first, second);
}

#[test]
fn test_left_justify_round_trip() {
    let values = ["x", "longer", "mid"];
    let rows: Vec<Vec<&str>> = values.iter().map(|v| vec![*v]).collect();
    let options = StyleOptions::default().with_border("ascii");
    let lines = render_table(rows, None, &options).unwrap().to_lines();
    for (line, value) in lines[1..4].iter().zip(values) {
        let cell = line.trim_start_matches("| ").trim_end_matches('|');
        assert_eq!(cell.trim_end(), value);
    }
}

#[test]
fn test_right_justify_round_trip() {
    let values = ["x", "longer", "mid"];
    let rows: Vec<Vec<&str>> = values.iter().map(|v| vec![*v]).collect();
    let options = StyleOptions::default()
        .with_border("ascii")
        .with_justify(Justify::Right);
    let lines = render_table(rows, None, &options).unwrap().to_lines();
    for (line, value) in lines[1..4].iter().zip(values) {
        let cell = line.trim_start_matches('|').trim_end_matches(" |");
        assert_eq!(cell.trim_start(), value);
    }
}

#[test]
fn test_empty_table() {
    let empty: Vec<Vec<&str>> = Vec::new();
    let none = render_table(empty.clone(), None, &StyleOptions::default()).unwrap();
    assert!(none.to_lines().is_empty());

    let ascii = render_table(empty, None, &StyleOptions::default().with_border("ascii")).unwrap();
    assert_eq!(ascii.to_lines().len(), 2);
}

#[test]
fn test_mixed_value_types() {
    let rows: Vec<Vec<tabula::CellValue>> = vec![
        vec![1.into(), None::<&str>.into(), true.into()],
        vec![serde_json::Value::Null.into(), 2.5.into(), 'z'.into()],
    ];
    let lines = render_table(rows, None, &StyleOptions::default())
        .unwrap()
        .to_lines();
    assert_eq!(lines, vec!["1       true ", "   2.5  z    "]);
}

#[test]
fn test_custom_glyph_errors() {
    let options = StyleOptions::default().with_border(Border::custom("ascii", [("edge", "|")]));
    assert!(matches!(
        render_table(vec![vec!["a"]], None, &options),
        Err(TabulaError::UnknownGlyph(_))
    ));
}
