//! Plain column tables.

use unicode_width::UnicodeWidthStr;

use crate::theme::Painter;

const GAP: &str = "  ";

/// Renders a header row, a rule and the data rows.
///
/// Columns are as wide as their widest cell in display columns. A column
/// whose cells all parse as numbers is right-aligned. Short rows are padded
/// with empty cells.
#[must_use]
pub fn render_table(headers: &[String], rows: &[Vec<String>], painter: &Painter) -> String {
    let columns = rows
        .iter()
        .map(Vec::len)
        .chain(std::iter::once(headers.len()))
        .max()
        .unwrap_or(0);

    let widths: Vec<usize> = (0..columns)
        .map(|col| {
            rows.iter()
                .map(|row| cell(row, col).width())
                .chain(std::iter::once(cell(headers, col).width()))
                .max()
                .unwrap_or(0)
        })
        .collect();
    let numeric: Vec<bool> = (0..columns)
        .map(|col| {
            !rows.is_empty() && rows.iter().all(|row| cell(row, col).trim().parse::<f64>().is_ok())
        })
        .collect();

    let format_row = |row: &[String]| {
        let cells: Vec<String> = (0..columns)
            .map(|col| pad(cell(row, col), widths[col], numeric[col]))
            .collect();
        cells.join(GAP).trim_end().to_owned()
    };

    let theme = painter.theme();
    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(painter.strong(&format_row(headers), theme.text));
    let rule: Vec<String> = widths.iter().map(|&width| "─".repeat(width)).collect();
    lines.push(painter.fg(&rule.join(GAP), theme.border));
    if rows.is_empty() {
        lines.push(painter.muted("(no rows)"));
    }
    lines.extend(rows.iter().map(|row| format_row(row)));
    lines.join("\n")
}

/// The cell at `col`, or `""` past the end of a short row.
fn cell(row: &[String], col: usize) -> &str {
    row.get(col).map_or("", String::as_str)
}

fn pad(text: &str, width: usize, right_align: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(text.width()));
    if right_align {
        format!("{fill}{text}")
    } else {
        format!("{text}{fill}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|&cell| cell.to_owned()).collect()
    }

    #[test]
    fn pads_and_right_aligns_numbers() {
        let table = render_table(
            &strings(&["Title", "Revenue [$1M]"]),
            &[strings(&["Avatar", "2788"]), strings(&["Up", "735"])],
            &Painter::plain(),
        );
        insta::assert_snapshot!(table, @r"
        Title   Revenue [$1M]
        ──────  ─────────────
        Avatar           2788
        Up                735
        ");
    }

    #[test]
    fn wide_characters_count_double() {
        let table = render_table(
            &strings(&["Name", "N"]),
            &[strings(&["千と千尋", "1"]), strings(&["Up", "2"])],
            &Painter::plain(),
        );
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[2], "千と千尋  1");
        assert_eq!(lines[3], "Up        2");
    }

    #[test]
    fn empty_table_keeps_header() {
        let table = render_table(&strings(&["Title"]), &[], &Painter::plain());
        assert_eq!(table, "Title\n─────\n(no rows)");
    }

    #[test]
    fn cell_past_row_end_is_empty() {
        let row = strings(&["x"]);
        assert_eq!(cell(&row, 0), "x");
        assert_eq!(cell(&row, 1), "");
    }

    #[test]
    fn short_rows_are_padded() {
        let table = render_table(
            &strings(&["a", "b"]),
            &[strings(&["x"])],
            &Painter::plain(),
        );
        assert_eq!(table.lines().last(), Some("x"));
    }
}
