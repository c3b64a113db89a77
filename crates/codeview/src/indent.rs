//! Indentation reset for blocks of source lines.

/// Counts the leading whitespace characters of `line`.
///
/// The count is in characters, not bytes, and uses the same notion of
/// whitespace as [`str::trim_start`].
pub fn indentation_width(line: &str) -> usize {
    line.chars().count() - line.trim_start().chars().count()
}

/// Shifts every line left by the indentation of the first line.
///
/// The width is measured once, on `lines[0]`, and then removed from every
/// line. A line that is not longer than the width (typically a blank line
/// shorter than the indent) becomes a bare `"\n"`. The output always has the
/// same length as the input, and an empty input gives an empty output.
///
/// A line indented less than the first line still loses `width` characters,
/// so ragged input is cut rather than rejected.
///
/// # Example
///
/// ```rust
/// use codeview::reset_indentation;
///
/// let lines = ["    def f():\n", " \n", "    pass\n"];
/// assert_eq!(reset_indentation(&lines), ["def f():\n", "\n", "pass\n"]);
/// ```
pub fn reset_indentation<'a>(lines: &[&'a str]) -> Vec<&'a str> {
    let Some(&first) = lines.first() else {
        return Vec::new();
    };
    let width = indentation_width(first);

    lines
        .iter()
        .map(|&line| skip_chars(line, width).unwrap_or("\n"))
        .collect()
}

/// Returns `line` without its first `n` characters, or `None` when the line
/// has `n` characters or fewer.
pub(crate) fn skip_chars(line: &str, n: usize) -> Option<&str> {
    line.char_indices().nth(n).map(|(at, _)| &line[at..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_line_shorter_than_indent_becomes_newline() {
        let lines = ["    def f():\n", " \n", "    pass\n"];
        assert_eq!(reset_indentation(&lines), ["def f():\n", "\n", "pass\n"]);
    }

    #[test]
    fn empty_input_gives_empty_output() {
        let lines: [&str; 0] = [];
        assert!(reset_indentation(&lines).is_empty());
    }

    #[test]
    fn zero_width_leaves_lines_untouched() {
        let lines = ["fn main() {\n", "    body();\n", "}\n"];
        assert_eq!(reset_indentation(&lines), lines);
    }

    #[test]
    fn width_comes_from_first_line_only() {
        let lines = ["  a\n", "        b\n", "c\n"];
        // "c\n" has two characters, which is not more than the width of 2.
        assert_eq!(reset_indentation(&lines), ["a\n", "      b\n", "\n"]);
    }

    #[test]
    fn shallower_line_is_cut() {
        let lines = ["    a\n", "  xyz\n"];
        assert_eq!(reset_indentation(&lines), ["a\n", "z\n"]);
    }

    #[test]
    fn trailing_newline_is_preserved() {
        let lines = ["\tx = 1\n", "\ty = 2"];
        assert_eq!(reset_indentation(&lines), ["x = 1\n", "y = 2"]);
    }

    #[test]
    fn line_exactly_as_long_as_width_becomes_newline() {
        let lines = ["    a\n", "    "];
        assert_eq!(reset_indentation(&lines), ["a\n", "\n"]);
    }

    #[test]
    fn width_counts_characters_not_bytes() {
        // U+3000 IDEOGRAPHIC SPACE is whitespace and three bytes long.
        let lines = ["\u{3000}é = 1\n", "\u{3000}ü = 2\n"];
        assert_eq!(indentation_width(lines[0]), 1);
        assert_eq!(reset_indentation(&lines), ["é = 1\n", "ü = 2\n"]);
    }

    #[test]
    fn multibyte_lines_never_split_inside_a_character() {
        let lines = ["    x\n", "ééé\n", "éééé\n"];
        assert_eq!(reset_indentation(&lines), ["x\n", "\n", "\n"]);
    }

    #[test]
    fn whitespace_only_first_line() {
        // The newline counts as leading whitespace too.
        let lines = ["   \n", "    deeper\n"];
        assert_eq!(indentation_width(lines[0]), 4);
        assert_eq!(reset_indentation(&lines), ["\n", "deeper\n"]);
    }

    #[test]
    fn skip_chars_bounds() {
        assert_eq!(skip_chars("abc", 0), Some("abc"));
        assert_eq!(skip_chars("abc", 2), Some("c"));
        assert_eq!(skip_chars("abc", 3), None);
        assert_eq!(skip_chars("", 0), None);
    }
}
