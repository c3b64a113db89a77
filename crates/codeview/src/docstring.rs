//! Leading docstring detection, removal and extraction.
//!
//! A function's source arrives as a line sequence whose first line is the
//! signature. A docstring is recognized only when the second line carries the
//! opening fence marker; the closing marker is then searched line by line,
//! starting at the third line, for at most [`SCAN_LIMIT`] lines.
//!
//! Matching is by substring. The helpers never fail: when the block is absent
//! or never closes, the input comes back unchanged.

use crate::indent::skip_chars;

/// Maximum number of lines scanned for a closing fence marker.
///
/// The scan covers indices `2..2 + SCAN_LIMIT`, so the last line checked is
/// index 101. A closing marker at index 102 or later is not found.
pub const SCAN_LIMIT: usize = 100;

/// Opening and closing markers of a documentation block.
///
/// The markers are plain substrings. They are never parsed as a
/// string-literal or comment grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fence {
    /// Marker looked for on the line right after the signature.
    pub open: &'static str,
    /// Marker that ends the block.
    pub close: &'static str,
}

impl Fence {
    /// Triple-quoted docstring, `"""` on both ends.
    pub const TRIPLE_QUOTE: Self = Self::symmetric("\"\"\"");

    /// Inner block doc comment at the top of a function body: `/*!` ... `*/`.
    pub const INNER_BLOCK_DOC: Self = Self::new("/*!", "*/");

    /// Creates a fence with distinct opening and closing markers.
    pub const fn new(open: &'static str, close: &'static str) -> Self {
        Self { open, close }
    }

    /// Creates a fence that uses the same marker on both ends.
    pub const fn symmetric(marker: &'static str) -> Self {
        Self::new(marker, marker)
    }
}

impl Default for Fence {
    fn default() -> Self {
        Self::TRIPLE_QUOTE
    }
}

/// Outcome of looking for a leading docstring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocstringScan {
    /// Fewer than three lines, or no opening marker on line 1.
    Absent,
    /// The block closes on line `close`.
    Closed {
        /// Index of the line holding the closing marker.
        close: usize,
    },
    /// An opening marker with no closing marker within [`SCAN_LIMIT`] lines.
    Unterminated,
}

impl DocstringScan {
    /// Whether a complete block was found.
    pub const fn is_closed(self) -> bool {
        matches!(self, Self::Closed { .. })
    }
}

/// Looks for a docstring block at the top of `lines`.
///
/// The length guard is checked before the opening marker, so a sequence of
/// one or two lines is always [`DocstringScan::Absent`].
///
/// # Example
///
/// ```rust
/// use codeview::{scan_docstring, DocstringScan, Fence};
///
/// let lines = ["fn f() {\n", "    /*!\n", "    Doc.\n", "    */\n", "}\n"];
/// assert_eq!(
///     scan_docstring(&lines, Fence::INNER_BLOCK_DOC),
///     DocstringScan::Closed { close: 3 }
/// );
/// ```
pub fn scan_docstring(lines: &[&str], fence: Fence) -> DocstringScan {
    if lines.len() < 3 || !lines[1].contains(fence.open) {
        return DocstringScan::Absent;
    }

    lines
        .iter()
        .enumerate()
        .skip(2)
        .take(SCAN_LIMIT)
        .find(|(_, line)| line.contains(fence.close))
        .map_or(DocstringScan::Unterminated, |(close, _)| {
            DocstringScan::Closed { close }
        })
}

/// Removes a leading `"""` docstring, together with the signature line.
///
/// See [`remove_docstring_with`].
pub fn remove_docstring<'a>(lines: &[&'a str]) -> Vec<&'a str> {
    remove_docstring_with(lines, Fence::TRIPLE_QUOTE)
}

/// Removes a leading docstring delimited by `fence`.
///
/// When a block is found, the result is every line strictly after the closing
/// marker: the signature, the opening line and the block body are all
/// dropped. Otherwise the result is a copy of the input.
///
/// # Example
///
/// ```rust
/// use codeview::{remove_docstring_with, Fence};
///
/// let lines = ["def f():\n", "    \"\"\"doc\n", "    \"\"\"\n", "    return 1\n"];
/// assert_eq!(remove_docstring_with(&lines, Fence::TRIPLE_QUOTE), ["    return 1\n"]);
///
/// let bare = ["def g():\n", "    return 2\n"];
/// assert_eq!(remove_docstring_with(&bare, Fence::TRIPLE_QUOTE), bare);
/// ```
pub fn remove_docstring_with<'a>(lines: &[&'a str], fence: Fence) -> Vec<&'a str> {
    match scan_docstring(lines, fence) {
        DocstringScan::Closed { close } => lines[close + 1..].to_vec(),
        DocstringScan::Absent | DocstringScan::Unterminated => lines.to_vec(),
    }
}

/// Returns the cleaned text of a leading docstring, if there is one.
///
/// Detection is the same as [`scan_docstring`]. The text runs from just after
/// the opening marker to just before the closing marker. It is then cleaned:
/// trailing whitespace is trimmed, the first line loses its leading
/// whitespace, the remaining lines lose their common indentation, and blank
/// lines at either end are dropped.
///
/// # Example
///
/// ```rust
/// use codeview::{extract_docstring, Fence};
///
/// let lines = [
///     "def f():\n",
///     "    \"\"\"doc\n",
///     "    more\n",
///     "    \"\"\"\n",
///     "    return 1\n",
/// ];
/// assert_eq!(extract_docstring(&lines, Fence::TRIPLE_QUOTE).as_deref(), Some("doc\nmore"));
/// ```
pub fn extract_docstring(lines: &[&str], fence: Fence) -> Option<String> {
    let DocstringScan::Closed { close } = scan_docstring(lines, fence) else {
        return None;
    };

    let opening = lines[1];
    let closing = lines[close];

    let mut raw = Vec::with_capacity(close);
    raw.push(
        opening
            .find(fence.open)
            .map_or("", |at| &opening[at + fence.open.len()..]),
    );
    raw.extend_from_slice(&lines[2..close]);
    raw.push(closing.find(fence.close).map_or(closing, |at| &closing[..at]));

    clean(&raw)
}

fn clean(raw: &[&str]) -> Option<String> {
    let margin = raw
        .iter()
        .skip(1)
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.chars().take_while(|c| c.is_whitespace()).count())
        .min()
        .unwrap_or(0);

    let lines: Vec<&str> = raw
        .iter()
        .enumerate()
        .map(|(at, &line)| {
            let line = if at == 0 {
                line.trim_start()
            } else {
                skip_chars(line, margin).unwrap_or("")
            };
            line.trim_end()
        })
        .collect();

    let start = lines.iter().position(|line| !line.is_empty())?;
    let end = lines.iter().rposition(|line| !line.is_empty())?;
    Some(lines[start..=end].join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUOTES: &str = "\"\"\"";

    fn unclosed(total: usize) -> Vec<String> {
        let mut lines = vec!["def f():\n".to_string(), format!("    {QUOTES}doc\n")];
        lines.extend((2..total).map(|i| format!("    line {i}\n")));
        lines
    }

    fn closing_at(index: usize) -> Vec<String> {
        let mut lines = unclosed(index);
        lines.push(format!("    {QUOTES}\n"));
        lines.push("    return 1\n".to_string());
        lines
    }

    fn borrow(lines: &[String]) -> Vec<&str> {
        lines.iter().map(String::as_str).collect()
    }

    #[test]
    fn strips_docstring_end_to_end() {
        let lines = [
            "def f():\n",
            "    \"\"\"doc\n",
            "    more\n",
            "    \"\"\"\n",
            "    return 1\n",
        ];
        assert_eq!(remove_docstring(&lines), ["    return 1\n"]);
    }

    #[test]
    fn two_lines_pass_through_regardless_of_content() {
        let lines = ["def f():\n", "    \"\"\"doc\"\"\"\n"];
        assert_eq!(remove_docstring(&lines), lines);
        assert_eq!(scan_docstring(&lines, Fence::TRIPLE_QUOTE), DocstringScan::Absent);
    }

    #[test]
    fn single_line_input_passes_through() {
        let lines = ["\"\"\"\n"];
        assert_eq!(remove_docstring(&lines), lines);
    }

    #[test]
    fn empty_input_passes_through() {
        let lines: [&str; 0] = [];
        assert!(remove_docstring(&lines).is_empty());
    }

    #[test]
    fn no_opening_marker_passes_through() {
        let lines = ["def f():\n", "    x = 1\n", "    \"\"\"\n", "    return x\n"];
        assert_eq!(remove_docstring(&lines), lines);
    }

    #[test]
    fn one_line_docstring_is_not_detected_as_closed() {
        // The closing marker on line 1 itself is never looked at.
        let lines = ["def f():\n", "    \"\"\"Doc.\"\"\"\n", "    return 1\n"];
        assert_eq!(
            scan_docstring(&lines, Fence::TRIPLE_QUOTE),
            DocstringScan::Unterminated
        );
        assert_eq!(remove_docstring(&lines), lines);
    }

    #[test]
    fn marker_inside_body_closes_early() {
        let lines = [
            "def f():\n",
            "    \"\"\"Use \"\"\" for docs\n",
            "    like \"\"\" this\n",
            "    \"\"\"\n",
            "    return 1\n",
        ];
        assert_eq!(remove_docstring(&lines), ["    \"\"\"\n", "    return 1\n"]);
    }

    #[test]
    fn unterminated_block_returns_input() {
        let owned = unclosed(150);
        let lines = borrow(&owned);
        assert_eq!(remove_docstring(&lines), lines);
        assert_eq!(
            scan_docstring(&lines, Fence::TRIPLE_QUOTE),
            DocstringScan::Unterminated
        );
    }

    #[test]
    fn unterminated_short_block_does_not_overrun() {
        let owned = unclosed(4);
        let lines = borrow(&owned);
        assert_eq!(remove_docstring(&lines), lines);
    }

    #[test]
    fn closing_marker_on_last_scanned_line_is_found() {
        let owned = closing_at(2 + SCAN_LIMIT - 1);
        let lines = borrow(&owned);
        assert_eq!(remove_docstring(&lines), ["    return 1\n"]);
    }

    #[test]
    fn closing_marker_past_scan_limit_is_ignored() {
        let owned = closing_at(2 + SCAN_LIMIT);
        let lines = borrow(&owned);
        assert_eq!(remove_docstring(&lines), lines);
    }

    #[test]
    fn inner_block_fence_strips_rust_doc() {
        let lines = [
            "pub fn demo(ui: &mut Ui<'_>) -> anyhow::Result<()> {\n",
            "    /*!\n",
            "    Says hello.\n",
            "    */\n",
            "    ui.text(\"hello\");\n",
            "    Ok(())\n",
        ];
        assert_eq!(
            remove_docstring_with(&lines, Fence::INNER_BLOCK_DOC),
            ["    ui.text(\"hello\");\n", "    Ok(())\n"]
        );
        // The default fence does not see this block at all.
        assert_eq!(remove_docstring(&lines), lines);
    }

    #[test]
    fn extract_cleans_common_indentation() {
        let lines = [
            "fn demo() {\n",
            "    /*!\n",
            "    First line.\n",
            "\n",
            "      Indented more.\n",
            "    */\n",
            "}\n",
        ];
        assert_eq!(
            extract_docstring(&lines, Fence::INNER_BLOCK_DOC).as_deref(),
            Some("First line.\n\n  Indented more.")
        );
    }

    #[test]
    fn extract_keeps_text_on_marker_lines() {
        let lines = ["def f():\n", "    \"\"\"Head\n", "    tail\"\"\"\n", "    pass\n"];
        assert_eq!(
            extract_docstring(&lines, Fence::TRIPLE_QUOTE).as_deref(),
            Some("Head\ntail")
        );
    }

    #[test]
    fn extract_returns_none_for_blank_block() {
        let lines = ["def f():\n", "    \"\"\"\n", "\n", "    \"\"\"\n", "    pass\n"];
        assert_eq!(extract_docstring(&lines, Fence::TRIPLE_QUOTE), None);
    }

    #[test]
    fn extract_returns_none_without_block() {
        let lines = ["def f():\n", "    pass\n", "    pass\n"];
        assert_eq!(extract_docstring(&lines, Fence::TRIPLE_QUOTE), None);
        let owned = unclosed(10);
        assert_eq!(extract_docstring(&borrow(&owned), Fence::TRIPLE_QUOTE), None);
    }

    #[test]
    fn fence_defaults_to_triple_quote() {
        assert_eq!(Fence::default(), Fence::TRIPLE_QUOTE);
        assert_eq!(Fence::TRIPLE_QUOTE.open, Fence::TRIPLE_QUOTE.close);
        assert!(DocstringScan::Closed { close: 2 }.is_closed());
        assert!(!DocstringScan::Unterminated.is_closed());
    }
}
