//! The view-source pipeline: strip the docstring, reset the indentation,
//! join the lines.

use crate::docstring::{Fence, remove_docstring_with};
use crate::indent::reset_indentation;

/// Builds the text of a code panel from a function's source lines.
///
/// The docstring delimited by `fence` is removed first. When the removal
/// happens the signature line goes with it, and what remains is the body at
/// column 0. Trailing newlines are trimmed from the joined text.
///
/// # Example
///
/// ```rust
/// use codeview::{code_listing, Fence};
///
/// let lines = [
///     "def f():\n",
///     "    \"\"\"x\n",
///     "    \"\"\"\n",
///     "    a = 1\n",
///     "    return a\n",
/// ];
/// assert_eq!(code_listing(&lines, Fence::TRIPLE_QUOTE), "a = 1\nreturn a");
/// ```
pub fn code_listing(lines: &[&str], fence: Fence) -> String {
    let body = remove_docstring_with(lines, fence);
    reset_indentation(&body)
        .concat()
        .trim_end_matches('\n')
        .to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docstring::remove_docstring;

    #[test]
    fn strip_then_normalize() {
        let lines = [
            "def f():\n",
            "    \"\"\"x\n",
            "    \"\"\"\n",
            "    a = 1\n",
            "    return a\n",
        ];
        assert_eq!(
            reset_indentation(&remove_docstring(&lines)),
            ["a = 1\n", "return a\n"]
        );
    }

    #[test]
    fn listing_without_docstring_keeps_signature() {
        let lines = ["fn f() {\n", "    let a = 1;\n"];
        assert_eq!(
            code_listing(&lines, Fence::INNER_BLOCK_DOC),
            "fn f() {\n    let a = 1;"
        );
    }

    #[test]
    fn listing_keeps_blank_lines_inside_body() {
        let lines = [
            "pub fn demo() {\n",
            "    /*!\n",
            "    Docs.\n",
            "    */\n",
            "    let a = 1;\n",
            "\n",
            "    if a > 0 {\n",
            "        println!(\"{a}\");\n",
            "    }\n",
        ];
        insta::assert_snapshot!(code_listing(&lines, Fence::INNER_BLOCK_DOC), @r#"
        let a = 1;

        if a > 0 {
            println!("{a}");
        }
        "#);
    }

    #[test]
    fn empty_input_gives_empty_listing() {
        let lines: [&str; 0] = [];
        assert_eq!(code_listing(&lines, Fence::TRIPLE_QUOTE), "");
    }
}
