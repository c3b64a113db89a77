#![allow(clippy::doc_markdown)]

//! Property tests for the listing helpers: length preservation, fixed points
//! and the fail-open behavior of docstring removal.

use codeview::{
    DocstringScan, Fence, SCAN_LIMIT, extract_docstring, indentation_width, remove_docstring,
    remove_docstring_with, reset_indentation, scan_docstring,
};
use proptest::prelude::*;

/// A single source line: some indentation, some text, a terminator.
fn source_line() -> impl Strategy<Value = String> {
    ("[ \t]{0,8}", "[a-z0-9_=(){}:;. é\"]{0,24}").prop_map(|(indent, text)| format!("{indent}{text}\n"))
}

fn line_block(max: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(source_line(), 0..max)
}

fn borrow(lines: &[String]) -> Vec<&str> {
    lines.iter().map(String::as_str).collect()
}

// =============================================================================
// Indentation reset
// =============================================================================

proptest! {
    #[test]
    fn reset_preserves_length(block in line_block(40)) {
        let lines = borrow(&block);
        prop_assert_eq!(reset_indentation(&lines).len(), lines.len());
    }

    #[test]
    fn reset_is_identity_at_width_zero(
        head in "[a-z]{1,8}\n",
        rest in line_block(20),
    ) {
        let mut block = vec![head];
        block.extend(rest);
        let lines = borrow(&block);
        prop_assert_eq!(indentation_width(lines[0]), 0);
        prop_assert_eq!(reset_indentation(&lines), lines);
    }

    #[test]
    fn reset_twice_equals_reset_once_when_first_line_has_text(
        indent in "[ ]{0,8}",
        head in "[a-z]{1,8}",
        rest in line_block(20),
    ) {
        let mut block = vec![format!("{indent}{head}\n")];
        block.extend(rest);
        let lines = borrow(&block);
        let once = reset_indentation(&lines);
        let twice = reset_indentation(&once);
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn reset_output_lines_are_suffixes_or_newline(block in line_block(30)) {
        let lines = borrow(&block);
        for (out, input) in reset_indentation(&lines).iter().zip(&lines) {
            prop_assert!(*out == "\n" || input.ends_with(out));
        }
    }

    #[test]
    fn reset_never_panics_on_arbitrary_text(block in prop::collection::vec(".{0,16}", 0..12)) {
        let lines = borrow(&block);
        prop_assert_eq!(reset_indentation(&lines).len(), lines.len());
    }
}

// =============================================================================
// Docstring removal
// =============================================================================

proptest! {
    #[test]
    fn removal_returns_input_or_a_proper_suffix(block in line_block(40)) {
        let lines = borrow(&block);
        let stripped = remove_docstring(&lines);
        match scan_docstring(&lines, Fence::TRIPLE_QUOTE) {
            DocstringScan::Closed { close } => {
                prop_assert!(close >= 2);
                prop_assert_eq!(&stripped[..], &lines[close + 1..]);
            }
            DocstringScan::Absent | DocstringScan::Unterminated => {
                prop_assert_eq!(&stripped, &lines);
            }
        }
    }

    #[test]
    fn short_sequences_are_never_stripped(block in line_block(3)) {
        let lines = borrow(&block);
        prop_assume!(lines.len() < 3);
        prop_assert_eq!(remove_docstring(&lines), lines);
    }

    #[test]
    fn well_formed_docstring_is_removed(
        doc in prop::collection::vec("[a-z ]{0,20}", 0..20),
        body in prop::collection::vec("[a-z =1;]{1,20}", 1..10),
    ) {
        let mut block = vec!["def f():\n".to_string(), "    \"\"\"Summary.\n".to_string()];
        block.extend(doc.iter().map(|line| format!("    {line}\n")));
        block.push("    \"\"\"\n".to_string());
        block.extend(body.iter().map(|line| format!("    {line}\n")));
        let lines = borrow(&block);

        let stripped = remove_docstring(&lines);
        prop_assert_eq!(stripped.len(), body.len());
        prop_assert!(extract_docstring(&lines, Fence::TRIPLE_QUOTE).is_some());
    }

    #[test]
    fn unclosed_docstring_is_kept_whole(extra in 0usize..(SCAN_LIMIT + 40)) {
        let mut block = vec!["def f():\n".to_string(), "    \"\"\"Open.\n".to_string()];
        block.extend((0..extra).map(|i| format!("    line {i}\n")));
        let lines = borrow(&block);

        prop_assert_eq!(remove_docstring(&lines), lines.clone());
        prop_assert_eq!(extract_docstring(&lines, Fence::TRIPLE_QUOTE), None);
    }

    #[test]
    fn fence_choice_only_matters_through_markers(block in line_block(30)) {
        // Lines drawn from the strategy never contain `/*!`, so the inner
        // block fence never detects anything.
        let lines = borrow(&block);
        prop_assert_eq!(remove_docstring_with(&lines, Fence::INNER_BLOCK_DOC), lines);
    }
}
