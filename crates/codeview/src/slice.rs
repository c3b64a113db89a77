//! Locating a function inside an embedded source file.
//!
//! A binary cannot ask a function for its own source at runtime. The gallery
//! embeds each source file with `include_str!` and cuts the function out of
//! it by name.

use regex::Regex;

/// Splits `source` into lines, keeping each `'\n'` terminator.
pub fn source_lines(source: &str) -> Vec<&str> {
    source.split_inclusive('\n').collect()
}

/// Returns the lines of the function `name`, from its signature line through
/// its last body line.
///
/// The signature is the first line of the form `fn name`, optionally
/// preceded by indentation and a `pub` or `pub(...)` visibility. The body
/// ends at the first later line that is exactly the signature's indentation
/// followed by `}`, as rustfmt lays functions out. That closing line is not
/// included.
///
/// Returns `None` when the signature or its closing brace cannot be found.
///
/// # Example
///
/// ```rust
/// use codeview::function_lines;
///
/// let source = "use std::fmt;\n\npub fn answer() -> u32 {\n    42\n}\n";
/// assert_eq!(
///     function_lines(source, "answer"),
///     Some(vec!["pub fn answer() -> u32 {\n", "    42\n"])
/// );
/// assert_eq!(function_lines(source, "question"), None);
/// ```
pub fn function_lines<'a>(source: &'a str, name: &str) -> Option<Vec<&'a str>> {
    let signature = Regex::new(&format!(
        r"^(\s*)(?:pub(?:\([^)]*\))?\s+)?fn\s+{}\b",
        regex::escape(name)
    ))
    .ok()?;
    let lines = source_lines(source);

    let (start, closing) = lines.iter().enumerate().find_map(|(at, line)| {
        let captures = signature.captures(line)?;
        let indent = captures.get(1).map_or("", |m| m.as_str());
        Some((at, format!("{indent}}}")))
    })?;

    let end = lines
        .iter()
        .enumerate()
        .skip(start + 1)
        .find(|(_, line)| line.trim_end_matches(['\n', '\r']) == closing)
        .map(|(at, _)| at)?;

    Some(lines[start..end].to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCE: &str = "\
//! Module docs.

use std::fmt;

/// Outer docs.
pub fn greet(name: &str) -> String {
    /*!
    Greets.
    */
    let greeting = format!(\"hi {name}\");
    if name.is_empty() {
        return String::new();
    }
    greeting
}

fn greet_twice(name: &str) -> String {
    greet(name).repeat(2)
}

mod nested {
    pub(crate) fn inner() {
        let _ = 1;
    }
}
";

    #[test]
    fn source_lines_keep_terminators() {
        assert_eq!(source_lines("a\nb\n"), ["a\n", "b\n"]);
        assert_eq!(source_lines("a\nb"), ["a\n", "b"]);
        assert!(source_lines("").is_empty());
    }

    #[test]
    fn finds_pub_function_and_excludes_closing_brace() {
        let lines = function_lines(SOURCE, "greet").unwrap();
        assert_eq!(lines.first(), Some(&"pub fn greet(name: &str) -> String {\n"));
        assert_eq!(lines.last(), Some(&"    greeting\n"));
        assert_eq!(lines.len(), 9);
    }

    #[test]
    fn name_must_match_whole_word() {
        let lines = function_lines(SOURCE, "greet_twice").unwrap();
        assert_eq!(
            lines,
            [
                "fn greet_twice(name: &str) -> String {\n",
                "    greet(name).repeat(2)\n"
            ]
        );
    }

    #[test]
    fn nested_function_uses_its_own_indent() {
        let lines = function_lines(SOURCE, "inner").unwrap();
        assert_eq!(lines, ["    pub(crate) fn inner() {\n", "        let _ = 1;\n"]);
    }

    #[test]
    fn missing_function_is_none() {
        assert_eq!(function_lines(SOURCE, "farewell"), None);
    }

    #[test]
    fn unclosed_function_is_none() {
        let source = "fn open() {\n    let x = 1;\n";
        assert_eq!(function_lines(source, "open"), None);
    }

    #[test]
    fn calls_are_not_signatures() {
        let source = "fn caller() {\n    helper();\n}\n\nfn helper() {\n}\n";
        assert_eq!(function_lines(source, "helper"), Some(vec!["fn helper() {\n"]));
    }

    #[test]
    fn regex_metacharacters_in_name_are_escaped() {
        assert_eq!(function_lines(SOURCE, "gr.et"), None);
    }
}
