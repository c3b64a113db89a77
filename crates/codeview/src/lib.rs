#![forbid(unsafe_code)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]

//! # Codeview
//!
//! Helpers for turning the literal source of a function into a readable
//! "view source" panel.
//!
//! Codeview provides:
//! - **Docstring stripping**: drop a leading documentation block from a
//!   function body
//! - **Indentation reset**: shift a block of lines back to column 0
//! - **Docstring extraction**: the cleaned text of that documentation block
//! - **Function slicing**: locate a function's lines inside an embedded
//!   source file
//!
//! Every helper is a pure function over a slice of lines. Lines keep their
//! `'\n'` terminators, so a result joins back into text with `concat()`.
//!
//! ## Example
//!
//! ```rust
//! use codeview::{remove_docstring, reset_indentation};
//!
//! let lines = [
//!     "def f():\n",
//!     "    \"\"\"x\n",
//!     "    \"\"\"\n",
//!     "    a = 1\n",
//!     "    return a\n",
//! ];
//!
//! let body = reset_indentation(&remove_docstring(&lines));
//! assert_eq!(body, ["a = 1\n", "return a\n"]);
//! ```
//!
//! ## Heuristics
//!
//! Docstring detection is a substring test, not a string-literal parser. A
//! one-line docstring, a docstring that does not start on its own line, or a
//! fence marker quoted inside the docstring text are all matched literally.
//! When no closing marker turns up within [`SCAN_LIMIT`] lines the input is
//! returned unchanged.

mod docstring;
mod indent;
mod listing;
mod slice;

pub use docstring::{
    DocstringScan, Fence, SCAN_LIMIT, extract_docstring, remove_docstring, remove_docstring_with,
    scan_docstring,
};
pub use indent::{indentation_width, reset_indentation};
pub use listing::code_listing;
pub use slice::{function_lines, source_lines};
