//! Interactive demo picker.

use std::io::{self, BufRead, Write};

use crate::registry::{Demo, Registry};

/// Index preselected when the user just presses Enter.
pub const DEFAULT_CHOICE: usize = 0;

/// Prints the numbered demo list and reads a choice.
///
/// An empty line picks the default, a number picks by index, anything else
/// is looked up as a name. Unknown choices print a hint and ask again. End
/// of input picks the default.
///
/// # Errors
///
/// Returns any I/O error from `input` or `out`, and `NotFound` for an empty
/// registry.
pub fn choose<'r>(
    registry: &'r Registry,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> io::Result<&'r Demo> {
    let default = registry
        .by_index(DEFAULT_CHOICE)
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no demos registered"))?;

    writeln!(out, "Choose a demo")?;
    for (index, demo) in registry.iter().enumerate() {
        writeln!(out, "  [{index}] {}", demo.name)?;
    }

    let mut line = String::new();
    loop {
        write!(out, "> ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            tracing::debug!("end of input at the menu, using the default");
            return Ok(default);
        }
        let choice = line.trim();
        if choice.is_empty() {
            return Ok(default);
        }
        if let Some(demo) = registry.resolve(choice) {
            tracing::debug!(demo = demo.name, "chosen from menu");
            return Ok(demo);
        }
        writeln!(
            out,
            "No demo called {choice:?}. Enter a number from 0 to {}.",
            registry.len().saturating_sub(1)
        )?;
    }
}
