//! Writing pages to a terminal or a pipe.

use std::io::{self, Write};

use crossterm::{
    cursor::{MoveToColumn, MoveUp},
    queue,
    terminal::{Clear, ClearType},
};

use super::Renderer;
use crate::ui::{Element, Slot, Surface};

/// Draws elements to `W`.
///
/// In live mode every push is written at once and a replacement rewinds the
/// cursor to the replaced slot, clears below it and redraws from there. In
/// batch mode nothing is written until [`Surface::finish`], which prints the
/// final state of the page.
pub struct TerminalSurface<W: Write> {
    out: W,
    renderer: Renderer,
    live: bool,
    /// Rows the terminal can scroll back over; a longer rewind redraws below.
    max_rewind: usize,
    frames: Vec<String>,
    /// Lines each frame currently occupies on screen (live mode).
    heights: Vec<usize>,
}

impl<W: Write> TerminalSurface<W> {
    #[must_use]
    pub fn new(out: W, renderer: Renderer, live: bool) -> Self {
        Self {
            out,
            renderer,
            live,
            max_rewind: usize::from(u16::MAX),
            frames: Vec::new(),
            heights: Vec::new(),
        }
    }

    /// Limits rewinding to the visible rows of the terminal.
    #[must_use]
    pub fn with_max_rewind(mut self, rows: usize) -> Self {
        self.max_rewind = rows;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn draw_from(&mut self, index: usize) -> io::Result<()> {
        for (frame, height) in self.frames[index..].iter().zip(&mut self.heights[index..]) {
            *height = frame_height(frame);
            if !frame.is_empty() {
                writeln!(self.out, "{frame}")?;
            }
        }
        self.out.flush()
    }
}

fn frame_height(frame: &str) -> usize {
    if frame.is_empty() {
        0
    } else {
        frame.split('\n').count()
    }
}

impl<W: Write> Surface for TerminalSurface<W> {
    fn push(&mut self, _slot: Slot, element: &Element) -> io::Result<()> {
        self.frames.push(self.renderer.render(element));
        self.heights.push(0);
        if self.live {
            self.draw_from(self.frames.len() - 1)?;
        }
        Ok(())
    }

    fn replace(&mut self, slot: Slot, element: &Element) -> io::Result<()> {
        let index = slot.index();
        if index >= self.frames.len() {
            return Ok(());
        }
        let frame = self.renderer.render(element);
        if self.frames[index] == frame {
            return Ok(());
        }
        self.frames[index] = frame;

        if self.live {
            let rewind: usize = self.heights[index..].iter().sum();
            if rewind > 0 && rewind <= self.max_rewind {
                let rows = u16::try_from(rewind).unwrap_or(u16::MAX);
                queue!(
                    self.out,
                    MoveUp(rows),
                    MoveToColumn(0),
                    Clear(ClearType::FromCursorDown)
                )?;
            }
            self.draw_from(index)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> io::Result<()> {
        if !self.live {
            self.draw_from(0)?;
        }
        self.out.flush()
    }
}
