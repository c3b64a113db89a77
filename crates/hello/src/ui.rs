//! The drawing API demos are written against.
//!
//! A demo receives a [`Ui`] and appends elements to it, top to bottom. Every
//! call returns a [`Slot`] that can later be overwritten with [`Ui::set`],
//! which is how charts grow and progress bars advance. Where the elements end
//! up is decided by the [`Surface`]: the terminal, or a recording for tests.

use std::collections::BTreeMap;
use std::io;
use std::time::Duration;

use rand::SeedableRng;
use rand_pcg::Pcg64;

use crate::config::DEFAULT_WIDTH;

/// Position of an element in the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Slot(pub(crate) usize);

impl Slot {
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// One thing on the page.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    /// Page title.
    Title(String),
    /// Markdown text.
    Markdown(String),
    /// Preformatted text, shown as is.
    Text(String),
    /// Horizontal divider.
    Divider,
    /// A series of values drawn as a sparkline.
    LineChart(Vec<f64>),
    /// Progress in percent, `0..=100`.
    Progress(u8),
    Success(String),
    Info(String),
    Error(String),
    /// Source code in a bordered panel.
    Code { language: String, text: String },
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    /// Intensity grid, e.g. a fractal.
    Raster(Raster),
    /// A text input or slider together with its resolved value.
    Widget { label: String, value: String },
    Button(String),
    Balloons,
    /// Reserved space that draws nothing.
    Empty,
}

impl Element {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    pub fn markdown(text: impl Into<String>) -> Self {
        Self::Markdown(text.into())
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::Success(text.into())
    }
}

/// Row-major grid of non-negative intensities.
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    width: usize,
    height: usize,
    cells: Vec<f64>,
}

impl Raster {
    /// Builds a raster by evaluating `cell(column, row)` for every cell.
    pub fn from_fn(width: usize, height: usize, mut cell: impl FnMut(usize, usize) -> f64) -> Self {
        let cells = (0..height)
            .flat_map(|row| (0..width).map(move |col| (col, row)))
            .map(|(col, row)| cell(col, row))
            .collect();
        Self {
            width,
            height,
            cells,
        }
    }

    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn get(&self, col: usize, row: usize) -> Option<f64> {
        if col >= self.width {
            return None;
        }
        self.cells.get(row * self.width + col).copied()
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.cells.chunks(self.width.max(1))
    }

    /// Largest intensity, or 0 for an empty raster.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.cells.iter().copied().fold(0.0, f64::max)
    }
}

// ============================================================================
// Surfaces
// ============================================================================

/// Where elements are drawn.
///
/// `push` is called once per slot, in slot order. `replace` may be called any
/// number of times for a slot that was pushed before.
pub trait Surface {
    /// Draws a new element at the bottom of the page.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    fn push(&mut self, slot: Slot, element: &Element) -> io::Result<()>;

    /// Redraws an existing slot.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    fn replace(&mut self, slot: Slot, element: &Element) -> io::Result<()>;

    /// Called once after the demo and its listing are complete.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Keeps the final state of every slot in memory.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    elements: Vec<Element>,
    replacements: usize,
    finished: bool,
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Final element of every slot, in page order.
    #[must_use]
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Number of `replace` calls seen.
    #[must_use]
    pub const fn replacements(&self) -> usize {
        self.replacements
    }

    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.finished
    }
}

impl Surface for RecordingSurface {
    fn push(&mut self, _slot: Slot, element: &Element) -> io::Result<()> {
        self.elements.push(element.clone());
        Ok(())
    }

    fn replace(&mut self, slot: Slot, element: &Element) -> io::Result<()> {
        if let Some(current) = self.elements.get_mut(slot.index()) {
            *current = element.clone();
            self.replacements += 1;
        }
        Ok(())
    }

    fn finish(&mut self) -> io::Result<()> {
        self.finished = true;
        Ok(())
    }
}

// ============================================================================
// Demo context
// ============================================================================

/// Everything a demo may read besides its own code: widget inputs, a seeded
/// random source, pacing and the available width.
#[derive(Debug, Clone)]
pub struct DemoContext {
    inputs: BTreeMap<String, String>,
    rng: Pcg64,
    animate: bool,
    width: usize,
}

impl DemoContext {
    /// A still, 80-column context with no inputs.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inputs: BTreeMap::new(),
            rng: Pcg64::seed_from_u64(seed),
            animate: false,
            width: DEFAULT_WIDTH,
        }
    }

    #[must_use]
    pub fn with_inputs(mut self, inputs: BTreeMap<String, String>) -> Self {
        self.inputs = inputs;
        self
    }

    #[must_use]
    pub fn with_input(mut self, label: &str, value: &str) -> Self {
        self.inputs.insert(label.to_owned(), value.to_owned());
        self
    }

    /// With animation on, [`Ui::sleep`] actually pauses.
    #[must_use]
    pub fn with_animation(mut self, animate: bool) -> Self {
        self.animate = animate;
        self
    }

    #[must_use]
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    #[must_use]
    pub fn input(&self, label: &str) -> Option<&str> {
        self.inputs.get(label).map(String::as_str)
    }
}

/// Resolves a slider value: the parsed input clamped to the range, or the
/// default when there is no usable input.
pub(crate) fn slider_value(raw: Option<&str>, min: i64, max: i64, default: i64) -> i64 {
    let (low, high) = if min <= max { (min, max) } else { (max, min) };
    let Some(text) = raw else {
        return default.clamp(low, high);
    };
    match text.trim().parse::<i64>() {
        Ok(value) => value.clamp(low, high),
        Err(_) => {
            tracing::warn!(input = text, default, "slider input is not an integer");
            default.clamp(low, high)
        }
    }
}

// ============================================================================
// Ui
// ============================================================================

/// Append-only page with updatable slots.
pub struct Ui<'a> {
    surface: &'a mut dyn Surface,
    context: DemoContext,
    elements: Vec<Element>,
}

impl<'a> Ui<'a> {
    pub fn new(surface: &'a mut dyn Surface, context: DemoContext) -> Self {
        Self {
            surface,
            context,
            elements: Vec::new(),
        }
    }

    fn push(&mut self, element: Element) -> io::Result<Slot> {
        let slot = Slot(self.elements.len());
        self.surface.push(slot, &element)?;
        self.elements.push(element);
        Ok(slot)
    }

    /// Overwrites the element in `slot`. Setting an identical element does
    /// not redraw.
    ///
    /// # Errors
    ///
    /// Fails for a slot this page never handed out, or when drawing fails.
    pub fn set(&mut self, slot: Slot, element: Element) -> io::Result<()> {
        let Some(current) = self.elements.get_mut(slot.index()) else {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("slot {} does not exist", slot.index()),
            ));
        };
        if *current == element {
            return Ok(());
        }
        self.surface.replace(slot, &element)?;
        *current = element;
        Ok(())
    }

    /// Empties a slot without giving up its position.
    ///
    /// # Errors
    ///
    /// See [`Ui::set`].
    pub fn clear(&mut self, slot: Slot) -> io::Result<()> {
        self.set(slot, Element::Empty)
    }

    /// Appends values to the chart in `slot`. A slot holding anything else
    /// becomes a chart of just `rows`.
    ///
    /// # Errors
    ///
    /// See [`Ui::set`].
    pub fn add_rows(&mut self, slot: Slot, rows: &[f64]) -> io::Result<()> {
        let mut values = match self.elements.get(slot.index()) {
            Some(Element::LineChart(values)) => values.clone(),
            _ => Vec::new(),
        };
        values.extend_from_slice(rows);
        self.set(slot, Element::LineChart(values))
    }

    // ------------------------------------------------------------------
    // Elements
    // ------------------------------------------------------------------

    /// # Errors
    ///
    /// Returns any error from the surface.
    pub fn title(&mut self, text: impl Into<String>) -> io::Result<Slot> {
        self.push(Element::Title(text.into()))
    }

    /// # Errors
    ///
    /// Returns any error from the surface.
    pub fn markdown(&mut self, text: impl Into<String>) -> io::Result<Slot> {
        self.push(Element::Markdown(text.into()))
    }

    /// Same as [`Ui::markdown`].
    ///
    /// # Errors
    ///
    /// Returns any error from the surface.
    pub fn write(&mut self, text: impl Into<String>) -> io::Result<Slot> {
        self.markdown(text)
    }

    /// # Errors
    ///
    /// Returns any error from the surface.
    pub fn text(&mut self, text: impl Into<String>) -> io::Result<Slot> {
        self.push(Element::Text(text.into()))
    }

    /// Reserves a slot to fill in later.
    ///
    /// # Errors
    ///
    /// Returns any error from the surface.
    pub fn empty(&mut self) -> io::Result<Slot> {
        self.push(Element::Empty)
    }

    /// # Errors
    ///
    /// Returns any error from the surface.
    pub fn divider(&mut self) -> io::Result<Slot> {
        self.push(Element::Divider)
    }

    /// # Errors
    ///
    /// Returns any error from the surface.
    pub fn line_chart(&mut self, values: Vec<f64>) -> io::Result<Slot> {
        self.push(Element::LineChart(values))
    }

    /// Progress bar; values above 100 are shown as 100.
    ///
    /// # Errors
    ///
    /// Returns any error from the surface.
    pub fn progress(&mut self, percent: u8) -> io::Result<Slot> {
        self.push(Element::Progress(percent.min(100)))
    }

    /// # Errors
    ///
    /// Returns any error from the surface.
    pub fn success(&mut self, text: impl Into<String>) -> io::Result<Slot> {
        self.push(Element::Success(text.into()))
    }

    /// # Errors
    ///
    /// Returns any error from the surface.
    pub fn info(&mut self, text: impl Into<String>) -> io::Result<Slot> {
        self.push(Element::Info(text.into()))
    }

    /// # Errors
    ///
    /// Returns any error from the surface.
    pub fn error(&mut self, text: impl Into<String>) -> io::Result<Slot> {
        self.push(Element::Error(text.into()))
    }

    /// # Errors
    ///
    /// Returns any error from the surface.
    pub fn code(&mut self, text: impl Into<String>, language: &str) -> io::Result<Slot> {
        self.push(Element::Code {
            language: language.to_owned(),
            text: text.into(),
        })
    }

    /// # Errors
    ///
    /// Returns any error from the surface.
    pub fn table(&mut self, headers: Vec<String>, rows: Vec<Vec<String>>) -> io::Result<Slot> {
        self.push(Element::Table { headers, rows })
    }

    /// # Errors
    ///
    /// Returns any error from the surface.
    pub fn raster(&mut self, raster: Raster) -> io::Result<Slot> {
        self.push(Element::Raster(raster))
    }

    /// A button is drawn but never pressed; rerunning is done from the shell.
    ///
    /// # Errors
    ///
    /// Returns any error from the surface.
    pub fn button(&mut self, label: impl Into<String>) -> io::Result<Slot> {
        self.push(Element::Button(label.into()))
    }

    /// # Errors
    ///
    /// Returns any error from the surface.
    pub fn balloons(&mut self) -> io::Result<Slot> {
        self.push(Element::Balloons)
    }

    // ------------------------------------------------------------------
    // Widgets
    // ------------------------------------------------------------------

    /// Text input. The value comes from the configured inputs, else `""`.
    ///
    /// # Errors
    ///
    /// Returns any error from the surface.
    pub fn text_input(&mut self, label: &str) -> io::Result<String> {
        let value = self.context.input(label).unwrap_or_default().to_owned();
        self.push(Element::Widget {
            label: label.to_owned(),
            value: value.clone(),
        })?;
        Ok(value)
    }

    /// Integer slider over `min..=max`. The configured input is clamped to
    /// the range; a missing or unparsable input gives `default`.
    ///
    /// # Errors
    ///
    /// Returns any error from the surface.
    pub fn slider(&mut self, label: &str, min: i64, max: i64, default: i64) -> io::Result<i64> {
        let value = slider_value(self.context.input(label), min, max, default);
        self.push(Element::Widget {
            label: label.to_owned(),
            value: value.to_string(),
        })?;
        Ok(value)
    }

    // ------------------------------------------------------------------
    // Context
    // ------------------------------------------------------------------

    /// Pauses between frames. Does nothing when animation is off.
    pub fn sleep(&self, duration: Duration) {
        if self.context.animate {
            std::thread::sleep(duration);
        }
    }

    /// Seeded random source.
    pub fn rng(&mut self) -> &mut Pcg64 {
        &mut self.context.rng
    }

    /// Columns available to the page.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.context.width
    }

    /// Current element of every slot.
    #[must_use]
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Tells the surface the page is complete.
    ///
    /// # Errors
    ///
    /// Returns any error from the surface.
    pub fn finish(self) -> io::Result<()> {
        self.surface.finish()
    }
}
