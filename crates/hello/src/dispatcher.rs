//! Running one demo inside the gallery page.

use codeview::DocstringScan;

use crate::error::{GalleryError, Result};
use crate::registry::{Demo, Registry};
use crate::ui::Ui;

/// Page title shown above every demo.
pub const TITLE: &str = "Welcome to the gallery!";

/// One-line blurb under the title.
pub const BLURB: &str = "Every demo here is a few lines of Rust, and the code is shown underneath.";

/// Lays out the page around a demo.
#[derive(Debug, Clone, Copy)]
pub struct Dispatcher<'r> {
    registry: &'r Registry,
}

impl<'r> Dispatcher<'r> {
    #[must_use]
    pub const fn new(registry: &'r Registry) -> Self {
        Self { registry }
    }

    /// Runs the demo called `query` (a name or an index).
    ///
    /// # Errors
    ///
    /// [`GalleryError::UnknownDemo`] when nothing matches, otherwise see
    /// [`Dispatcher::run`].
    pub fn run_named(&self, query: &str, ui: &mut Ui<'_>) -> Result<()> {
        let demo = self
            .registry
            .resolve(query)
            .ok_or_else(|| GalleryError::UnknownDemo(query.to_owned()))?;
        self.run(demo, ui)
    }

    /// Title and blurb, then for a real demo: header, doc, divider, the demo
    /// itself and its code. The placeholder only runs itself.
    ///
    /// # Errors
    ///
    /// [`GalleryError::Demo`] when the demo fails, [`GalleryError::Io`] when
    /// drawing fails.
    pub fn run(&self, demo: &Demo, ui: &mut Ui<'_>) -> Result<()> {
        tracing::info!(demo = demo.name, "running demo");
        ui.title(TITLE)?;
        ui.write(BLURB)?;

        if demo.is_placeholder() {
            return call(demo, ui);
        }

        ui.markdown(format!("## {} Demo", demo.name))?;
        if let Some(doc) = demo.doc() {
            ui.write(doc)?;
        }
        ui.divider()?;

        call(demo, ui)?;

        ui.markdown("---\n ### Code")?;
        if demo.scan() == DocstringScan::Unterminated {
            tracing::warn!(
                demo = demo.name,
                "doc comment is not closed, showing the function unstripped"
            );
        }
        match (demo.source.and_then(|source| source.lines()), demo.listing()) {
            (Some(lines), Some(listing)) => {
                tracing::debug!(
                    demo = demo.name,
                    source_lines = lines.len(),
                    listing_lines = listing.lines().count(),
                    "built code listing"
                );
                ui.code(listing, "rust")?;
            }
            _ => {
                tracing::warn!(demo = demo.name, "source not found in embedded file");
                ui.error("The source of this demo is not available.")?;
            }
        }
        Ok(())
    }
}

fn call(demo: &Demo, ui: &mut Ui<'_>) -> Result<()> {
    (demo.run)(ui).map_err(|source| GalleryError::Demo {
        name: demo.name.to_owned(),
        source,
    })
}
