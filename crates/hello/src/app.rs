//! Top-level commands: run a demo, list, show source, diagnostics.

use std::io::{self, IsTerminal, Write};

use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::dispatcher::Dispatcher;
use crate::error::{GalleryError, Result};
use crate::menu;
use crate::registry::{Demo, PLACEHOLDER, Registry};
use crate::render::{Renderer, TerminalSurface};
use crate::theme::{Painter, Theme};
use crate::ui::{DemoContext, Ui};

/// Shown by `hello list` for the placeholder entry.
const PLACEHOLDER_SUMMARY: &str = "Introduction (shown when no demo is picked)";

/// The gallery with its resolved configuration.
#[derive(Debug, Clone)]
pub struct App {
    config: Config,
    registry: Registry,
}

impl App {
    /// Builds the app over the built-in demos.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self::with_registry(config, Registry::builtin())
    }

    #[must_use]
    pub const fn with_registry(config: Config, registry: Registry) -> Self {
        Self { config, registry }
    }

    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub const fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Dispatches the parsed command line against stdin and stdout.
    ///
    /// # Errors
    ///
    /// Any [`GalleryError`] from the selected command.
    pub fn run(&self, cli: &Cli) -> Result<()> {
        let stdout = io::stdout();
        match &cli.command {
            Some(Command::List) => self.list(&mut stdout.lock())?,
            Some(Command::Source { demo }) => self.source(demo, &mut stdout.lock())?,
            Some(Command::Diagnostics) => self.diagnostics(&mut stdout.lock())?,
            None => self.show(cli.demo.as_deref())?,
        }
        Ok(())
    }

    /// One line per demo: index, name and the first line of its doc.
    ///
    /// # Errors
    ///
    /// Returns any error from `out`.
    pub fn list(&self, out: &mut impl Write) -> io::Result<()> {
        if self.registry.is_empty() {
            return writeln!(out, "No demos registered.");
        }
        for (index, demo) in self.registry.iter().enumerate() {
            let summary = if demo.is_placeholder() {
                PLACEHOLDER_SUMMARY.to_owned()
            } else {
                demo.summary().unwrap_or_default()
            };
            writeln!(out, "{index:>2}  {:<18}{summary}", demo.name)?;
        }
        Ok(())
    }

    /// Prints the code listing of a demo, undecorated.
    ///
    /// # Errors
    ///
    /// [`GalleryError::UnknownDemo`] for no match, [`GalleryError::NoSource`]
    /// for the placeholder.
    pub fn source(&self, query: &str, out: &mut impl Write) -> Result<()> {
        let demo = self.resolve(query)?;
        let listing = demo
            .listing()
            .ok_or_else(|| GalleryError::NoSource(demo.name.to_owned()))?;
        writeln!(out, "{listing}")?;
        Ok(())
    }

    /// Version, resolved configuration and demo count.
    ///
    /// # Errors
    ///
    /// Returns any error from `out`.
    pub fn diagnostics(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "hello {}", env!("CARGO_PKG_VERSION"))?;
        writeln!(out, "{}", self.config.to_diagnostic_string())?;
        writeln!(out, "Color in use: {}", self.config.use_color())?;
        writeln!(out, "Width in use: {}", self.config.effective_width())?;
        writeln!(out, "Demos: {}", self.registry.len())
    }

    /// Runs a demo on stdout. Without a name the menu is shown when stdin is
    /// a terminal, and the placeholder otherwise.
    ///
    /// # Errors
    ///
    /// Any [`GalleryError`] from resolving, running or drawing the demo.
    pub fn show(&self, query: Option<&str>) -> Result<()> {
        let stdout = io::stdout();
        let demo = match query {
            Some(query) => self.resolve(query)?,
            None if io::stdin().is_terminal() => {
                menu::choose(&self.registry, &mut io::stdin().lock(), &mut stdout.lock())?
            }
            None => self.resolve(PLACEHOLDER)?,
        };

        let live = self.config.animations && stdout.is_terminal();
        drop(self.render_to(demo, stdout.lock(), live)?);
        Ok(())
    }

    /// Runs `demo` and draws the page to `out`, returning the writer.
    ///
    /// # Errors
    ///
    /// Any [`GalleryError`] from running or drawing the demo.
    pub fn render_to<W: Write>(&self, demo: &Demo, out: W, live: bool) -> Result<W> {
        let width = self.config.effective_width();
        let painter = Painter::new(
            Theme::from_preset(self.config.theme),
            self.config.use_color(),
        );
        let mut surface = TerminalSurface::new(out, Renderer::new(painter, width), live);
        if live {
            if let Ok((_, rows)) = crossterm::terminal::size() {
                surface = surface.with_max_rewind(usize::from(rows).saturating_sub(1));
            }
        }

        let seed = self.config.effective_seed();
        tracing::debug!(seed, width, live, "drawing demo");
        let context = DemoContext::new(seed)
            .with_inputs(self.config.inputs.clone())
            .with_animation(live)
            .with_width(width);

        let mut ui = Ui::new(&mut surface, context);
        Dispatcher::new(&self.registry).run(demo, &mut ui)?;
        ui.finish()?;
        Ok(surface.into_inner())
    }

    fn resolve(&self, query: &str) -> Result<&Demo> {
        self.registry
            .resolve(query)
            .ok_or_else(|| GalleryError::UnknownDemo(query.to_owned()))
    }
}
