//! Turning page elements into terminal text.
//!
//! [`Renderer`] maps one [`Element`] to a block of lines. The
//! [`TerminalSurface`] decides when those lines are written.

mod chart;
mod markdown;
mod raster;
mod table;
mod terminal;

use unicode_width::UnicodeWidthStr;

pub use chart::{line_chart, progress_bar, sparkline};
pub use markdown::render_markdown;
pub use raster::{SHADES, hot};
pub use table::render_table;
pub use terminal::TerminalSurface;

use crate::config::MIN_WIDTH;
use crate::theme::Painter;
use crate::ui::Element;

/// Stateless element renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Renderer {
    painter: Painter,
    width: usize,
}

impl Renderer {
    /// `width` is raised to [`MIN_WIDTH`] if narrower.
    #[must_use]
    pub fn new(painter: Painter, width: usize) -> Self {
        Self {
            painter,
            width: width.max(MIN_WIDTH),
        }
    }

    /// No color, for tests and piped output.
    #[must_use]
    pub fn plain(width: usize) -> Self {
        Self::new(Painter::plain(), width)
    }

    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub const fn painter(&self) -> &Painter {
        &self.painter
    }

    /// Renders `element` without a trailing newline. [`Element::Empty`]
    /// renders as the empty string and takes no lines.
    #[must_use]
    pub fn render(&self, element: &Element) -> String {
        let painter = &self.painter;
        let theme = painter.theme();
        match element {
            Element::Title(text) => {
                let underline = "═".repeat(text.width().min(self.width));
                format!(
                    "{}\n{}",
                    painter.strong(text, theme.primary),
                    painter.fg(&underline, theme.primary)
                )
            }
            Element::Markdown(text) => render_markdown(text, painter, self.width),
            Element::Text(text) => text.clone(),
            Element::Divider => painter.fg(&"─".repeat(self.width), theme.border),
            Element::LineChart(values) => line_chart(values, painter, self.width),
            Element::Progress(percent) => progress_bar(*percent, painter, self.width),
            Element::Success(text) => painter.fg(&format!("✔ {text}"), theme.success),
            Element::Info(text) => painter.fg(&format!("ℹ {text}"), theme.info),
            Element::Error(text) => painter.fg(&format!("✖ {text}"), theme.error),
            Element::Code { language, text } => self.code_panel(language, text),
            Element::Table { headers, rows } => render_table(headers, rows, painter),
            Element::Raster(raster) => raster::render_raster(raster, painter),
            Element::Widget { label, value } => {
                let shown = if value.is_empty() {
                    painter.muted("(empty)")
                } else {
                    painter.strong(value, theme.text)
                };
                format!("{} {shown}", painter.muted(&format!("{label}:")))
            }
            Element::Button(label) => painter.strong(&format!("[ {label} ]"), theme.primary),
            Element::Balloons => ["🎈"; 5].join("  "),
            Element::Empty => String::new(),
        }
    }

    fn code_panel(&self, language: &str, text: &str) -> String {
        let painter = &self.painter;
        let label = if language.is_empty() {
            String::new()
        } else {
            format!(" {language} ")
        };
        let fill = self.width.saturating_sub(2 + label.width());

        let mut lines = Vec::new();
        lines.push(painter.muted(&format!("╭─{label}{}", "─".repeat(fill))));
        for line in text.lines() {
            lines.push(format!("{} {line}", painter.muted("│")).trim_end().to_owned());
        }
        lines.push(painter.muted(&format!("╰{}", "─".repeat(self.width - 1))));
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;

    fn plain() -> Renderer {
        Renderer::plain(30)
    }

    #[test]
    fn width_is_raised_to_minimum() {
        assert_eq!(Renderer::plain(3).width(), MIN_WIDTH);
    }

    #[test]
    fn code_panel_snapshot() {
        let panel = plain().render(&Element::Code {
            language: "rust".to_owned(),
            text: "let x = 1;\n\nx + 1".to_owned(),
        });
        insta::assert_snapshot!(panel, @r"
        ╭─ rust ──────────────────────
        │ let x = 1;
        │
        │ x + 1
        ╰─────────────────────────────
        ");
    }

    #[test]
    fn simple_elements_in_plain_mode() {
        let r = plain();
        assert_eq!(r.render(&Element::Empty), "");
        assert_eq!(r.render(&Element::text("as is")), "as is");
        assert_eq!(r.render(&Element::success("Complete!")), "✔ Complete!");
        assert_eq!(r.render(&Element::Button("Re-run".into())), "[ Re-run ]");
        assert_eq!(r.render(&Element::Divider), "─".repeat(30));
        assert_eq!(
            r.render(&Element::Title("Hi".into())),
            "Hi\n══"
        );
    }

    #[test]
    fn widgets_show_label_and_value() {
        let r = plain();
        let filled = Element::Widget {
            label: "Your name".into(),
            value: "Ada".into(),
        };
        let blank = Element::Widget {
            label: "Your name".into(),
            value: String::new(),
        };
        assert_eq!(r.render(&filled), "Your name: Ada");
        assert_eq!(r.render(&blank), "Your name: (empty)");
    }

    #[test]
    fn color_mode_adds_escapes() {
        let r = Renderer::new(Painter::new(Theme::dracula(), true), 40);
        assert!(r.render(&Element::success("ok")).contains("\u{1b}["));
        assert!(!plain().render(&Element::success("ok")).contains('\u{1b}'));
    }
}
