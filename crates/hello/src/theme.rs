//! Theme definitions for the gallery.
//!
//! Provides semantic color tokens and the painting helpers the renderer uses.

use std::fmt;
use std::str::FromStr;

use crossterm::style::{Color, Stylize};
use serde::{Deserialize, Serialize};

// ============================================================================
// Theme Presets
// ============================================================================

/// Theme preset identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreset {
    #[default]
    Dark,
    Light,
    Dracula,
}

impl ThemePreset {
    /// Get the display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Dark => "Dark",
            Self::Light => "Light",
            Self::Dracula => "Dracula",
        }
    }

    /// Get all available presets.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Dark, Self::Light, Self::Dracula]
    }
}

impl fmt::Display for ThemePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a theme name matches no preset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTheme(pub String);

impl FromStr for ThemePreset {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|preset| preset.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownTheme(s.to_owned()))
    }
}

// ============================================================================
// Semantic Color Tokens
// ============================================================================

/// Semantic color tokens for the gallery.
///
/// Colors are stored as hex strings and converted to crossterm colors when
/// painting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Theme preset being used.
    pub preset: ThemePreset,

    /// Brand color, titles and headings.
    pub primary: &'static str,
    /// Secondary accent, inline code and subheadings.
    pub secondary: &'static str,

    /// Complete, positive states.
    pub success: &'static str,
    /// Failed states.
    pub error: &'static str,
    /// Informational, neutral highlight.
    pub info: &'static str,

    /// Primary text.
    pub text: &'static str,
    /// Hints, legends, borders of panels.
    pub text_muted: &'static str,
    /// Dividers and table rules.
    pub border: &'static str,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Create the dark theme (default).
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            preset: ThemePreset::Dark,
            primary: "#7D56F4",
            secondary: "#FF69B4",
            success: "#00FF00",
            error: "#FF0000",
            info: "#00BFFF",
            text: "#FFFFFF",
            text_muted: "#626262",
            border: "#444444",
        }
    }

    /// Create the light theme.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            preset: ThemePreset::Light,
            primary: "#6B46C1",
            secondary: "#D53F8C",
            success: "#38A169",
            error: "#E53E3E",
            info: "#3182CE",
            text: "#1A202C",
            text_muted: "#718096",
            border: "#E2E8F0",
        }
    }

    /// Create the Dracula theme.
    #[must_use]
    pub const fn dracula() -> Self {
        Self {
            preset: ThemePreset::Dracula,
            primary: "#BD93F9",
            secondary: "#FF79C6",
            success: "#50FA7B",
            error: "#FF5555",
            info: "#8BE9FD",
            text: "#F8F8F2",
            text_muted: "#6272A4",
            border: "#44475A",
        }
    }

    /// Create a theme from a preset.
    #[must_use]
    pub const fn from_preset(preset: ThemePreset) -> Self {
        match preset {
            ThemePreset::Dark => Self::dark(),
            ThemePreset::Light => Self::light(),
            ThemePreset::Dracula => Self::dracula(),
        }
    }
}

// ============================================================================
// Painting
// ============================================================================

/// Converts `#RRGGBB` into a crossterm color. Anything else is `Reset`.
#[must_use]
pub fn hex_color(hex: &str) -> Color {
    let digits = hex.trim_start_matches('#');
    if digits.len() != 6 || !digits.is_ascii() {
        return Color::Reset;
    }
    let channel = |at: usize| u8::from_str_radix(&digits[at..at + 2], 16).ok();
    match (channel(0), channel(2), channel(4)) {
        (Some(r), Some(g), Some(b)) => Color::Rgb { r, g, b },
        _ => Color::Reset,
    }
}

/// A theme plus the decision whether to emit escape codes at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Painter {
    theme: Theme,
    color: bool,
}

impl Painter {
    /// Creates a painter. With `color` off every helper returns its input.
    #[must_use]
    pub const fn new(theme: Theme, color: bool) -> Self {
        Self { theme, color }
    }

    /// Plain-text painter, used by tests and piped output.
    #[must_use]
    pub fn plain() -> Self {
        Self::new(Theme::default(), false)
    }

    #[must_use]
    pub const fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Foreground color only.
    #[must_use]
    pub fn fg(&self, text: &str, hex: &str) -> String {
        if self.color {
            text.with(hex_color(hex)).to_string()
        } else {
            text.to_owned()
        }
    }

    /// Bold with a foreground color.
    #[must_use]
    pub fn strong(&self, text: &str, hex: &str) -> String {
        if self.color {
            text.with(hex_color(hex)).bold().to_string()
        } else {
            text.to_owned()
        }
    }

    /// Raw RGB foreground, for colormaps.
    #[must_use]
    pub fn rgb(&self, text: &str, (r, g, b): (u8, u8, u8)) -> String {
        if self.color {
            text.with(Color::Rgb { r, g, b }).to_string()
        } else {
            text.to_owned()
        }
    }

    /// Italic, used for emphasis.
    #[must_use]
    pub fn italic(&self, text: &str) -> String {
        if self.color {
            text.italic().to_string()
        } else {
            text.to_owned()
        }
    }

    /// Bold without changing the color, used for strong emphasis.
    #[must_use]
    pub fn bold(&self, text: &str) -> String {
        if self.color {
            text.bold().to_string()
        } else {
            text.to_owned()
        }
    }

    #[must_use]
    pub fn muted(&self, text: &str) -> String {
        self.fg(text, self.theme.text_muted)
    }
}
