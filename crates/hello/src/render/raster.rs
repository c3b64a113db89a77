//! Intensity grids as shaded characters.

use crate::theme::Painter;
use crate::ui::Raster;

/// Shade ramp from empty to full.
pub const SHADES: [char; 10] = [' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

/// The "hot" colormap: black through red and yellow to white.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn hot(t: f64) -> (u8, u8, u8) {
    let channel = |x: f64| (x.clamp(0.0, 1.0) * 255.0).round() as u8;
    let t = t * 3.0;
    (channel(t), channel(t - 1.0), channel(t - 2.0))
}

/// One character per cell, normalized by the largest intensity.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub(super) fn render_raster(raster: &Raster, painter: &Painter) -> String {
    let max = raster.max();
    let top = (SHADES.len() - 1) as f64;

    let lines: Vec<String> = raster
        .rows()
        .map(|row| {
            row.iter()
                .map(|&value| {
                    let t = if max > 0.0 && value.is_finite() {
                        (value / max).clamp(0.0, 1.0)
                    } else {
                        0.0
                    };
                    let shade = SHADES[(t * top).round() as usize];
                    if shade == ' ' {
                        shade.to_string()
                    } else {
                        painter.rgb(&shade.to_string(), hot(t))
                    }
                })
                .collect()
        })
        .collect();
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;

    #[test]
    fn shades_follow_intensity() {
        let raster = Raster::from_fn(10, 1, |col, _| col as f64);
        assert_eq!(render_raster(&raster, &Painter::plain()), " .:-=+*#%@");
    }

    #[test]
    fn all_zero_raster_is_blank() {
        let raster = Raster::from_fn(3, 2, |_, _| 0.0);
        assert_eq!(render_raster(&raster, &Painter::plain()), "   \n   ");
    }

    #[test]
    fn empty_raster_renders_nothing() {
        let raster = Raster::from_fn(0, 0, |_, _| 1.0);
        assert_eq!(render_raster(&raster, &Painter::plain()), "");
    }

    #[test]
    fn hot_colormap_endpoints() {
        assert_eq!(hot(0.0), (0, 0, 0));
        assert_eq!(hot(1.0), (255, 255, 255));
        assert_eq!(hot(1.0 / 3.0), (255, 0, 0));
    }

    #[test]
    fn color_mode_paints_non_blank_cells() {
        let painter = Painter::new(Theme::dark(), true);
        let raster = Raster::from_fn(2, 1, |col, _| col as f64);
        let rendered = render_raster(&raster, &painter);
        assert!(rendered.starts_with(' '));
        assert!(rendered.contains("\u{1b}["));
    }
}
