//! Line charts and progress bars.

use crate::theme::Painter;

/// Eight bar heights, lowest first.
const BLOCKS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// One row of block characters for the last `width` values, scaled between
/// their minimum and maximum. Non-finite values draw as a space.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn sparkline(values: &[f64], width: usize) -> String {
    let tail = &values[values.len().saturating_sub(width)..];
    let Some((low, high)) = bounds(tail) else {
        return " ".repeat(tail.len());
    };
    let span = high - low;

    tail.iter()
        .map(|&value| {
            if !value.is_finite() {
                ' '
            } else if span <= f64::EPSILON {
                BLOCKS[BLOCKS.len() / 2 - 1]
            } else {
                let level = ((value - low) / span * 7.0).round() as usize;
                BLOCKS[level.min(BLOCKS.len() - 1)]
            }
        })
        .collect()
}

fn bounds(values: &[f64]) -> Option<(f64, f64)> {
    values
        .iter()
        .copied()
        .filter(|value| value.is_finite())
        .fold(None, |acc, value| match acc {
            None => Some((value, value)),
            Some((low, high)) => Some((low.min(value), high.max(value))),
        })
}

/// Sparkline plus a legend with the range of the visible values.
#[must_use]
pub fn line_chart(values: &[f64], painter: &Painter, width: usize) -> String {
    let tail = &values[values.len().saturating_sub(width)..];
    let Some((low, high)) = bounds(tail) else {
        return painter.muted("(no data)");
    };
    let theme = painter.theme();
    let spark = painter.fg(&sparkline(values, width), theme.primary);
    let legend = format!(
        "min {low:.2}  max {high:.2}  showing {} of {} points",
        tail.len(),
        values.len()
    );
    format!("{spark}\n{}", painter.muted(&legend))
}

/// `[#####.....]  42%`, filling `width` columns.
#[must_use]
pub fn progress_bar(percent: u8, painter: &Painter, width: usize) -> String {
    let percent = percent.min(100);
    // Brackets, a space and "100%".
    let inner = width.saturating_sub(7).max(10);
    let filled = inner * usize::from(percent) / 100;
    let theme = painter.theme();
    format!(
        "[{}{}] {percent:>3}%",
        painter.fg(&"#".repeat(filled), theme.primary),
        painter.muted(&".".repeat(inner - filled)),
    )
}
