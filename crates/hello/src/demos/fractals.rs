use std::f64::consts::TAU;
use std::time::Duration;

use super::linspace;
use crate::ui::{Element, Raster, Ui};

pub fn fractals(ui: &mut Ui<'_>) -> anyhow::Result<()> {
    /*!
    Fractal! This small app lets you explore the Julia sets of
    z ↦ z² + c, with c = 0.7885·e^(ia) walking once around a circle.
    Raise the iteration count for finer detail.
    */
    let iterations = usize::try_from(ui.slider("Iterations", 0, 250, 100)?)?;
    let width = ui.width().min(72);
    let height = width / 3;

    let plot = ui.empty()?;
    for a in linspace(0.0, TAU, 15) {
        let c = (0.7885 * a.cos(), 0.7885 * a.sin());
        ui.set(plot, Element::Raster(julia(c, width, height, iterations)))?;
        ui.sleep(Duration::from_millis(100));
    }
    Ok(())
}

/// Escape-time grid for `z ↦ z² + c` over `[-1.6, 1.6] × [-1.07, 1.07]`.
///
/// Each cell holds the last iteration at which its orbit was still inside
/// the radius-2 disc, so points that escape at once are 0.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn julia(c: (f64, f64), width: usize, height: usize, iterations: usize) -> Raster {
    let (x_max, y_max) = (1.6, 16.0 / 15.0);
    let xs = linspace(-x_max, x_max, width);
    // Top row first.
    let ys = linspace(y_max, -y_max, height);

    Raster::from_fn(width, height, |col, row| {
        let (mut re, mut im) = (xs[col], ys[row]);
        let mut last = 0;
        for i in 0..iterations {
            (re, im) = (re * re - im * im + c.0, 2.0 * re * im + c.1);
            if re * re + im * im > 4.0 {
                break;
            }
            last = i;
        }
        last as f64
    })
}
