use std::f64::consts::PI;
use std::time::Duration;

use super::linspace;
use crate::ui::{Element, Ui};

pub fn sinc(ui: &mut Ui<'_>) -> anyhow::Result<()> {
    /*!
    The normalized sinc function, sin(πx)/(πx), sampled at a hundred points
    between -5 and 5. Every frame squeezes the curve a little more.
    */
    let chart = ui.line_chart(sinc_curve(1.0))?;
    let progress_bar = ui.progress(0)?;
    let success = ui.empty()?;

    for i in 1..=100u8 {
        ui.set(chart, Element::LineChart(sinc_curve(f64::from(i))))?;
        ui.set(progress_bar, Element::Progress(i))?;
        ui.sleep(Duration::from_millis(100));
    }

    ui.clear(progress_bar)?;
    ui.set(success, Element::success("Complete!"))?;
    ui.button("Re-run")?;
    Ok(())
}

fn sinc_curve(scale: f64) -> Vec<f64> {
    linspace(-5.0, 5.0, 100)
        .into_iter()
        .map(|x| normalized_sinc(x * scale))
        .collect()
}

/// `sin(πx) / (πx)`, with the removable singularity filled in: `sinc(0) = 1`.
pub(crate) fn normalized_sinc(x: f64) -> f64 {
    if x.abs() < f64::EPSILON {
        1.0
    } else {
        let px = PI * x;
        px.sin() / px
    }
}
