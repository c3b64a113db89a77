use std::time::Duration;

use super::randn;
use crate::ui::{Element, Ui};

pub fn random_numbers(ui: &mut Ui<'_>) -> anyhow::Result<()> {
    /*!
    This demo draws a line chart of random numbers and keeps adding to it
    for about 10 seconds, with the latest value above and a progress bar
    below. Enjoy!
    */
    let status_text = ui.empty()?;
    let first_rows = randn(ui.rng(), 10);
    let chart = ui.line_chart(first_rows)?;
    let progress_bar = ui.progress(0)?;
    let success = ui.empty()?;

    for i in 1..=100 {
        let new_rows = randn(ui.rng(), 10);
        if let Some(latest) = new_rows.last() {
            ui.set(
                status_text,
                Element::text(format!("The latest random number is: {latest:.4}")),
            )?;
        }
        ui.add_rows(chart, &new_rows)?;
        ui.set(progress_bar, Element::Progress(i))?;
        ui.sleep(Duration::from_millis(100));
    }

    ui.clear(progress_bar)?;
    ui.set(success, Element::success("Complete!"))?;
    ui.button("Re-run")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::{DemoContext, RecordingSurface};

    #[test]
    fn chart_holds_all_rows_and_bar_is_cleared() {
        let mut surface = RecordingSurface::new();
        let mut ui = Ui::new(&mut surface, DemoContext::new(3));
        random_numbers(&mut ui).unwrap();
        ui.finish().unwrap();

        let elements = surface.elements();
        assert!(
            matches!(&elements[0], Element::Text(text) if text.starts_with("The latest random number is: "))
        );
        assert!(matches!(&elements[1], Element::LineChart(values) if values.len() == 1010));
        assert_eq!(elements[2], Element::Empty);
        assert_eq!(elements[3], Element::success("Complete!"));
        assert_eq!(elements[4], Element::Button("Re-run".to_owned()));
    }

    #[test]
    fn same_seed_same_chart() {
        let run = |seed| {
            let mut surface = RecordingSurface::new();
            let mut ui = Ui::new(&mut surface, DemoContext::new(seed));
            random_numbers(&mut ui).unwrap();
            ui.finish().unwrap();
            surface.elements()[1].clone()
        };
        assert_eq!(run(11), run(11));
        assert_ne!(run(11), run(12));
    }
}
