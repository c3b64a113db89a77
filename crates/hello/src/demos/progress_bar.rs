use std::time::Duration;

use crate::ui::{Element, Ui};

pub fn progress_bar(ui: &mut Ui<'_>) -> anyhow::Result<()> {
    /*!
    This demo shows how to build a progress bar that fills up over about
    ten seconds, with a percentage counter that follows along.
    */
    let progress_text = ui.text("0%")?;
    let progress_bar = ui.progress(0)?;
    let success = ui.empty()?;

    for percent_complete in 1..=100 {
        ui.set(progress_text, Element::text(format!("{percent_complete}%")))?;
        ui.set(progress_bar, Element::Progress(percent_complete))?;
        ui.sleep(Duration::from_millis(100));
    }

    ui.clear(progress_bar)?;
    ui.set(success, Element::success("Complete!"))?;
    ui.balloons()?;
    ui.button("Re-run")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::{DemoContext, RecordingSurface};

    #[test]
    fn ends_complete_with_balloons() {
        let mut surface = RecordingSurface::new();
        let mut ui = Ui::new(&mut surface, DemoContext::new(0));
        progress_bar(&mut ui).unwrap();
        ui.finish().unwrap();

        assert_eq!(
            surface.elements(),
            [
                Element::text("100%"),
                Element::Empty,
                Element::success("Complete!"),
                Element::Balloons,
                Element::Button("Re-run".to_owned()),
            ]
        );
        // 100 text updates, 100 bar updates, the clear and the success.
        assert_eq!(surface.replacements(), 202);
    }
}
