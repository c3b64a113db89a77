use crate::ui::Ui;

const INTRO: &str = "\
The gallery is a handful of small programs that draw charts, fractals and \
tables right in your terminal.

**Pick a demo** from the menu, or name one on the command line, e.g. \
`hello Sinc`. `hello list` shows them all.

Each demo ends with its own source code, so you can see exactly what it \
took to draw it.

- Number Generator: a chart that grows as numbers arrive
- Sinc and Fractals: a little numerics
- Repetitions and Movies: driven by `--input LABEL=VALUE`";

/// Placeholder page shown when no demo is selected.
pub fn intro(ui: &mut Ui<'_>) -> anyhow::Result<()> {
    ui.markdown(INTRO)?;
    ui.info("Run `hello --help` for the options.")?;
    Ok(())
}
