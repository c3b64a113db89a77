use crate::ui::Ui;

pub fn repetitions(ui: &mut Ui<'_>) -> anyhow::Result<()> {
    /*!
    In this demo, we ask you to enter your name in the input box below.
    The gallery will print it out with a number of repetitions given by a
    slider that you can control. Set both from the command line with
    `--input "Your name=Ada" --input Repetitions=3`.
    */
    let name = ui.text_input("Your name")?;
    let repetitions = ui.slider("Repetitions", 1, 100, 10)?;
    ui.write(repeat_name(&name, repetitions))?;
    Ok(())
}

/// `name` repeated `count` times, separated by single spaces.
pub(crate) fn repeat_name(name: &str, count: i64) -> String {
    let count = usize::try_from(count).unwrap_or(0);
    vec![name; count].join(" ")
}
