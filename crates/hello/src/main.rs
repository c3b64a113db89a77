#![forbid(unsafe_code)]

//! # Hello
//!
//! Runs one gallery demo in the terminal and shows its code.
//!
//! ## Usage
//!
//! ```bash
//! hello                      # menu on a terminal, introduction otherwise
//! hello Sinc                 # run a demo by name
//! hello 5 --no-animations    # by index, final frame only
//! hello Repetitions -i "Your name=Ada" -i Repetitions=3
//! hello list
//! hello source Fractals
//! ```

use hello::App;
use hello::cli::Cli;
use hello::config::Config;
use hello::logging;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_args();
    logging::init(cli.log_level());

    let config = Config::from_cli(&cli)?;
    config.validate()?;
    tracing::debug!(?config, "configuration resolved");

    App::new(config).run(&cli)?;
    Ok(())
}
