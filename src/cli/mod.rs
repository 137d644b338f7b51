//! Launch flags: seed the widget's initial state.

mod flags;
mod parse;

pub use flags::CliFlags;
pub use parse::{ParseError, parse};

use log::debug;

use crate::error::Result;
use crate::settings::Settings;
use crate::tui;

pub fn run(args: Vec<String>) -> Result<()> {
    let flags = parse(&args)?;

    if flags.help {
        tui::print_help();
        return Ok(());
    }
    if flags.version {
        println!("passgen {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let settings = Settings::with_flags(&flags);
    debug!("starting with {settings:?}");

    tui::run(&settings)
}
