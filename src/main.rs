use std::env;
use std::process;

use log::error;

mod cli;
mod clipboard;
mod error;
mod exits;
mod logging;
mod pass;
mod rand;
mod settings;
mod terminal;
mod tui;

use error::Error;

fn main() {
    logging::init();
    exits::install_handlers();
    exits::harden_process();

    let args: Vec<String> = env::args().collect();

    if let Err(e) = cli::run(args) {
        terminal::reset_terminal();
        match &e {
            Error::Parse(_) => {
                eprintln!("{e}");
                eprintln!("Try `passgen --help` for usage.");
                process::exit(2);
            }
            _ => {
                error!("{e}");
                process::exit(1);
            }
        }
    }
}
