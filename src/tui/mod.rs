//! Interactive terminal widget.

mod form;
mod input;
mod text;

use std::time::{Duration, Instant};

use crossterm::event::{self, Event};
use log::debug;

use form::Form;
use input::{Action, action};
use text::render;

pub use text::print_help;

use crate::clipboard::SystemClipboard;
use crate::error::Result;
use crate::rand::Rand;
use crate::settings::Settings;
use crate::terminal::Screen;

/// Redraw interval when no confirmation is pending.
const IDLE_POLL: Duration = Duration::from_secs(30);

/// Run the widget until the user quits.
pub fn run(settings: &Settings) -> Result<()> {
    let mut form = Form::new(settings);
    let mut rng = Rand::new();
    let mut clipboard = SystemClipboard::new();
    let mut show_help = false;

    if settings.generate_on_start {
        form.submit(&mut rng);
    }

    let mut screen = Screen::enter()?;

    loop {
        let now = Instant::now();
        screen.draw(&render(&form, show_help, now))?;

        let timeout = form.feedback().remaining(now).unwrap_or(IDLE_POLL);
        if !event::poll(timeout)? {
            continue;
        }

        let Event::Key(key) = event::read()? else {
            continue;
        };
        let Some(action) = action(key) else {
            continue;
        };

        match action {
            Action::Quit => break,
            Action::Help => show_help = !show_help,
            Action::Shorter => form.slider.decrease(),
            Action::Longer => form.slider.increase(),
            Action::Toggle(class) => form.toggle(class),
            Action::Generate => {
                let outcome = form.submit(&mut rng);
                debug!("submit: {outcome:?}");
            }
            Action::Copy => {
                form.copy(&mut clipboard, Instant::now());
            }
        }
    }

    screen.leave();
    Ok(())
}
