use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::pass::CharClass;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Shorter,
    Longer,
    Toggle(CharClass),
    Generate,
    Copy,
    Help,
    Quit,
}

/// Map a key press to a widget action. Key releases map to nothing.
pub fn action(key: KeyEvent) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        };
    }

    let action = match key.code {
        KeyCode::Left | KeyCode::Down | KeyCode::Char('h') | KeyCode::Char('-') => Action::Shorter,
        KeyCode::Right | KeyCode::Up | KeyCode::Char('l') | KeyCode::Char('+') => Action::Longer,
        KeyCode::Char('1') | KeyCode::Char('u') => Action::Toggle(CharClass::Uppercase),
        KeyCode::Char('2') | KeyCode::Char('o') => Action::Toggle(CharClass::Lowercase),
        KeyCode::Char('3') | KeyCode::Char('n') => Action::Toggle(CharClass::Numbers),
        KeyCode::Char('4') | KeyCode::Char('s') => Action::Toggle(CharClass::Symbols),
        KeyCode::Enter | KeyCode::Char('g') => Action::Generate,
        KeyCode::Char('c') | KeyCode::Char('y') => Action::Copy,
        KeyCode::Char('?') => Action::Help,
        KeyCode::Esc | KeyCode::Char('q') => Action::Quit,
        _ => return None,
    };
    Some(action)
}
