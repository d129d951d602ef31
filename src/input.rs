//! Key-event mapping for the game screens.
//!
//! Raw crossterm events become a small input vocabulary here; what an
//! input *means* is decided per-screen by the app state machine (a `q`
//! quits on menu screens but is a letter during name entry).

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Inputs the state machine understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppInput {
    /// Space or Up: flap, and start/restart on menu screens.
    Flap,
    /// Enter.
    Confirm,
    /// Backspace.
    Backspace,
    /// Esc or Ctrl-C: quit from any screen.
    Quit,
    /// Any other character key.
    Char(char),
    /// Anything else.
    Other,
}

/// Map one key event to an [`AppInput`].
pub fn map_key(key: KeyEvent) -> AppInput {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return AppInput::Quit;
    }
    match key.code {
        KeyCode::Esc => AppInput::Quit,
        KeyCode::Enter => AppInput::Confirm,
        KeyCode::Backspace => AppInput::Backspace,
        KeyCode::Char(' ') | KeyCode::Up => AppInput::Flap,
        KeyCode::Char(c) => AppInput::Char(c),
        _ => AppInput::Other,
    }
}
