//! Key mapping for the terminal host.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press asks the host to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostAction {
    Submit,
    HistoryPrev,
    HistoryNext,
    /// Ctrl+C: stop the active render, or drop the typed input.
    Interrupt,
    ClearScreen,
    Quit,
    Backspace,
    Insert(char),
    Ignore,
}

pub fn map_key(key: KeyEvent, input_empty: bool) -> HostAction {
    if key.kind == KeyEventKind::Release {
        return HostAction::Ignore;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Enter => HostAction::Submit,
        KeyCode::Up => HostAction::HistoryPrev,
        KeyCode::Down => HostAction::HistoryNext,
        KeyCode::Backspace => HostAction::Backspace,
        KeyCode::Char('c') | KeyCode::Char('C') if ctrl => HostAction::Interrupt,
        KeyCode::Char('l') | KeyCode::Char('L') if ctrl => HostAction::ClearScreen,
        KeyCode::Char('d') | KeyCode::Char('D') if ctrl => {
            if input_empty {
                HostAction::Quit
            } else {
                HostAction::Ignore
            }
        }
        _ if ctrl => HostAction::Ignore,
        KeyCode::Char(ch) => HostAction::Insert(ch),
        _ => HostAction::Ignore,
    }
}
