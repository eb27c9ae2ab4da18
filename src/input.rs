//! Maps terminal key events onto game inputs.

use crate::game::GameInput;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Translate a key press. Key releases and repeats on terminals that
/// report them are treated as `Other`.
pub fn map_key(key: KeyEvent) -> GameInput {
    if key.kind != KeyEventKind::Press {
        return GameInput::Other;
    }
    match key.code {
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter => GameInput::Jump,
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => GameInput::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => GameInput::Quit,
        _ => GameInput::Other,
    }
}

/// Translate any terminal event. Only key presses matter.
pub fn map_event(event: Event) -> Option<GameInput> {
    match event {
        Event::Key(key) => Some(map_key(key)),
        _ => None,
    }
}
