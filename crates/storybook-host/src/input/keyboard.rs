use std::{io, time::Duration};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::debug;
use storybook_core::input::{InputEvent, InputProvider};

/// Non-blocking terminal keyboard input. Requires raw mode.
#[derive(Debug, Default)]
pub struct KeyboardInput;

impl KeyboardInput {
    pub const fn new() -> Self {
        Self
    }
}

impl InputProvider for KeyboardInput {
    type Error = io::Error;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error> {
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if let Some(mapped) = map_key(key) {
                    return Ok(Some(mapped));
                }
                debug!("input: unmapped key {:?}", key.code);
            }
        }
        Ok(None)
    }
}

/// Key bindings: arrows or h/l turn pages, Enter opens, Esc/Backspace/b go
/// back, r reads aloud, 1-9 jump to that page number, f toggles fullscreen,
/// q quits.
pub fn map_key(key: KeyEvent) -> Option<InputEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(InputEvent::Exit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Right | KeyCode::Down | KeyCode::Char('l' | 'n' | ' ') => Some(InputEvent::Next),
        KeyCode::Left | KeyCode::Up | KeyCode::Char('h' | 'p') => Some(InputEvent::Previous),
        KeyCode::Enter => Some(InputEvent::Select),
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => Some(InputEvent::Back),
        KeyCode::Char('r') => Some(InputEvent::ReadAloud),
        KeyCode::Char('f') => Some(InputEvent::ToggleFullscreen),
        KeyCode::Char('q') => Some(InputEvent::Exit),
        // Page numbers on screen start at 1; positions start at 0.
        KeyCode::Char(digit @ '1'..='9') => {
            Some(InputEvent::JumpTo(digit as u16 - '1' as u16))
        }
        _ => None,
    }
}
