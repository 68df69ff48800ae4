use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use std::io;
use std::time::Duration;
use tracing::debug;

/// A user action the game loops care about.
///
/// Everything else the terminal reports (key releases, mouse movement,
/// resizes) is dropped at translation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    /// Esc, q or Ctrl+C. In raw mode Ctrl+C arrives as a key event rather
    /// than a signal, so it is handled here as well as in the ctrlc handler.
    Quit,
    /// Left mouse press at the given cell position.
    Click { col: u16, row: u16 },
    /// Keys 1-3, used by the home menu to pick a mode.
    ModeKey(u8),
    /// Space. Sound is not wired up, the driver only logs the press.
    ToggleSound,
}

/// Poll for the next interesting event, waiting at most `timeout`.
pub fn poll_event(timeout: Duration) -> io::Result<Option<UiEvent>> {
    if event::poll(timeout)? {
        Ok(translate(&event::read()?))
    } else {
        Ok(None)
    }
}

/// Throw away everything queued up while the pattern was playing.
///
/// Clicks made during the replay must not count as answers, so the queue
/// is emptied before the input phase starts.
pub fn drain_pending() -> io::Result<usize> {
    let mut drained = 0;
    while event::poll(Duration::ZERO)? {
        event::read()?;
        drained += 1;
    }
    if drained > 0 {
        debug!("Discarded {} events queued during replay", drained);
    }
    Ok(drained)
}

fn translate(event: &Event) -> Option<UiEvent> {
    match event {
        Event::Key(key) => translate_key(key),
        Event::Mouse(mouse) => translate_mouse(mouse),
        _ => None,
    }
}

fn translate_key(event: &KeyEvent) -> Option<UiEvent> {
    if event.kind != KeyEventKind::Press {
        return None;
    }
    match event.code {
        KeyCode::Esc => Some(UiEvent::Quit),
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(UiEvent::Quit),
        KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(UiEvent::Quit)
        }
        KeyCode::Char(' ') => Some(UiEvent::ToggleSound),
        KeyCode::Char(c @ '1'..='3') => Some(UiEvent::ModeKey(c as u8 - b'0')),
        _ => None,
    }
}

fn translate_mouse(event: &MouseEvent) -> Option<UiEvent> {
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(UiEvent::Click {
            col: event.column,
            row: event.row,
        }),
        _ => None,
    }
}
