use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode,
};
use crossterm::{cursor, execute};
use std::io;

/// Window title of the game screen.
const GAME_TITLE: &str = "Simon Says (WHAT?!)";

/// Guard that owns the game's terminal state.
///
/// Entering switches to the alternate screen in raw mode with mouse capture
/// on and the cursor hidden; dropping restores everything, also on the error
/// and quit paths.
pub struct Screen(());

impl Screen {
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        execute!(
            io::stdout(),
            EnterAlternateScreen,
            EnableMouseCapture,
            SetTitle(GAME_TITLE),
            cursor::Hide,
        )?;
        Ok(Self(()))
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        // Restore best-effort; there is no useful way to report failure here
        let _ = execute!(
            io::stdout(),
            cursor::Show,
            DisableMouseCapture,
            LeaveAlternateScreen,
        );
        let _ = disable_raw_mode();
    }
}
