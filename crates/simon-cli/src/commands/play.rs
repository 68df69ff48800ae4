//! The session driver: one game from first pattern to game over.

use anyhow::Result;
use crossterm::queue;
use crossterm::style::{Attribute, ResetColor, SetAttribute};
use crossterm::terminal::{self, Clear, ClearType};
use rand::rngs::StdRng;
use simon_core::{ClickResult, GameConfig, Mode, ScoreStore, Session, unix_now};
use std::io::{self, Write};
use tracing::{debug, info};

use crate::board::{self, Board};
use crate::input::{self, UiEvent};
use crate::shutdown::QuitSignal;

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The player missed; carries the final score.
    Finished(i64),
    /// The player asked to quit mid-game.
    Quit,
}

/// Drive one session in `mode` until the player misses or quits.
///
/// The loop alternates two stretches: replaying the grown pattern (input is
/// discarded afterwards, so clicks made during the replay never count as
/// answers), then collecting one click per pattern entry. A miss persists
/// the score, shows the game-over screen and returns.
pub fn run_session(
    mode: Mode,
    store: &ScoreStore,
    config: &GameConfig,
    rng: &mut StdRng,
    quit: &QuitSignal,
) -> Result<SessionOutcome> {
    let (term_w, term_h) = terminal::size()?;
    let board = Board::layout(mode, term_w, term_h);
    let mut session = Session::new(mode, config);
    let mut out = io::stdout();

    info!("Starting a {} session", mode);
    queue!(out, Clear(ClearType::All))?;
    board.draw(&mut out, None)?;

    loop {
        // Breather, then extend the pattern and play it back
        if quit.wait(config.replay_gap) {
            return Ok(SessionOutcome::Quit);
        }
        for blink in session.begin_round(rng) {
            board.draw(&mut out, Some(blink.tile))?;
            if quit.wait(blink.hold) {
                return Ok(SessionOutcome::Quit);
            }
            board.draw(&mut out, None)?;
            if quit.wait(blink.hold) {
                return Ok(SessionOutcome::Quit);
            }
        }
        session.replay_done();
        input::drain_pending()?;

        // Input phase: one click per expected pattern entry
        loop {
            if quit.is_quit() {
                return Ok(SessionOutcome::Quit);
            }
            let Some(event) = input::poll_event(config.tick)? else {
                continue;
            };
            match event {
                UiEvent::Quit => {
                    info!("Quitting the game!");
                    return Ok(SessionOutcome::Quit);
                }
                UiEvent::ToggleSound => {
                    debug!("SPACE - (coming soon: (un)mute)");
                }
                UiEvent::ModeKey(_) => {}
                UiEvent::Click { col, row } => {
                    let Some(tile) = board.hit_test(col, row) else {
                        continue;
                    };
                    board.draw(&mut out, Some(tile))?;
                    if quit.wait(config.click_flash) {
                        return Ok(SessionOutcome::Quit);
                    }
                    board.draw(&mut out, None)?;

                    match session.click(tile) {
                        ClickResult::Correct | ClickResult::Ignored => {}
                        ClickResult::RoundComplete => break,
                        ClickResult::Mismatch { score } => {
                            let improved = store.record_if_higher(mode, score, unix_now())?;
                            draw_game_over(&mut out, term_w, term_h, score, improved)?;
                            quit.wait(config.game_over_hold);
                            return Ok(SessionOutcome::Finished(score));
                        }
                    }
                }
            }
        }
    }
}

fn draw_game_over(
    out: &mut impl Write,
    term_w: u16,
    term_h: u16,
    score: i64,
    new_best: bool,
) -> io::Result<()> {
    let title_row = term_h / 4;
    let score_row = term_h / 2;

    queue!(out, Clear(ClearType::All), SetAttribute(Attribute::Bold))?;
    board::print_centered(out, 0, term_w, title_row, "!! GAME OVER !!")?;
    board::print_centered(out, 0, term_w, score_row, &format!("Score: {}", score))?;
    if new_best {
        board::print_centered(out, 0, term_w, score_row + 2, "NEW HIGH SCORE!")?;
    }
    queue!(out, SetAttribute(Attribute::Reset), ResetColor)?;
    out.flush()
}
