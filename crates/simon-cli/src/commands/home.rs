//! The home menu: an all-time-high-scores band on top, one selectable row
//! per mode below it.
//!
//! The menu redraws after every session, which re-reads the score file and
//! re-rolls the row colors, exactly the rhythm of picking a mode, playing a
//! run and landing back on fresh standings.

use anyhow::Result;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::{cursor, queue};
use rand::Rng;
use rand::rngs::StdRng;
use simon_core::{GameConfig, HighScores, Mode, ScoreStore};
use std::io::{self, Write};
use tracing::{debug, info};

use crate::board::{Rect, fill_rect, print_centered};
use crate::commands::play::{self, SessionOutcome};
use crate::input::{self, UiEvent};
use crate::shutdown::QuitSignal;

/// Run the home menu until the player quits.
pub fn run(
    store: &ScoreStore,
    config: &GameConfig,
    rng: &mut StdRng,
    quit: &QuitSignal,
) -> Result<()> {
    let mut out = io::stdout();

    loop {
        let (term_w, term_h) = terminal::size()?;
        let rows = menu_rows(term_w, term_h);
        let scores = store.load()?;
        draw_menu(&mut out, &rows, &scores, rng)?;
        input::drain_pending()?;

        // Poll until a mode is picked or the player quits
        let mode = loop {
            if quit.is_quit() {
                return Ok(());
            }
            let Some(event) = input::poll_event(config.tick)? else {
                continue;
            };
            match event {
                UiEvent::Quit => {
                    info!("Quitting the game!");
                    return Ok(());
                }
                UiEvent::ModeKey(n) => {
                    if let Some(mode) = Mode::from_u8(n) {
                        break mode;
                    }
                }
                UiEvent::Click { col, row } => {
                    if let Some(mode) = selection_at(&rows, col, row) {
                        break mode;
                    }
                }
                UiEvent::ToggleSound => {}
            }
        };

        match play::run_session(mode, store, config, rng, quit)? {
            SessionOutcome::Finished(score) => {
                debug!("Session over with score {}, back to the menu", score);
            }
            SessionOutcome::Quit => return Ok(()),
        }
    }
}

/// Four equal horizontal bands: scores row on top, then one row per mode.
fn menu_rows(term_w: u16, term_h: u16) -> [Rect; 4] {
    let row_h = (term_h / 4).max(1);
    std::array::from_fn(|i| Rect {
        x: 0,
        y: i as u16 * row_h,
        w: term_w,
        h: row_h,
    })
}

/// Map a click to the mode of the row it landed on.
///
/// The scores row selects nothing, and neither does the leftover strip
/// below the last row when the height is not divisible by four.
fn selection_at(rows: &[Rect; 4], col: u16, row: u16) -> Option<Mode> {
    let index = rows.iter().position(|r| r.contains(col, row))?;
    match index {
        0 => None,
        n => Mode::from_u8(n as u8),
    }
}

/// Rotate an rgb triple one channel to the left.
fn triad((r, g, b): (u8, u8, u8)) -> (u8, u8, u8) {
    (g, b, r)
}

fn draw_menu(
    out: &mut impl Write,
    rows: &[Rect; 4],
    scores: &HighScores,
    rng: &mut StdRng,
) -> io::Result<()> {
    queue!(out, Clear(ClearType::All))?;

    for (i, mode) in Mode::ALL.iter().enumerate() {
        let rect = rows[i + 1];
        fill_rect(out, rect, (100, rng.gen_range(150..=255), 100))?;
        queue!(
            out,
            SetForegroundColor(Color::Black),
            SetAttribute(Attribute::Bold)
        )?;
        let label = format!(
            "(Mode {})  Play With {} Tiles",
            u8::from(*mode),
            mode.tile_count()
        );
        print_centered(out, rect.x, rect.w, rect.center_row(), &label)?;
        queue!(out, SetAttribute(Attribute::Reset), ResetColor)?;
    }

    draw_scores_row(out, rows[0], scores, rng)?;
    out.flush()
}

fn draw_scores_row(
    out: &mut impl Write,
    rect: Rect,
    scores: &HighScores,
    rng: &mut StdRng,
) -> io::Result<()> {
    // Rotating the channels of the row's random green lands the scores row
    // on a matching reddish tone
    let fill = triad((100, rng.gen_range(150..=255), 100));
    fill_rect(out, rect, fill)?;

    queue!(
        out,
        SetForegroundColor(Color::Black),
        SetAttribute(Attribute::Bold)
    )?;
    print_centered(out, rect.x, rect.w, rect.y + rect.h / 4, "All Time High Scores")?;
    queue!(out, SetAttribute(Attribute::NormalIntensity))?;

    // One cell per mode in the lower half of the band
    let cell_w = rect.w / 3;
    let cell_row = rect.y + rect.h / 2 + rect.h / 4;
    for (i, mode) in Mode::ALL.iter().enumerate() {
        let best = scores.best_for(*mode).map_or(0, |record| record.score);
        let text = format!(" Mode {}: {}", u8::from(*mode), best);
        queue!(
            out,
            cursor::MoveTo(rect.x + cell_w * i as u16, cell_row),
            Print(text)
        )?;
    }
    queue!(out, SetAttribute(Attribute::Reset), ResetColor)?;
    Ok(())
}
