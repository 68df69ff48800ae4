//! Tile board layout and drawing.
//!
//! The board divides the terminal into a per-mode grid of colored tiles
//! with a gutter between them. Layout is computed once per session from the
//! terminal size; hit-testing maps a mouse cell back to a tile index.

use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor};
use crossterm::{cursor, queue};
use simon_core::Mode;
use std::io::{self, Write};

/// Horizontal gutter between tiles and around the board, in cells.
const H_GAP: u16 = 2;
/// Vertical gutter, half the horizontal one since cells are tall.
const V_GAP: u16 = 1;

/// How much each color channel is raised while a tile is lit.
const BLINK_BOOST: u8 = 100;

/// Tile fill colors, one per board position.
pub const TILE_COLORS: [(u8, u8, u8); 9] = [
    (200, 0, 0),
    (0, 200, 0),
    (0, 0, 200),
    (200, 200, 0),
    (200, 0, 200),
    (0, 200, 200),
    (155, 155, 155),
    (255, 127, 0),
    (128, 0, 0),
];

/// A rectangle of terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl Rect {
    pub fn contains(&self, col: u16, row: u16) -> bool {
        col >= self.x && col < self.x + self.w && row >= self.y && row < self.y + self.h
    }

    pub fn center_row(&self) -> u16 {
        self.y + self.h / 2
    }
}

/// Grid dimensions (columns, rows) for a mode's board.
pub fn grid_shape(mode: Mode) -> (u16, u16) {
    match mode {
        Mode::FourTile => (2, 2),
        Mode::SixTile => (3, 2),
        Mode::NineTile => (3, 3),
    }
}

/// Brightened version of a tile color, used while the tile is lit.
pub fn highlight((r, g, b): (u8, u8, u8)) -> (u8, u8, u8) {
    (
        r.saturating_add(BLINK_BOOST),
        g.saturating_add(BLINK_BOOST),
        b.saturating_add(BLINK_BOOST),
    )
}

pub fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb { r, g, b }
}

/// The tile grid of one game session, laid out for a fixed terminal size.
pub struct Board {
    tiles: Vec<Rect>,
}

impl Board {
    /// Lay out the board for `mode` on a `term_w` x `term_h` terminal.
    ///
    /// Tiles are stored row-major, so tile index i sits at column
    /// `i % cols`, row `i / cols`. Degenerate terminal sizes still produce
    /// a usable layout with 1x1 tiles.
    pub fn layout(mode: Mode, term_w: u16, term_h: u16) -> Self {
        let (cols, rows) = grid_shape(mode);
        let tile_w = (term_w.saturating_sub((cols + 1) * H_GAP) / cols).max(1);
        let tile_h = (term_h.saturating_sub((rows + 1) * V_GAP) / rows).max(1);

        let mut tiles = Vec::with_capacity((cols * rows) as usize);
        for row in 0..rows {
            for col in 0..cols {
                tiles.push(Rect {
                    x: H_GAP + col * (tile_w + H_GAP),
                    y: V_GAP + row * (tile_h + V_GAP),
                    w: tile_w,
                    h: tile_h,
                });
            }
        }
        Self { tiles }
    }

    /// Which tile, if any, covers the given cell. Gutter cells map to `None`.
    pub fn hit_test(&self, col: u16, row: u16) -> Option<usize> {
        self.tiles.iter().position(|rect| rect.contains(col, row))
    }

    /// Repaint every tile, with `lit` (if any) drawn in its brightened color.
    pub fn draw(&self, out: &mut impl Write, lit: Option<usize>) -> io::Result<()> {
        for (i, rect) in self.tiles.iter().enumerate() {
            let mut color = TILE_COLORS[i];
            if lit == Some(i) {
                color = highlight(color);
            }
            fill_rect(out, *rect, color)?;
        }
        queue!(out, ResetColor)?;
        out.flush()
    }
}

/// Fill a rectangle with a solid background color.
///
/// Leaves the background color set so a following label print on the same
/// rectangle inherits it; callers reset when done.
pub fn fill_rect(out: &mut impl Write, rect: Rect, color: (u8, u8, u8)) -> io::Result<()> {
    queue!(out, SetBackgroundColor(rgb(color)))?;
    let blank = " ".repeat(rect.w as usize);
    for row in rect.y..rect.y + rect.h {
        queue!(out, cursor::MoveTo(rect.x, row), Print(&blank))?;
    }
    Ok(())
}

/// Print `text` centered within the horizontal span `[x, x + width)`.
pub fn print_centered(
    out: &mut impl Write,
    x: u16,
    width: u16,
    row: u16,
    text: &str,
) -> io::Result<()> {
    let col = x + width.saturating_sub(text.chars().count() as u16) / 2;
    queue!(out, cursor::MoveTo(col, row), Print(text))
}
