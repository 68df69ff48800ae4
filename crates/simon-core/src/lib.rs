//! # simon-core
//!
//! Core library for the Simon Says memory game.
//!
//! This crate provides:
//! - Game modes and the growing tile sequence (RoundEngine)
//! - The session state machine (show pattern, accept clicks, score)
//! - High-score records and the file-backed score store
//! - Pacing configuration shared with whatever drives the display
//!
//! Rendering and input polling live with the caller; the core only hands
//! out replay cues (which tile to light, for how long) and consumes
//! already hit-tested tile indices.

pub mod config;
pub mod error;
pub mod game;
pub mod score;

pub use config::{GameConfig, GameConfigBuilder};
pub use error::{Error, Result};
pub use game::{
    Blink, ClickResult, InvalidModeError, Mode, Phase, Playback, RoundEngine, Session,
};
pub use score::{HighScores, ScoreRecord, ScoreStore, unix_now};
