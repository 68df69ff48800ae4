//! CLI command implementations.
//!
//! `home` is what runs without a subcommand; `play` and `scores` back the
//! two subcommands.

pub mod home;
pub mod play;
pub mod scores;
