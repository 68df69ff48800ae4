//! High-score persistence.
//!
//! One record per game mode lives in a single JSON file:
//!
//! - **Records**: fixed-shape entries keyed by mode, best score plus the
//!   moment it was achieved
//! - **Store**: whole-file load/modify/store against an injected path,
//!   seeding defaults when the file does not exist yet
//!
//! The stored best for a mode only ever goes up.

mod record;
mod store;

pub use record::*;
pub use store::*;
