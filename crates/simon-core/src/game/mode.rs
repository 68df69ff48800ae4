use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, FromRepr, IntoStaticStr};
use thiserror::Error;

/// Error for an integer that does not name a game mode
#[derive(Debug, Error)]
#[error("Invalid game mode: {0} (expected 1, 2 or 3)")]
pub struct InvalidModeError(pub u8);

/// Game difficulty mode, selecting the number of tiles on the board.
///
/// The discriminant doubles as the mode key in the score file, so the wire
/// representation is the bare integer (`"mode": 1`), not a string.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    FromRepr,
    EnumString,
    IntoStaticStr,
    Display,
)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Mode {
    #[strum(serialize = "4 tiles")]
    FourTile = 1,
    #[strum(serialize = "6 tiles")]
    SixTile = 2,
    #[strum(serialize = "9 tiles")]
    NineTile = 3,
}

impl Mode {
    /// All modes, in score-file order.
    pub const ALL: [Mode; 3] = [Mode::FourTile, Mode::SixTile, Mode::NineTile];

    pub fn from_u8(value: u8) -> Option<Self> {
        Self::from_repr(value)
    }

    /// Number of clickable tiles on the board. Fixed per mode.
    pub fn tile_count(&self) -> usize {
        match self {
            Self::FourTile => 4,
            Self::SixTile => 6,
            Self::NineTile => 9,
        }
    }

    /// Description used in the score file records.
    pub fn description(&self) -> &'static str {
        match self {
            Self::FourTile => "4 tile mode",
            Self::SixTile => "6 tile mode",
            Self::NineTile => "9 tile mode",
        }
    }

    pub fn short_name(&self) -> &'static str {
        self.into()
    }
}

impl TryFrom<u8> for Mode {
    type Error = InvalidModeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_repr(value).ok_or(InvalidModeError(value))
    }
}

impl From<Mode> for u8 {
    fn from(mode: Mode) -> u8 {
        mode as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_count_per_mode() {
        assert_eq!(Mode::FourTile.tile_count(), 4);
        assert_eq!(Mode::SixTile.tile_count(), 6);
        assert_eq!(Mode::NineTile.tile_count(), 9);
    }

    #[test]
    fn test_mode_from_u8() {
        assert_eq!(Mode::from_u8(1), Some(Mode::FourTile));
        assert_eq!(Mode::from_u8(2), Some(Mode::SixTile));
        assert_eq!(Mode::from_u8(3), Some(Mode::NineTile));
        assert_eq!(Mode::from_u8(0), None);
        assert_eq!(Mode::from_u8(4), None);
    }

    #[test]
    fn test_try_from_invalid() {
        let err = Mode::try_from(9).unwrap_err();
        assert_eq!(format!("{}", err), "Invalid game mode: 9 (expected 1, 2 or 3)");
    }

    #[test]
    fn test_serde_integer_representation() {
        assert_eq!(serde_json::to_string(&Mode::FourTile).unwrap(), "1");
        assert_eq!(serde_json::to_string(&Mode::NineTile).unwrap(), "3");
        assert_eq!(serde_json::from_str::<Mode>("2").unwrap(), Mode::SixTile);
        assert!(serde_json::from_str::<Mode>("7").is_err());
    }

    #[test]
    fn test_descriptions_match_score_file_defaults() {
        assert_eq!(Mode::FourTile.description(), "4 tile mode");
        assert_eq!(Mode::SixTile.description(), "6 tile mode");
        assert_eq!(Mode::NineTile.description(), "9 tile mode");
    }
}
