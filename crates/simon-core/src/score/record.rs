use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::game::Mode;

/// Best score for one mode. Field names are the score-file wire names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub mode: Mode,
    pub description: String,
    pub score: i64,
    pub score_moment: f64,
}

impl ScoreRecord {
    /// A fresh never-played record for `mode`.
    pub fn starter(mode: Mode) -> Self {
        Self {
            mode,
            description: mode.description().to_string(),
            score: 0,
            score_moment: 0.0,
        }
    }

    /// Whether this record has ever been beaten (moment 0 means never).
    pub fn achieved(&self) -> bool {
        self.score_moment != 0.0
    }
}

/// The on-disk collection: one record per mode, modes unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighScores {
    pub high_scores: Vec<ScoreRecord>,
}

impl Default for HighScores {
    fn default() -> Self {
        Self {
            high_scores: Mode::ALL.iter().map(|&m| ScoreRecord::starter(m)).collect(),
        }
    }
}

impl HighScores {
    pub fn best_for(&self, mode: Mode) -> Option<&ScoreRecord> {
        self.high_scores.iter().find(|r| r.mode == mode)
    }

    /// Update the record for `mode` when `score` strictly beats it.
    /// Returns whether anything changed; an unmatched mode changes nothing.
    pub fn apply_if_higher(&mut self, mode: Mode, score: i64, moment: f64) -> bool {
        let mut updated = false;
        for record in &mut self.high_scores {
            if record.mode == mode && score > record.score {
                record.score = score;
                record.score_moment = moment;
                updated = true;
            }
        }
        updated
    }
}

/// Seconds since the Unix epoch, with sub-second precision.
pub fn unix_now() -> f64 {
    Utc::now().timestamp_micros() as f64 / 1e6
}
