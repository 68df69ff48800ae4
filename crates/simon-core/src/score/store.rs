use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::Result;
use crate::game::Mode;
use crate::score::HighScores;

/// File-backed store for the per-mode best scores.
///
/// The backing path is injected at construction; there is no global.
/// Every operation is a whole-file read-modify-write cycle, which is all
/// the single-threaded game needs.
pub struct ScoreStore {
    path: PathBuf,
}

impl ScoreStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored collection.
    ///
    /// A missing file is seeded with the default records and read back
    /// once; any other failure propagates.
    pub fn load(&self) -> Result<HighScores> {
        match self.read() {
            Ok(scores) => Ok(scores),
            Err(e) if e.is_not_found() => {
                info!(
                    "Score file {} not found, writing defaults",
                    self.path.display()
                );
                self.save(&HighScores::default())?;
                self.read()
            }
            Err(e) => Err(e),
        }
    }

    /// Serialize the full collection, overwriting the backing file.
    pub fn save(&self, scores: &HighScores) -> Result<()> {
        let content = serde_json::to_string_pretty(scores)?;
        fs::write(&self.path, content)?;
        Ok(())
    }

    /// Persist `score` for `mode` when it strictly beats the stored best.
    ///
    /// Full load-modify-store cycle; nothing is written when the score does
    /// not qualify. Returns whether the file was rewritten.
    pub fn record_if_higher(&self, mode: Mode, score: i64, moment: f64) -> Result<bool> {
        let mut scores = self.load()?;
        let updated = scores.apply_if_higher(mode, score, moment);
        if updated {
            info!("New high score for {}: {}", mode, score);
            self.save(&scores)?;
        } else {
            debug!("Score {} does not beat the stored best for {}", score, mode);
        }
        Ok(updated)
    }

    fn read(&self) -> Result<HighScores> {
        let content = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }
}
