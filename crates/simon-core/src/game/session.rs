use rand::Rng;
use tracing::debug;

use crate::config::GameConfig;
use crate::game::{Mode, Playback, RoundEngine};

/// Where a session currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Ready to grow the sequence and start the next round.
    AwaitingSequence,
    /// The pattern is being replayed; clicks are not accepted.
    ShowingSequence,
    /// Waiting for the player to reproduce the pattern.
    AwaitingClick,
    /// A wrong click ended the session.
    Ended,
}

/// Outcome of feeding one click to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickResult {
    /// Right tile, pattern not finished yet.
    Correct,
    /// Right tile and the whole pattern is matched; the next round may begin.
    RoundComplete,
    /// Wrong tile; the session is over, carrying the final score.
    Mismatch { score: i64 },
    /// Click arrived outside the click-accepting phase and was dropped.
    Ignored,
}

/// One play-through of the memory game.
///
/// The session drives a [`RoundEngine`] through grow/replay/reproduce
/// cycles and keeps the running score. The score counter starts at −1 and
/// moves up just before each pattern is shown, so a miss on the n+1-th
/// pattern reports n and a first-pattern miss reports 0; −1 is never
/// reported.
pub struct Session {
    mode: Mode,
    engine: RoundEngine,
    phase: Phase,
    cursor: usize,
    correct_clicks: u32,
    score: i64,
}

impl Session {
    pub fn new(mode: Mode, config: &GameConfig) -> Self {
        Self {
            mode,
            engine: RoundEngine::new(mode.tile_count(), config.blink_hold),
            phase: Phase::AwaitingSequence,
            cursor: 0,
            correct_clicks: 0,
            score: -1,
        }
    }

    /// Start the next round: bump the score, grow the sequence by one tile
    /// and hand back the replay cue. Only meaningful in `AwaitingSequence`.
    pub fn begin_round<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Playback {
        debug_assert_eq!(self.phase, Phase::AwaitingSequence);
        self.score += 1;
        self.phase = Phase::ShowingSequence;
        let playback = self.engine.extend_and_replay(rng);
        debug!(
            "Pattern grown to {} tiles, score now {}",
            self.engine.len(),
            self.score
        );
        playback
    }

    /// Signal that the replay finished; the session starts expecting clicks
    /// from the top of the sequence.
    pub fn replay_done(&mut self) {
        if self.phase == Phase::ShowingSequence {
            self.phase = Phase::AwaitingClick;
            self.cursor = 0;
        }
    }

    /// Feed one clicked tile index and advance the state machine.
    pub fn click(&mut self, tile: usize) -> ClickResult {
        if self.phase != Phase::AwaitingClick {
            return ClickResult::Ignored;
        }
        let Some(&expected) = self.engine.sequence().get(self.cursor) else {
            return ClickResult::Ignored;
        };
        if tile != expected {
            self.phase = Phase::Ended;
            debug!(
                "Clicked tile {} but expected {}, session over at score {}",
                tile, expected, self.score
            );
            return ClickResult::Mismatch { score: self.score };
        }
        self.cursor += 1;
        self.correct_clicks += 1;
        if self.cursor == self.engine.len() {
            self.phase = Phase::AwaitingSequence;
            ClickResult::RoundComplete
        } else {
            ClickResult::Correct
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Patterns fully matched so far, −1 before the first round begins.
    pub fn score(&self) -> i64 {
        self.score
    }

    /// Total correct clicks over the whole session.
    pub fn correct_clicks(&self) -> u32 {
        self.correct_clicks
    }

    pub fn sequence_len(&self) -> usize {
        self.engine.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn new_session(mode: Mode) -> Session {
        Session::new(mode, &GameConfig::default())
    }

    /// Run the replay and return the shown tiles.
    fn show_pattern(session: &mut Session, rng: &mut StdRng) -> Vec<usize> {
        let tiles: Vec<usize> = session.begin_round(rng).map(|b| b.tile).collect();
        session.replay_done();
        tiles
    }

    #[test]
    fn test_new_session_state() {
        let session = new_session(Mode::FourTile);
        assert_eq!(session.phase(), Phase::AwaitingSequence);
        assert_eq!(session.score(), -1);
        assert_eq!(session.sequence_len(), 0);
        assert_eq!(session.correct_clicks(), 0);
    }

    #[test]
    fn test_full_round_keeps_session_alive() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut session = new_session(Mode::SixTile);

        let tiles = show_pattern(&mut session, &mut rng);
        assert_eq!(tiles.len(), 1);
        assert_eq!(session.phase(), Phase::AwaitingClick);
        assert_eq!(session.score(), 0);

        assert_eq!(session.click(tiles[0]), ClickResult::RoundComplete);
        assert_eq!(session.phase(), Phase::AwaitingSequence);
    }

    #[test]
    fn test_partial_pattern_stays_awaiting_click() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut session = new_session(Mode::NineTile);

        // Grow to a three-tile pattern.
        let first = show_pattern(&mut session, &mut rng);
        assert_eq!(session.click(first[0]), ClickResult::RoundComplete);
        let second = show_pattern(&mut session, &mut rng);
        for (i, &tile) in second.iter().enumerate() {
            let result = session.click(tile);
            if i + 1 == second.len() {
                assert_eq!(result, ClickResult::RoundComplete);
            } else {
                assert_eq!(result, ClickResult::Correct);
                assert_eq!(session.phase(), Phase::AwaitingClick);
            }
        }
        let third = show_pattern(&mut session, &mut rng);
        assert_eq!(third.len(), 3);
        assert_eq!(session.click(third[0]), ClickResult::Correct);
        assert_eq!(session.click(third[1]), ClickResult::Correct);
        assert_eq!(session.click(third[2]), ClickResult::RoundComplete);
    }

    #[test]
    fn test_first_pattern_miss_scores_zero() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut session = new_session(Mode::FourTile);

        let tiles = show_pattern(&mut session, &mut rng);
        let wrong = (tiles[0] + 1) % Mode::FourTile.tile_count();
        assert_eq!(session.click(wrong), ClickResult::Mismatch { score: 0 });
        assert_eq!(session.phase(), Phase::Ended);
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_score_counts_completed_rounds_before_miss() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut session = new_session(Mode::SixTile);

        // Complete two full rounds.
        for _ in 0..2 {
            let tiles = show_pattern(&mut session, &mut rng);
            for &tile in &tiles {
                assert_ne!(session.click(tile), ClickResult::Ignored);
            }
            assert_eq!(session.phase(), Phase::AwaitingSequence);
        }

        // Miss immediately in the third.
        let tiles = show_pattern(&mut session, &mut rng);
        let wrong = (tiles[0] + 1) % Mode::SixTile.tile_count();
        assert_eq!(session.click(wrong), ClickResult::Mismatch { score: 2 });
    }

    #[test]
    fn test_correct_clicks_accumulate_across_rounds() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut session = new_session(Mode::FourTile);

        for _ in 0..3 {
            let tiles = show_pattern(&mut session, &mut rng);
            for &tile in &tiles {
                session.click(tile);
            }
        }
        // 1 + 2 + 3 correct clicks over three rounds.
        assert_eq!(session.correct_clicks(), 6);
    }

    #[test]
    fn test_clicks_ignored_while_sequence_is_showing() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut session = new_session(Mode::FourTile);

        let _playback = session.begin_round(&mut rng);
        assert_eq!(session.phase(), Phase::ShowingSequence);
        assert_eq!(session.click(0), ClickResult::Ignored);
        assert_eq!(session.phase(), Phase::ShowingSequence);
    }

    #[test]
    fn test_clicks_ignored_after_end() {
        let mut rng = StdRng::seed_from_u64(6);
        let mut session = new_session(Mode::FourTile);

        let tiles = show_pattern(&mut session, &mut rng);
        let wrong = (tiles[0] + 1) % 4;
        session.click(wrong);
        assert_eq!(session.phase(), Phase::Ended);
        assert_eq!(session.click(tiles[0]), ClickResult::Ignored);
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_sequence_grows_with_rounds() {
        let mut rng = StdRng::seed_from_u64(21);
        let mut session = new_session(Mode::NineTile);

        for expected_len in 1..=10 {
            let tiles = show_pattern(&mut session, &mut rng);
            assert_eq!(tiles.len(), expected_len);
            assert_eq!(session.sequence_len(), expected_len);
            assert!(tiles.iter().all(|&t| t < 9));
            for &tile in &tiles {
                session.click(tile);
            }
        }
    }
}
