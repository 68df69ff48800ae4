use std::time::Duration;

use rand::Rng;

/// One step of a pattern replay: light `tile` for `hold`, then darken the
/// board for `hold` again before the next step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Blink {
    pub tile: usize,
    pub hold: Duration,
}

/// A single-pass replay of the full sequence, oldest tile first.
///
/// The playback owns a snapshot of the sequence taken at extension time;
/// once consumed it cannot be restarted.
#[derive(Debug)]
pub struct Playback {
    steps: std::vec::IntoIter<usize>,
    hold: Duration,
}

impl Iterator for Playback {
    type Item = Blink;

    fn next(&mut self) -> Option<Blink> {
        let tile = self.steps.next()?;
        Some(Blink {
            tile,
            hold: self.hold,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.steps.size_hint()
    }
}

impl ExactSizeIterator for Playback {}

/// Owns the growing tile sequence of one session.
///
/// Each round appends exactly one index drawn uniformly from
/// `[0, tile_count)`; the sequence never shrinks and is cleared only by
/// building a new engine. Randomness is injected per call so tests can
/// drive it with a seeded generator.
#[derive(Debug)]
pub struct RoundEngine {
    tile_count: usize,
    blink_hold: Duration,
    sequence: Vec<usize>,
}

impl RoundEngine {
    pub fn new(tile_count: usize, blink_hold: Duration) -> Self {
        Self {
            tile_count,
            blink_hold,
            sequence: Vec::new(),
        }
    }

    /// Grow the sequence by one random tile, then replay it from the start.
    pub fn extend_and_replay<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Playback {
        self.sequence.push(rng.gen_range(0..self.tile_count));
        Playback {
            steps: self.sequence.clone().into_iter(),
            hold: self.blink_hold,
        }
    }

    pub fn sequence(&self) -> &[usize] {
        &self.sequence
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    pub fn tile_count(&self) -> usize {
        self.tile_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const HOLD: Duration = Duration::from_millis(200);

    #[test]
    fn test_sequence_grows_by_one_per_round() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut engine = RoundEngine::new(4, HOLD);
        assert!(engine.is_empty());

        for round in 1..=50 {
            let playback = engine.extend_and_replay(&mut rng);
            assert_eq!(playback.len(), round);
            assert_eq!(engine.len(), round);
        }
    }

    #[test]
    fn test_sequence_elements_in_tile_range() {
        for tile_count in [4usize, 6, 9] {
            let mut rng = StdRng::seed_from_u64(42);
            let mut engine = RoundEngine::new(tile_count, HOLD);
            for _ in 0..100 {
                engine.extend_and_replay(&mut rng);
            }
            assert!(engine.sequence().iter().all(|&t| t < tile_count));
        }
    }

    #[test]
    fn test_playback_replays_full_sequence_in_order() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut engine = RoundEngine::new(6, HOLD);
        engine.extend_and_replay(&mut rng);
        engine.extend_and_replay(&mut rng);
        let mut playback = engine.extend_and_replay(&mut rng);

        let expected: Vec<usize> = engine.sequence().to_vec();
        assert_eq!(expected.len(), 3);
        for &tile in &expected {
            let blink = playback.next().unwrap();
            assert_eq!(blink.tile, tile);
            assert_eq!(blink.hold, HOLD);
        }
        // Consumed once, gone for good.
        assert!(playback.next().is_none());
        assert!(playback.next().is_none());
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = RoundEngine::new(9, HOLD);
        let mut b = RoundEngine::new(9, HOLD);
        let mut rng_a = StdRng::seed_from_u64(1234);
        let mut rng_b = StdRng::seed_from_u64(1234);
        for _ in 0..20 {
            a.extend_and_replay(&mut rng_a);
            b.extend_and_replay(&mut rng_b);
        }
        assert_eq!(a.sequence(), b.sequence());
    }
}
