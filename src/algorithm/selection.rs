//! Seeded random choices shared by every stochastic step of generation

use std::ops::Range;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::io::configuration::ALPHABET;
use crate::spatial::direction::Direction;

/// Single source of randomness threaded through one generation run
///
/// All draws go through this type so that a fixed seed reproduces the whole
/// puzzle: coin flips, direction and anchor picks, candidate shuffles and
/// fill letters.
#[derive(Debug, Clone)]
pub struct RandomSelector<R = StdRng> {
    rng: R,
}

impl RandomSelector<StdRng> {
    /// Create a deterministic random selector
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> RandomSelector<R> {
    /// Wrap an existing random generator
    pub const fn from_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Returns true with the given probability
    ///
    /// The probability is clamped to `[0, 1]`.
    pub fn coin_flip(&mut self, probability: f64) -> bool {
        self.rng.random_bool(probability.clamp(0.0, 1.0))
    }

    /// Uniform pick from the given directions
    pub fn choose_direction(&mut self, directions: &[Direction]) -> Option<Direction> {
        if directions.is_empty() {
            return None;
        }
        directions.get(self.rng.random_range(0..directions.len())).copied()
    }

    /// Uniform pick from a half-open coordinate range
    ///
    /// Returns `None` for an empty range.
    pub fn coordinate_in(&mut self, range: Range<i32>) -> Option<i32> {
        (!range.is_empty()).then(|| self.rng.random_range(range))
    }

    /// Fisher-Yates shuffle in place
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }

    /// Uniform uppercase letter
    pub fn letter(&mut self) -> char {
        ALPHABET
            .get(self.rng.random_range(0..ALPHABET.len()))
            .map_or('A', |&byte| char::from(byte))
    }
}
