//! Candidate crossings between a new word and words already in the grid

use crate::algorithm::placement::WordPlacement;
use crate::spatial::direction::Direction;

/// A way to lay a new word so that one of its letters lands on a matching
/// letter of an already placed word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Intersection<'a> {
    /// The word being crossed
    pub placed: &'a WordPlacement,
    /// Index of the shared letter in the new word
    pub word_letter_idx: usize,
    /// Index of the shared letter in the placed word
    pub placed_letter_idx: usize,
    /// Direction for the new word
    pub direction: Direction,
}

impl Intersection<'_> {
    /// Anchor for the new word so its shared letter sits on the crossed cell
    pub fn anchor(&self) -> (i32, i32) {
        let (shared_x, shared_y) = self.placed.position_of(self.placed_letter_idx as i32);
        let (dx, dy) = self.direction.vector();
        let offset = self.word_letter_idx as i32;
        (shared_x - dx * offset, shared_y - dy * offset)
    }
}

/// Enumerate every crossing of `word` with the placed words
///
/// A candidate is produced for each pair of equal letters and each allowed
/// direction other than the crossed word's own, so parallel overlaps never
/// appear. Order follows the inputs; callers shuffle before trying them.
pub fn find_intersections<'a>(
    word: &str,
    placed_words: &'a [WordPlacement],
    allowed_directions: &[Direction],
) -> Vec<Intersection<'a>> {
    let mut intersections = Vec::new();

    for placed in placed_words {
        for (word_letter_idx, letter) in word.chars().enumerate() {
            for (placed_letter_idx, placed_letter) in placed.word().chars().enumerate() {
                if letter != placed_letter {
                    continue;
                }
                intersections.extend(
                    allowed_directions
                        .iter()
                        .filter(|&&direction| direction != placed.direction())
                        .map(|&direction| Intersection {
                            placed,
                            word_letter_idx,
                            placed_letter_idx,
                            direction,
                        }),
                );
            }
        }
    }

    intersections
}
