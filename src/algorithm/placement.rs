//! Feasibility checks and writes for laying a word along a direction

use crate::spatial::WordGrid;
use crate::spatial::direction::Direction;

/// A word written into the grid at a fixed anchor and direction
///
/// The anchor is the cell holding the first letter. Placements are never
/// modified after being recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordPlacement {
    word: String,
    x: i32,
    y: i32,
    direction: Direction,
}

impl WordPlacement {
    /// Record a placement anchored at `(x, y)`
    pub fn new(word: impl Into<String>, x: i32, y: i32, direction: Direction) -> Self {
        Self {
            word: word.into(),
            x,
            y,
            direction,
        }
    }

    /// The placed word
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Column of the first letter
    pub const fn x(&self) -> i32 {
        self.x
    }

    /// Row of the first letter
    pub const fn y(&self) -> i32 {
        self.y
    }

    /// Direction the word runs in
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Grid position of the letter at `index`
    pub const fn position_of(&self, index: i32) -> (i32, i32) {
        let (dx, dy) = self.direction.vector();
        (self.x + dx * index, self.y + dy * index)
    }

    /// Every covered cell as `(x, y, letter)`, first letter first
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32, char)> + '_ {
        cells_along(&self.word, self.x, self.y, self.direction)
    }
}

fn cells_along(
    word: &str,
    x: i32,
    y: i32,
    direction: Direction,
) -> impl Iterator<Item = (i32, i32, char)> + '_ {
    let (dx, dy) = direction.vector();
    (0_i32..)
        .zip(word.chars())
        .map(move |(i, letter)| (x + dx * i, y + dy * i, letter))
}

/// Check whether `word` fits at `(x, y)` running in `direction`
///
/// Every covered cell must be inside the grid and either empty or already
/// holding the same letter. Sharing letters with earlier words is allowed.
pub fn can_place(grid: &WordGrid, word: &str, x: i32, y: i32, direction: Direction) -> bool {
    cells_along(word, x, y, direction).all(|(xi, yi, letter)| {
        grid.contains(xi, yi) && grid.get(xi, yi).is_none_or(|existing| existing == letter)
    })
}

/// Write `word` at `(x, y)` running in `direction`
///
/// Only call after [`can_place`] accepted the same arguments; nothing is
/// re-validated here.
pub fn place(grid: &mut WordGrid, word: &str, x: i32, y: i32, direction: Direction) {
    for (xi, yi, letter) in cells_along(word, x, y, direction) {
        grid.set(xi, yi, letter);
    }
}
