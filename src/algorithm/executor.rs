use std::ops::Range;

use log::{debug, info, warn};
use rand::{Rng, rngs::StdRng};

use crate::algorithm::fill::fill_empty_cells;
use crate::algorithm::intersection::find_intersections;
use crate::algorithm::placement::{WordPlacement, can_place, place};
use crate::algorithm::selection::RandomSelector;
use crate::io::configuration::{INTERSECTION_PROBABILITY, MAX_GRID_DIMENSION, MAX_RANDOM_ATTEMPTS};
use crate::io::error::{Result, invalid_dimensions, invalid_parameter, invalid_word};
use crate::spatial::WordGrid;
use crate::spatial::direction::Direction;

/// Parameters controlling grid size and placement behavior
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeneratorConfig {
    /// Number of columns
    pub width: usize,
    /// Number of rows
    pub height: usize,
    /// Whether words may run along both diagonals
    pub allow_diagonal: bool,
    /// Whether to fill unused cells with random letters
    pub fill_grid: bool,
    /// Random placement attempts per word before dropping it
    pub max_random_attempts: usize,
    /// Chance of trying to cross a placed word first
    pub intersection_probability: f64,
}

impl GeneratorConfig {
    /// Straight directions only, no fill, default retry budget
    pub const fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            allow_diagonal: false,
            fill_grid: false,
            max_random_attempts: MAX_RANDOM_ATTEMPTS,
            intersection_probability: INTERSECTION_PROBABILITY,
        }
    }

    /// Enable or disable diagonal directions
    pub const fn with_diagonal(mut self, allow_diagonal: bool) -> Self {
        self.allow_diagonal = allow_diagonal;
        self
    }

    /// Enable or disable the fill pass
    pub const fn with_fill(mut self, fill_grid: bool) -> Self {
        self.fill_grid = fill_grid;
        self
    }

    /// Override the random placement budget
    pub const fn with_max_random_attempts(mut self, attempts: usize) -> Self {
        self.max_random_attempts = attempts;
        self
    }

    /// Override the chance of attempting a crossing
    pub const fn with_intersection_probability(mut self, probability: f64) -> Self {
        self.intersection_probability = probability;
        self
    }

    /// Directions words may be placed in
    pub const fn directions(&self) -> &'static [Direction] {
        Direction::active(self.allow_diagonal)
    }

    /// Check the configuration can drive a generation run
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Either dimension is zero or exceeds `MAX_GRID_DIMENSION`
    /// - The intersection probability is outside `[0, 1]`
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(invalid_dimensions(
                self.width,
                self.height,
                &"width and height must be positive",
            ));
        }
        if self.width > MAX_GRID_DIMENSION || self.height > MAX_GRID_DIMENSION {
            return Err(invalid_dimensions(
                self.width,
                self.height,
                &format!("dimensions are limited to {MAX_GRID_DIMENSION}"),
            ));
        }
        if !(0.0..=1.0).contains(&self.intersection_probability) {
            return Err(invalid_parameter(
                "intersection_probability",
                &self.intersection_probability,
                &"must lie between 0 and 1",
            ));
        }
        Ok(())
    }
}

/// Finished puzzle together with which words made it in
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationOutcome {
    /// The generated grid
    pub grid: WordGrid,
    /// Placed words in placement order
    pub placed: Vec<WordPlacement>,
    /// Words that found no fit, in input order
    pub dropped: Vec<String>,
}

impl GenerationOutcome {
    /// Check if every requested word was placed
    pub fn is_complete(&self) -> bool {
        self.dropped.is_empty()
    }

    /// First placement recorded for `word`
    pub fn placement_of(&self, word: &str) -> Option<&WordPlacement> {
        self.placed.iter().find(|placement| placement.word() == word)
    }
}

/// Places words one at a time, preferring crossings, falling back to random
/// positions with a bounded retry budget
///
/// Words that exhaust both strategies are dropped and reported in the
/// outcome rather than failing the run.
#[derive(Debug, Clone)]
pub struct WordSearchGenerator<R = StdRng> {
    config: GeneratorConfig,
    selector: RandomSelector<R>,
}

impl WordSearchGenerator<StdRng> {
    /// Create a generator driven by a seeded `StdRng`
    pub fn new(config: GeneratorConfig, seed: u64) -> Self {
        Self {
            config,
            selector: RandomSelector::new(seed),
        }
    }
}

impl<R: Rng> WordSearchGenerator<R> {
    /// Create a generator around an existing random selector
    pub const fn with_selector(config: GeneratorConfig, selector: RandomSelector<R>) -> Self {
        Self { config, selector }
    }

    /// Configuration this generator runs with
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Build a puzzle from `words`, processed in order
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration fails [`GeneratorConfig::validate`]
    /// - A word is empty or contains anything other than `A`-`Z`
    pub fn generate<S: AsRef<str>>(&mut self, words: &[S]) -> Result<GenerationOutcome> {
        self.config.validate()?;
        for word in words {
            validate_word(word.as_ref())?;
        }

        let mut grid = WordGrid::new(self.config.width, self.config.height);
        let mut placed: Vec<WordPlacement> = Vec::with_capacity(words.len());
        let mut dropped = Vec::new();

        for word in words {
            let word: &str = word.as_ref();
            let placement = self
                .place_by_intersection(&mut grid, word, &placed)
                .or_else(|| self.place_randomly(&mut grid, word));

            match placement {
                Some(placement) => placed.push(placement),
                None => {
                    warn!(
                        "Dropped {word}: no fit after {} random attempts",
                        self.config.max_random_attempts
                    );
                    dropped.push(word.to_string());
                }
            }
        }

        if self.config.fill_grid {
            let filled = fill_empty_cells(&mut grid, &mut self.selector);
            debug!("Filled {filled} empty cells");
        }

        info!(
            "Generated {}x{} grid: {} placed, {} dropped",
            self.config.width,
            self.config.height,
            placed.len(),
            dropped.len()
        );

        Ok(GenerationOutcome {
            grid,
            placed,
            dropped,
        })
    }

    // Coin flip first, then shuffled crossings tried until one fits
    fn place_by_intersection(
        &mut self,
        grid: &mut WordGrid,
        word: &str,
        placed: &[WordPlacement],
    ) -> Option<WordPlacement> {
        if placed.is_empty() || !self.selector.coin_flip(self.config.intersection_probability) {
            return None;
        }

        let mut candidates = find_intersections(word, placed, self.config.directions());
        self.selector.shuffle(&mut candidates);

        let (candidate, (x, y)) = candidates
            .iter()
            .map(|candidate| (candidate, candidate.anchor()))
            .find(|&(candidate, (x, y))| can_place(grid, word, x, y, candidate.direction))?;

        place(grid, word, x, y, candidate.direction);
        debug!(
            "Placed {word} at ({x}, {y}) {} crossing {}",
            candidate.direction,
            candidate.placed.word()
        );
        Some(WordPlacement::new(word, x, y, candidate.direction))
    }

    fn place_randomly(&mut self, grid: &mut WordGrid, word: &str) -> Option<WordPlacement> {
        let len = word.chars().count();

        for attempt in 1..=self.config.max_random_attempts {
            let direction = self.selector.choose_direction(self.config.directions())?;
            let (dx, dy) = direction.vector();
            let x = self.selector.coordinate_in(anchor_range(grid.width(), len, dx));
            let y = self.selector.coordinate_in(anchor_range(grid.height(), len, dy));

            let (Some(x), Some(y)) = (x, y) else {
                continue;
            };
            if can_place(grid, word, x, y, direction) {
                place(grid, word, x, y, direction);
                debug!("Placed {word} at ({x}, {y}) {direction} after {attempt} random attempts");
                return Some(WordPlacement::new(word, x, y, direction));
            }
        }

        None
    }
}

/// Anchor coordinates along one axis that keep a word of `len` letters in bounds
///
/// `delta` is the direction's step along this axis. The range is empty when
/// the word cannot fit.
pub const fn anchor_range(extent: usize, len: usize, delta: i32) -> Range<i32> {
    let extent = extent as i32;
    let span = len.saturating_sub(1) as i32;
    match delta.signum() {
        1 => 0..extent - span,
        -1 => span..extent,
        _ => 0..extent,
    }
}

fn validate_word(word: &str) -> Result<()> {
    if word.is_empty() {
        return Err(invalid_word(word, &"words must not be empty"));
    }
    if let Some(letter) = word.chars().find(|letter| !letter.is_ascii_uppercase()) {
        return Err(invalid_word(
            word,
            &format!("'{letter}' is not an uppercase letter A-Z"),
        ));
    }
    Ok(())
}

/// Generate a puzzle with a seeded `StdRng`
///
/// # Errors
///
/// Returns an error if the dimensions are invalid or a word is empty or not
/// made of `A`-`Z`.
pub fn generate<S: AsRef<str>>(
    width: usize,
    height: usize,
    words: &[S],
    allow_diagonal: bool,
    fill_grid: bool,
    seed: u64,
) -> Result<GenerationOutcome> {
    let config = GeneratorConfig::new(width, height)
        .with_diagonal(allow_diagonal)
        .with_fill(fill_grid);
    WordSearchGenerator::new(config, seed).generate(words)
}

/// Generate a puzzle with a caller-supplied random generator
///
/// # Errors
///
/// Returns an error if the configuration or any word is invalid.
pub fn generate_with_rng<R: Rng, S: AsRef<str>>(
    config: GeneratorConfig,
    words: &[S],
    rng: R,
) -> Result<GenerationOutcome> {
    WordSearchGenerator::with_selector(config, RandomSelector::from_rng(rng)).generate(words)
}
