//! Grid sizing against a word list, applied before generation

use crate::io::configuration::GRID_PADDING;
use crate::io::error::{Result, invalid_dimensions};

/// Length in letters of the longest word, 0 for an empty list
pub fn longest_word<S: AsRef<str>>(words: &[S]) -> usize {
    words
        .iter()
        .map(|word| word.as_ref().chars().count())
        .max()
        .unwrap_or(0)
}

/// Square size used when no dimensions are given
pub fn default_size<S: AsRef<str>>(words: &[S]) -> usize {
    longest_word(words) + GRID_PADDING
}

/// Grow each dimension to at least the longest word
///
/// Dimensions never shrink and never drop below one cell.
pub fn clamp_to_words<S: AsRef<str>>(width: usize, height: usize, words: &[S]) -> (usize, usize) {
    let minimum = longest_word(words).max(1);
    (width.max(minimum), height.max(minimum))
}

/// Reject dimensions too small for the word list
///
/// # Errors
///
/// Returns an error if either dimension is zero or shorter than the longest word
pub fn ensure_fits<S: AsRef<str>>(width: usize, height: usize, words: &[S]) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(invalid_dimensions(
            width,
            height,
            &"width and height must be positive",
        ));
    }

    let longest = longest_word(words);
    if width < longest || height < longest {
        return Err(invalid_dimensions(
            width,
            height,
            &format!("longest word has {longest} letters"),
        ));
    }

    Ok(())
}
