//! Final pass that hides the words among random letters

use rand::Rng;

use crate::algorithm::selection::RandomSelector;
use crate::spatial::WordGrid;

/// Overwrite every empty cell with a uniformly random letter
///
/// Returns the number of cells filled.
pub fn fill_empty_cells<R: Rng>(grid: &mut WordGrid, selector: &mut RandomSelector<R>) -> usize {
    grid.fill_empty_with(|| selector.letter())
}
