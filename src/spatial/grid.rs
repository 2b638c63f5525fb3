//! Fixed-size letter buffer the puzzle is written into
//!
//! Cells are stored row-major in an `Array2` indexed `[row, col]`, which is
//! `[y, x]` in puzzle coordinates. Coordinates are signed so that callers can
//! probe positions computed from direction vectors without casting first.

use std::fmt;

use ndarray::Array2;

use crate::io::configuration::EMPTY_CELL_SYMBOL;

/// Width x height character grid where `None` marks an unused cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordGrid {
    cells: Array2<Option<char>>,
}

impl WordGrid {
    /// Create a grid with every cell empty
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            cells: Array2::from_elem((height, width), None),
        }
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// Check if `(x, y)` lies inside the grid
    pub fn contains(&self, x: i32, y: i32) -> bool {
        Self::index(x, y).is_some_and(|[row, col]| row < self.height() && col < self.width())
    }

    /// Letter at `(x, y)`, `None` when the cell is empty or outside the grid
    pub fn get(&self, x: i32, y: i32) -> Option<char> {
        Self::index(x, y).and_then(|index| self.cells.get(index).copied().flatten())
    }

    /// Write a letter at `(x, y)`
    ///
    /// Positions outside the grid are ignored; callers check bounds first.
    pub fn set(&mut self, x: i32, y: i32, letter: char) {
        if let Some(cell) = Self::index(x, y).and_then(|index| self.cells.get_mut(index)) {
            *cell = Some(letter);
        }
    }

    /// Check if `(x, y)` is inside the grid and holds no letter
    pub fn is_empty_at(&self, x: i32, y: i32) -> bool {
        self.contains(x, y) && self.get(x, y).is_none()
    }

    /// Number of cells holding no letter
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }

    /// Write `next()` into every empty cell in row-major order
    ///
    /// Returns how many cells were filled.
    pub fn fill_empty_with(&mut self, mut next: impl FnMut() -> char) -> usize {
        let mut filled = 0;
        for cell in self.cells.iter_mut().filter(|cell| cell.is_none()) {
            *cell = Some(next());
            filled += 1;
        }
        filled
    }

    /// Copy out the grid as `height` rows of `width` cells
    pub fn to_rows(&self) -> Vec<Vec<Option<char>>> {
        self.cells.rows().into_iter().map(|row| row.to_vec()).collect()
    }

    fn index(x: i32, y: i32) -> Option<[usize; 2]> {
        let col = usize::try_from(x).ok()?;
        let row = usize::try_from(y).ok()?;
        Some([row, col])
    }
}

impl fmt::Display for WordGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.rows() {
            let line: Vec<String> = row
                .iter()
                .map(|cell| cell.unwrap_or(EMPTY_CELL_SYMBOL).to_string())
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
