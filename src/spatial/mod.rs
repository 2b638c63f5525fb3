//! Spatial data structures for the puzzle grid
//!
//! This module contains:
//! - The fixed-size letter buffer
//! - The closed set of word directions

/// Closed set of word directions and their step vectors
pub mod direction;
/// Fixed-size letter buffer with bounds-checked access
pub mod grid;

pub use direction::Direction;
pub use grid::WordGrid;
