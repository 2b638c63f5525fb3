//! Generator constants and runtime configuration defaults

// Placement search budget
/// Random placement attempts per word before it is dropped
pub const MAX_RANDOM_ATTEMPTS: usize = 100;

/// Chance of trying to cross an already placed word before falling back to random placement
pub const INTERSECTION_PROBABILITY: f64 = 0.5;

/// Letters used by the fill pass
pub const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

// Coordinates are i32, keep every anchor arithmetic result in range
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Cells added to the longest word when no size is given
pub const GRID_PADDING: usize = 2;

// Output settings
/// Symbol printed for cells no word covers when the fill pass is off
pub const EMPTY_CELL_SYMBOL: char = '.';
