//! Word-search puzzle generation
//!
//! Words are laid into a fixed-size grid one at a time. Each word first tries
//! to cross a word already in the grid at a shared letter, then falls back to
//! a bounded number of random positions. Words that find no fit are dropped
//! and reported. An optional fill pass hides the words among random letters.
//! All randomness comes from a single injectable, seedable generator.

#![forbid(unsafe_code)]

/// Placement, crossing search, fill pass and generation orchestration
pub mod algorithm;
/// Input/output operations, configuration and error handling
pub mod io;
/// Grid buffer and direction table
pub mod spatial;

pub use algorithm::executor::{
    GenerationOutcome, GeneratorConfig, WordSearchGenerator, generate, generate_with_rng,
};
pub use algorithm::placement::WordPlacement;
pub use io::error::{Result, WordGridError};
pub use spatial::{Direction, WordGrid};
