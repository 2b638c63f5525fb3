//! Plain-text puzzle output

use std::io::Write;

use crate::algorithm::executor::GenerationOutcome;
use crate::io::error::Result;

/// Sections printed after the grid
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// List the placed words under the grid
    pub word_list: bool,
    /// Print each placed word's anchor and direction
    pub answer_key: bool,
}

/// Write the grid followed by the requested sections
///
/// Dropped words are always reported so a short puzzle is never silent.
///
/// # Errors
///
/// Returns an error if writing to `out` fails
pub fn render_puzzle<W: Write>(
    out: &mut W,
    outcome: &GenerationOutcome,
    options: RenderOptions,
) -> Result<()> {
    write!(out, "{}", outcome.grid)?;

    if options.word_list && !outcome.placed.is_empty() {
        let words: Vec<&str> = outcome.placed.iter().map(|placement| placement.word()).collect();
        writeln!(out)?;
        writeln!(out, "Words to find: {}", words.join(", "))?;
    }

    if options.answer_key && !outcome.placed.is_empty() {
        writeln!(out)?;
        writeln!(out, "Answers:")?;
        let name_width = outcome
            .placed
            .iter()
            .map(|placement| placement.word().len())
            .max()
            .unwrap_or(0);
        for placement in &outcome.placed {
            writeln!(
                out,
                "  {:<name_width$}  ({}, {}) {}",
                placement.word(),
                placement.x(),
                placement.y(),
                placement.direction()
            )?;
        }
    }

    if !outcome.dropped.is_empty() {
        writeln!(out)?;
        writeln!(out, "Not placed: {}", outcome.dropped.join(", "))?;
    }

    Ok(())
}
