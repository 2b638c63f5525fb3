//! Newline-delimited word lists

use std::fs;
use std::path::Path;

use crate::io::error::{Result, WordGridError};

/// Split text into puzzle words, one per line
///
/// Lines are trimmed and uppercased; blank lines are skipped. Duplicates and
/// non-letter characters are left for the generator to accept or reject.
pub fn parse_word_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_uppercase)
        .collect()
}

/// Read and parse a word list file
///
/// # Errors
///
/// Returns an error if the file cannot be read as UTF-8 text
pub fn load_word_list(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path).map_err(|source| WordGridError::FileSystem {
        path: path.to_path_buf(),
        operation: "read word list",
        source,
    })?;
    Ok(parse_word_list(&text))
}
