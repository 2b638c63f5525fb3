//! Command-line interface for generating a puzzle from words and word list files

use crate::algorithm::executor::{GenerationOutcome, GeneratorConfig, WordSearchGenerator};
use crate::io::configuration::{DEFAULT_SEED, MAX_RANDOM_ATTEMPTS};
use crate::io::dimensions::{clamp_to_words, default_size, ensure_fits};
use crate::io::error::{Result, WordGridError};
use crate::io::logging::level_for;
use crate::io::render::{RenderOptions, render_puzzle};
use crate::io::wordlist::{load_word_list, parse_word_list};
use clap::Parser;
use log::LevelFilter;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "wordgrid")]
#[command(author, version, about = "Generate word-search puzzles")]
/// Command-line arguments for the puzzle generator
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Words to hide in the grid
    #[arg(value_name = "WORDS")]
    pub words: Vec<String>,

    /// Newline-delimited word list, appended after WORDS
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Grid width (implies square if height not specified)
    #[arg(short = 'w', long)]
    pub width: Option<usize>,

    /// Grid height (implies square if width not specified)
    #[arg(short = 'H', long)]
    pub height: Option<usize>,

    /// Allow words along both diagonals
    #[arg(short, long)]
    pub diagonal: bool,

    /// Fill unused cells with random letters
    #[arg(long)]
    pub fill: bool,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Random placement attempts per word before dropping it
    #[arg(long, default_value_t = MAX_RANDOM_ATTEMPTS)]
    pub attempts: usize,

    /// Grow dimensions to the longest word instead of failing
    #[arg(long)]
    pub clamp: bool,

    /// Print the answer key below the grid
    #[arg(short = 'k', long)]
    pub answers: bool,

    /// Write the puzzle to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Log every placement
    #[arg(short, long)]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Log level selected by the verbosity flags
    pub const fn log_level(&self) -> LevelFilter {
        level_for(self.verbose, self.quiet)
    }

    /// Sections to print after the grid
    pub const fn render_options(&self) -> RenderOptions {
        RenderOptions {
            word_list: true,
            answer_key: self.answers,
        }
    }
}

/// Turns parsed arguments into a rendered puzzle
pub struct PuzzleRunner {
    cli: Cli,
}

impl PuzzleRunner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Positional words followed by the word list file, normalized
    ///
    /// # Errors
    ///
    /// Returns an error if the word list file cannot be read
    pub fn collect_words(&self) -> Result<Vec<String>> {
        let mut words: Vec<String> = self
            .cli
            .words
            .iter()
            .flat_map(|word| parse_word_list(word))
            .collect();

        if let Some(path) = &self.cli.file {
            words.extend(load_word_list(path)?);
        }

        Ok(words)
    }

    /// Grid size from the flags, defaulted and checked against the words
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions cannot hold the longest word and
    /// clamping is off
    pub fn resolve_dimensions(&self, words: &[String]) -> Result<(usize, usize)> {
        let (width, height) = match (self.cli.width, self.cli.height) {
            (Some(w), Some(h)) => (w, h),
            (Some(w), None) => (w, w),
            (None, Some(h)) => (h, h),
            (None, None) => {
                let size = default_size(words);
                (size, size)
            }
        };

        if self.cli.clamp {
            return Ok(clamp_to_words(width, height, words));
        }

        ensure_fits(width, height, words)?;
        Ok((width, height))
    }

    /// Generator configuration for a resolved grid size
    pub const fn config(&self, width: usize, height: usize) -> GeneratorConfig {
        GeneratorConfig::new(width, height)
            .with_diagonal(self.cli.diagonal)
            .with_fill(self.cli.fill)
            .with_max_random_attempts(self.cli.attempts)
    }

    /// Collect words, size the grid and generate
    ///
    /// # Errors
    ///
    /// Returns an error if word collection, sizing or generation fails
    pub fn generate(&self) -> Result<GenerationOutcome> {
        let words = self.collect_words()?;
        let (width, height) = self.resolve_dimensions(&words)?;
        WordSearchGenerator::new(self.config(width, height), self.cli.seed).generate(&words)
    }

    /// Generate and write the puzzle to `out`
    ///
    /// # Errors
    ///
    /// Returns an error if generation or writing fails
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<GenerationOutcome> {
        let outcome = self.generate()?;
        render_puzzle(out, &outcome, self.cli.render_options())?;
        out.flush()?;
        Ok(outcome)
    }

    /// Generate and write the puzzle to the output file or stdout
    ///
    /// # Errors
    ///
    /// Returns an error if generation fails or the output cannot be written
    pub fn process(&self) -> Result<()> {
        if let Some(path) = &self.cli.output {
            let file = File::create(path).map_err(|source| WordGridError::FileSystem {
                path: path.clone(),
                operation: "create output",
                source,
            })?;
            self.write_to(&mut BufWriter::new(file))?;
        } else {
            self.write_to(&mut std::io::stdout().lock())?;
        }
        Ok(())
    }
}
