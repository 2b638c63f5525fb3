//! Input/output plumbing around the generator

/// Command-line interface
pub mod cli;
/// Generator constants and defaults
pub mod configuration;
/// Caller-side grid sizing against a word list
pub mod dimensions;
/// Error types
pub mod error;
/// Logger setup for the binary
pub mod logging;
/// Plain-text puzzle rendering
pub mod render;
/// Newline-delimited word list loading
pub mod wordlist;
