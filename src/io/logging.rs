//! Logger setup for the command-line tool

use std::env;

use log::LevelFilter;

/// Level selected by the verbosity flags
///
/// Quiet wins over verbose. The default surfaces dropped words.
pub const fn level_for(verbose: bool, quiet: bool) -> LevelFilter {
    if quiet {
        LevelFilter::Error
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

/// Install `env_logger` at `level`, letting `RUST_LOG` override it
///
/// Returns false if a logger was already installed.
pub fn init_logger(level: LevelFilter) -> bool {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    if let Ok(spec) = env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    builder.try_init().is_ok()
}
