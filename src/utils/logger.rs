/******************************************************************************
   Author: Daniel J. Umpierrez
   Date: 15/10/26
******************************************************************************/

use std::env;
use std::sync::Once;
use tracing::{Level, debug};
use tracing_subscriber::FmtSubscriber;

static INIT: Once = Once::new();

/// Parses a log level name, falling back to WARN for anything unknown
pub fn parse_level(name: &str) -> Level {
    match name.trim().to_uppercase().as_str() {
        "TRACE" => Level::TRACE,
        "DEBUG" => Level::DEBUG,
        "INFO" => Level::INFO,
        "ERROR" => Level::ERROR,
        _ => Level::WARN,
    }
}

/// Raises `base` by `verbosity` steps (`-v` DEBUG, `-vv` TRACE)
pub fn level_for_verbosity(base: Level, verbosity: u8) -> Level {
    match verbosity {
        0 => base,
        1 if base < Level::DEBUG => Level::DEBUG,
        1 => base,
        _ => Level::TRACE,
    }
}

/// Installs the global tracing subscriber once.
///
/// The base level comes from `LOGLEVEL` (default WARN) and is raised by
/// `verbosity`. Logs go to stderr so stdout only carries command output.
pub fn setup_logger(verbosity: u8) {
    INIT.call_once(|| {
        let base = env::var("LOGLEVEL")
            .map(|v| parse_level(&v))
            .unwrap_or(Level::WARN);
        let level = level_for_verbosity(base, verbosity);

        let subscriber = FmtSubscriber::builder()
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .finish();

        if tracing::subscriber::set_global_default(subscriber).is_err() {
            eprintln!("a global tracing subscriber was already installed");
        }

        debug!("Log level set to: {}", level);
    });
}
