//! Log output for the board server.
//!
//! Every HTTP request is traced by the router's `TraceLayer`. The stores log
//! created, deleted and reported posts at `info`. Deletes rejected for a wrong
//! password are logged at `warn`, and storage failures at `error` on their way
//! to a 500 response. None of these lines carry passwords or hashes.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Arc;

use tracing::Level;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;
use crate::{BoardError, Result};

/// Map a configured level name to a tracing level. Unknown names mean `info`.
fn parse_level(level: &str) -> Level {
    match level.to_ascii_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" | "warning" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

/// `RUST_LOG` directives layered over the configured level.
fn level_filter(level: &str) -> EnvFilter {
    EnvFilter::from_default_env().add_directive(parse_level(level).into())
}

/// Install the global subscriber, writing to stdout and appending to
/// `config.file`.
///
/// Fails if the log file cannot be opened or a subscriber is already set.
pub fn init(config: &LoggingConfig) -> Result<()> {
    if let Some(dir) = Path::new(&config.file).parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir)?;
        }
    }

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.file)?;
    let writer = std::io::stdout.and(Arc::new(log_file));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true),
        )
        .with(level_filter(&config.level))
        .try_init()
        .map_err(|e| BoardError::Config(format!("logging already initialized: {e}")))
}

/// Install a stdout-only subscriber. Used when the log file is unusable.
pub fn init_console_only(level: &str) {
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .with(level_filter(level))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        let cases = [
            ("trace", Level::TRACE),
            ("DEBUG", Level::DEBUG),
            ("Info", Level::INFO),
            ("warn", Level::WARN),
            ("warning", Level::WARN),
            ("ERROR", Level::ERROR),
            ("verbose", Level::INFO),
            ("", Level::INFO),
        ];
        for (name, expected) in cases {
            assert_eq!(parse_level(name), expected, "level {name:?}");
        }
    }

    #[test]
    fn test_init_creates_log_directory() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("nested").join("board.log");
        let config = LoggingConfig {
            level: "debug".to_string(),
            file: file.to_string_lossy().into_owned(),
        };

        // Another test may have installed the global subscriber already.
        let _ = init(&config);
        assert!(file.exists());
    }

    #[test]
    fn test_init_twice_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = LoggingConfig {
            level: "info".to_string(),
            file: dir.path().join("board.log").to_string_lossy().into_owned(),
        };

        let _ = init(&config);
        assert!(matches!(init(&config), Err(BoardError::Config(_))));
    }
}
