//! Logging setup for `quizgloss` runs.
//!
//! Everything is written to stderr so stdout stays reserved for reports,
//! previews and `describe` output. What each level shows:
//!
//! | Level | Events |
//! |-------|--------|
//! | `warn` | out-of-date records under `--check`, glossary file warnings |
//! | `info` | question document loaded / written, glossary file loaded |
//! | `debug` | one event per built paragraph or described phrase, split-file discovery |
//!
//! `QUIZGLOSS_LOG_LEVEL` takes any `tracing` filter directive, e.g.
//! `quizgloss::document=debug`, and wins over `-v`.

use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

use crate::cli::args::ColorChoice;

/// Environment variable holding a filter directive that overrides `-v`.
pub const LOG_LEVEL_ENV: &str = "QUIZGLOSS_LOG_LEVEL";

/// Log line format on stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum LogFormat {
    /// One readable line per event.
    #[default]
    Human,
    /// One JSON object per event, for CI log collectors.
    Json,
}

/// Level directive for a `-v` count; saturates at `trace`.
#[must_use]
pub const fn verbosity_to_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Whether log lines get ANSI colours. `Auto` requires a terminal on stderr
/// and no `NO_COLOR`.
#[must_use]
pub fn use_ansi(color: ColorChoice, stderr_is_terminal: bool, no_color: bool) -> bool {
    match color {
        ColorChoice::Auto => stderr_is_terminal && !no_color,
        ColorChoice::Always => true,
        ColorChoice::Never => false,
    }
}

/// Installs the global subscriber. Later calls are ignored, so tests may
/// call this freely.
pub fn init_logging(format: LogFormat, verbosity: u8, color: ColorChoice) {
    let filter = EnvFilter::try_from_env(LOG_LEVEL_ENV)
        .unwrap_or_else(|_| EnvFilter::new(verbosity_to_directive(verbosity)));

    // Module targets only help once per-record events are visible.
    let show_target = verbosity >= 2;

    match format {
        LogFormat::Human => {
            let ansi = use_ansi(
                color,
                std::io::stderr().is_terminal(),
                std::env::var_os("NO_COLOR").is_some(),
            );
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(ansi)
                .with_target(show_target)
                .with_writer(std::io::stderr)
                .try_init();
        }
        LogFormat::Json => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .json()
                .with_target(show_target)
                .with_writer(std::io::stderr)
                .try_init();
        }
    }
}
