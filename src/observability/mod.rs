//! Observability module
//!
//! Structured logging for `quizgloss` runs.

pub mod logging;

pub use logging::{LogFormat, init_logging};
