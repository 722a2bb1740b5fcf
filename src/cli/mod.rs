//! Command-line interface
//!
//! Argument definitions and command handlers for the `quizgloss` binary.

pub mod args;
pub mod commands;
