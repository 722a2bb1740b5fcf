//! CLI command dispatch and handlers
//!
//! Routes parsed CLI arguments to the appropriate command handler.

pub mod completions;
pub mod describe;
pub mod regenerate;
pub mod version;

use crate::cli::args::{Cli, Commands};
use crate::error::QuizGlossError;

/// Dispatch a parsed CLI invocation to the appropriate command handler.
///
/// # Errors
///
/// Returns an error if the dispatched command handler fails.
pub fn dispatch(cli: Cli) -> Result<(), QuizGlossError> {
    match cli.command {
        Commands::Regenerate(args) => regenerate::run(&args),
        Commands::Describe(args) => describe::run(&args),
        Commands::Completions(args) => {
            completions::run(&args);
            Ok(())
        }
        Commands::Version(args) => version::run(&args),
    }
}
