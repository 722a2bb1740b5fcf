//! Version information display
//!
//! Prints version and built-in glossary sizes in human or JSON format.

use serde::Serialize;

use crate::cli::args::{OutputFormat, VersionArgs};
use crate::error::QuizGlossError;
use crate::glossary::{Glossary, GlossaryStats};

#[derive(Debug, Serialize)]
struct VersionInfo {
    name: &'static str,
    version: &'static str,
    glossary: GlossaryStats,
}

/// Print version and build information.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn run(args: &VersionArgs) -> Result<(), QuizGlossError> {
    let info = VersionInfo {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        glossary: Glossary::builtin().stats(),
    };

    match args.format {
        OutputFormat::Human => {
            println!("{} {}", info.name, info.version);
            println!(
                "built-in glossary: {} overrides, {} patterns, {} words, {} aliases",
                info.glossary.overrides,
                info.glossary.patterns,
                info.glossary.words,
                info.glossary.aliases
            );
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string(&info)?);
        }
    }
    Ok(())
}
