//! `describe` command
//!
//! Prints the gloss the paragraph generator would use for each phrase.

use serde::Serialize;

use crate::cli::args::{DescribeArgs, OutputFormat};
use crate::config::GlossaryLoader;
use crate::error::QuizGlossError;
use crate::glossary::{Glossary, Source};

/// One described phrase in JSON output.
#[derive(Debug, Serialize)]
struct DescribedPhrase<'a> {
    phrase: &'a str,
    description: String,
    source: Source,
}

/// Describe every phrase in `args`.
///
/// # Errors
///
/// Returns a configuration error if a glossary file fails to load, or a
/// JSON error if output serialization fails.
pub fn run(args: &DescribeArgs) -> Result<(), QuizGlossError> {
    let glossary = GlossaryLoader::with_defaults().build(&args.glossary.glossaries)?;
    let described = describe_all(&glossary, &args.phrases);

    match args.format {
        OutputFormat::Human => {
            for item in &described {
                println!("{}: {}", item.phrase, item.description);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&described)?);
        }
    }
    Ok(())
}

fn describe_all<'a>(glossary: &Glossary, phrases: &'a [String]) -> Vec<DescribedPhrase<'a>> {
    phrases
        .iter()
        .map(|phrase| {
            let resolution = glossary.resolve(phrase);
            tracing::debug!(phrase = %phrase, source = %resolution.source, "phrase described");
            DescribedPhrase {
                phrase,
                description: resolution.description,
                source: resolution.source,
            }
        })
        .collect()
}
