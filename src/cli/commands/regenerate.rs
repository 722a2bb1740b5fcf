//! `regenerate` command
//!
//! Loads every question document named on the command line, builds the
//! `englishExpression` paragraph for each record, and then either writes the
//! documents back, prints the paragraphs (`--dry-run`), or reports records
//! whose stored paragraph is out of date (`--check`).
//!
//! Every document is loaded and every paragraph computed before anything is
//! written, so a malformed record anywhere leaves all files untouched.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::cli::args::{OutputFormat, RegenerateArgs};
use crate::config::GlossaryLoader;
use crate::document::{QuestionDocument, RegenerateSummary, discover};
use crate::error::QuizGlossError;
use crate::glossary::Glossary;

/// Per-document line of the write report.
#[derive(Debug, Serialize)]
struct WriteReport<'a> {
    path: &'a Path,
    #[serde(flatten)]
    summary: RegenerateSummary,
}

/// Per-document line of the check report.
#[derive(Debug, Serialize)]
struct CheckReport<'a> {
    path: &'a Path,
    records: usize,
    stale: Vec<usize>,
}

/// One generated paragraph in dry-run output.
#[derive(Debug, Serialize)]
struct Preview<'a> {
    path: &'a Path,
    index: usize,
    expression: String,
}

/// Run the `regenerate` command.
///
/// # Errors
///
/// Returns an error if:
/// - A glossary file fails to load
/// - A path does not exist or a directory holds no question files
/// - A document is malformed or a record lacks a required field
/// - `--check` finds out-of-date records
/// - Writing a document fails
pub fn run(args: &RegenerateArgs) -> Result<(), QuizGlossError> {
    let glossary = GlossaryLoader::with_defaults().build(&args.glossary.glossaries)?;
    let documents = load_documents(&args.paths)?;

    if args.check {
        check(&documents, &glossary, args.format)
    } else if args.dry_run {
        preview(&documents, &glossary, args.format)
    } else {
        write(documents, &glossary, args.format)
    }
}

/// Resolves `paths` to documents and loads them all.
///
/// A document reached through more than one path is loaded once, under the
/// first spelling of its path.
fn load_documents(paths: &[PathBuf]) -> Result<Vec<QuestionDocument>, QuizGlossError> {
    let mut seen: HashSet<PathBuf> = HashSet::new();
    let mut files: Vec<PathBuf> = Vec::new();
    for path in paths {
        if !path.exists() {
            return Err(QuizGlossError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("file not found: {}", path.display()),
            )));
        }
        for file in discover(path)? {
            if seen.insert(std::fs::canonicalize(&file)?) {
                files.push(file);
            }
        }
    }

    files.iter().map(|file| QuestionDocument::load(file)).collect()
}

fn write(
    mut documents: Vec<QuestionDocument>,
    glossary: &Glossary,
    format: OutputFormat,
) -> Result<(), QuizGlossError> {
    let summaries = documents
        .iter_mut()
        .map(|document| document.regenerate(glossary))
        .collect::<Result<Vec<_>, _>>()?;

    for document in &documents {
        document.save()?;
    }

    let reports: Vec<WriteReport<'_>> = documents
        .iter()
        .zip(summaries)
        .map(|(document, summary)| WriteReport {
            path: document.path(),
            summary,
        })
        .collect();

    match format {
        OutputFormat::Human => {
            for report in &reports {
                println!(
                    "{}: {} record(s), {} updated",
                    report.path.display(),
                    report.summary.records,
                    report.summary.changed
                );
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&reports)?),
    }
    Ok(())
}

fn check(
    documents: &[QuestionDocument],
    glossary: &Glossary,
    format: OutputFormat,
) -> Result<(), QuizGlossError> {
    let reports = documents
        .iter()
        .map(|document| {
            Ok(CheckReport {
                path: document.path(),
                records: document.len(),
                stale: document.stale_records(glossary)?,
            })
        })
        .collect::<Result<Vec<_>, QuizGlossError>>()?;

    for report in &reports {
        for index in &report.stale {
            tracing::warn!(path = %report.path.display(), index, "englishExpression is out of date");
        }
    }

    match format {
        OutputFormat::Human => {
            for report in &reports {
                println!(
                    "{}: {} of {} record(s) out of date",
                    report.path.display(),
                    report.stale.len(),
                    report.records
                );
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&reports)?),
    }

    let stale: usize = reports.iter().map(|r| r.stale.len()).sum();
    let total: usize = reports.iter().map(|r| r.records).sum();
    if stale > 0 {
        return Err(QuizGlossError::Stale { stale, total });
    }
    Ok(())
}

fn preview(
    documents: &[QuestionDocument],
    glossary: &Glossary,
    format: OutputFormat,
) -> Result<(), QuizGlossError> {
    let mut previews = Vec::new();
    for document in documents {
        for (index, expression) in document.expressions(glossary)?.into_iter().enumerate() {
            previews.push(Preview {
                path: document.path(),
                index,
                expression,
            });
        }
    }

    match format {
        OutputFormat::Human => {
            for preview in &previews {
                println!("{}[{}]: {}", preview.path.display(), preview.index, preview.expression);
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&previews)?),
    }
    Ok(())
}
