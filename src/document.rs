//! Question documents
//!
//! A question document is a JSON array of record objects. Only the
//! `question`, `answer`, `explanation` and `options` fields are read; every
//! other field is carried through untouched and in its original key order.
//! Regeneration sets `englishExpression` on every record.
//!
//! A pass is all-or-nothing: every paragraph is computed before any record
//! changes, and the file is replaced atomically by [`QuestionDocument::save`].

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{DocumentError, Result};
use crate::expression::{Question, build_with};
use crate::glossary::Glossary;

/// Record key that holds the generated paragraph.
pub const EXPRESSION_FIELD: &str = "englishExpression";

/// Glob for split question files inside a directory.
pub const SPLIT_FILE_PATTERN: &str = "questions_*.json";

/// Single-file fallback inside a directory.
pub const SINGLE_FILE_NAME: &str = "questions.json";

type Record = Map<String, Value>;

/// Counts from one regeneration pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RegenerateSummary {
    /// Records processed.
    pub records: usize,
    /// Records whose expression was added or changed.
    pub changed: usize,
}

/// An in-memory question document.
#[derive(Debug, Clone)]
pub struct QuestionDocument {
    path: PathBuf,
    records: Vec<Record>,
}

impl QuestionDocument {
    /// Reads and parses the document at `path`.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read, or a document error
    /// if it is not a JSON array of objects.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let document = Self::parse(path, &content)?;
        tracing::info!(
            path = %path.display(),
            records = document.len(),
            "question document loaded"
        );
        Ok(document)
    }

    /// Parses document text. `path` is used for error messages and saving.
    ///
    /// # Errors
    ///
    /// Returns a document error if `content` is not a JSON array of objects.
    pub fn parse(path: &Path, content: &str) -> std::result::Result<Self, DocumentError> {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        let root: Value = serde_json::from_str(content).map_err(|source| DocumentError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        let Value::Array(items) = root else {
            return Err(DocumentError::NotAnArray {
                path: path.to_path_buf(),
            });
        };

        let records = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::Object(record) => Ok(record),
                _ => Err(DocumentError::NotAnObject {
                    path: path.to_path_buf(),
                    index,
                }),
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Self {
            path: path.to_path_buf(),
            records,
        })
    }

    /// Path the document was loaded from and will be saved to.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the document has no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Extracts the builder's view of the record at `index`.
    ///
    /// # Errors
    ///
    /// Returns a document error if a required field is missing or has the
    /// wrong type.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn question(&self, index: usize) -> std::result::Result<Question, DocumentError> {
        let record = &self.records[index];
        Ok(Question {
            question: self.text_field(index, record, "question")?,
            answer: self.text_field(index, record, "answer")?,
            explanation: self.text_field(index, record, "explanation")?,
            options: self.options_field(index, record)?,
        })
    }

    /// The stored expression of the record at `index`, if it has one.
    #[must_use]
    pub fn stored_expression(&self, index: usize) -> Option<&str> {
        self.records
            .get(index)
            .and_then(|record| record.get(EXPRESSION_FIELD))
            .and_then(Value::as_str)
    }

    /// Builds the paragraph for every record without modifying the document.
    ///
    /// The record index within this document selects the template.
    ///
    /// # Errors
    ///
    /// Returns the first malformed record's error.
    pub fn expressions(
        &self,
        glossary: &Glossary,
    ) -> std::result::Result<Vec<String>, DocumentError> {
        (0..self.records.len())
            .map(|index| {
                let question = self.question(index)?;
                let expression = build_with(glossary, &question, index);
                tracing::debug!(index, answer = %question.answer, "expression built");
                Ok(expression)
            })
            .collect()
    }

    /// Sets `englishExpression` on every record.
    ///
    /// # Errors
    ///
    /// Returns the first malformed record's error, in which case no record
    /// has been modified.
    pub fn regenerate(
        &mut self,
        glossary: &Glossary,
    ) -> std::result::Result<RegenerateSummary, DocumentError> {
        let expressions = self.expressions(glossary)?;
        let mut summary = RegenerateSummary {
            records: expressions.len(),
            changed: 0,
        };

        for (record, expression) in self.records.iter_mut().zip(expressions) {
            if record.get(EXPRESSION_FIELD).and_then(Value::as_str) != Some(expression.as_str()) {
                summary.changed += 1;
            }
            record.insert(EXPRESSION_FIELD.to_string(), Value::String(expression));
        }

        Ok(summary)
    }

    /// Indices of records whose stored expression differs from the one that
    /// would be generated now. A missing expression counts as stale.
    ///
    /// # Errors
    ///
    /// Returns the first malformed record's error.
    pub fn stale_records(
        &self,
        glossary: &Glossary,
    ) -> std::result::Result<Vec<usize>, DocumentError> {
        let expressions = self.expressions(glossary)?;
        Ok(expressions
            .iter()
            .enumerate()
            .filter(|(index, expression)| {
                self.stored_expression(*index) != Some(expression.as_str())
            })
            .map(|(index, _)| index)
            .collect())
    }

    /// Serializes the document as pretty-printed JSON with no trailing
    /// newline.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.records)
    }

    /// Writes the document back to its path.
    ///
    /// The JSON is written to a hidden sibling file first and then renamed
    /// over the original.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization, writing or renaming fails.
    pub fn save(&self) -> Result<()> {
        let json = self.to_json()?;
        let temp_path = temp_path_for(&self.path);
        fs::write(&temp_path, json)?;
        if let Err(e) = fs::rename(&temp_path, &self.path) {
            let _ = fs::remove_file(&temp_path);
            return Err(e.into());
        }
        tracing::info!(
            path = %self.path.display(),
            records = self.len(),
            "question document written"
        );
        Ok(())
    }

    fn text_field(
        &self,
        index: usize,
        record: &Record,
        field: &'static str,
    ) -> std::result::Result<String, DocumentError> {
        match record.get(field) {
            None => Err(self.missing(index, field)),
            Some(Value::String(text)) => Ok(text.clone()),
            Some(_) => Err(self.invalid(index, field, "a string")),
        }
    }

    fn options_field(
        &self,
        index: usize,
        record: &Record,
    ) -> std::result::Result<Vec<String>, DocumentError> {
        const FIELD: &str = "options";
        const EXPECTED: &str = "an array of strings";

        let Some(value) = record.get(FIELD) else {
            return Err(self.missing(index, FIELD));
        };
        let Value::Array(items) = value else {
            return Err(self.invalid(index, FIELD, EXPECTED));
        };
        items
            .iter()
            .map(|item| {
                item.as_str()
                    .map(str::to_string)
                    .ok_or_else(|| self.invalid(index, FIELD, EXPECTED))
            })
            .collect()
    }

    fn missing(&self, index: usize, field: &'static str) -> DocumentError {
        DocumentError::MissingField {
            path: self.path.clone(),
            index,
            field,
        }
    }

    fn invalid(&self, index: usize, field: &'static str, expected: &'static str) -> DocumentError {
        DocumentError::InvalidField {
            path: self.path.clone(),
            index,
            field,
            expected,
        }
    }
}

fn temp_path_for(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map_or_else(|| "questions.json".into(), |n| n.to_string_lossy());
    path.with_file_name(format!(".{name}.tmp"))
}

/// Resolves a CLI path to the documents it names.
///
/// A file names itself. A directory names its `questions_*.json` files in
/// sorted order, or its `questions.json` when there are none.
///
/// # Errors
///
/// Returns an I/O error if `path` does not exist or the directory cannot be
/// listed, and a document error if a directory holds no question files.
pub fn discover(path: &Path) -> Result<Vec<PathBuf>> {
    let metadata = fs::metadata(path)?;
    if !metadata.is_dir() {
        return Ok(vec![path.to_path_buf()]);
    }

    let pattern = format!(
        "{}/{SPLIT_FILE_PATTERN}",
        glob::Pattern::escape(&path.to_string_lossy())
    );
    let mut split_files = glob::glob(&pattern)
        .map_err(std::io::Error::other)?
        .map(|entry| entry.map_err(glob::GlobError::into_error))
        .collect::<std::result::Result<Vec<_>, _>>()?;
    split_files.retain(|p| p.is_file());
    split_files.sort();

    if !split_files.is_empty() {
        tracing::debug!(dir = %path.display(), files = split_files.len(), "split question files found");
        return Ok(split_files);
    }

    let single = path.join(SINGLE_FILE_NAME);
    if single.is_file() {
        return Ok(vec![single]);
    }

    Err(DocumentError::NoDocuments {
        dir: path.to_path_buf(),
    }
    .into())
}
