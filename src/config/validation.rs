//! Glossary file validation
//!
//! Validation collects ALL issues (doesn't stop at the first) so a single
//! run reports everything wrong with a file.

use std::collections::HashMap;

use indexmap::IndexMap;

use crate::config::schema::GlossaryFile;
use crate::error::{Severity, ValidationIssue};
use crate::glossary::tokenize;

/// Result of glossary validation.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Validation errors (prevent loading).
    pub errors: Vec<ValidationIssue>,

    /// Validation warnings (informational).
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationResult {
    /// Returns `true` if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns `true` if validation passed (no errors).
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Glossary file validator.
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<ValidationIssue>,
    warnings: Vec<ValidationIssue>,
}

impl Validator {
    /// Creates a new validator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates a glossary file and returns the result.
    pub fn validate(&mut self, file: &GlossaryFile) -> ValidationResult {
        self.errors.clear();
        self.warnings.clear();

        self.validate_phrase_map(&file.overrides, "overrides");
        self.validate_word_map(&file.words, "words");
        self.validate_word_map(&file.aliases, "aliases");
        self.validate_patterns(file);

        ValidationResult {
            errors: std::mem::take(&mut self.errors),
            warnings: std::mem::take(&mut self.warnings),
        }
    }

    fn validate_phrase_map(&mut self, entries: &IndexMap<String, String>, section: &str) {
        let mut seen: HashMap<String, &str> = HashMap::new();
        for (key, description) in entries {
            let path = format!("{section}.{key}");
            if key.trim().is_empty() {
                self.add_error(&path, "Key cannot be empty");
            }
            if description.trim().is_empty() {
                self.add_error(&path, "Description cannot be empty");
            }
            let normalized = key.trim().to_lowercase();
            if let Some(previous) = seen.insert(normalized, key.as_str()) {
                self.add_warning(
                    &path,
                    &format!("Duplicates '{previous}' when compared case-insensitively; the later entry wins"),
                );
            }
        }
    }

    fn validate_word_map(&mut self, entries: &IndexMap<String, String>, section: &str) {
        self.validate_phrase_map(entries, section);
        for key in entries.keys() {
            if !is_single_token(key) && !key.trim().is_empty() {
                self.add_warning(
                    &format!("{section}.{key}"),
                    "Entry is not a single word and will never be matched",
                );
            }
        }
    }

    fn validate_patterns(&mut self, file: &GlossaryFile) {
        for (i, pattern) in file.patterns.iter().enumerate() {
            let path = format!("patterns[{i}]");
            if pattern.tokens.is_empty() {
                self.add_error(
                    &format!("{path}.tokens"),
                    "Pattern must list at least one token",
                );
            }
            for (j, token) in pattern.tokens.iter().enumerate() {
                if !is_single_token(token) {
                    self.add_error(
                        &format!("{path}.tokens[{j}]"),
                        &format!("'{token}' is not a single word (no spaces or punctuation)"),
                    );
                }
            }
            if pattern.description.trim().is_empty() {
                self.add_error(
                    &format!("{path}.description"),
                    "Description cannot be empty",
                );
            }
        }
    }

    fn add_error(&mut self, path: &str, message: &str) {
        self.errors.push(ValidationIssue {
            path: path.to_string(),
            message: message.to_string(),
            severity: Severity::Error,
        });
    }

    fn add_warning(&mut self, path: &str, message: &str) {
        self.warnings.push(ValidationIssue {
            path: path.to_string(),
            message: message.to_string(),
            severity: Severity::Warning,
        });
    }
}

/// A key can match a token only if it tokenizes to exactly itself.
fn is_single_token(key: &str) -> bool {
    let tokens = tokenize(key);
    tokens.len() == 1 && tokens[0] == key.to_lowercase()
}
