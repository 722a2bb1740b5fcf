//! Error types for `quizgloss`
//!
//! Errors are split by the input that caused them: glossary configuration
//! files and question documents. The top-level error maps each kind to a
//! process exit code.

use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for `quizgloss` CLI operations.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution
    pub const SUCCESS: i32 = 0;

    /// General error (output serialization)
    pub const ERROR: i32 = 1;

    /// Glossary configuration error (invalid YAML, validation failure)
    pub const CONFIG_ERROR: i32 = 2;

    /// I/O error (file not found, permission denied)
    pub const IO_ERROR: i32 = 3;

    /// Question document error (bad shape, missing field)
    pub const DOCUMENT_ERROR: i32 = 4;

    /// `--check` found records whose expression is out of date
    pub const STALE: i32 = 5;

    /// Usage error (invalid arguments, missing required options)
    pub const USAGE_ERROR: i32 = 64;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for `quizgloss` operations.
#[derive(Debug, Error)]
pub enum QuizGlossError {
    /// Glossary configuration loading or validation error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Question document error
    #[error(transparent)]
    Document(#[from] DocumentError),

    /// Stored expressions do not match the regenerated ones
    #[error("{stale} of {total} record(s) have an out-of-date englishExpression")]
    Stale {
        /// Number of out-of-date records across all documents
        stale: usize,
        /// Number of records checked
        total: usize,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error while writing a document or report
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl QuizGlossError {
    /// Returns the appropriate exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) => ExitCode::CONFIG_ERROR,
            Self::Document(_) => ExitCode::DOCUMENT_ERROR,
            Self::Json(_) => ExitCode::ERROR,
            Self::Stale { .. } => ExitCode::STALE,
            Self::Io(_) => ExitCode::IO_ERROR,
        }
    }
}

// ============================================================================
// Configuration Errors
// ============================================================================

/// Glossary file loading and validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// YAML parsing failed
    #[error("parse error in {path}: {message}")]
    ParseError {
        /// Path to the glossary file
        path: PathBuf,
        /// Line number where the error occurred (if available)
        line: Option<usize>,
        /// Error message from the parser
        message: String,
    },

    /// Glossary validation failed
    #[error("validation failed for {path}: {}", format_issues(errors))]
    ValidationError {
        /// Path to the glossary file
        path: String,
        /// List of validation issues found
        errors: Vec<ValidationIssue>,
    },

    /// Referenced glossary file not found
    #[error("file not found: {path}")]
    MissingFile {
        /// Path to the missing file
        path: PathBuf,
    },

    /// Field has an invalid value
    #[error("invalid value for '{field}': got '{value}', expected {expected}")]
    InvalidValue {
        /// Name of the field with invalid value
        field: String,
        /// The actual value provided
        value: String,
        /// Description of what was expected
        expected: String,
    },
}

fn format_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

// ============================================================================
// Validation Types
// ============================================================================

/// A single validation issue found in a glossary file.
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    /// Path to the problematic entry (e.g., "patterns[2].tokens")
    pub path: String,
    /// Description of the validation issue
    pub message: String,
    /// Severity level of the issue
    pub severity: Severity,
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "{}: {} at {}", prefix, self.message, self.path)
    }
}

/// Severity level for validation issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Prevents the glossary from being used
    Error,
    /// Reported but does not prevent loading
    Warning,
}

// ============================================================================
// Document Errors
// ============================================================================

/// Question document errors.
///
/// Any of these aborts the whole batch; nothing is written.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The document could not be parsed as JSON
    #[error("parse error in {path}: {source}")]
    Parse {
        /// Path to the document
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// The document root is not a JSON array
    #[error("{path}: expected a JSON array of question records")]
    NotAnArray {
        /// Path to the document
        path: PathBuf,
    },

    /// A record is not a JSON object
    #[error("{path}: record {index} is not a JSON object")]
    NotAnObject {
        /// Path to the document
        path: PathBuf,
        /// Zero-based record index
        index: usize,
    },

    /// A required record field is absent
    #[error("{path}: record {index} is missing required field '{field}'")]
    MissingField {
        /// Path to the document
        path: PathBuf,
        /// Zero-based record index
        index: usize,
        /// Name of the missing field
        field: &'static str,
    },

    /// A required record field has the wrong JSON type
    #[error("{path}: record {index} field '{field}' must be {expected}")]
    InvalidField {
        /// Path to the document
        path: PathBuf,
        /// Zero-based record index
        index: usize,
        /// Name of the offending field
        field: &'static str,
        /// Description of the expected type
        expected: &'static str,
    },

    /// A directory contained no question documents
    #[error("no questions_*.json or questions.json found in {dir}")]
    NoDocuments {
        /// Directory that was searched
        dir: PathBuf,
    },
}

// ============================================================================
// Result Type Alias
// ============================================================================

/// Result type alias for `quizgloss` operations.
pub type Result<T> = std::result::Result<T, QuizGlossError>;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(ExitCode::SUCCESS, 0);
        assert_eq!(ExitCode::ERROR, 1);
        assert_eq!(ExitCode::CONFIG_ERROR, 2);
        assert_eq!(ExitCode::IO_ERROR, 3);
        assert_eq!(ExitCode::DOCUMENT_ERROR, 4);
        assert_eq!(ExitCode::STALE, 5);
        assert_eq!(ExitCode::USAGE_ERROR, 64);
    }

    #[test]
    fn test_config_error_exit_code() {
        let err: QuizGlossError = ConfigError::MissingFile {
            path: PathBuf::from("/test"),
        }
        .into();
        assert_eq!(err.exit_code(), ExitCode::CONFIG_ERROR);
    }

    #[test]
    fn test_document_error_exit_code() {
        let err: QuizGlossError = DocumentError::MissingField {
            path: PathBuf::from("questions.json"),
            index: 3,
            field: "answer",
        }
        .into();
        assert_eq!(err.exit_code(), ExitCode::DOCUMENT_ERROR);
    }

    #[test]
    fn test_stale_exit_code() {
        let err = QuizGlossError::Stale { stale: 2, total: 10 };
        assert_eq!(err.exit_code(), ExitCode::STALE);
        assert_eq!(
            err.to_string(),
            "2 of 10 record(s) have an out-of-date englishExpression"
        );
    }

    #[test]
    fn test_serialization_error_exit_code() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: QuizGlossError = json_err.into();
        assert_eq!(err.exit_code(), ExitCode::ERROR);
    }

    #[test]
    fn test_io_error_exit_code() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "not found");
        let err: QuizGlossError = io_err.into();
        assert_eq!(err.exit_code(), ExitCode::IO_ERROR);
    }

    #[test]
    fn test_missing_field_display() {
        let err = DocumentError::MissingField {
            path: PathBuf::from("questions.json"),
            index: 7,
            field: "options",
        };
        assert_eq!(
            err.to_string(),
            "questions.json: record 7 is missing required field 'options'"
        );
    }

    #[test]
    fn test_validation_issue_display() {
        let issue = ValidationIssue {
            path: "patterns[0].tokens".to_string(),
            message: "pattern has no tokens".to_string(),
            severity: Severity::Error,
        };
        assert_eq!(
            issue.to_string(),
            "error: pattern has no tokens at patterns[0].tokens"
        );
    }

    #[test]
    fn test_validation_error_lists_issues() {
        let err = ConfigError::ValidationError {
            path: "extra.yaml".to_string(),
            errors: vec![
                ValidationIssue {
                    path: "words.".to_string(),
                    message: "empty key".to_string(),
                    severity: Severity::Error,
                },
                ValidationIssue {
                    path: "patterns[1].description".to_string(),
                    message: "empty description".to_string(),
                    severity: Severity::Error,
                },
            ],
        };
        let text = err.to_string();
        assert!(text.contains("extra.yaml"));
        assert!(text.contains("empty key"));
        assert!(text.contains("patterns[1].description"));
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::ParseError {
            path: PathBuf::from("glossary.yaml"),
            line: Some(4),
            message: "unexpected token".to_string(),
        };
        assert!(err.to_string().contains("glossary.yaml"));
        assert!(err.to_string().contains("unexpected token"));
    }
}
