//! Glossary file loader
//!
//! Loading pipeline for one file:
//! 1. Size check
//! 2. Read (a UTF-8 BOM is tolerated)
//! 3. YAML parsing (JSON files parse too)
//! 4. Deserialization to [`GlossaryFile`]
//! 5. Validation
//!
//! [`GlossaryLoader::build`] then layers every file over the built-in
//! glossary in the order given.

use std::path::{Path, PathBuf};

use crate::config::schema::GlossaryFile;
use crate::config::validation::Validator;
use crate::error::ConfigError;
use crate::glossary::Glossary;

// ============================================================================
// Public API
// ============================================================================

/// Options for the glossary loader.
#[derive(Debug, Clone, Default)]
pub struct LoaderOptions {
    /// Limits for glossary files.
    pub limits: GlossaryLimits,
}

/// Limits for glossary files.
#[derive(Debug, Clone)]
pub struct GlossaryLimits {
    /// Maximum glossary file size in bytes.
    pub max_file_size: usize,
}

impl Default for GlossaryLimits {
    fn default() -> Self {
        Self {
            max_file_size: env_or("QUIZGLOSS_MAX_GLOSSARY_SIZE", 1024 * 1024),
        }
    }
}

/// Result of loading a glossary file.
#[derive(Debug)]
pub struct LoadResult {
    /// The parsed and validated file.
    pub file: GlossaryFile,

    /// Warnings encountered during loading.
    pub warnings: Vec<LoadWarning>,
}

/// Warning during glossary loading.
#[derive(Debug, Clone)]
pub struct LoadWarning {
    /// Warning message.
    pub message: String,

    /// Dotted path of the offending entry, e.g. `aliases.ice age`.
    pub location: String,
}

impl std::fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}", self.message, self.location)
    }
}

/// Glossary file loader.
#[derive(Debug, Default)]
pub struct GlossaryLoader {
    options: LoaderOptions,
}

impl GlossaryLoader {
    /// Creates a new loader with the given options.
    #[must_use]
    pub const fn new(options: LoaderOptions) -> Self {
        Self { options }
    }

    /// Creates a new loader with default options.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(LoaderOptions::default())
    }

    /// Loads and validates a single glossary file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read or exceeds the size limit
    /// - The file is empty or YAML parsing fails
    /// - Validation fails
    pub fn load(&self, path: &Path) -> Result<LoadResult, ConfigError> {
        let metadata = std::fs::metadata(path).map_err(|_| ConfigError::MissingFile {
            path: path.to_path_buf(),
        })?;

        let file_size =
            usize::try_from(metadata.len()).unwrap_or(self.options.limits.max_file_size);
        if file_size > self.options.limits.max_file_size {
            return Err(ConfigError::InvalidValue {
                field: "file_size".to_string(),
                value: format!("{file_size} bytes"),
                expected: format!("at most {} bytes", self.options.limits.max_file_size),
            });
        }

        let raw_content = std::fs::read_to_string(path).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            line: None,
            message: e.to_string(),
        })?;
        let raw_content = raw_content.strip_prefix('\u{feff}').unwrap_or(&raw_content);

        let root: serde_yaml::Value =
            serde_yaml::from_str(raw_content).map_err(|e| parse_error(path, &e))?;
        if root.is_null() {
            return Err(ConfigError::ParseError {
                path: path.to_path_buf(),
                line: None,
                message: "Glossary file is empty".to_string(),
            });
        }

        let file: GlossaryFile = serde_yaml::from_value(root).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            line: None,
            message: format!("Failed to deserialize glossary: {e}"),
        })?;

        let validation = Validator::new().validate(&file);
        if validation.has_errors() {
            return Err(ConfigError::ValidationError {
                path: path.display().to_string(),
                errors: validation.errors,
            });
        }

        let warnings = validation
            .warnings
            .into_iter()
            .map(|issue| LoadWarning {
                message: issue.message,
                location: issue.path,
            })
            .collect();

        Ok(LoadResult { file, warnings })
    }

    /// Builds a glossary from the built-in tables plus `paths`, in order.
    ///
    /// Load warnings are logged, not returned.
    ///
    /// # Errors
    ///
    /// Returns the first file's error; no partial glossary is produced.
    pub fn build(&self, paths: &[PathBuf]) -> Result<Glossary, ConfigError> {
        let mut glossary = Glossary::builtin().clone();
        for path in paths {
            let LoadResult { file, warnings } = self.load(path)?;
            for warning in &warnings {
                tracing::warn!(path = %path.display(), "{warning}");
            }
            file.apply_to(&mut glossary);
            tracing::info!(
                path = %path.display(),
                overrides = file.overrides.len(),
                words = file.words.len(),
                aliases = file.aliases.len(),
                patterns = file.patterns.len(),
                "glossary file loaded"
            );
        }
        Ok(glossary)
    }
}

fn parse_error(path: &Path, e: &serde_yaml::Error) -> ConfigError {
    ConfigError::ParseError {
        path: path.to_path_buf(),
        line: e.location().map(|l| l.line()),
        message: e.to_string(),
    }
}

fn env_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".yaml")
            .tempfile()
            .unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn load_valid_file() {
        let file = write_temp("overrides:\n  Berlin: Germany's capital\n");
        let result = GlossaryLoader::with_defaults().load(file.path()).unwrap();
        assert_eq!(result.file.overrides["Berlin"], "Germany's capital");
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn load_strips_bom() {
        let file = write_temp("\u{feff}words:\n  glacier: moving ice\n");
        let result = GlossaryLoader::with_defaults().load(file.path()).unwrap();
        assert_eq!(result.file.words["glacier"], "moving ice");
    }

    #[test]
    fn missing_file() {
        let err = GlossaryLoader::with_defaults()
            .load(Path::new("/nonexistent/quizgloss/glossary.yaml"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::MissingFile { .. }));
    }

    #[test]
    fn empty_file_rejected() {
        let file = write_temp("");
        let err = GlossaryLoader::with_defaults().load(file.path()).unwrap_err();
        assert!(err.to_string().contains("empty"), "{err}");
    }

    #[test]
    fn syntax_error_rejected() {
        let file = write_temp("words:\n  glacier: [unclosed\n");
        let err = GlossaryLoader::with_defaults().load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }), "{err:?}");
    }

    #[test]
    fn wrong_shape_rejected() {
        let file = write_temp("- just\n- a list\n");
        let err = GlossaryLoader::with_defaults().load(file.path()).unwrap_err();
        assert!(err.to_string().contains("deserialize"), "{err}");
    }

    #[test]
    fn validation_failure() {
        let file = write_temp("patterns:\n  - tokens: []\n    description: everything\n");
        let err = GlossaryLoader::with_defaults().load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError { .. }));
    }

    #[test]
    fn warnings_are_returned() {
        let file = write_temp("aliases:\n  ice age: a cold period\n");
        let result = GlossaryLoader::with_defaults().load(file.path()).unwrap();
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.warnings[0].location, "aliases.ice age");
        assert_eq!(
            result.warnings[0].to_string(),
            "Entry is not a single word and will never be matched at aliases.ice age"
        );
    }

    #[test]
    fn size_limit_enforced() {
        let file = write_temp("words:\n  glacier: moving ice\n");
        let loader = GlossaryLoader::new(LoaderOptions {
            limits: GlossaryLimits { max_file_size: 4 },
        });
        let err = loader.load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn build_layers_files_in_order() {
        let first = write_temp("overrides:\n  Berlin: first\n  Madrid: Spain's capital\n");
        let second = write_temp("overrides:\n  berlin: second\n");
        let glossary = GlossaryLoader::with_defaults()
            .build(&[first.path().to_path_buf(), second.path().to_path_buf()])
            .unwrap();
        assert_eq!(glossary.describe("Berlin"), "second");
        assert_eq!(glossary.describe("Madrid"), "Spain's capital");
        assert_eq!(glossary.describe("Rome"), "Italy's capital, home to ancient ruins");
    }

    #[test]
    fn build_without_files_is_builtin() {
        let glossary = GlossaryLoader::with_defaults().build(&[]).unwrap();
        assert_eq!(glossary.stats(), Glossary::builtin().stats());
    }
}
