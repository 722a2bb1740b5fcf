//! Shared integration-test harness for running the `quizgloss` binary
//! against scratch copies of fixture documents.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Helpers around the compiled `quizgloss` binary.
pub struct QuizGlossProcess;

impl QuizGlossProcess {
    /// Runs the binary with `args` and waits for it to exit.
    ///
    /// Logging is pinned to `warn` and colour is disabled so stderr is
    /// stable across environments.
    #[allow(clippy::missing_panics_doc)]
    pub fn spawn_command(args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_quizgloss"))
            .args(args)
            .env_remove("QUIZGLOSS_QUESTIONS")
            .env_remove("QUIZGLOSS_GLOSSARY")
            .env("QUIZGLOSS_LOG_LEVEL", "warn")
            .env("NO_COLOR", "1")
            .output()
            .expect("failed to run quizgloss")
    }

    /// Runs the binary with a path argument appended.
    #[allow(clippy::missing_panics_doc)]
    pub fn spawn_with_path(args: &[&str], path: &Path) -> Output {
        let path = path.to_str().expect("temp path should be UTF-8");
        let mut all: Vec<&str> = args.to_vec();
        all.push(path);
        Self::spawn_command(&all)
    }

    /// Returns the path to a test fixture.
    #[must_use]
    pub fn fixture_path(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests/fixtures")
            .join(name)
    }

    /// Copies a fixture into `dir` under `name` and returns the new path.
    #[allow(clippy::missing_panics_doc)]
    pub fn copy_fixture(fixture: &str, dir: &Path, name: &str) -> PathBuf {
        let target = dir.join(name);
        std::fs::copy(Self::fixture_path(fixture), &target).expect("failed to copy fixture");
        target
    }
}

/// Reads a JSON document from disk.
#[allow(clippy::missing_panics_doc)]
pub fn read_json(path: &Path) -> serde_json::Value {
    let content = std::fs::read_to_string(path).expect("failed to read document");
    serde_json::from_str(&content).expect("document should be valid JSON")
}
