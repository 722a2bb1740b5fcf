//! CLI argument definitions
//!
//! All Clap derive structs for `quizgloss` command-line parsing.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

use crate::observability::LogFormat;

/// Question bank location used when no path is given.
pub const DEFAULT_QUESTIONS_PATH: &str =
    "EnglishGeneralKnowledge/EnglishGeneralKnowledge/SwiftQuizApp/Resources/questions.json";

// ============================================================================
// Root CLI
// ============================================================================

/// Generates explanation paragraphs for multiple-choice trivia question banks.
#[derive(Parser, Debug)]
#[command(name = "quizgloss", author, version, about)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-error output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output control.
    #[arg(long, default_value = "auto", global = true, env = "QUIZGLOSS_COLOR")]
    pub color: ColorChoice,

    /// Log output format.
    #[arg(long, default_value = "human", global = true)]
    pub log_format: LogFormat,
}

// ============================================================================
// Top-Level Commands
// ============================================================================

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Regenerate the englishExpression field of every question.
    Regenerate(RegenerateArgs),

    /// Print the gloss the generator would use for option phrases.
    Describe(DescribeArgs),

    /// Generate shell completion scripts.
    Completions(CompletionsArgs),

    /// Display version information.
    Version(VersionArgs),
}

/// Glossary extension files shared by commands that describe options.
#[derive(Args, Debug, Default)]
pub struct GlossaryArgs {
    /// YAML glossary file layered over the built-in tables (repeatable).
    #[arg(short, long = "glossary", env = "QUIZGLOSS_GLOSSARY")]
    pub glossaries: Vec<PathBuf>,
}

/// Arguments for `regenerate`.
#[derive(Args, Debug)]
#[command(group = clap::ArgGroup::new("mode").multiple(false))]
pub struct RegenerateArgs {
    /// Question documents, or directories holding `questions_*.json`.
    #[arg(default_value = DEFAULT_QUESTIONS_PATH, env = "QUIZGLOSS_QUESTIONS")]
    pub paths: Vec<PathBuf>,

    #[command(flatten)]
    pub glossary: GlossaryArgs,

    /// Verify stored expressions are current; write nothing.
    #[arg(long, group = "mode")]
    pub check: bool,

    /// Print the generated expressions; write nothing.
    #[arg(long, group = "mode")]
    pub dry_run: bool,

    /// Report format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

/// Arguments for `describe`.
#[derive(Args, Debug)]
pub struct DescribeArgs {
    /// Option phrases to describe.
    #[arg(required = true)]
    pub phrases: Vec<String>,

    #[command(flatten)]
    pub glossary: GlossaryArgs,

    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

// ============================================================================
// Completions / Version
// ============================================================================

/// Arguments for shell completion generation.
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Target shell for completion script.
    pub shell: Shell,
}

/// Arguments for version display.
#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

// ============================================================================
// CLI-Local Enums
// ============================================================================

/// Color output choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal support.
    #[default]
    Auto,
    /// Always use color.
    Always,
    /// Never use color.
    Never,
}

/// Output format for structured output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}

/// Shell type for completion generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell.
    Bash,
    /// Zsh shell.
    Zsh,
    /// Fish shell.
    Fish,
    /// `PowerShell`.
    #[value(name = "powershell")]
    PowerShell,
    /// Elvish shell.
    Elvish,
}

// ============================================================================
// Tests
// ============================================================================
