//! `quizgloss` - explanation paragraphs for trivia question banks
//!
//! This library describes short quiz option phrases through a layered
//! glossary and builds the `englishExpression` paragraph stored with each
//! question of a JSON question document.

pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod expression;
pub mod glossary;
pub mod observability;
