//! Glossary configuration
//!
//! Loads and validates glossary extension files, then layers them over the
//! built-in glossary. The resulting [`Glossary`](crate::glossary::Glossary)
//! is built once at startup and never modified afterwards.

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{GlossaryLimits, GlossaryLoader, LoadResult, LoadWarning, LoaderOptions};
pub use schema::{GlossaryFile, PatternEntry};
pub use validation::{ValidationResult, Validator};
