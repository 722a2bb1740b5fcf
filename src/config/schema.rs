//! Glossary file schema.
//!
//! ```yaml
//! overrides:
//!   Mitochondrion: the organelle that produces most of a cell's energy
//! words:
//!   glacier: a slowly moving mass of ice
//! aliases:
//!   volcano: an opening in the crust where lava escapes
//! patterns:
//!   - tokens: [greenhouse, gas]
//!     description: a gas that traps heat in the atmosphere
//! ```

use indexmap::IndexMap;
use serde::Deserialize;

use crate::glossary::{Glossary, PhrasePattern};

/// Contents of one glossary extension file.
///
/// Every section is optional. Entries replace built-in entries with the
/// same key; patterns are matched before the built-in patterns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlossaryFile {
    /// Exact phrase to description, matched case-insensitively.
    pub overrides: IndexMap<String, String>,

    /// Single word to description.
    pub words: IndexMap<String, String>,

    /// Single word to description, consulted after `words`.
    pub aliases: IndexMap<String, String>,

    /// Token-set patterns in priority order.
    pub patterns: Vec<PatternEntry>,
}

/// A pattern entry in a glossary file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PatternEntry {
    /// Tokens that must all be present.
    pub tokens: Vec<String>,

    /// Description returned on a match.
    pub description: String,
}

impl GlossaryFile {
    /// Total number of entries across all sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.overrides.len() + self.words.len() + self.aliases.len() + self.patterns.len()
    }

    /// Returns `true` if the file defines no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Layers this file's entries over `glossary`.
    pub fn apply_to(&self, glossary: &mut Glossary) {
        for (phrase, description) in &self.overrides {
            glossary.insert_override(phrase, description.as_str());
        }
        for (word, description) in &self.words {
            glossary.insert_word(word, description.as_str());
        }
        for (word, description) in &self.aliases {
            glossary.insert_alias(word, description.as_str());
        }
        glossary.prepend_patterns(
            self.patterns
                .iter()
                .map(|p| PhrasePattern::new(&p.tokens, p.description.as_str())),
        );
    }
}
