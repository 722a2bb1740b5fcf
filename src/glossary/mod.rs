//! Option glossary and phrase lookup.
//!
//! A [`Glossary`] turns a short quiz-option phrase into a human-readable
//! gloss. Lookup tiers are tried in a fixed order and the first hit wins:
//!
//! 1. exact-phrase overrides (case-insensitive, surrounding whitespace ignored)
//! 2. phrase patterns, matched against the phrase's token set
//! 3. percentages such as `75%` or `12.5%`
//! 4. all-digit phrases, read as years
//! 5. per-word definitions, then keyword aliases, then the raw word
//!
//! Glossaries are built once and only read afterwards. The built-in one is
//! a process-wide static, see [`Glossary::builtin`].

pub mod tables;
pub mod tokenize;

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::LazyLock;

use serde::Serialize;

pub use tokenize::tokenize;
use tokenize::is_digits;

static BUILTIN: LazyLock<Glossary> = LazyLock::new(Glossary::from_builtin_tables);

/// Describes `phrase` with the built-in glossary.
///
/// Total and pure: the same input always yields the same output.
#[must_use]
pub fn describe(phrase: &str) -> String {
    Glossary::builtin().describe(phrase)
}

// ============================================================================
// Phrase Patterns
// ============================================================================

/// A set of required tokens mapped to a fixed description.
///
/// The pattern matches any phrase whose tokens include all required tokens,
/// regardless of order or extra words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhrasePattern {
    tokens: Vec<String>,
    description: String,
}

impl PhrasePattern {
    /// Creates a pattern. Tokens are lowercased.
    pub fn new<I, S>(tokens: I, description: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            tokens: tokens
                .into_iter()
                .map(|t| t.as_ref().to_lowercase())
                .collect(),
            description: description.into(),
        }
    }

    /// Required tokens.
    #[must_use]
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Description returned on a match.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    fn matches(&self, words: &HashSet<&str>) -> bool {
        self.tokens.iter().all(|t| words.contains(t.as_str()))
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Which lookup tier produced a description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Source {
    /// Exact-phrase override.
    Override,
    /// Phrase pattern match.
    Pattern,
    /// Percentage heuristic.
    Percentage,
    /// All-digit heuristic.
    Year,
    /// Per-word substitution.
    Words,
    /// No tokens; the phrase was returned as-is.
    Raw,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Override => "override",
            Self::Pattern => "pattern",
            Self::Percentage => "percentage",
            Self::Year => "year",
            Self::Words => "words",
            Self::Raw => "raw",
        };
        f.write_str(name)
    }
}

/// A description together with the tier that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// The human-readable gloss.
    pub description: String,
    /// The tier that produced it.
    pub source: Source,
}

impl Resolution {
    fn new(description: impl Into<String>, source: Source) -> Self {
        Self {
            description: description.into(),
            source,
        }
    }
}

// ============================================================================
// Glossary
// ============================================================================

/// Entry counts of a glossary, for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GlossaryStats {
    /// Exact-phrase overrides.
    pub overrides: usize,
    /// Phrase patterns.
    pub patterns: usize,
    /// Word definitions.
    pub words: usize,
    /// Keyword aliases.
    pub aliases: usize,
}

/// Lookup tables used to describe quiz options.
#[derive(Debug, Clone, Default)]
pub struct Glossary {
    overrides: HashMap<String, String>,
    patterns: Vec<PhrasePattern>,
    words: HashMap<String, String>,
    aliases: HashMap<String, String>,
}

impl Glossary {
    /// Returns the shared built-in glossary.
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    fn from_builtin_tables() -> Self {
        let mut glossary = Self::default();
        for group in tables::OVERRIDE_GROUPS {
            for (phrase, description) in *group {
                glossary.insert_override(phrase, *description);
            }
        }
        for (tokens, description) in tables::PHRASE_PATTERNS {
            glossary.push_pattern(PhrasePattern::new(tokens.iter(), *description));
        }
        for (word, description) in tables::WORD_DEFINITIONS {
            glossary.insert_word(word, *description);
        }
        for (word, description) in tables::KEYWORD_ALIASES {
            glossary.insert_alias(word, *description);
        }
        glossary
    }

    /// Adds or replaces an exact-phrase override.
    pub fn insert_override(&mut self, phrase: &str, description: impl Into<String>) {
        self.overrides
            .insert(phrase.trim().to_lowercase(), description.into());
    }

    /// Adds or replaces a word definition.
    pub fn insert_word(&mut self, word: &str, description: impl Into<String>) {
        self.words.insert(word.to_lowercase(), description.into());
    }

    /// Adds or replaces a keyword alias.
    pub fn insert_alias(&mut self, word: &str, description: impl Into<String>) {
        self.aliases.insert(word.to_lowercase(), description.into());
    }

    /// Appends a pattern with the lowest priority.
    pub fn push_pattern(&mut self, pattern: PhrasePattern) {
        self.patterns.push(pattern);
    }

    /// Inserts patterns ahead of all existing ones, keeping their order.
    pub fn prepend_patterns(&mut self, patterns: impl IntoIterator<Item = PhrasePattern>) {
        let existing = std::mem::take(&mut self.patterns);
        self.patterns.extend(patterns);
        self.patterns.extend(existing);
    }

    /// Patterns in match order.
    #[must_use]
    pub fn patterns(&self) -> &[PhrasePattern] {
        &self.patterns
    }

    /// Entry counts per table.
    #[must_use]
    pub fn stats(&self) -> GlossaryStats {
        GlossaryStats {
            overrides: self.overrides.len(),
            patterns: self.patterns.len(),
            words: self.words.len(),
            aliases: self.aliases.len(),
        }
    }

    /// Describes a quiz option phrase.
    #[must_use]
    pub fn describe(&self, phrase: &str) -> String {
        self.resolve(phrase).description
    }

    /// Describes a quiz option phrase and reports which tier matched.
    #[must_use]
    pub fn resolve(&self, phrase: &str) -> Resolution {
        let cleaned = phrase.trim();

        if let Some(description) = self.overrides.get(&cleaned.to_lowercase()) {
            return Resolution::new(description.as_str(), Source::Override);
        }

        let words = tokenize(cleaned);
        let word_set: HashSet<&str> = words.iter().map(String::as_str).collect();
        if let Some(pattern) = self.patterns.iter().find(|p| p.matches(&word_set)) {
            return Resolution::new(pattern.description(), Source::Pattern);
        }

        // Checked before the year rule: "75%" tokenizes to ["75"].
        if cleaned
            .strip_suffix('%')
            .is_some_and(|number| is_digits(&number.replace('.', "")))
        {
            return Resolution::new(format!("the percentage {cleaned}"), Source::Percentage);
        }

        if words.is_empty() {
            return Resolution::new(cleaned, Source::Raw);
        }

        if words.iter().all(|w| is_digits(w)) {
            return Resolution::new(format!("the year {cleaned}"), Source::Year);
        }

        let mut seen = HashSet::new();
        let fragments: Vec<&str> = words
            .iter()
            .filter(|w| seen.insert(w.as_str()))
            .map(|w| {
                self.words
                    .get(w)
                    .or_else(|| self.aliases.get(w))
                    .map_or(w.as_str(), String::as_str)
            })
            .collect();
        Resolution::new(fragments.join(" "), Source::Words)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_is_case_insensitive() {
        assert_eq!(describe("paris"), "France's capital, famous for art and monuments");
        assert_eq!(describe("PARIS"), "France's capital, famous for art and monuments");
        assert_eq!(describe("  Paris \n"), "France's capital, famous for art and monuments");
    }

    #[test]
    fn later_override_group_wins() {
        assert_eq!(describe("Star Wars"), "a worldwide film franchise about space battles");
        assert_eq!(describe("Wi-Fi"), "wireless networking technology for the internet");
    }

    #[test]
    fn element_override_beats_word_definition() {
        assert!(describe("Oxygen").starts_with("the gas we breathe and plants release, which"));
        assert_eq!(
            describe("Carbon Dioxide"),
            "the greenhouse gas produced when living things breathe and when fossil fuels burn, \
             so it holds heat in the atmosphere"
        );
    }

    #[test]
    fn pattern_matches_token_subset() {
        assert_eq!(
            describe("Earth's distance from the Sun"),
            "how far Earth is from the Sun"
        );
        assert_eq!(
            describe("The Treaty of Paris"),
            "a formal agreement between countries"
        );
    }

    #[test]
    fn earliest_pattern_wins() {
        // Matches both {solar, flare} and {war}; solar flare is declared first.
        assert_eq!(
            describe("solar flare war"),
            "a burst of energy from the Sun's surface"
        );
        assert_eq!(describe("Solar flares"), "bursts of charged particles from the Sun");
    }

    #[test]
    fn year_and_percentage() {
        assert_eq!(describe("1969"), "the year 1969");
        assert_eq!(describe(" 1969 "), "the year 1969");
        assert_eq!(describe("75%"), "the percentage 75%");
        assert_eq!(describe("12.5%"), "the percentage 12.5%");
        assert_eq!(describe("1914-1918"), "the year 1914-1918");
    }

    #[test]
    fn digits_from_other_scripts() {
        assert_eq!(describe("２０２０"), "the year ２０２０");
        assert_eq!(describe("５０%"), "the percentage ５０%");
        assert_eq!(describe("Ⅱ"), "ⅱ");
    }

    #[test]
    fn percent_sign_alone_is_raw() {
        assert_eq!(describe("%"), "%");
        assert_eq!(Glossary::builtin().resolve("%").source, Source::Raw);
    }

    #[test]
    fn empty_phrase_passes_through() {
        assert_eq!(describe(""), "");
        assert_eq!(describe("   "), "");
    }

    #[test]
    fn words_then_aliases_then_raw() {
        // "ocean" has a definition, "bay" only an alias, "blue" neither.
        assert_eq!(
            describe("Blue Ocean Bay"),
            "blue a huge body of salt water a curved inlet of the sea"
        );
    }

    #[test]
    fn duplicate_tokens_contribute_once() {
        assert_eq!(
            describe("Ocean ocean river"),
            "a huge body of salt water a flowing body of water"
        );
    }

    #[test]
    fn resolve_reports_source() {
        let glossary = Glossary::builtin();
        assert_eq!(glossary.resolve("Rome").source, Source::Override);
        assert_eq!(glossary.resolve("ocean currents").source, Source::Pattern);
        assert_eq!(glossary.resolve("50%").source, Source::Percentage);
        assert_eq!(glossary.resolve("2001").source, Source::Year);
        assert_eq!(glossary.resolve("Mars").source, Source::Words);
        assert_eq!(glossary.resolve("").source, Source::Raw);
    }

    #[test]
    fn builtin_stats() {
        let stats = Glossary::builtin().stats();
        assert_eq!(stats.overrides, 105);
        assert_eq!(stats.patterns, 15);
        assert_eq!(stats.words, 51);
        assert_eq!(stats.aliases, 50);
    }

    #[test]
    fn custom_entries_take_priority() {
        let mut glossary = Glossary::builtin().clone();
        glossary.insert_override("Paris", "the city of light");
        glossary.insert_word("Mars", "the red planet");
        glossary.prepend_patterns([PhrasePattern::new(["solar"], "anything about the Sun")]);

        assert_eq!(glossary.describe("paris"), "the city of light");
        assert_eq!(glossary.describe("mars"), "the red planet");
        assert_eq!(glossary.describe("solar flare"), "anything about the Sun");
        // The built-in glossary is untouched.
        assert_eq!(describe("Paris"), "France's capital, famous for art and monuments");
    }

    #[test]
    fn empty_glossary_falls_back_to_words() {
        let glossary = Glossary::default();
        assert_eq!(glossary.describe("Paris Rome paris"), "paris rome");
    }

    #[test]
    fn source_display() {
        assert_eq!(Source::Override.to_string(), "override");
        assert_eq!(Source::Words.to_string(), "words");
    }
}
