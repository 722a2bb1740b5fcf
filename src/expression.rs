//! Explanation paragraph builder.
//!
//! Builds the `englishExpression` paragraph for one question: a prefix
//! sentence from one of four templates, one sentence per wrong option, and
//! a closing reminder. Output is a pure function of the question, its index
//! and the glossary.

use crate::glossary::Glossary;

/// The fields of a question record that the builder reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// Prompt text.
    pub question: String,
    /// Correct answer; expected to be one of `options`.
    pub answer: String,
    /// Why the answer is correct.
    pub explanation: String,
    /// Candidate answers in display order.
    pub options: Vec<String>,
}

impl Question {
    /// Options that are not byte-identical to the answer, in list order.
    ///
    /// Near-duplicates that differ in case or whitespace are kept.
    pub fn wrong_options(&self) -> impl Iterator<Item = &str> {
        self.options
            .iter()
            .map(String::as_str)
            .filter(move |option| *option != self.answer)
    }
}

/// Prefix sentence shapes, cycled by record index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    /// `For "{topic}", {answer} is correct because {explanation}.`
    CorrectBecause,
    /// `"{topic}" points at {answer}; {explanation}.`
    PointsAt,
    /// `Remember that {answer} answers "{topic}"—{explanation}.`
    Remember,
    /// `{topic} makes sense with {answer} since {explanation}.`
    MakesSense,
}

impl Template {
    /// All templates in cycle order.
    pub const ALL: [Self; 4] = [
        Self::CorrectBecause,
        Self::PointsAt,
        Self::Remember,
        Self::MakesSense,
    ];

    /// Template used for the record at `index`.
    #[must_use]
    pub const fn for_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    /// Fills the template.
    #[must_use]
    pub fn render(self, topic: &str, answer: &str, explanation: &str) -> String {
        match self {
            Self::CorrectBecause => {
                format!("For \"{topic}\", {answer} is correct because {explanation}.")
            }
            Self::PointsAt => format!("\"{topic}\" points at {answer}; {explanation}."),
            Self::Remember => format!("Remember that {answer} answers \"{topic}\"—{explanation}."),
            Self::MakesSense => format!("{topic} makes sense with {answer} since {explanation}."),
        }
    }
}

/// Trims the prompt and strips trailing `?` and `.` characters.
#[must_use]
pub fn clean_topic(prompt: &str) -> &str {
    prompt.trim().trim_end_matches(['?', '.'])
}

/// Trims the explanation and strips a single trailing `.`.
#[must_use]
pub fn clean_explanation(explanation: &str) -> &str {
    let trimmed = explanation.trim();
    trimmed.strip_suffix('.').unwrap_or(trimmed)
}

/// Builds the paragraph for `question` with the built-in glossary.
#[must_use]
pub fn build(question: &Question, index: usize) -> String {
    build_with(Glossary::builtin(), question, index)
}

/// Builds the paragraph for `question` with a specific glossary.
#[must_use]
pub fn build_with(glossary: &Glossary, question: &Question, index: usize) -> String {
    let topic = clean_topic(&question.question);
    let explanation = clean_explanation(&question.explanation);
    let answer = question.answer.as_str();

    let mut sentences = vec![Template::for_index(index).render(topic, answer, explanation)];
    sentences.extend(question.wrong_options().map(|option| {
        let description = glossary.describe(option);
        format!(
            "\"{option}\" refers to {description}; that focus differs from {answer}, \
             so it doesn't match {topic}."
        )
    }));
    sentences.push(format!(
        "Keep {answer} in mind the next time you see \"{topic}\"."
    ));

    sentences.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capital_question() -> Question {
        Question {
            question: "What is the capital of France?".to_string(),
            answer: "Paris".to_string(),
            explanation: "Paris has been the French capital for centuries.".to_string(),
            options: vec!["Paris".into(), "Rome".into(), "Berlin".into()],
        }
    }

    #[test]
    fn full_paragraph_first_template() {
        let paragraph = build(&capital_question(), 0);
        assert_eq!(
            paragraph,
            "For \"What is the capital of France\", Paris is correct because Paris has been \
             the French capital for centuries. \"Rome\" refers to Italy's capital, home to \
             ancient ruins; that focus differs from Paris, so it doesn't match What is the \
             capital of France. \"Berlin\" refers to berlin; that focus differs from Paris, \
             so it doesn't match What is the capital of France. Keep Paris in mind the next \
             time you see \"What is the capital of France\"."
        );
    }

    #[test]
    fn one_sentence_per_wrong_option() {
        let paragraph = build(&capital_question(), 1);
        assert_eq!(paragraph.matches(" refers to ").count(), 2);
        assert!(paragraph.contains("\"Rome\" refers to"));
        assert!(paragraph.contains("\"Berlin\" refers to"));
        assert!(!paragraph.contains("\"Paris\" refers to"));
    }

    #[test]
    fn template_cycle() {
        let q = capital_question();
        assert!(build(&q, 0).starts_with("For \"What is the capital of France\", Paris is correct"));
        assert!(build(&q, 1).starts_with("\"What is the capital of France\" points at Paris; "));
        assert!(build(&q, 2).starts_with("Remember that Paris answers \"What is the capital of France\"—"));
        assert!(build(&q, 3).starts_with("What is the capital of France makes sense with Paris since "));
        assert_eq!(build(&q, 0), build(&q, 4));
        assert_eq!(build(&q, 3), build(&q, 7));
    }

    #[test]
    fn template_for_index_wraps() {
        assert_eq!(Template::for_index(0), Template::CorrectBecause);
        assert_eq!(Template::for_index(5), Template::PointsAt);
        assert_eq!(Template::for_index(usize::MAX), Template::MakesSense);
    }

    #[test]
    fn topic_strips_trailing_marks() {
        assert_eq!(clean_topic("  Which planet has rings?  "), "Which planet has rings");
        assert_eq!(clean_topic("Name the river...?"), "Name the river");
        assert_eq!(clean_topic("Is 2.5 a number"), "Is 2.5 a number");
    }

    #[test]
    fn explanation_strips_one_period() {
        assert_eq!(clean_explanation(" It orbits the Sun. "), "It orbits the Sun");
        assert_eq!(clean_explanation("And so on.."), "And so on.");
        assert_eq!(clean_explanation("No period"), "No period");
    }

    #[test]
    fn near_duplicate_answer_gets_a_sentence() {
        let q = Question {
            question: "Capital of Italy?".to_string(),
            answer: "Rome".to_string(),
            explanation: "Rome is the capital.".to_string(),
            options: vec!["Rome".into(), "rome".into(), "Milan".into()],
        };
        let paragraph = build(&q, 0);
        assert!(paragraph.contains("\"rome\" refers to Italy's capital"));
        assert!(!paragraph.contains("\"Rome\" refers to"));
        assert_eq!(q.wrong_options().collect::<Vec<_>>(), vec!["rome", "Milan"]);
    }

    #[test]
    fn no_wrong_options() {
        let q = Question {
            question: "Say yes.".to_string(),
            answer: "Yes".to_string(),
            explanation: "It is yes".to_string(),
            options: vec!["Yes".into()],
        };
        assert_eq!(
            build(&q, 3),
            "Say yes makes sense with Yes since It is yes. Keep Yes in mind the next time you see \"Say yes\"."
        );
    }

    #[test]
    fn build_is_deterministic() {
        let q = capital_question();
        assert_eq!(build(&q, 2), build(&q, 2));
    }

    #[test]
    fn custom_glossary_is_used() {
        let mut glossary = Glossary::default();
        glossary.insert_override("Berlin", "Germany's capital");
        let paragraph = build_with(&glossary, &capital_question(), 0);
        assert!(paragraph.contains("\"Berlin\" refers to Germany's capital;"));
        assert!(paragraph.contains("\"Rome\" refers to rome;"));
    }
}
