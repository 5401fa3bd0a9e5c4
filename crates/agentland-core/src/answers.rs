//! Questions, answers and the `ask` capability.

use std::collections::VecDeque;
use std::fmt;

/// An answerable field, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    /// Project or system name
    SystemName,
    /// One-sentence purpose
    Purpose,
    /// Comma-separated architectural layers
    Layers,
    /// Boundary rule sentence
    Boundary,
    /// Comma-separated non-goals
    NonGoals,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::SystemName => "system name",
            Field::Purpose => "purpose",
            Field::Layers => "layers",
            Field::Boundary => "boundary rule",
            Field::NonGoals => "non-goals",
        };
        f.write_str(name)
    }
}

/// A question put to the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    /// Field the answer fills
    pub field: Field,
    /// Prompt text
    pub prompt: &'static str,
}

/// The configuration questions, asked in this order.
pub const QUESTIONS: [Question; 5] = [
    Question {
        field: Field::SystemName,
        prompt: "What is the name of your system/project?",
    },
    Question {
        field: Field::Purpose,
        prompt: "In one sentence, what is the purpose of this system?",
    },
    Question {
        field: Field::Layers,
        prompt: "List the main architectural layers (comma-separated, e.g. API, Service, Storage):",
    },
    Question {
        field: Field::Boundary,
        prompt: "State one boundary rule (e.g. \"The API layer never talks to storage directly\"):",
    },
    Question {
        field: Field::NonGoals,
        prompt: "List what this system will NOT do (comma-separated):",
    },
];

/// Answers collected in one session. Empty means "leave this field alone".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSet {
    /// Project or system name
    pub system_name: String,
    /// One-sentence purpose
    pub purpose: String,
    /// Comma-separated architectural layers
    pub layers: String,
    /// Boundary rule sentence
    pub boundary: String,
    /// Comma-separated non-goals
    pub non_goals: String,
}

impl AnswerSet {
    /// Trimmed answer for `field`, or `None` when it was skipped.
    pub fn get(&self, field: Field) -> Option<&str> {
        let raw = match field {
            Field::SystemName => &self.system_name,
            Field::Purpose => &self.purpose,
            Field::Layers => &self.layers,
            Field::Boundary => &self.boundary,
            Field::NonGoals => &self.non_goals,
        };
        let trimmed = raw.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }

    /// Store an answer for `field`.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::SystemName => &mut self.system_name,
            Field::Purpose => &mut self.purpose,
            Field::Layers => &mut self.layers,
            Field::Boundary => &mut self.boundary,
            Field::NonGoals => &mut self.non_goals,
        };
        *slot = value.into();
    }

    /// Whether every field was skipped.
    pub fn is_empty(&self) -> bool {
        QUESTIONS.iter().all(|q| self.get(q.field).is_none())
    }
}

/// Synchronous line-oriented input from the operator.
///
/// Implemented by the CLI over a terminal and by [`ScriptedPrompter`] in tests.
pub trait Prompter {
    /// Error type for prompt operations
    type Error;

    /// Show `question` and block until one line of input arrives.
    fn ask(&mut self, question: &str) -> Result<String, Self::Error>;
}

/// Ask every question in [`QUESTIONS`] once, in order.
pub fn collect_answers<P: Prompter + ?Sized>(prompter: &mut P) -> Result<AnswerSet, P::Error> {
    let mut answers = AnswerSet::default();
    for question in &QUESTIONS {
        let answer = prompter.ask(question.prompt)?;
        answers.set(question.field, answer.trim());
    }
    Ok(answers)
}

/// Ask a yes/no question where an empty answer means yes.
pub fn confirm<P: Prompter + ?Sized>(prompter: &mut P, question: &str) -> Result<bool, P::Error> {
    let answer = prompter.ask(question)?;
    let answer = answer.trim().to_lowercase();
    Ok(matches!(answer.as_str(), "" | "y" | "yes"))
}

/// Prompter that replays canned answers, then answers empty.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    asked: Vec<String>,
}

impl ScriptedPrompter {
    /// Create a prompter replaying `answers` in order.
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
        }
    }

    /// Questions asked so far.
    pub fn asked(&self) -> &[String] {
        &self.asked
    }
}

impl Prompter for ScriptedPrompter {
    type Error = std::convert::Infallible;

    fn ask(&mut self, question: &str) -> Result<String, Self::Error> {
        self.asked.push(question.to_string());
        Ok(self.answers.pop_front().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_questions_in_declaration_order() {
        let fields: Vec<Field> = QUESTIONS.iter().map(|q| q.field).collect();
        assert_eq!(
            fields,
            vec![
                Field::SystemName,
                Field::Purpose,
                Field::Layers,
                Field::Boundary,
                Field::NonGoals
            ]
        );
    }

    #[test]
    fn test_collect_answers_asks_each_question_once() {
        let mut prompter = ScriptedPrompter::new(["  Orbit  ", "", "DB, Queue", "", "GUI"]);
        let answers = collect_answers(&mut prompter).unwrap();

        assert_eq!(prompter.asked().len(), 5);
        assert_eq!(answers.get(Field::SystemName), Some("Orbit"));
        assert_eq!(answers.get(Field::Purpose), None);
        assert_eq!(answers.get(Field::Layers), Some("DB, Queue"));
        assert_eq!(answers.get(Field::Boundary), None);
        assert_eq!(answers.get(Field::NonGoals), Some("GUI"));
    }

    #[test]
    fn test_whitespace_only_answer_is_skipped() {
        let mut answers = AnswerSet::default();
        answers.set(Field::Purpose, "   \t ");
        assert_eq!(answers.get(Field::Purpose), None);
        assert!(answers.is_empty());
    }

    #[test]
    fn test_confirm_defaults_to_yes() {
        let mut prompter = ScriptedPrompter::new(["", "Y", "yes", "n", "nope"]);
        assert!(confirm(&mut prompter, "?").unwrap());
        assert!(confirm(&mut prompter, "?").unwrap());
        assert!(confirm(&mut prompter, "?").unwrap());
        assert!(!confirm(&mut prompter, "?").unwrap());
        assert!(!confirm(&mut prompter, "?").unwrap());
    }

    #[test]
    fn test_exhausted_script_answers_empty() {
        let mut prompter = ScriptedPrompter::new(Vec::<String>::new());
        let answers = collect_answers(&mut prompter).unwrap();
        assert!(answers.is_empty());
    }
}
