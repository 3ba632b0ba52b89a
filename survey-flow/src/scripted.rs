//! Scripted respondent for running surveys without a participant.
//!
//! `ScriptedRespondent` answers each question from a pre-defined queue of
//! replies. This is useful for testing survey content and routing.
//!
//! # Example
//!
//! ```rust
//! use survey_flow::{
//!     EngineConfig, Question, QuestionKind, ScriptedRespondent, SurveyRunner,
//!     TextInputQuestion, run_session,
//! };
//!
//! let runner = SurveyRunner::from_questions(
//!     vec![Question::new(
//!         "name",
//!         "What is your name?",
//!         QuestionKind::TextInput(TextInputQuestion::new()),
//!     )],
//!     EngineConfig::default(),
//! )
//! .unwrap();
//!
//! let mut script = ScriptedRespondent::new().with_text("name", "Alice");
//! let results = run_session(runner, &mut script).unwrap();
//!
//! assert_eq!(results.answer("name").and_then(|a| a.as_text()), Some("Alice"));
//! ```

use std::collections::{HashMap, VecDeque};

use survey_flow_types::{Answer, Question, ValidationError};

use crate::respondent::{Reply, Respondent};

/// A respondent that replays pre-configured replies.
///
/// Replies for a question are used in the order they were added, one per
/// visit, so a survey that loops back can be answered differently each time.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRespondent {
    replies: HashMap<String, VecDeque<Reply>>,
}

/// Error type for ScriptedRespondent.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("No scripted reply left for question '{0}'")]
    MissingReply(String),

    #[error("Scripted answer for '{question}' was rejected: {reason}")]
    Rejected {
        question: String,
        reason: ValidationError,
    },
}

impl ScriptedRespondent {
    /// Create a new empty script.
    pub fn new() -> Self {
        Self {
            replies: HashMap::new(),
        }
    }

    /// Queue a reply for a question.
    pub fn with_reply(mut self, question_id: impl Into<String>, reply: Reply) -> Self {
        self.replies
            .entry(question_id.into())
            .or_default()
            .push_back(reply);
        self
    }

    /// Queue an answer for a question.
    pub fn with_answer(self, question_id: impl Into<String>, answer: impl Into<Answer>) -> Self {
        self.with_reply(question_id, Reply::Answer(answer.into()))
    }

    /// Queue a text answer (TextInput, DateInput, Numerical).
    pub fn with_text(self, question_id: impl Into<String>, text: impl Into<String>) -> Self {
        self.with_answer(question_id, Answer::Text(text.into()))
    }

    /// Queue a number (Scale).
    pub fn with_number(self, question_id: impl Into<String>, value: f64) -> Self {
        self.with_answer(question_id, Answer::Number(value))
    }

    /// Queue a single choice (PickOne).
    pub fn with_choice(self, question_id: impl Into<String>, option: impl Into<String>) -> Self {
        self.with_answer(question_id, Answer::Choice(option.into()))
    }

    /// Queue several choices (PickMany).
    pub fn with_choices<I, S>(self, question_id: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with_answer(question_id, Answer::choices(options))
    }

    /// Queue a `(lower, upper)` pair (Range).
    pub fn with_range(self, question_id: impl Into<String>, lower: f64, upper: f64) -> Self {
        self.with_answer(question_id, Answer::Range(lower, upper))
    }

    /// Queue a skip.
    pub fn with_skip(self, question_id: impl Into<String>) -> Self {
        self.with_reply(question_id, Reply::Skip)
    }

    /// Queue a step back.
    pub fn with_back(self, question_id: impl Into<String>) -> Self {
        self.with_reply(question_id, Reply::Back)
    }

    /// Queue a cancellation.
    pub fn with_cancel(self, question_id: impl Into<String>) -> Self {
        self.with_reply(question_id, Reply::Cancel)
    }

    /// Replies not consumed by the session, per question.
    pub fn remaining(&self, question_id: &str) -> usize {
        self.replies.get(question_id).map_or(0, VecDeque::len)
    }
}

impl Respondent for ScriptedRespondent {
    type Error = ScriptError;

    fn respond(
        &mut self,
        question: &Question,
        rejection: Option<&ValidationError>,
    ) -> Result<Reply, Self::Error> {
        // A script has no second opinion; a rejected answer fails the run.
        if let Some(reason) = rejection {
            return Err(ScriptError::Rejected {
                question: question.id().to_string(),
                reason: reason.clone(),
            });
        }

        self.replies
            .get_mut(question.id())
            .and_then(VecDeque::pop_front)
            .ok_or_else(|| ScriptError::MissingReply(question.id().to_string()))
    }
}
