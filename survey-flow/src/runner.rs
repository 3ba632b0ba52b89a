//! The session state machine.
//!
//! A [`SurveyRunner`] owns one session: the immutable question list, the engine
//! config and the results collected so far. Every call completes before it
//! returns; there is nothing to cancel, dropping the runner ends the session.

use survey_flow_types::{
    Answer, AnswerError, ConfigError, ConfigWarning, EngineConfig, Question, SurveyDefinition,
    SurveyResult, ValidationError,
};
use tracing::{debug, warn};

use crate::collector::ResultCollector;
use crate::resolver::{self, Route};
use crate::validator;

/// Error returned by session operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SessionError {
    /// The answer was rejected; ask the same question again.
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// The current question is malformed and can't be answered.
    #[error(transparent)]
    Misconfigured(#[from] ConfigError),

    #[error("Survey session is already complete")]
    AlreadyComplete,

    #[error("No earlier question to go back to")]
    NoHistory,
}

impl From<AnswerError> for SessionError {
    fn from(err: AnswerError) -> Self {
        match err {
            AnswerError::Invalid(err) => Self::Invalid(err),
            AnswerError::Misconfigured(err) => Self::Misconfigured(err),
        }
    }
}

/// Where a session currently stands.
#[derive(Debug, Clone)]
pub enum SessionState {
    /// Waiting for an answer to the question at this declared index.
    AwaitingAnswer { index: usize },

    /// Finished; carries every stored result.
    Complete(ResultCollector),
}

/// What the caller should do after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Show the question at this declared index.
    Ask { index: usize },

    /// The survey is over.
    Complete,
}

/// Runs one survey session.
#[derive(Debug, Clone)]
pub struct SurveyRunner {
    definition: SurveyDefinition,
    config: EngineConfig,
    state: SessionState,
    results: ResultCollector,
    /// Indices of the questions shown before the current one, most recent last.
    /// Never holds an index twice, so it stays shorter than the question list.
    history: Vec<usize>,
    warnings: Vec<ConfigWarning>,
}

impl SurveyRunner {
    /// Start a session, checking the content first.
    ///
    /// An empty survey starts out complete and reports `ConfigWarning::EmptySurvey`.
    pub fn new(definition: SurveyDefinition, config: EngineConfig) -> Result<Self, ConfigError> {
        let warnings = definition.check(&config)?;
        for warning in &warnings {
            warn!(?warning, survey = ?definition.id, "survey content warning");
        }

        let state = if definition.is_empty() {
            SessionState::Complete(ResultCollector::new())
        } else {
            SessionState::AwaitingAnswer { index: 0 }
        };

        Ok(Self {
            definition,
            config,
            state,
            results: ResultCollector::new(),
            history: Vec::new(),
            warnings,
        })
    }

    /// Start a session over a bare question list.
    pub fn from_questions(
        questions: Vec<Question>,
        config: EngineConfig,
    ) -> Result<Self, ConfigError> {
        Self::new(SurveyDefinition::new(questions), config)
    }

    pub fn definition(&self) -> &SurveyDefinition {
        &self.definition
    }

    pub fn questions(&self) -> &[Question] {
        &self.definition.questions
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Content warnings found at start and navigation fallbacks hit since.
    pub fn warnings(&self) -> &[ConfigWarning] {
        &self.warnings
    }

    pub fn is_complete(&self) -> bool {
        matches!(self.state, SessionState::Complete(_))
    }

    /// Declared index of the question awaiting an answer.
    pub fn current_index(&self) -> Option<usize> {
        match self.state {
            SessionState::AwaitingAnswer { index } => Some(index),
            SessionState::Complete(_) => None,
        }
    }

    /// The question awaiting an answer.
    pub fn current_question(&self) -> Option<&Question> {
        self.current_index()
            .and_then(|index| self.definition.questions.get(index))
    }

    /// `(number, total)` of the current question, numbered from 1.
    pub fn position(&self) -> Option<(usize, usize)> {
        self.current_index()
            .map(|index| (index + 1, self.definition.len()))
    }

    /// Results stored so far (or all results once complete).
    pub fn results(&self) -> &ResultCollector {
        match &self.state {
            SessionState::Complete(results) => results,
            SessionState::AwaitingAnswer { .. } => &self.results,
        }
    }

    /// End the session's ownership and hand over the results.
    pub fn into_results(self) -> ResultCollector {
        match self.state {
            SessionState::Complete(results) => results,
            SessionState::AwaitingAnswer { .. } => self.results,
        }
    }

    /// Answer the current question.
    ///
    /// An invalid answer changes nothing and nothing is stored. A valid one
    /// replaces any earlier result for the question and moves the session on.
    pub fn submit_answer(&mut self, answer: impl Into<Answer>) -> Result<Step, SessionError> {
        let index = self.awaiting()?;
        let answer = answer.into();
        let question = &self.definition.questions[index];

        if let Err(err) = validator::validate(question, &answer, &self.config) {
            debug!(question = question.id(), %err, "answer rejected");
            return Err(err.into());
        }

        let route = match resolver::resolve(
            question,
            &answer,
            &self.definition.questions,
            &self.config,
        ) {
            Ok(route) => route,
            Err(fallback) => {
                warn!(%fallback, "continuing in declared order");
                let warning = ConfigWarning::UnresolvedTarget(fallback);
                if !self.warnings.contains(&warning) {
                    self.warnings.push(warning);
                }
                Route::ContinueInOrder
            }
        };
        let next = route.next_index(&self.definition.questions, index);

        let result = SurveyResult::new(question.clone(), answer, true);
        if let Some(previous) = self.results.insert(result) {
            debug!(question = previous.question_id(), "replaced earlier answer");
        }
        debug!(
            question = self.definition.questions[index].id(),
            ?route,
            "answer accepted"
        );

        Ok(self.move_to(index, next))
    }

    /// Move past the current question without answering it.
    pub fn skip_current_question(&mut self) -> Result<Step, SessionError> {
        let index = self.awaiting()?;
        debug!(question = self.definition.questions[index].id(), "question skipped");
        let next = Route::ContinueInOrder.next_index(&self.definition.questions, index);
        Ok(self.move_to(index, next))
    }

    /// Return to the question shown before the current one.
    ///
    /// Its stored result stays until a new valid answer replaces it.
    pub fn go_back(&mut self) -> Result<Step, SessionError> {
        self.awaiting()?;
        let index = self.history.pop().ok_or(SessionError::NoHistory)?;
        self.state = SessionState::AwaitingAnswer { index };
        Ok(Step::Ask { index })
    }

    fn awaiting(&self) -> Result<usize, SessionError> {
        self.current_index().ok_or(SessionError::AlreadyComplete)
    }

    fn move_to(&mut self, from: usize, next: Option<usize>) -> Step {
        self.history.push(from);
        match next {
            Some(index) => {
                // Looping back to an earlier question rewinds the path to it.
                if let Some(seen) = self.history.iter().position(|&shown| shown == index) {
                    self.history.truncate(seen);
                }
                self.state = SessionState::AwaitingAnswer { index };
                Step::Ask { index }
            }
            None => {
                debug!(results = self.results.len(), "survey complete");
                self.state = SessionState::Complete(std::mem::take(&mut self.results));
                Step::Complete
            }
        }
    }
}
