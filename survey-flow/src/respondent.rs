use survey_flow_types::{Answer, Question, ValidationError};
use tracing::debug;

use crate::{ResultCollector, SessionError, SurveyError, SurveyRunner};

/// What a respondent does with the question in front of it.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// Submit an answer.
    Answer(Answer),

    /// Move on without answering.
    Skip,

    /// Return to the previous question.
    Back,

    /// Abandon the survey.
    Cancel,
}

impl From<Answer> for Reply {
    fn from(answer: Answer) -> Self {
        Self::Answer(answer)
    }
}

/// Trait for anything that answers survey questions: a UI, a CLI prompt, a script.
///
/// The engine decides which question comes next; the respondent only answers
/// what it is shown. Presentation is entirely up to the implementation.
pub trait Respondent {
    /// The error type for this respondent.
    type Error: Into<anyhow::Error>;

    /// Answer one question.
    ///
    /// # Arguments
    /// * `question` - The question to answer
    /// * `rejection` - Why the previous answer to this same question was refused,
    ///   if it was
    fn respond(
        &mut self,
        question: &Question,
        rejection: Option<&ValidationError>,
    ) -> Result<Reply, Self::Error>;
}

/// Drive a session to completion and hand over its results.
///
/// Rejected answers are re-prompted with the validation error. `Reply::Back`
/// on the first question is ignored.
pub fn run_session<R: Respondent>(
    mut runner: SurveyRunner,
    respondent: &mut R,
) -> Result<ResultCollector, SurveyError> {
    let mut rejection: Option<ValidationError> = None;

    while let Some(question) = runner.current_question() {
        let reply = respondent
            .respond(question, rejection.as_ref())
            .map_err(SurveyError::backend)?;
        rejection = None;

        match reply {
            Reply::Answer(answer) => match runner.submit_answer(answer) {
                Ok(_) => {}
                Err(SessionError::Invalid(err)) => rejection = Some(err),
                Err(err) => return Err(err.into()),
            },
            Reply::Skip => {
                runner.skip_current_question()?;
            }
            Reply::Back => match runner.go_back() {
                Ok(_) | Err(SessionError::NoHistory) => {}
                Err(err) => return Err(err.into()),
            },
            Reply::Cancel => {
                debug!("survey cancelled by respondent");
                return Err(SurveyError::Cancelled);
            }
        }
    }

    Ok(runner.into_results())
}
