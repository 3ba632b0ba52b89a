use crate::{Answer, Question};

/// The outcome of answering one question.
#[derive(Debug, Clone, PartialEq)]
pub struct SurveyResult {
    /// The question that was answered.
    pub question: Question,

    /// The raw answer as submitted.
    pub answer: Answer,

    /// Whether the answer passed validation.
    pub is_valid: bool,
}

impl SurveyResult {
    pub fn new(question: Question, answer: Answer, is_valid: bool) -> Self {
        Self {
            question,
            answer,
            is_valid,
        }
    }

    pub fn question_id(&self) -> &str {
        self.question.id()
    }
}
