use chrono::NaiveDate;

/// Why an answer was rejected. Recoverable: re-prompt the same question.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Expected a {expected} answer, got {actual}")]
    WrongAnswerKind {
        expected: &'static str,
        actual: &'static str,
    },

    #[error("'{0}' is not a whole number")]
    NotAnInteger(String),

    #[error("Answer is not a number")]
    NotANumber,

    #[error("{value} is below the minimum of {minimum}")]
    BelowMinimum { value: f64, minimum: f64 },

    #[error("{value} is above the maximum of {maximum}")]
    AboveMaximum { value: f64, maximum: f64 },

    #[error("{value} is not a multiple of {interval}")]
    OffInterval { value: f64, interval: f64 },

    #[error("Lower bound {lower} must be less than upper bound {upper}")]
    InvertedRange { lower: f64, upper: f64 },

    #[error("Unknown option '{0}'")]
    UnknownOption(String),

    #[error("Answer cannot be empty")]
    EmptyText,

    #[error("Answer has {length} characters, at most {max} allowed")]
    TooLong { length: usize, max: usize },

    #[error("'{value}' is not a date in format '{format}'")]
    UnparseableDate { value: String, format: String },

    #[error("{date} is before {minimum}")]
    DateBeforeMinimum { date: NaiveDate, minimum: NaiveDate },

    #[error("{date} is after {maximum}")]
    DateAfterMaximum { date: NaiveDate, maximum: NaiveDate },
}

/// Malformed question or target content. Not recoverable by the engine.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("Question '{question}' is missing its {bound} bound")]
    MissingBound {
        question: String,
        bound: &'static str,
    },

    #[error("Question '{question}' has minimum {min} greater than maximum {max}")]
    InvertedBounds { question: String, min: f64, max: f64 },

    #[error("Question '{question}' has non-positive interval {interval}")]
    NonPositiveInterval { question: String, interval: f64 },

    #[error("Question '{question}' has minimum date {min} after maximum date {max}")]
    InvertedDates {
        question: String,
        min: NaiveDate,
        max: NaiveDate,
    },

    #[error("Question '{question}' has no options")]
    MissingOptions { question: String },

    #[error("Question '{question}' declares option '{option}' more than once")]
    DuplicateOption { question: String, option: String },

    #[error("Question id '{0}' is declared more than once")]
    DuplicateQuestion(String),

    #[error("Question '{question}' targets unknown destination '{destination}'")]
    UnknownDestination {
        question: String,
        destination: String,
    },

    #[error("Question '{question}' has unparseable {field} '{value}'")]
    InvalidDate {
        question: String,
        field: &'static str,
        value: String,
    },
}

/// Outcome of validating an answer that did not pass.
///
/// Keeps a user's bad input apart from a question that can never be answered.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AnswerError {
    /// The answer broke the question's rule.
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// The question itself is malformed.
    #[error(transparent)]
    Misconfigured(#[from] ConfigError),
}

impl AnswerError {
    /// Check if the participant should simply be asked again.
    pub fn is_invalid_answer(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }
}

/// A matched target whose destination names no question in the survey.
///
/// Non-fatal: the session continues in declared order.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Target of question '{question}' points at unknown question '{destination}'")]
pub struct NavigationFallback {
    pub question: String,
    pub destination: String,
}

/// Content oddities that do not stop a session from running.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigWarning {
    /// The survey has no questions and completes immediately.
    EmptySurvey,

    /// A target destination is unknown and will fall back to declared order.
    UnresolvedTarget(NavigationFallback),
}
