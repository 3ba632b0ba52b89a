//! Core types for the survey-flow crate.
//!
//! This crate provides the foundational types for running skip-logic surveys:
//! - `SurveyDefinition` - The ordered question list plus welcome/success text
//! - `Question` and `QuestionKind` - Individual questions and their type-specific bounds
//! - `QuestionOption` and `Target` - Choices and the declarative skip-logic rules
//! - `Answer` and `SurveyResult` - What a participant submitted and how it was judged
//! - `EngineConfig` - Sentinel tokens and validation toggles
//! - `ValidationError`, `ConfigError` - Bad answers vs. malformed content

mod answer;
pub use answer::Answer;

mod config;
pub use config::{EngineConfig, RangeMatch, UnknownTypePolicy};

mod target;
pub use target::{Criteria, Target};

mod option;
pub use option::QuestionOption;

mod question;
pub use question::{
    BoundedQuestion, DateInputQuestion, NumericalQuestion, PickQuestion, Question, QuestionKind,
    QuestionType, TextInputQuestion,
};

mod result;
pub use result::SurveyResult;

mod survey_definition;
pub use survey_definition::SurveyDefinition;

mod error;
pub use error::{AnswerError, ConfigError, ConfigWarning, NavigationFallback, ValidationError};
