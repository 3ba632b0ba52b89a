//! # survey-flow
//!
//! Adaptive survey execution. Presentation-agnostic.
//!
//! A survey is an ordered list of questions delivered by a content service. Each
//! question may carry skip-logic targets that send the participant to another
//! question, or out of the survey, depending on the answer. This crate validates
//! answers, resolves targets and keeps track of the session; rendering and
//! transport stay with the caller.
//!
//! ## Usage
//!
//! ```rust
//! use survey_flow::{Answer, EngineConfig, Step, SurveyRunner};
//!
//! let json = r#"[
//!     { "id": "smoker", "question_type": "pick-one", "body": "Do you smoke?",
//!       "options": [
//!         { "id": "yes", "value": "Yes" },
//!         { "id": "no", "value": "No", "targets": [{ "question_id": "exit" }] }
//!       ] },
//!     { "id": "per-day", "question_type": "numerical", "body": "Cigarettes per day?",
//!       "min": 1, "max": 40, "max_display": "More than 40" }
//! ]"#;
//!
//! let mut runner = SurveyRunner::from_json(json, EngineConfig::default()).unwrap();
//! assert_eq!(runner.submit_answer(Answer::choice("yes")).unwrap(), Step::Ask { index: 1 });
//! assert!(runner.submit_answer("0").is_err());
//! assert_eq!(runner.submit_answer("max_display").unwrap(), Step::Complete);
//! assert_eq!(runner.into_results().len(), 2);
//! ```
//!
//! ## Pieces
//!
//! - [`validate`] - type-specific answer rules
//! - [`resolve_next`] - first-match skip-logic routing
//! - [`SurveyRunner`] - the session state machine
//! - [`ResultCollector`] - one result per question, last write wins
//! - [`load_survey`] - JSON content decoding
//! - [`Respondent`] / [`run_session`] - drive a session from a UI or a script

// Re-export all types from survey-flow-types
pub use survey_flow_types::*;

mod validator;
pub use validator::{is_valid, validate};

mod resolver;
pub use resolver::{Route, effective_value, matching_target, resolve, resolve_next};

mod collector;
pub use collector::ResultCollector;

mod runner;
pub use runner::{SessionError, SessionState, Step, SurveyRunner};

mod loader;
pub use loader::{LoadError, LoadReport, Unparseable, load_questions, load_survey};

mod error;
pub use error::SurveyError;

mod respondent;
pub use respondent::{Reply, Respondent, run_session};

// Scripted respondent for running surveys without a participant
mod scripted;
pub use scripted::{ScriptError, ScriptedRespondent};
