//! Survey content shared by the tests and documentation of `survey-flow`.
//!
//! Every survey is available twice: as the JSON a content service would deliver
//! and as a [`SurveyDefinition`](survey_flow_types::SurveyDefinition) built in code.
//! Both spellings describe the same questions.

pub mod sleep_diary;
pub mod smoking_habits;
pub mod trip_planner;

pub use sleep_diary::{SLEEP_DIARY_JSON, sleep_diary};
pub use smoking_habits::{SMOKING_HABITS_JSON, smoking_habits};
pub use trip_planner::{TRIP_PLANNER_JSON, trip_planner};
