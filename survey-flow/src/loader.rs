//! Decoding surveys from content-service JSON.
//!
//! A document is either a bare array of questions or a survey object:
//!
//! ```json
//! {
//!   "id": "sleep",
//!   "welcome": "A few questions about last night.",
//!   "success": "Thanks!",
//!   "questions": [
//!     { "id": "q1", "question_type": "numerical", "body": "Hours slept?",
//!       "min": 0, "max": 12, "min_display": "None", "max_display": "More than 12",
//!       "targets": [{ "question_id": "exit", "criteria": "range", "min": -1, "max": -1 }] }
//!   ]
//! }
//! ```
//!
//! Each question is matched against an ordered table of decoders keyed by its
//! `question_type`. A question no decoder accepts is reported as unparseable,
//! never silently defaulted.

use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;
use survey_flow_types::{
    BoundedQuestion, ConfigError, ConfigWarning, Criteria, DateInputQuestion, EngineConfig,
    NumericalQuestion, PickQuestion, Question, QuestionKind, QuestionOption, QuestionType,
    SurveyDefinition, Target, TextInputQuestion, UnknownTypePolicy,
};
use tracing::{debug, warn};

use crate::SurveyRunner;

/// Error type for loading survey content.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Malformed survey document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed question at position {index}: {source}")]
    Question {
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Question '{}' has unknown type '{}'", .0.id, .0.question_type)]
    UnknownQuestionType(Unparseable),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// A question whose type tag no decoder accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unparseable {
    pub id: String,
    pub question_type: String,
}

/// A decoded survey plus what the loader had to say about it.
#[derive(Debug, Clone)]
pub struct LoadReport {
    pub definition: SurveyDefinition,

    /// Questions left out under `UnknownTypePolicy::Drop`.
    pub dropped: Vec<Unparseable>,

    /// Non-fatal content warnings from `SurveyDefinition::check`.
    pub warnings: Vec<ConfigWarning>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDocument {
    Questions(Vec<Value>),
    Survey(RawSurvey),
}

#[derive(Deserialize)]
struct RawSurvey {
    id: Option<String>,
    welcome: Option<String>,
    success: Option<String>,
    questions: Vec<Value>,
}

#[derive(Deserialize)]
struct RawQuestion {
    id: String,
    question_type: String,
    #[serde(default)]
    body: String,
    image: Option<String>,
    min: Option<f64>,
    max: Option<f64>,
    interval: Option<f64>,
    min_display: Option<String>,
    max_display: Option<String>,
    min_label: Option<String>,
    max_label: Option<String>,
    placeholder: Option<String>,
    max_characters: Option<usize>,
    min_date: Option<String>,
    max_date: Option<String>,
    options: Option<Vec<RawOption>>,
    targets: Option<Vec<RawTarget>>,
}

#[derive(Deserialize)]
struct RawOption {
    id: String,
    #[serde(default, alias = "label")]
    value: String,
    targets: Option<Vec<RawTarget>>,
}

#[derive(Deserialize)]
struct RawTarget {
    question_id: String,
    #[serde(default)]
    criteria: RawCriteria,
    min: Option<f64>,
    max: Option<f64>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "snake_case")]
enum RawCriteria {
    #[default]
    Range,
}

type Decoder = fn(&RawQuestion, &EngineConfig) -> Result<QuestionKind, ConfigError>;

/// Candidate decoders, tried in order.
const DECODERS: &[(QuestionType, Decoder)] = &[
    (QuestionType::Numerical, decode_numerical),
    (QuestionType::PickOne, decode_pick_one),
    (QuestionType::PickMany, decode_pick_many),
    (QuestionType::TextInput, decode_text),
    (QuestionType::DateInput, decode_date),
    (QuestionType::Scale, decode_scale),
    (QuestionType::Range, decode_range),
];

/// Empty display strings count as absent.
fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|s| !s.is_empty()).cloned()
}

fn decode_numerical(raw: &RawQuestion, _: &EngineConfig) -> Result<QuestionKind, ConfigError> {
    Ok(QuestionKind::Numerical(NumericalQuestion {
        min: raw.min,
        max: raw.max,
        min_display: non_empty(&raw.min_display),
        max_display: non_empty(&raw.max_display),
        min_label: non_empty(&raw.min_label),
        max_label: non_empty(&raw.max_label),
    }))
}

fn decode_pick(raw: &RawQuestion) -> PickQuestion {
    let options = raw
        .options
        .iter()
        .flatten()
        .map(|option| QuestionOption {
            id: option.id.clone(),
            label: option.value.clone(),
            targets: decode_targets(option.targets.as_deref()),
        })
        .collect();
    PickQuestion::new(options)
}

fn decode_pick_one(raw: &RawQuestion, _: &EngineConfig) -> Result<QuestionKind, ConfigError> {
    Ok(QuestionKind::PickOne(decode_pick(raw)))
}

fn decode_pick_many(raw: &RawQuestion, _: &EngineConfig) -> Result<QuestionKind, ConfigError> {
    Ok(QuestionKind::PickMany(decode_pick(raw)))
}

fn decode_text(raw: &RawQuestion, _: &EngineConfig) -> Result<QuestionKind, ConfigError> {
    Ok(QuestionKind::TextInput(TextInputQuestion {
        max_characters: raw.max_characters,
        placeholder: non_empty(&raw.placeholder),
    }))
}

fn decode_date(raw: &RawQuestion, config: &EngineConfig) -> Result<QuestionKind, ConfigError> {
    let parse = |field: &'static str,
                 value: &Option<String>|
     -> Result<Option<NaiveDate>, ConfigError> {
        let Some(value) = non_empty(value) else {
            return Ok(None);
        };
        config
            .parse_date(&value)
            .map(Some)
            .map_err(|_| ConfigError::InvalidDate {
                question: raw.id.clone(),
                field,
                value,
            })
    };
    Ok(QuestionKind::DateInput(DateInputQuestion {
        min_date: parse("min_date", &raw.min_date)?,
        max_date: parse("max_date", &raw.max_date)?,
    }))
}

fn decode_bounded(raw: &RawQuestion) -> BoundedQuestion {
    BoundedQuestion {
        min: raw.min,
        max: raw.max,
        interval: raw.interval,
        min_label: non_empty(&raw.min_label),
        max_label: non_empty(&raw.max_label),
    }
}

fn decode_scale(raw: &RawQuestion, _: &EngineConfig) -> Result<QuestionKind, ConfigError> {
    Ok(QuestionKind::Scale(decode_bounded(raw)))
}

fn decode_range(raw: &RawQuestion, _: &EngineConfig) -> Result<QuestionKind, ConfigError> {
    Ok(QuestionKind::Range(decode_bounded(raw)))
}

fn decode_targets(targets: Option<&[RawTarget]>) -> Vec<Target> {
    targets
        .unwrap_or_default()
        .iter()
        .map(|target| {
            let criteria = match target.criteria {
                RawCriteria::Range => Criteria::Range {
                    min: target.min,
                    max: target.max,
                },
            };
            Target::new(target.question_id.clone(), criteria)
        })
        .collect()
}

enum Decoded {
    Question(Question),
    Unparseable(Unparseable),
}

fn decode_question(raw: RawQuestion, config: &EngineConfig) -> Result<Decoded, ConfigError> {
    let Some((_, decode)) = DECODERS
        .iter()
        .find(|(question_type, _)| question_type.as_str() == raw.question_type)
    else {
        return Ok(Decoded::Unparseable(Unparseable {
            id: raw.id,
            question_type: raw.question_type,
        }));
    };

    let kind = decode(&raw, config)?;
    let mut question = Question::new(raw.id.clone(), raw.body.clone(), kind)
        .with_targets(decode_targets(raw.targets.as_deref()));
    if let Some(image) = non_empty(&raw.image) {
        question = question.with_image(image);
    }
    Ok(Decoded::Question(question))
}

/// Decode a survey document and check its content.
pub fn load_survey(json: &str, config: &EngineConfig) -> Result<LoadReport, LoadError> {
    let (mut definition, values) = match serde_json::from_str::<RawDocument>(json)? {
        RawDocument::Questions(values) => (SurveyDefinition::empty(), values),
        RawDocument::Survey(survey) => {
            let mut definition = SurveyDefinition::empty();
            definition.id = survey.id;
            definition.prelude = survey.welcome;
            definition.epilogue = survey.success;
            (definition, survey.questions)
        }
    };

    let mut dropped = Vec::new();
    for (index, value) in values.into_iter().enumerate() {
        let raw: RawQuestion = serde_json::from_value(value)
            .map_err(|source| LoadError::Question { index, source })?;
        match decode_question(raw, config)? {
            Decoded::Question(question) => definition.questions.push(question),
            Decoded::Unparseable(unparseable) => match config.unknown_question_types {
                UnknownTypePolicy::Reject => {
                    return Err(LoadError::UnknownQuestionType(unparseable));
                }
                UnknownTypePolicy::Drop => {
                    warn!(
                        question = %unparseable.id,
                        question_type = %unparseable.question_type,
                        "dropping question of unknown type"
                    );
                    dropped.push(unparseable);
                }
            },
        }
    }

    let warnings = definition.check(config)?;
    debug!(
        survey = ?definition.id,
        questions = definition.len(),
        dropped = dropped.len(),
        "survey loaded"
    );

    Ok(LoadReport {
        definition,
        dropped,
        warnings,
    })
}

/// Decode just the question list of a survey document.
pub fn load_questions(json: &str, config: &EngineConfig) -> Result<Vec<Question>, LoadError> {
    load_survey(json, config).map(|report| report.definition.questions)
}

impl SurveyRunner {
    /// Decode a survey document and start a session over it.
    pub fn from_json(json: &str, config: EngineConfig) -> Result<Self, LoadError> {
        let report = load_survey(json, &config)?;
        Ok(Self::new(report.definition, config)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> EngineConfig {
        EngineConfig::default()
    }

    #[test]
    fn every_tag_has_a_decoder() {
        for question_type in QuestionType::ALL {
            assert!(
                DECODERS.iter().any(|(ty, _)| *ty == question_type),
                "no decoder for {question_type}"
            );
        }
    }

    #[test]
    fn decodes_numerical_with_targets() {
        let json = r#"[{
            "id": "q1", "type": "survey_question", "question_type": "numerical",
            "body": "How many cups of coffee?", "min": 0, "max": 10,
            "min_display": "None", "max_display": "", "min_label": null,
            "targets": [
                { "question_id": "exit", "criteria": "range", "min": -1, "max": -1 },
                { "question_id": "q1", "min": 5 }
            ]
        }]"#;
        let questions = load_questions(json, &config()).unwrap();
        assert_eq!(questions.len(), 1);

        let question = &questions[0];
        assert_eq!(question.body(), "How many cups of coffee?");
        let QuestionKind::Numerical(numerical) = question.kind() else {
            panic!("expected numerical question");
        };
        assert_eq!(numerical.min, Some(0.0));
        assert_eq!(numerical.min_display.as_deref(), Some("None"));
        assert_eq!(numerical.max_display, None);
        assert_eq!(
            question.targets(),
            &[
                Target::range("exit", Some(-1.0), Some(-1.0)),
                Target::range("q1", Some(5.0), None),
            ]
        );
    }

    #[test]
    fn decodes_survey_object_with_options() {
        let json = r#"{
            "id": "s1", "welcome": "Hello", "success": "Bye",
            "questions": [
                { "id": "q1", "question_type": "pick-one", "body": "Pick",
                  "options": [
                    { "id": "a", "value": "Apple" },
                    { "id": "b", "label": "Banana", "targets": [{ "question_id": "exit" }] }
                  ] },
                { "id": "q2", "question_type": "date-input", "min_date": "2020-01-01" }
            ]
        }"#;
        let report = load_survey(json, &config()).unwrap();
        let survey = &report.definition;

        assert_eq!(survey.id.as_deref(), Some("s1"));
        assert_eq!(survey.prelude.as_deref(), Some("Hello"));
        assert_eq!(survey.epilogue.as_deref(), Some("Bye"));
        assert!(report.warnings.is_empty());

        let pick = &survey.questions[0];
        assert_eq!(pick.options()[1].label, "Banana");
        assert_eq!(
            pick.option("b").and_then(QuestionOption::first_target),
            Some(&Target::always("exit"))
        );

        let QuestionKind::DateInput(date) = survey.questions[1].kind() else {
            panic!("expected date question");
        };
        assert_eq!(date.min_date, NaiveDate::from_ymd_opt(2020, 1, 1));
        assert_eq!(date.max_date, None);
    }

    #[test]
    fn unknown_type_is_rejected_by_default() {
        let json = r#"[{ "id": "q1", "question_type": "slider" }]"#;
        let err = load_survey(json, &config()).unwrap_err();
        assert!(matches!(
            err,
            LoadError::UnknownQuestionType(Unparseable { ref id, ref question_type })
                if id == "q1" && question_type == "slider"
        ));
    }

    #[test]
    fn unknown_type_can_be_dropped() {
        let json = r#"[
            { "id": "q1", "question_type": "slider" },
            { "id": "q2", "question_type": "text-input", "max_characters": 5 }
        ]"#;
        let config = config().with_unknown_question_types(UnknownTypePolicy::Drop);
        let report = load_survey(json, &config).unwrap();

        assert_eq!(report.definition.len(), 1);
        assert_eq!(report.definition.questions[0].id(), "q2");
        assert_eq!(
            report.dropped,
            vec![Unparseable {
                id: "q1".to_string(),
                question_type: "slider".to_string(),
            }]
        );
    }

    #[test]
    fn bad_date_bound_is_a_config_error() {
        let json = r#"[{ "id": "q1", "question_type": "date-input", "max_date": "31/12/2020" }]"#;
        assert!(matches!(
            load_survey(json, &config()),
            Err(LoadError::Config(ConfigError::InvalidDate { field: "max_date", .. }))
        ));
    }

    #[test]
    fn missing_scale_bounds_fail_at_load() {
        let json = r#"[{ "id": "q1", "question_type": "scale", "min": 0 }]"#;
        assert!(matches!(
            load_survey(json, &config()),
            Err(LoadError::Config(ConfigError::MissingBound { bound: "maximum", .. }))
        ));
    }

    #[test]
    fn display_pick_without_its_bound_fails_at_load() {
        let below = r#"[{ "id": "q1", "question_type": "numerical", "max": 99,
                          "min_display": "Under 18" }]"#;
        assert!(matches!(
            SurveyRunner::from_json(below, config()),
            Err(LoadError::Config(ConfigError::MissingBound { bound: "minimum", .. }))
        ));

        let above = r#"[{ "id": "q1", "question_type": "numerical", "min": 18,
                          "max_display": "Over 99" }]"#;
        assert!(matches!(
            load_survey(above, &config()),
            Err(LoadError::Config(ConfigError::MissingBound { bound: "maximum", .. }))
        ));
    }

    #[test]
    fn structurally_broken_question_reports_position() {
        let json = r#"[
            { "id": "q1", "question_type": "text-input" },
            { "question_type": "text-input" }
        ]"#;
        assert!(matches!(
            load_survey(json, &config()),
            Err(LoadError::Question { index: 1, .. })
        ));
    }

    #[test]
    fn from_json_starts_a_session() {
        let json = r#"[{ "id": "q1", "question_type": "text-input" }]"#;
        let runner = SurveyRunner::from_json(json, config()).unwrap();
        assert_eq!(runner.current_question().map(Question::id), Some("q1"));
    }
}
