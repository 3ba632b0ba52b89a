use std::collections::HashSet;
use std::fmt;

use chrono::NaiveDate;

use crate::{ConfigError, QuestionOption, Target};

/// A single question in a survey.
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    /// Unique id within the survey; target destinations refer to it.
    id: String,

    /// The prompt text shown to the participant.
    body: String,

    /// The kind of question (determines answer shape, bounds and options).
    kind: QuestionKind,

    /// Question-level skip logic, scanned in order.
    targets: Vec<Target>,

    /// Optional image reference shown with the prompt.
    image: Option<String>,
}

impl Question {
    /// Create a new question without targets.
    pub fn new(id: impl Into<String>, body: impl Into<String>, kind: QuestionKind) -> Self {
        Self {
            id: id.into(),
            body: body.into(),
            kind,
            targets: Vec::new(),
            image: None,
        }
    }

    /// Append a question-level target.
    pub fn with_target(mut self, target: Target) -> Self {
        self.targets.push(target);
        self
    }

    /// Replace all question-level targets.
    pub fn with_targets(mut self, targets: Vec<Target>) -> Self {
        self.targets = targets;
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn kind(&self) -> &QuestionKind {
        &self.kind
    }

    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    pub fn question_type(&self) -> QuestionType {
        self.kind.question_type()
    }

    /// The options of a PickOne/PickMany question; empty for other kinds.
    pub fn options(&self) -> &[QuestionOption] {
        match &self.kind {
            QuestionKind::PickOne(pick) | QuestionKind::PickMany(pick) => &pick.options,
            _ => &[],
        }
    }

    /// Look up an option by id.
    pub fn option(&self, id: &str) -> Option<&QuestionOption> {
        self.options().iter().find(|option| option.id == id)
    }

    /// All targets declared on this question and its options.
    pub fn all_targets(&self) -> impl Iterator<Item = &Target> {
        self.targets
            .iter()
            .chain(self.options().iter().flat_map(|option| option.targets.iter()))
    }

    /// Check the question's own content: bounds, intervals, dates and options.
    ///
    /// Target destinations are checked by `SurveyDefinition::check`, which knows
    /// the other questions.
    pub fn check(&self) -> Result<(), ConfigError> {
        match &self.kind {
            QuestionKind::Numerical(numerical) => {
                // A display pick stands for a value just past its bound.
                if numerical.min_display.is_some() && numerical.min.is_none() {
                    return Err(self.missing_bound("minimum"));
                }
                if numerical.max_display.is_some() && numerical.max.is_none() {
                    return Err(self.missing_bound("maximum"));
                }
                check_bounds(&self.id, numerical.min, numerical.max, None)
            }
            QuestionKind::Scale(bounded) | QuestionKind::Range(bounded) => {
                bounded.require_bounds(&self.id)?;
                check_bounds(&self.id, bounded.min, bounded.max, bounded.interval)
            }
            QuestionKind::PickOne(pick) | QuestionKind::PickMany(pick) => {
                if pick.options.is_empty() {
                    return Err(ConfigError::MissingOptions {
                        question: self.id.clone(),
                    });
                }
                let mut seen = HashSet::new();
                for option in &pick.options {
                    if !seen.insert(option.id.as_str()) {
                        return Err(ConfigError::DuplicateOption {
                            question: self.id.clone(),
                            option: option.id.clone(),
                        });
                    }
                }
                Ok(())
            }
            QuestionKind::DateInput(date) => match (date.min_date, date.max_date) {
                (Some(min), Some(max)) if min > max => Err(ConfigError::InvertedDates {
                    question: self.id.clone(),
                    min,
                    max,
                }),
                _ => Ok(()),
            },
            QuestionKind::TextInput(_) => Ok(()),
        }
    }

    fn missing_bound(&self, bound: &'static str) -> ConfigError {
        ConfigError::MissingBound {
            question: self.id.clone(),
            bound,
        }
    }
}

fn check_bounds(
    question: &str,
    min: Option<f64>,
    max: Option<f64>,
    interval: Option<f64>,
) -> Result<(), ConfigError> {
    if let (Some(min), Some(max)) = (min, max)
        && min > max
    {
        return Err(ConfigError::InvertedBounds {
            question: question.to_string(),
            min,
            max,
        });
    }
    if let Some(interval) = interval
        && interval <= 0.0
    {
        return Err(ConfigError::NonPositiveInterval {
            question: question.to_string(),
            interval,
        });
    }
    Ok(())
}

/// The kind of question, determining the expected answer and its rules.
#[derive(Debug, Clone, PartialEq)]
pub enum QuestionKind {
    /// Integer typed in, with optional "below minimum"/"above maximum" picks.
    Numerical(NumericalQuestion),

    /// Select exactly one option.
    PickOne(PickQuestion),

    /// Select any number of options.
    PickMany(PickQuestion),

    /// Free text.
    TextInput(TextInputQuestion),

    /// A calendar date.
    DateInput(DateInputQuestion),

    /// A single slider value.
    Scale(BoundedQuestion),

    /// A two-handle slider value.
    Range(BoundedQuestion),
}

impl QuestionKind {
    /// The type tag of this kind.
    pub fn question_type(&self) -> QuestionType {
        match self {
            Self::Numerical(_) => QuestionType::Numerical,
            Self::PickOne(_) => QuestionType::PickOne,
            Self::PickMany(_) => QuestionType::PickMany,
            Self::TextInput(_) => QuestionType::TextInput,
            Self::DateInput(_) => QuestionType::DateInput,
            Self::Scale(_) => QuestionType::Scale,
            Self::Range(_) => QuestionType::Range,
        }
    }
}

/// The type discriminator of a question, as it appears in content payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuestionType {
    Numerical,
    PickOne,
    PickMany,
    TextInput,
    DateInput,
    Scale,
    Range,
}

impl QuestionType {
    pub const ALL: [QuestionType; 7] = [
        Self::Numerical,
        Self::PickOne,
        Self::PickMany,
        Self::TextInput,
        Self::DateInput,
        Self::Scale,
        Self::Range,
    ];

    /// The wire tag, e.g. `"pick-one"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Numerical => "numerical",
            Self::PickOne => "pick-one",
            Self::PickMany => "pick-many",
            Self::TextInput => "text-input",
            Self::DateInput => "date-input",
            Self::Scale => "scale",
            Self::Range => "range",
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration for a Numerical question.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NumericalQuestion {
    /// Optional minimum value.
    pub min: Option<f64>,

    /// Optional maximum value.
    pub max: Option<f64>,

    /// Display text of the "below minimum" pick (e.g. "Less than 18").
    pub min_display: Option<String>,

    /// Display text of the "above maximum" pick.
    pub max_display: Option<String>,

    pub min_label: Option<String>,

    pub max_label: Option<String>,
}

impl NumericalQuestion {
    /// Create a new numerical question without bounds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with bounds.
    pub fn with_bounds(min: Option<f64>, max: Option<f64>) -> Self {
        Self {
            min,
            max,
            ..Self::default()
        }
    }

    /// Set the display text of the out-of-range picks.
    pub fn with_display(
        mut self,
        min_display: impl Into<String>,
        max_display: impl Into<String>,
    ) -> Self {
        self.min_display = Some(min_display.into());
        self.max_display = Some(max_display.into());
        self
    }
}

/// Configuration for a PickOne or PickMany question.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PickQuestion {
    /// The available options, in display order.
    pub options: Vec<QuestionOption>,
}

impl PickQuestion {
    pub fn new(options: Vec<QuestionOption>) -> Self {
        Self { options }
    }
}

/// Configuration for a free text question.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextInputQuestion {
    /// Maximum number of characters, if limited.
    pub max_characters: Option<usize>,

    pub placeholder: Option<String>,
}

impl TextInputQuestion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_characters(max_characters: usize) -> Self {
        Self {
            max_characters: Some(max_characters),
            placeholder: None,
        }
    }
}

/// Configuration for a date question. Bounds are inclusive.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DateInputQuestion {
    pub min_date: Option<NaiveDate>,
    pub max_date: Option<NaiveDate>,
}

impl DateInputQuestion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bounds(min_date: Option<NaiveDate>, max_date: Option<NaiveDate>) -> Self {
        Self { min_date, max_date }
    }
}

/// Configuration for Scale and Range questions.
///
/// Both bounds are required; a question loaded without them is malformed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoundedQuestion {
    pub min: Option<f64>,
    pub max: Option<f64>,

    /// Step between selectable values.
    pub interval: Option<f64>,

    pub min_label: Option<String>,
    pub max_label: Option<String>,
}

impl BoundedQuestion {
    /// Create with bounds and no interval.
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
            ..Self::default()
        }
    }

    /// Set the interval.
    pub fn with_interval(mut self, interval: f64) -> Self {
        self.interval = Some(interval);
        self
    }

    /// Both bounds, or the first one that is missing.
    pub fn require_bounds(&self, question: &str) -> Result<(f64, f64), ConfigError> {
        let min = self.min.ok_or_else(|| ConfigError::MissingBound {
            question: question.to_string(),
            bound: "minimum",
        })?;
        let max = self.max.ok_or_else(|| ConfigError::MissingBound {
            question: question.to_string(),
            bound: "maximum",
        })?;
        Ok((min, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_type_tags_are_distinct() {
        let tags: HashSet<_> = QuestionType::ALL.iter().map(QuestionType::as_str).collect();
        assert_eq!(tags.len(), QuestionType::ALL.len());
        assert_eq!(QuestionType::PickMany.to_string(), "pick-many");
    }

    #[test]
    fn scale_without_bounds_is_malformed() {
        let question = Question::new(
            "q1",
            "How much?",
            QuestionKind::Scale(BoundedQuestion::default()),
        );
        assert_eq!(
            question.check(),
            Err(ConfigError::MissingBound {
                question: "q1".to_string(),
                bound: "minimum",
            })
        );
    }

    #[test]
    fn display_pick_needs_its_bound() {
        let mut numerical = NumericalQuestion::with_bounds(None, Some(99.0));
        numerical.min_display = Some("Under 18".to_string());
        let question = Question::new("q1", "Age?", QuestionKind::Numerical(numerical));
        assert_eq!(
            question.check(),
            Err(ConfigError::MissingBound {
                question: "q1".to_string(),
                bound: "minimum",
            })
        );

        let bounded = Question::new(
            "q2",
            "Age?",
            QuestionKind::Numerical(
                NumericalQuestion::with_bounds(Some(18.0), Some(99.0))
                    .with_display("Under 18", "Over 99"),
            ),
        );
        assert_eq!(bounded.check(), Ok(()));
    }

    #[test]
    fn inverted_bounds_and_bad_interval() {
        let inverted = Question::new(
            "q1",
            "",
            QuestionKind::Numerical(NumericalQuestion::with_bounds(Some(10.0), Some(0.0))),
        );
        assert!(matches!(
            inverted.check(),
            Err(ConfigError::InvertedBounds { .. })
        ));

        let zero_step = Question::new(
            "q2",
            "",
            QuestionKind::Range(BoundedQuestion::new(0.0, 10.0).with_interval(0.0)),
        );
        assert!(matches!(
            zero_step.check(),
            Err(ConfigError::NonPositiveInterval { .. })
        ));
    }

    #[test]
    fn pick_questions_need_unique_options() {
        let empty = Question::new("q1", "", QuestionKind::PickOne(PickQuestion::default()));
        assert!(matches!(empty.check(), Err(ConfigError::MissingOptions { .. })));

        let duplicated = Question::new(
            "q2",
            "",
            QuestionKind::PickMany(PickQuestion::new(vec![
                QuestionOption::new("a", "A"),
                QuestionOption::new("a", "Also A"),
            ])),
        );
        assert_eq!(
            duplicated.check(),
            Err(ConfigError::DuplicateOption {
                question: "q2".to_string(),
                option: "a".to_string(),
            })
        );
    }

    #[test]
    fn all_targets_includes_option_targets() {
        let question = Question::new(
            "q1",
            "",
            QuestionKind::PickOne(PickQuestion::new(vec![
                QuestionOption::new("a", "A").with_target(Target::always("q3")),
                QuestionOption::new("b", "B"),
            ])),
        )
        .with_target(Target::always("exit"));

        let destinations: Vec<_> = question.all_targets().map(Target::destination).collect();
        assert_eq!(destinations, vec!["exit", "q3"]);
    }
}
