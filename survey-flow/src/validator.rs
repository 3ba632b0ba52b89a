//! Type-specific answer validation.
//!
//! Validation is pure: the same question, answer and config always give the same
//! verdict, and nothing is mutated.

use survey_flow_types::{
    Answer, AnswerError, BoundedQuestion, ConfigError, DateInputQuestion, EngineConfig,
    NumericalQuestion, PickQuestion, Question, QuestionKind, TextInputQuestion, ValidationError,
};

/// Validate an answer against its question.
///
/// Returns `AnswerError::Invalid` when the participant should be asked again, and
/// `AnswerError::Misconfigured` when the question can't be validated at all.
pub fn validate(
    question: &Question,
    answer: &Answer,
    config: &EngineConfig,
) -> Result<(), AnswerError> {
    let id = question.id();
    match question.kind() {
        QuestionKind::Numerical(numerical) => validate_numerical(id, numerical, answer, config),
        QuestionKind::PickOne(pick) => validate_pick_one(pick, answer),
        QuestionKind::PickMany(pick) => validate_pick_many(pick, answer),
        QuestionKind::TextInput(text) => validate_text(text, answer),
        QuestionKind::DateInput(date) => validate_date(date, answer, config),
        QuestionKind::Scale(bounded) => validate_scale(id, bounded, answer),
        QuestionKind::Range(bounded) => validate_range(id, bounded, answer),
    }
}

/// Boolean form of [`validate`].
pub fn is_valid(question: &Question, answer: &Answer, config: &EngineConfig) -> bool {
    validate(question, answer, config).is_ok()
}

fn wrong_kind(expected: &'static str, answer: &Answer) -> AnswerError {
    ValidationError::WrongAnswerKind {
        expected,
        actual: answer.type_name(),
    }
    .into()
}

fn validate_numerical(
    id: &str,
    numerical: &NumericalQuestion,
    answer: &Answer,
    config: &EngineConfig,
) -> Result<(), AnswerError> {
    let Some(text) = answer.as_text() else {
        return Err(wrong_kind("Text", answer));
    };

    // A sentinel stands for "minimum - 1" / "maximum + 1", so it needs that bound.
    if text == config.below_minimum_token {
        return require(id, numerical.min, "minimum").map(|_| ());
    }
    if text == config.above_maximum_token {
        return require(id, numerical.max, "maximum").map(|_| ());
    }

    let value = text
        .parse::<i64>()
        .map_err(|_| ValidationError::NotAnInteger(text.to_string()))? as f64;
    check_within(value, numerical.min, numerical.max)
}

fn validate_pick_one(pick: &PickQuestion, answer: &Answer) -> Result<(), AnswerError> {
    let Some(id) = answer.as_choice() else {
        return Err(wrong_kind("Choice", answer));
    };
    check_option(pick, id)
}

fn validate_pick_many(pick: &PickQuestion, answer: &Answer) -> Result<(), AnswerError> {
    let Some(ids) = answer.as_choices() else {
        return Err(wrong_kind("Choices", answer));
    };
    ids.iter().try_for_each(|id| check_option(pick, id))
}

fn check_option(pick: &PickQuestion, id: &str) -> Result<(), AnswerError> {
    if pick.options.iter().any(|option| option.id == id) {
        Ok(())
    } else {
        Err(ValidationError::UnknownOption(id.to_string()).into())
    }
}

fn validate_text(text_question: &TextInputQuestion, answer: &Answer) -> Result<(), AnswerError> {
    let Some(text) = answer.as_text() else {
        return Err(wrong_kind("Text", answer));
    };
    if text.is_empty() {
        return Err(ValidationError::EmptyText.into());
    }
    let length = text.chars().count();
    if let Some(max) = text_question.max_characters
        && length > max
    {
        return Err(ValidationError::TooLong { length, max }.into());
    }
    Ok(())
}

fn validate_date(
    date_question: &DateInputQuestion,
    answer: &Answer,
    config: &EngineConfig,
) -> Result<(), AnswerError> {
    let Some(text) = answer.as_text() else {
        return Err(wrong_kind("Text", answer));
    };
    let date = config
        .parse_date(text)
        .map_err(|_| ValidationError::UnparseableDate {
            value: text.to_string(),
            format: config.date_format.clone(),
        })?;
    if let Some(minimum) = date_question.min_date
        && date < minimum
    {
        return Err(ValidationError::DateBeforeMinimum { date, minimum }.into());
    }
    if let Some(maximum) = date_question.max_date
        && date > maximum
    {
        return Err(ValidationError::DateAfterMaximum { date, maximum }.into());
    }
    Ok(())
}

fn validate_scale(
    id: &str,
    bounded: &BoundedQuestion,
    answer: &Answer,
) -> Result<(), AnswerError> {
    let Some(value) = answer.as_number() else {
        return Err(wrong_kind("Number", answer));
    };
    check_slider_value(id, bounded, value)
}

fn validate_range(
    id: &str,
    bounded: &BoundedQuestion,
    answer: &Answer,
) -> Result<(), AnswerError> {
    let Some((lower, upper)) = answer.as_range() else {
        return Err(wrong_kind("Range", answer));
    };
    if lower.is_nan() || upper.is_nan() || lower >= upper {
        return Err(ValidationError::InvertedRange { lower, upper }.into());
    }
    check_slider_value(id, bounded, lower)?;
    check_slider_value(id, bounded, upper)
}

fn check_slider_value(id: &str, bounded: &BoundedQuestion, value: f64) -> Result<(), AnswerError> {
    let (min, max) = bounded.require_bounds(id)?;
    check_within(value, Some(min), Some(max))?;
    if let Some(interval) = bounded.interval {
        if interval <= 0.0 {
            return Err(ConfigError::NonPositiveInterval {
                question: id.to_string(),
                interval,
            }
            .into());
        }
        // Steps are anchored at zero, not at the minimum.
        if value % interval != 0.0 {
            return Err(ValidationError::OffInterval { value, interval }.into());
        }
    }
    Ok(())
}

fn check_within(value: f64, min: Option<f64>, max: Option<f64>) -> Result<(), AnswerError> {
    if value.is_nan() {
        return Err(ValidationError::NotANumber.into());
    }
    if let Some(minimum) = min
        && value < minimum
    {
        return Err(ValidationError::BelowMinimum { value, minimum }.into());
    }
    if let Some(maximum) = max
        && value > maximum
    {
        return Err(ValidationError::AboveMaximum { value, maximum }.into());
    }
    Ok(())
}

fn require(id: &str, bound: Option<f64>, name: &'static str) -> Result<f64, AnswerError> {
    bound.ok_or_else(|| {
        ConfigError::MissingBound {
            question: id.to_string(),
            bound: name,
        }
        .into()
    })
}
