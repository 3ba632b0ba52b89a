use serde::{Deserialize, Serialize};

/// A raw answer submitted for a single question.
///
/// The variant must match what the question type expects: Numerical, TextInput and
/// DateInput take `Text`, PickOne takes `Choice`, PickMany takes `Choices`, Scale
/// takes `Number` and Range takes `Range`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Answer {
    /// Free text (TextInput), a date string (DateInput) or an integer / sentinel
    /// token typed into a Numerical question.
    Text(String),

    /// The id of the single selected option (PickOne).
    Choice(String),

    /// The ids of all selected options, in selection order (PickMany).
    Choices(Vec<String>),

    /// A slider value (Scale).
    Number(f64),

    /// A `(lower, upper)` pair (Range).
    Range(f64, f64),
}

impl Answer {
    /// Create a single-choice answer.
    pub fn choice(id: impl Into<String>) -> Self {
        Self::Choice(id.into())
    }

    /// Create a multi-choice answer from any list of ids.
    pub fn choices<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Choices(ids.into_iter().map(Into::into).collect())
    }

    /// Try to get this answer as text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this answer as a single option id.
    pub fn as_choice(&self) -> Option<&str> {
        match self {
            Self::Choice(id) => Some(id),
            _ => None,
        }
    }

    /// Try to get this answer as a list of option ids.
    pub fn as_choices(&self) -> Option<&[String]> {
        match self {
            Self::Choices(ids) => Some(ids),
            _ => None,
        }
    }

    /// Try to get this answer as a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Try to get this answer as a `(lower, upper)` pair.
    pub fn as_range(&self) -> Option<(f64, f64)> {
        match self {
            Self::Range(lower, upper) => Some((*lower, *upper)),
            _ => None,
        }
    }

    /// Selected option ids in answer order. Empty for non-choice answers.
    pub fn selected_options(&self) -> Vec<&str> {
        match self {
            Self::Choice(id) => vec![id.as_str()],
            Self::Choices(ids) => ids.iter().map(String::as_str).collect(),
            _ => Vec::new(),
        }
    }

    /// Get the type name of this answer for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Text(_) => "Text",
            Self::Choice(_) => "Choice",
            Self::Choices(_) => "Choices",
            Self::Number(_) => "Number",
            Self::Range(..) => "Range",
        }
    }
}

impl From<String> for Answer {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for Answer {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<f64> for Answer {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for Answer {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<(f64, f64)> for Answer {
    fn from((lower, upper): (f64, f64)) -> Self {
        Self::Range(lower, upper)
    }
}

impl From<Vec<String>> for Answer {
    fn from(ids: Vec<String>) -> Self {
        Self::Choices(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selected_options_keep_answer_order() {
        let answer = Answer::choices(["b", "a", "b"]);
        assert_eq!(answer.selected_options(), vec!["b", "a", "b"]);
        assert_eq!(Answer::choice("x").selected_options(), vec!["x"]);
        assert!(Answer::from(3.0).selected_options().is_empty());
    }

    #[test]
    fn serde_shape_is_tagged() {
        let json = serde_json::to_string(&Answer::Range(1.0, 4.0)).unwrap();
        assert_eq!(json, r#"{"kind":"range","value":[1.0,4.0]}"#);

        let parsed: Answer =
            serde_json::from_str(r#"{"kind":"choices","value":["a","c"]}"#).unwrap();
        assert_eq!(parsed, Answer::choices(["a", "c"]));
    }
}
