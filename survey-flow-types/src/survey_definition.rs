use std::collections::HashSet;

use crate::{ConfigError, ConfigWarning, EngineConfig, NavigationFallback, Question};

/// The top-level structure containing all questions and metadata for a survey.
///
/// A survey is an ordered list of questions whose targets may jump forward,
/// backward or out. It's presentation-agnostic and immutable once a session starts.
#[derive(Debug, Clone, PartialEq)]
pub struct SurveyDefinition {
    /// Optional survey id assigned by the content source.
    pub id: Option<String>,

    /// Optional message shown before the survey starts.
    pub prelude: Option<String>,

    /// All questions in declared order.
    pub questions: Vec<Question>,

    /// Optional message shown after the survey completes.
    pub epilogue: Option<String>,
}

impl SurveyDefinition {
    /// Create a new survey definition with the given questions.
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            id: None,
            prelude: None,
            questions,
            epilogue: None,
        }
    }

    /// Create an empty survey definition.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the prelude message.
    pub fn with_prelude(mut self, prelude: impl Into<String>) -> Self {
        self.prelude = Some(prelude.into());
        self
    }

    /// Set the epilogue message.
    pub fn with_epilogue(mut self, epilogue: impl Into<String>) -> Self {
        self.epilogue = Some(epilogue.into());
        self
    }

    /// Get the questions.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Check if the survey has any questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Get the number of questions.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Look up a question by id.
    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|question| question.id() == id)
    }

    /// Declared position of a question.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.questions.iter().position(|question| question.id() == id)
    }

    /// Check the content before any answer is processed.
    ///
    /// Fails on the first malformed question, duplicate id, or (with
    /// `strict_targets`) dangling destination. Returns the warnings that
    /// don't stop the session.
    pub fn check(&self, config: &EngineConfig) -> Result<Vec<ConfigWarning>, ConfigError> {
        let mut warnings = Vec::new();
        if self.questions.is_empty() {
            warnings.push(ConfigWarning::EmptySurvey);
            return Ok(warnings);
        }

        let mut ids = HashSet::new();
        for question in &self.questions {
            if !ids.insert(question.id()) {
                return Err(ConfigError::DuplicateQuestion(question.id().to_string()));
            }
            question.check()?;
        }

        for question in &self.questions {
            for target in question.all_targets() {
                if target.is_exit(config) || ids.contains(target.destination()) {
                    continue;
                }
                if config.strict_targets {
                    return Err(ConfigError::UnknownDestination {
                        question: question.id().to_string(),
                        destination: target.destination().to_string(),
                    });
                }
                warnings.push(ConfigWarning::UnresolvedTarget(NavigationFallback {
                    question: question.id().to_string(),
                    destination: target.destination().to_string(),
                }));
            }
        }

        Ok(warnings)
    }
}

impl Default for SurveyDefinition {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{QuestionKind, Target, TextInputQuestion};

    fn text(id: &str) -> Question {
        Question::new(id, "Tell us", QuestionKind::TextInput(TextInputQuestion::new()))
    }

    #[test]
    fn empty_survey_is_a_warning() {
        let warnings = SurveyDefinition::empty()
            .check(&EngineConfig::default())
            .unwrap();
        assert_eq!(warnings, vec![ConfigWarning::EmptySurvey]);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let survey = SurveyDefinition::new(vec![text("q1"), text("q2"), text("q1")]);
        assert_eq!(
            survey.check(&EngineConfig::default()),
            Err(ConfigError::DuplicateQuestion("q1".to_string()))
        );
    }

    #[test]
    fn dangling_target_is_lenient_by_default() {
        let survey = SurveyDefinition::new(vec![
            text("q1").with_target(Target::always("nowhere")),
            text("q2").with_target(Target::always("exit")),
        ]);

        let warnings = survey.check(&EngineConfig::default()).unwrap();
        assert_eq!(
            warnings,
            vec![ConfigWarning::UnresolvedTarget(NavigationFallback {
                question: "q1".to_string(),
                destination: "nowhere".to_string(),
            })]
        );

        let strict = EngineConfig::default().with_strict_targets(true);
        assert!(matches!(
            survey.check(&strict),
            Err(ConfigError::UnknownDestination { .. })
        ));
    }

    #[test]
    fn lookup_by_id() {
        let survey = SurveyDefinition::new(vec![text("q1"), text("q2")]);
        assert_eq!(survey.index_of("q2"), Some(1));
        assert!(survey.question("q3").is_none());
    }
}
