use std::collections::HashMap;

use survey_flow_types::{Answer, Question, SurveyResult};

/// Collected results from a survey session.
///
/// Keyed by question id; answering a question again replaces its result, so a
/// session that loops back never holds more than one result per question.
#[derive(Debug, Clone, Default)]
pub struct ResultCollector {
    results: HashMap<String, SurveyResult>,
}

impl ResultCollector {
    /// Create a new empty collector.
    pub fn new() -> Self {
        Self {
            results: HashMap::new(),
        }
    }

    /// Store a result, returning the one it replaced.
    pub fn insert(&mut self, result: SurveyResult) -> Option<SurveyResult> {
        self.results
            .insert(result.question_id().to_string(), result)
    }

    /// Get the latest result for a question.
    pub fn get(&self, question_id: &str) -> Option<&SurveyResult> {
        self.results.get(question_id)
    }

    /// Get the latest answer for a question.
    pub fn answer(&self, question_id: &str) -> Option<&Answer> {
        self.get(question_id).map(|result| &result.answer)
    }

    /// Check if a question has a stored result.
    pub fn contains(&self, question_id: &str) -> bool {
        self.results.contains_key(question_id)
    }

    /// Iterate over all results in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &SurveyResult> {
        self.results.values()
    }

    /// Get the number of results.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Check if there are no results.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Copy of all results in unspecified order.
    pub fn snapshot(&self) -> Vec<SurveyResult> {
        self.results.values().cloned().collect()
    }

    /// Results sorted by the declared position of their question.
    ///
    /// Results for questions missing from `questions` sort last, by id.
    pub fn ordered(&self, questions: &[Question]) -> Vec<&SurveyResult> {
        let position = |id: &str| {
            questions
                .iter()
                .position(|question| question.id() == id)
                .unwrap_or(usize::MAX)
        };
        let mut ordered: Vec<_> = self.results.values().collect();
        ordered.sort_by(|a, b| {
            position(a.question_id())
                .cmp(&position(b.question_id()))
                .then_with(|| a.question_id().cmp(b.question_id()))
        });
        ordered
    }
}

impl IntoIterator for ResultCollector {
    type Item = (String, SurveyResult);
    type IntoIter = std::collections::hash_map::IntoIter<String, SurveyResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.into_iter()
    }
}

impl<'a> IntoIterator for &'a ResultCollector {
    type Item = (&'a String, &'a SurveyResult);
    type IntoIter = std::collections::hash_map::Iter<'a, String, SurveyResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use survey_flow_types::{QuestionKind, TextInputQuestion};

    fn question(id: &str) -> Question {
        Question::new(id, "Say something", QuestionKind::TextInput(TextInputQuestion::new()))
    }

    fn result(id: &str, text: &str) -> SurveyResult {
        SurveyResult::new(question(id), Answer::from(text), true)
    }

    #[test]
    fn insert_and_get() {
        let mut results = ResultCollector::new();
        assert!(results.insert(result("q1", "hello")).is_none());

        assert_eq!(results.answer("q1"), Some(&Answer::from("hello")));
        assert!(results.contains("q1"));
        assert!(!results.contains("q2"));
    }

    #[test]
    fn last_write_wins() {
        let mut results = ResultCollector::new();
        results.insert(result("q1", "first"));
        let replaced = results.insert(result("q1", "second")).unwrap();

        assert_eq!(replaced.answer, Answer::from("first"));
        assert_eq!(results.len(), 1);
        assert_eq!(results.answer("q1"), Some(&Answer::from("second")));

        let snapshot = results.snapshot();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].answer, Answer::from("second"));
    }

    #[test]
    fn ordered_follows_declaration() {
        let questions = vec![question("a"), question("b"), question("c")];
        let mut results = ResultCollector::new();
        results.insert(result("c", "3"));
        results.insert(result("zz", "?"));
        results.insert(result("a", "1"));

        let ids: Vec<_> = results
            .ordered(&questions)
            .into_iter()
            .map(SurveyResult::question_id)
            .collect();
        assert_eq!(ids, vec!["a", "c", "zz"]);
    }
}
