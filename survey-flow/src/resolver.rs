//! Skip-logic routing: which question comes after a valid answer.

use survey_flow_types::{
    Answer, EngineConfig, NavigationFallback, Question, QuestionKind, RangeMatch, Target,
};
use tracing::warn;

/// Where the session goes after an answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Jump to the question with this id.
    NextQuestion(String),

    /// End the survey.
    Terminate,

    /// Follow declared order; past the last question this ends the survey.
    ContinueInOrder,
}

impl Route {
    /// Index of the next question to ask, or `None` when the survey is over.
    pub fn next_index(&self, questions: &[Question], current: usize) -> Option<usize> {
        let in_order = || Some(current + 1).filter(|&next| next < questions.len());
        match self {
            Self::Terminate => None,
            Self::ContinueInOrder => in_order(),
            Self::NextQuestion(id) => questions
                .iter()
                .position(|question| question.id() == id)
                .or_else(in_order),
        }
    }
}

/// The numeric value used for range matching, after sentinel substitution.
///
/// `None` for non-numeric kinds and for answers that carry no number (for a
/// Numerical sentinel whose bound is missing, say). Range answers yield their
/// lower bound.
pub fn effective_value(question: &Question, answer: &Answer, config: &EngineConfig) -> Option<f64> {
    match (question.kind(), answer) {
        (QuestionKind::Numerical(numerical), Answer::Text(text)) => {
            if *text == config.below_minimum_token {
                numerical.min.map(|min| min - 1.0)
            } else if *text == config.above_maximum_token {
                numerical.max.map(|max| max + 1.0)
            } else {
                text.parse::<i64>().ok().map(|value| value as f64)
            }
        }
        (QuestionKind::Scale(_), Answer::Number(value)) => Some(*value),
        (QuestionKind::Range(_), Answer::Range(lower, _)) => Some(*lower),
        _ => None,
    }
}

/// First target in declared order whose range contains `value`.
fn first_matching(targets: &[Target], value: f64) -> Option<&Target> {
    targets.iter().find(|target| target.matches(value))
}

/// The target selected by an answer, before its destination is looked up.
pub fn matching_target<'q>(
    question: &'q Question,
    answer: &Answer,
    config: &EngineConfig,
) -> Option<&'q Target> {
    match question.kind() {
        QuestionKind::Numerical(_) | QuestionKind::Scale(_) => {
            let value = effective_value(question, answer, config)?;
            first_matching(question.targets(), value)
        }
        QuestionKind::Range(_) => {
            let (lower, upper) = answer.as_range()?;
            match config.range_match {
                RangeMatch::LowerBound => first_matching(question.targets(), lower),
                RangeMatch::BothBounds => question
                    .targets()
                    .iter()
                    .find(|target| target.matches(lower) && target.matches(upper)),
            }
        }
        QuestionKind::PickOne(_) | QuestionKind::PickMany(_) => answer
            .selected_options()
            .into_iter()
            .filter_map(|id| question.option(id))
            .find_map(|option| option.first_target()),
        QuestionKind::TextInput(_) | QuestionKind::DateInput(_) => None,
    }
}

/// Resolve the route for a valid answer.
///
/// Fails with a [`NavigationFallback`] when the matched target names a question
/// that isn't in `questions`.
pub fn resolve(
    question: &Question,
    answer: &Answer,
    questions: &[Question],
    config: &EngineConfig,
) -> Result<Route, NavigationFallback> {
    let Some(target) = matching_target(question, answer, config) else {
        return Ok(Route::ContinueInOrder);
    };
    if target.is_exit(config) {
        return Ok(Route::Terminate);
    }
    if questions.iter().any(|q| q.id() == target.destination()) {
        Ok(Route::NextQuestion(target.destination().to_string()))
    } else {
        Err(NavigationFallback {
            question: question.id().to_string(),
            destination: target.destination().to_string(),
        })
    }
}

/// Resolve the route for a valid answer, continuing in order when the matched
/// destination is unknown.
pub fn resolve_next(
    question: &Question,
    answer: &Answer,
    questions: &[Question],
    config: &EngineConfig,
) -> Route {
    resolve(question, answer, questions, config).unwrap_or_else(|fallback| {
        warn!(%fallback, "continuing in declared order");
        Route::ContinueInOrder
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use survey_flow_types::{
        BoundedQuestion, NumericalQuestion, PickQuestion, QuestionOption, TextInputQuestion,
    };

    fn config() -> EngineConfig {
        EngineConfig::default()
    }

    fn text(id: &str) -> Question {
        Question::new(id, "", QuestionKind::TextInput(TextInputQuestion::new()))
    }

    fn numerical_0_10() -> Question {
        Question::new(
            "q1",
            "How many?",
            QuestionKind::Numerical(NumericalQuestion::with_bounds(Some(0.0), Some(10.0))),
        )
    }

    fn survey(first: Question) -> Vec<Question> {
        vec![first, text("q2"), text("q3")]
    }

    #[test]
    fn numerical_range_target_jumps() {
        let question = numerical_0_10().with_target(Target::range("q3", Some(5.0), Some(10.0)));
        let questions = survey(question.clone());

        assert_eq!(
            resolve_next(&question, &Answer::from("7"), &questions, &config()),
            Route::NextQuestion("q3".to_string())
        );
        assert_eq!(
            resolve_next(&question, &Answer::from("2"), &questions, &config()),
            Route::ContinueInOrder
        );
    }

    #[test]
    fn sentinels_substitute_out_of_range_values() {
        let question = numerical_0_10()
            .with_target(Target::range("exit", Some(-1.0), Some(-1.0)))
            .with_target(Target::range("q3", Some(11.0), None));
        let questions = survey(question.clone());

        assert_eq!(
            effective_value(&question, &Answer::from("min_display"), &config()),
            Some(-1.0)
        );
        assert_eq!(
            resolve_next(&question, &Answer::from("min_display"), &questions, &config()),
            Route::Terminate
        );
        assert_eq!(
            resolve_next(&question, &Answer::from("max_display"), &questions, &config()),
            Route::NextQuestion("q3".to_string())
        );
    }

    #[test]
    fn first_match_wins_on_overlap() {
        let question = Question::new(
            "q1",
            "",
            QuestionKind::Scale(BoundedQuestion::new(0.0, 10.0)),
        )
        .with_target(Target::range("q3", Some(0.0), Some(6.0)))
        .with_target(Target::range("q2", Some(4.0), Some(10.0)));
        let questions = survey(question.clone());

        for _ in 0..3 {
            assert_eq!(
                resolve_next(&question, &Answer::from(5.0), &questions, &config()),
                Route::NextQuestion("q3".to_string())
            );
        }
        assert_eq!(
            resolve_next(&question, &Answer::from(8.0), &questions, &config()),
            Route::NextQuestion("q2".to_string())
        );
    }

    #[test]
    fn pick_one_option_targets() {
        let question = Question::new(
            "q1",
            "",
            QuestionKind::PickOne(PickQuestion::new(vec![
                QuestionOption::new("a", "A"),
                QuestionOption::new("b", "B").with_target(Target::always("exit")),
            ])),
        );
        let questions = survey(question.clone());

        assert_eq!(
            resolve_next(&question, &Answer::choice("b"), &questions, &config()),
            Route::Terminate
        );
        assert_eq!(
            resolve_next(&question, &Answer::choice("a"), &questions, &config()),
            Route::ContinueInOrder
        );
    }

    #[test]
    fn pick_many_follows_answer_order() {
        let question = Question::new(
            "q1",
            "",
            QuestionKind::PickMany(PickQuestion::new(vec![
                QuestionOption::new("a", "A").with_target(Target::always("q2")),
                QuestionOption::new("b", "B")
                    .with_target(Target::always("q3"))
                    .with_target(Target::always("exit")),
                QuestionOption::new("c", "C"),
            ])),
        );
        let questions = survey(question.clone());

        assert_eq!(
            resolve_next(&question, &Answer::choices(["c", "b", "a"]), &questions, &config()),
            Route::NextQuestion("q3".to_string())
        );
        assert_eq!(
            resolve_next(&question, &Answer::choices(["a", "b"]), &questions, &config()),
            Route::NextQuestion("q2".to_string())
        );
        assert_eq!(
            resolve_next(&question, &Answer::choices(["c"]), &questions, &config()),
            Route::ContinueInOrder
        );
    }

    #[test]
    fn range_matches_on_lower_bound_by_default() {
        let question = Question::new(
            "q1",
            "",
            QuestionKind::Range(BoundedQuestion::new(0.0, 24.0)),
        )
        .with_target(Target::range("q3", Some(0.0), Some(6.0)));
        let questions = survey(question.clone());
        let answer = Answer::from((5.0, 9.0));

        assert_eq!(
            resolve_next(&question, &answer, &questions, &config()),
            Route::NextQuestion("q3".to_string())
        );

        let both = config().with_range_match(RangeMatch::BothBounds);
        assert_eq!(
            resolve_next(&question, &answer, &questions, &both),
            Route::ContinueInOrder
        );
        assert_eq!(
            resolve_next(&question, &Answer::from((1.0, 6.0)), &questions, &both),
            Route::NextQuestion("q3".to_string())
        );
    }

    #[test]
    fn text_never_routes() {
        let question = text("q1").with_target(Target::always("exit"));
        let questions = survey(question.clone());
        assert_eq!(
            resolve_next(&question, &Answer::from("hello"), &questions, &config()),
            Route::ContinueInOrder
        );
    }

    #[test]
    fn unknown_destination_falls_back() {
        let question = numerical_0_10().with_target(Target::always("q9"));
        let questions = survey(question.clone());

        assert_eq!(
            resolve(&question, &Answer::from("3"), &questions, &config()),
            Err(NavigationFallback {
                question: "q1".to_string(),
                destination: "q9".to_string(),
            })
        );
        assert_eq!(
            resolve_next(&question, &Answer::from("3"), &questions, &config()),
            Route::ContinueInOrder
        );
    }

    #[test]
    fn custom_exit_token() {
        let question = numerical_0_10().with_target(Target::always("quit"));
        let questions = survey(question.clone());
        let custom = config().with_exit_target("quit");
        assert_eq!(
            resolve_next(&question, &Answer::from("3"), &questions, &custom),
            Route::Terminate
        );
    }

    #[test]
    fn next_index_past_the_end_is_complete() {
        let questions = survey(text("q1"));
        assert_eq!(Route::ContinueInOrder.next_index(&questions, 0), Some(1));
        assert_eq!(Route::ContinueInOrder.next_index(&questions, 2), None);
        assert_eq!(Route::Terminate.next_index(&questions, 0), None);
        assert_eq!(
            Route::NextQuestion("q1".to_string()).next_index(&questions, 2),
            Some(0)
        );
    }
}
