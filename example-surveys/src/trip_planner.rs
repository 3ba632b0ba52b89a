use survey_flow_types::{
    BoundedQuestion, NumericalQuestion, PickQuestion, Question, QuestionKind, QuestionOption,
    SurveyDefinition, Target, TextInputQuestion,
};

/// Ends with a confirmation that can loop back to the first question.
pub const TRIP_PLANNER_JSON: &str = r#"{
    "id": "trip-planner",
    "welcome": "Let's plan your trip.",
    "questions": [
        {
            "id": "destination",
            "question_type": "text-input",
            "body": "Where do you want to go?",
            "max_characters": 40
        },
        {
            "id": "nights",
            "question_type": "numerical",
            "body": "How many nights?",
            "min": 1,
            "max": 30
        },
        {
            "id": "activities",
            "question_type": "pick-many",
            "body": "What would you like to do?",
            "options": [
                { "id": "hiking", "label": "Hiking" },
                { "id": "museums", "label": "Museums" },
                { "id": "beach", "label": "Beach" }
            ]
        },
        {
            "id": "budget",
            "question_type": "range",
            "body": "What is your budget?",
            "min": 0,
            "max": 5000,
            "interval": 100
        },
        {
            "id": "confirm",
            "question_type": "pick-one",
            "body": "Book this trip?",
            "options": [
                { "id": "book", "label": "Book it",
                  "targets": [{ "question_id": "exit" }] },
                { "id": "change", "label": "Start over",
                  "targets": [{ "question_id": "destination" }] }
            ]
        }
    ]
}"#;

/// The trip planner built in code.
pub fn trip_planner() -> SurveyDefinition {
    SurveyDefinition::new(vec![
        Question::new(
            "destination",
            "Where do you want to go?",
            QuestionKind::TextInput(TextInputQuestion::with_max_characters(40)),
        ),
        Question::new(
            "nights",
            "How many nights?",
            QuestionKind::Numerical(NumericalQuestion::with_bounds(Some(1.0), Some(30.0))),
        ),
        Question::new(
            "activities",
            "What would you like to do?",
            QuestionKind::PickMany(PickQuestion::new(vec![
                QuestionOption::new("hiking", "Hiking"),
                QuestionOption::new("museums", "Museums"),
                QuestionOption::new("beach", "Beach"),
            ])),
        ),
        Question::new(
            "budget",
            "What is your budget?",
            QuestionKind::Range(BoundedQuestion::new(0.0, 5000.0).with_interval(100.0)),
        ),
        Question::new(
            "confirm",
            "Book this trip?",
            QuestionKind::PickOne(PickQuestion::new(vec![
                QuestionOption::new("book", "Book it").with_target(Target::always("exit")),
                QuestionOption::new("change", "Start over")
                    .with_target(Target::always("destination")),
            ])),
        ),
    ])
    .with_id("trip-planner")
    .with_prelude("Let's plan your trip.")
}
