use chrono::NaiveDate;
use survey_flow_types::{
    BoundedQuestion, DateInputQuestion, NumericalQuestion, PickQuestion, Question, QuestionKind,
    QuestionOption, SurveyDefinition, Target,
};

/// A morning check-in. Seven hours or more skips straight to the rating;
/// "None" ends the diary entry early.
pub const SLEEP_DIARY_JSON: &str = r#"[
    {
        "id": "night",
        "question_type": "date-input",
        "body": "Which night are you reporting on?",
        "min_date": "2024-01-01",
        "max_date": "2030-12-31"
    },
    {
        "id": "hours",
        "question_type": "numerical",
        "body": "How many hours did you sleep?",
        "min": 0,
        "max": 14,
        "min_display": "None",
        "max_display": "More than 14",
        "targets": [
            { "question_id": "exit", "criteria": "range", "max": -1 },
            { "question_id": "quality", "criteria": "range", "min": 7 }
        ]
    },
    {
        "id": "disturbances",
        "question_type": "pick-many",
        "body": "What disturbed your sleep?",
        "options": [
            { "id": "noise", "value": "Noise" },
            { "id": "light", "value": "Light" },
            { "id": "woke-up", "value": "I woke up during the night",
              "targets": [{ "question_id": "awake" }] },
            { "id": "nothing", "value": "Nothing",
              "targets": [{ "question_id": "quality" }] }
        ]
    },
    {
        "id": "awake",
        "question_type": "range",
        "body": "Between which hours were you awake?",
        "min": 0,
        "max": 24,
        "interval": 0.5,
        "min_label": "Midnight",
        "max_label": "Midnight",
        "image": "clock.png"
    },
    {
        "id": "quality",
        "question_type": "scale",
        "body": "How would you rate your sleep?",
        "min": 1,
        "max": 5,
        "interval": 1
    }
]"#;

/// The sleep diary built in code.
pub fn sleep_diary() -> SurveyDefinition {
    let mut awake = BoundedQuestion::new(0.0, 24.0).with_interval(0.5);
    awake.min_label = Some("Midnight".to_string());
    awake.max_label = Some("Midnight".to_string());

    SurveyDefinition::new(vec![
        Question::new(
            "night",
            "Which night are you reporting on?",
            QuestionKind::DateInput(DateInputQuestion::with_bounds(
                NaiveDate::from_ymd_opt(2024, 1, 1),
                NaiveDate::from_ymd_opt(2030, 12, 31),
            )),
        ),
        Question::new(
            "hours",
            "How many hours did you sleep?",
            QuestionKind::Numerical(
                NumericalQuestion::with_bounds(Some(0.0), Some(14.0))
                    .with_display("None", "More than 14"),
            ),
        )
        .with_target(Target::range("exit", None, Some(-1.0)))
        .with_target(Target::range("quality", Some(7.0), None)),
        Question::new(
            "disturbances",
            "What disturbed your sleep?",
            QuestionKind::PickMany(PickQuestion::new(vec![
                QuestionOption::new("noise", "Noise"),
                QuestionOption::new("light", "Light"),
                QuestionOption::new("woke-up", "I woke up during the night")
                    .with_target(Target::always("awake")),
                QuestionOption::new("nothing", "Nothing").with_target(Target::always("quality")),
            ])),
        ),
        Question::new(
            "awake",
            "Between which hours were you awake?",
            QuestionKind::Range(awake),
        )
        .with_image("clock.png"),
        Question::new(
            "quality",
            "How would you rate your sleep?",
            QuestionKind::Scale(BoundedQuestion::new(1.0, 5.0).with_interval(1.0)),
        ),
    ])
}
