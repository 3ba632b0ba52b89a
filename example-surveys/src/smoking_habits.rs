use survey_flow_types::{
    BoundedQuestion, NumericalQuestion, PickQuestion, Question, QuestionKind, QuestionOption,
    SurveyDefinition, Target, TextInputQuestion,
};

/// Non-smokers leave after the first question; heavy smokers skip the
/// quitting question and land on the craving scale.
pub const SMOKING_HABITS_JSON: &str = r#"{
    "id": "smoking-habits",
    "welcome": "A short questionnaire about smoking.",
    "success": "Thank you for taking part.",
    "questions": [
        {
            "id": "smoker",
            "type": "survey_question",
            "question_type": "pick-one",
            "body": "Do you smoke?",
            "options": [
                { "id": "yes", "value": "Yes" },
                { "id": "no", "value": "No",
                  "targets": [{ "question_id": "exit", "criteria": "range" }] }
            ]
        },
        {
            "id": "per-day",
            "type": "survey_question",
            "question_type": "numerical",
            "body": "How many cigarettes do you smoke per day?",
            "min": 1,
            "max": 40,
            "min_display": "Less than 1",
            "max_display": "More than 40",
            "targets": [
                { "question_id": "craving", "criteria": "range", "min": 20 }
            ]
        },
        {
            "id": "quitting",
            "type": "survey_question",
            "question_type": "pick-one",
            "body": "Are you trying to quit?",
            "options": [
                { "id": "yes", "value": "Yes" },
                { "id": "no", "value": "No" }
            ]
        },
        {
            "id": "craving",
            "type": "survey_question",
            "question_type": "scale",
            "body": "How strong are your cravings?",
            "min": 0,
            "max": 10,
            "interval": 1,
            "min_label": "None",
            "max_label": "Overwhelming"
        },
        {
            "id": "comments",
            "type": "survey_question",
            "question_type": "text-input",
            "body": "Anything else you would like to tell us?",
            "max_characters": 140,
            "placeholder": "Optional"
        }
    ]
}"#;

/// The smoking survey built in code.
pub fn smoking_habits() -> SurveyDefinition {
    let smoker_options = vec![
        QuestionOption::new("yes", "Yes"),
        QuestionOption::new("no", "No").with_target(Target::always("exit")),
    ];
    let quitting_options = vec![
        QuestionOption::new("yes", "Yes"),
        QuestionOption::new("no", "No"),
    ];

    let mut comments = TextInputQuestion::with_max_characters(140);
    comments.placeholder = Some("Optional".to_string());

    let mut craving = BoundedQuestion::new(0.0, 10.0).with_interval(1.0);
    craving.min_label = Some("None".to_string());
    craving.max_label = Some("Overwhelming".to_string());

    SurveyDefinition::new(vec![
        Question::new(
            "smoker",
            "Do you smoke?",
            QuestionKind::PickOne(PickQuestion::new(smoker_options)),
        ),
        Question::new(
            "per-day",
            "How many cigarettes do you smoke per day?",
            QuestionKind::Numerical(
                NumericalQuestion::with_bounds(Some(1.0), Some(40.0))
                    .with_display("Less than 1", "More than 40"),
            ),
        )
        .with_target(Target::range("craving", Some(20.0), None)),
        Question::new(
            "quitting",
            "Are you trying to quit?",
            QuestionKind::PickOne(PickQuestion::new(quitting_options)),
        ),
        Question::new(
            "craving",
            "How strong are your cravings?",
            QuestionKind::Scale(craving),
        ),
        Question::new(
            "comments",
            "Anything else you would like to tell us?",
            QuestionKind::TextInput(comments),
        ),
    ])
    .with_id("smoking-habits")
    .with_prelude("A short questionnaire about smoking.")
    .with_epilogue("Thank you for taking part.")
}
