use crate::Target;

/// A selectable option of a PickOne or PickMany question.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionOption {
    /// Option id referenced by answers.
    pub id: String,

    /// Display label.
    pub label: String,

    /// Option-level skip logic. Only the first target is ever used.
    pub targets: Vec<Target>,
}

impl QuestionOption {
    /// Create an option without skip logic.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            targets: Vec::new(),
        }
    }

    /// Add a target to this option.
    pub fn with_target(mut self, target: Target) -> Self {
        self.targets.push(target);
        self
    }

    /// The target that selecting this option triggers, if any.
    pub fn first_target(&self) -> Option<&Target> {
        self.targets.first()
    }
}
