use crate::SessionError;

/// Error type for respondent-driven sessions.
#[derive(Debug, thiserror::Error)]
pub enum SurveyError {
    /// Participant cancelled the survey (closed the screen, pressed Ctrl+C, etc.)
    #[error("Survey cancelled by participant")]
    Cancelled,

    /// The session refused an operation (malformed question, nothing to go back to).
    #[error(transparent)]
    Session(#[from] SessionError),

    /// Respondent-specific failure (I/O, UI framework crash, etc.)
    #[error("Respondent error: {0}")]
    Backend(#[from] anyhow::Error),
}

impl SurveyError {
    /// Create a backend error from any error type.
    pub fn backend(err: impl Into<anyhow::Error>) -> Self {
        Self::Backend(err.into())
    }

    /// Check if this error represents participant cancellation.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}
