use thiserror::Error;

/// Domain errors surfaced at the HTTP boundary.
#[derive(Debug, Error)]
pub enum AssessmentError {
    #[error("question bank unavailable: {0}")]
    MissingQuestionData(String),

    #[error("please answer every question ({missing} of {presented} unanswered)")]
    IncompleteSubmission { presented: usize, missing: usize },

    #[error("identifier must be an 8-digit number (e.g. 19930510)")]
    InvalidIdentifier,

    #[error("answer for question {question} is not a recognized level")]
    InvalidAnswer { question: u32 },

    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),
}
