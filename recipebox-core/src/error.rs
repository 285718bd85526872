use thiserror::Error;

/// A user-supplied field that failed validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} cannot be empty")]
    Required(&'static str),

    #[error("{field} must be at most {max} characters (got {actual})")]
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },

    #[error("Unknown search mode: {0}. Valid modes: name, ingredients, difficulty")]
    UnknownSearchMode(String),

    #[error(transparent)]
    InvalidDifficulty(#[from] ParseDifficultyError),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown difficulty: {0}. Valid values: Easy, Medium, Intermediate, Hard")]
pub struct ParseDifficultyError(pub String);

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Invalid recipe: {0}")]
    Validation(#[from] ValidationError),

    #[error("Failed to access recipe file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid recipe file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No recipe ids left after {0}")]
    IdsExhausted(u64),
}
