use thiserror::Error;

#[derive(Debug, Error)]
pub enum DietError {
    #[error("Food not found: {0}")]
    FoodNotFound(String),

    #[error("A food named '{0}' already exists")]
    DuplicateFood(String),

    #[error("Index {index} is out of range for a list of {len} entries")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("No food intakes have been recorded yet")]
    EmptyIntakeLog,

    #[error("No user profile configured; run the 'profile' command first")]
    MissingProfile,

    #[error("No active diet plan; run 'plan set' first")]
    MissingPlan,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Invalid date: {0}")]
    Date(#[from] chrono::ParseError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, DietError>;
