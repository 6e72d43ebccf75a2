use thiserror::Error;

use crate::state::DecodeError;

#[derive(Debug, Error)]
pub enum CalcError {
    #[error("Stage not found: {0}")]
    StageNotFound(String),

    #[error("Feed not found in stage {stage}: {feed}")]
    FeedNotFound { stage: String, feed: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid share token: {0}")]
    Decode(#[from] DecodeError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, CalcError>;
