use thiserror::Error;

use crate::chart::Level;

#[derive(Debug, Error)]
pub enum Error {
    #[error(
        "Internal level overflow in {level} at \"{title}\": the listing needs more buckets than the bracket holds"
    )]
    LevelOverflow { level: Level, title: String },

    #[error("Unknown level label: {0}")]
    UnknownLevel(String),

    #[error("Failed to persist {path}: {message}")]
    PersistFailed { path: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
