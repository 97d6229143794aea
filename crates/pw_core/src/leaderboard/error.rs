use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Player name must not be empty")]
    InvalidName,

    #[error("Leaderboard lock poisoned")]
    Poisoned,
}

impl StoreError {
    /// Whether retrying the same operation later could succeed.
    pub fn is_recoverable(&self) -> bool {
        match self {
            StoreError::Io(_) => true,
            StoreError::Json(_) => false,
            StoreError::InvalidName => true, // Ask for another name
            StoreError::Poisoned => false,
        }
    }
}
