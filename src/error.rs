use thiserror::Error;

pub type Result<T> = std::result::Result<T, BoardError>;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("List not found: {0}")]
    ListNotFound(String),

    #[error("Index {index} out of range for sequence of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Duplicate id: {0}")]
    DuplicateId(String),

    #[error("Invalid action: {0}")]
    InvalidAction(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
