use thiserror::Error;

#[derive(Error, Debug)]
pub enum KhsError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Identifier must not be empty")]
    EmptyIdentifier,

    #[error("Corrupt cache timestamp for '{key}': {value}")]
    CorruptTimestamp { key: String, value: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type KhsResult<T> = Result<T, KhsError>;
