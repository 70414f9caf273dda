use thiserror::Error;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("unknown column category: {0}")]
    UnknownCategory(String),

    #[error("unknown sort direction: {0}")]
    UnknownDirection(String),

    #[error("malformed sort directive: {0}")]
    MalformedDirective(String),

    #[error("snapshot error: {0}")]
    Snapshot(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TableError>;
