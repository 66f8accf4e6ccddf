use thiserror::Error;

#[derive(Error, Debug)]
pub enum BoxError {
    /// Malformed input: bad separator, unknown action, wrong argument count.
    #[error("{0}")]
    Parse(String),

    /// A page, module or tab that does not exist.
    #[error("{0}")]
    NotFound(String),

    /// A positional index that is non-numeric, zero or out of bounds.
    #[error("{0}")]
    Index(String),

    /// Domain rule violations (done status, dates, scores, duplicates).
    #[error("{0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Corrupted data in {source_name}: {line}")]
    Corrupted { source_name: String, line: String },
}

impl BoxError {
    /// Recoverable errors leave state untouched and the session can continue.
    /// Everything else comes from the storage layer and is fatal.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            BoxError::Parse(_) | BoxError::NotFound(_) | BoxError::Index(_) | BoxError::Validation(_)
        )
    }

    /// Short heading shown above a recoverable error message.
    pub fn title(&self) -> &'static str {
        match self {
            BoxError::Parse(_) => "Invalid Input",
            BoxError::NotFound(_) => "Not Found",
            BoxError::Index(_) => "Invalid Index",
            BoxError::Validation(_) => "Invalid Value",
            BoxError::Io(_) | BoxError::Serialization(_) | BoxError::Corrupted { .. } => {
                "Storage Error"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, BoxError>;
