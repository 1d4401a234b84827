use thiserror::Error;

/// Error type for BookId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BookIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error type for book title validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BookTitleError {
    #[error("Title is empty")]
    Empty,
}

/// Error type for rating validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RatingError {
    #[error("Rating out of range: must be between {min} and {max}, got {actual}")]
    OutOfRange { min: i32, max: i32, actual: i32 },
}

/// Top-level error type for all book operations
#[derive(Debug, Error)]
pub enum BookError {
    #[error("Book not found")]
    NotFound,

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for BookError {
    fn from(err: anyhow::Error) -> Self {
        BookError::Unknown(err.to_string())
    }
}
