use thiserror::Error;

/// A field value that failed its format check.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid phone number")]
    InvalidPhone(String),

    #[error("Invalid birthday format. Please use the format 'dd.mm.yyyy'")]
    InvalidBirthday(String),
}

#[derive(Error, Debug)]
pub enum PhonebookError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Argument(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PhonebookError>;
