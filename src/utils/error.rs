use thiserror::Error;

#[derive(Error, Debug)]
pub enum CfError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Location table error: {message}")]
    TableError { message: String },

    #[error("Invalid configuration value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error(transparent)]
    ValidationError(#[from] ValidationError),
}

/// Reasons a tax code can be rejected. Every variant is terminal for a
/// single `validate` call; the caller decides what to do with it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("tax code must be exactly 16 characters, got {actual}")]
    InvalidLength { actual: usize },

    #[error("tax code does not match the required structure")]
    InvalidFormat,

    #[error("check character mismatch: expected '{expected}', found '{actual}'")]
    ChecksumMismatch { expected: char, actual: char },

    #[error("no such calendar date: {year:04}-{month:02}-{day:02}")]
    InvalidBirthDate { year: i32, month: u32, day: u32 },
}

pub type Result<T> = std::result::Result<T, CfError>;
