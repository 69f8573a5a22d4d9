use thiserror::Error;

/// A raw value that failed its field's validation gate.
///
/// The display text is what the console shows to the user, verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid phone format")]
    InvalidPhone,

    #[error("invalid email")]
    InvalidEmail,

    #[error("invalid date format")]
    InvalidDate,

    #[error("address cannot be empty")]
    EmptyAddress,

    #[error("name cannot be empty")]
    EmptyName,

    #[error("note text cannot be empty")]
    EmptyNote,

    #[error("tag cannot be empty")]
    EmptyTag,

    #[error("unsupported sort type")]
    UnsupportedSortType,

    #[error("unsupported sort order")]
    UnsupportedSortOrder,

    #[error("invalid number of days")]
    InvalidDayCount,
}

#[derive(Error, Debug)]
pub enum OrganizerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Unknown contact name or note id. Always rendered as "not found".
    #[error("not found")]
    NotFound(String),

    #[error("not enough parameters")]
    Arity { verb: String, expected: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Snapshot error: {0}")]
    Snapshot(String),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, OrganizerError>;
